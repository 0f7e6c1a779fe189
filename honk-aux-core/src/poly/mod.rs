pub mod univariate;
