pub mod errors;
pub mod math;
