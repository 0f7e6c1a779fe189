pub mod relation_round;

pub use relation_round::{check_relation, scaling_factor_powers, RelationRound};
