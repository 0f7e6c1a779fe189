use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("Index {index} out of bounds for array {array} of size {size}")]
    IndexOutOfBounds {
        array: usize,
        index: usize,
        size: usize,
    },
    #[error("Unknown memory array {0}")]
    UnknownArray(usize),
    #[error("Sublimb {position} does not fit in 14 bits: {value}")]
    SublimbTooLarge { position: usize, value: u64 },
    #[error("Limb {limb} does not fit in {max_bits} bits")]
    LimbTooLarge { limb: u128, max_bits: usize },
}

/// A row on which some sub-relation does not vanish.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{relation} relation: sub-relation {subrelation} does not vanish at row {row}")]
pub struct RelationFailure {
    pub relation: &'static str,
    pub row: usize,
    pub subrelation: usize,
}
