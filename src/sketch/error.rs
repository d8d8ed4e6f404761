use crate::bch::BchError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SketchError {
    #[error("invalid character {found:?} at index {index} in bit string (expected '0' or '1')")]
    InvalidBit { index: usize, found: char },
    #[error("invalid hex digit at index {index} in helper data")]
    InvalidHex { index: usize },
    #[error("helper data has wrong length (expected {expected} hex chars, got {got})")]
    InvalidLength { expected: usize, got: usize },
    #[error("params invalid: {0}")]
    Capacity(#[from] BchError),
}
