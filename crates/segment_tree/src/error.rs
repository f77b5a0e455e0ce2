use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Cannot build a range store over an empty sequence")]
    Empty,

    #[error("Query range [{lo}, {hi}] is invalid for a sequence of length {len}")]
    InvalidRange { lo: usize, hi: usize, len: usize },

    #[error("Range {start}..{end} is invalid for a sequence of length {len}")]
    InvalidBounds { start: usize, end: usize, len: usize },

    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown operation `{0}`, expected one of `sum`, `min`, `max`")]
pub struct ParseOperationError(pub String);
