use std::io;

use thiserror::Error;

pub type SortResult<T> = Result<T, SortError>;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputViolation),

    #[error("failed to read input")]
    Io(#[from] io::Error),
}

/// The constraint a piece of input failed to meet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputViolation {
    #[error("expected an element count, input is empty")]
    MissingCount,

    #[error("token {position} ({token:?}) is not a 64-bit integer")]
    NotAnInteger { position: usize, token: String },

    #[error("element count {count} is negative")]
    NegativeCount { count: i64 },

    #[error("element count {count} exceeds the limit of {max}")]
    TooManyElements { count: usize, max: usize },

    #[error("expected {expected} elements, found {found}")]
    MissingElements { expected: usize, found: usize },

    #[error("range [{low}, {high}] is out of bounds for length {len}")]
    RangeOutOfBounds { low: usize, high: usize, len: usize },
}

impl SortError {
    /// The violated input constraint, if this is an input error.
    pub fn violation(&self) -> Option<&InputViolation> {
        match self {
            SortError::InvalidInput(violation) => Some(violation),
            SortError::Io(_) => None,
        }
    }
}
