//! Error type shared by every stage of the recommendation pipeline.
//!
//! Zero-degree users and items are not errors: the similarity stage
//! substitutes a unit divisor for them (see `similarity::inverse_sqrt_normaliser`).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("user index {index} out of bounds for {nusers} users")]
    UserIndexOutOfBounds { index: usize, nusers: usize },

    #[error("item index {index} out of bounds for {nitems} items")]
    ItemIndexOutOfBounds { index: usize, nitems: usize },

    #[error("malformed interaction matrix: {0}")]
    MalformedMatrix(String),

    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("show registry has {names} names but the matrix has {nitems} items")]
    RegistryMismatch { names: usize, nitems: usize },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RecommendError {
    /// True for the errors caused by arguments that violate a precondition
    /// (bad indices, malformed or mismatched matrices).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, RecommendError::Parse { .. } | RecommendError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
