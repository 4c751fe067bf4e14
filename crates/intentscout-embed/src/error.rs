use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("embedding model unavailable: {0}")]
    Unavailable(String),

    #[error("embedding failed: {0}")]
    Failed(String),

    #[error("encoder returned {actual} vectors for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },

    #[error("invalid vector dimension at {index}: expected {expected}, got {actual}")]
    InvalidDimension {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
