use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PartitionError {
    #[error("no vectors to partition")]
    NoVectors,

    #[error("invalid cluster count {k} for {n} vectors (need 1 <= k <= n)")]
    InvalidK { k: usize, n: usize },

    #[error("vectors have zero dimension")]
    ZeroDimension,

    #[error("invalid vector dimension at {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("vector {0} contains a non-finite value")]
    NonFinite(usize),
}
