use thiserror::Error;

/// Fatal configuration problems, reported before any processing starts
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing credential: set {0}")]
    MissingCredential(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Input payload does not match the expected corpus shape
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("key '{0}' not found in input")]
    MissingKey(String),

    #[error("key '{0}' does not hold a list of records")]
    NotAList(String),

    #[error("record {index} has no string field '{field}'")]
    MissingField { index: usize, field: String },

    #[error("no messages found under '{0}'")]
    Empty(String),
}
