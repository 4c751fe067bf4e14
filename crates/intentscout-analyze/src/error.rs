use thiserror::Error;

/// Failure talking to the reasoning service
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{provider} returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{0} response missing text content")]
    EmptyResponse(&'static str),

    #[error("{0}")]
    Other(String),
}

/// Why a single cluster was skipped. Never fatal to the run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("model invocation failed: {0}")]
    Invocation(#[from] ModelError),

    #[error("response is not a JSON object: {0}")]
    Unparseable(String),

    #[error("response missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid action '{0}' (expected KEEP_EXISTING or CREATE_NEW)")]
    InvalidAction(String),

    #[error("CREATE_NEW verdict without proposed_intent")]
    MissingProposedIntent,
}
