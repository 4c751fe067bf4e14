use intentscout_analyze::ModelError;
use intentscout_cluster::PartitionError;
use intentscout_core::{ConfigError, SchemaError};
use intentscout_embed::EncodeError;
use intentscout_report::ReportError;
use thiserror::Error;

/// Fatal errors: the run stops and no report is written
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),

    #[error("partitioning failed: {0}")]
    Partition(#[from] PartitionError),

    #[error("reasoning client setup failed: {0}")]
    Client(#[from] ModelError),

    #[error("failed to write report: {0}")]
    Report(#[from] ReportError),
}
