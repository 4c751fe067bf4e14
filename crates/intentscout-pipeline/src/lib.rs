//! End-to-end cluster-then-judge orchestration

mod error;
mod pipeline;
mod run;

pub use error::PipelineError;
pub use pipeline::{Pipeline, RunOutput};
pub use run::{execute, EncoderKind, RunRequest};
