//! One full run from input file to report file

use crate::error::PipelineError;
use crate::pipeline::{Pipeline, RunOutput};
use intentscout_analyze::providers;
use intentscout_cluster::KMeans;
use intentscout_core::{load_corpus, Credential, PipelineConfig, Provider};
use intentscout_embed::{Encoder, FastEmbedEncoder, HashingEncoder};
use std::path::PathBuf;

/// Which embedding backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderKind {
    /// all-MiniLM-L6-v2 via fastembed
    FastEmbed,
    /// Offline feature hashing
    Hashing,
}

impl EncoderKind {
    fn build(&self) -> Result<Box<dyn Encoder>, PipelineError> {
        match self {
            Self::FastEmbed => Ok(Box::new(FastEmbedEncoder::new()?)),
            Self::Hashing => Ok(Box::new(HashingEncoder::default())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub provider: Provider,
    pub model: Option<String>,
    pub encoder: EncoderKind,
}

/// Check the credential, load the corpus, run the pipeline, write the report.
///
/// Stages are ordered so a missing credential is reported before the input
/// is touched, and the output file only appears after a successful run.
pub async fn execute(
    request: &RunRequest,
    config: PipelineConfig,
) -> Result<RunOutput, PipelineError> {
    config.validate()?;
    let credential = Credential::from_env(request.provider)?;

    tracing::info!(path = %request.input.display(), "loading data");
    let messages = load_corpus(&request.input, &config.schema)?;
    tracing::info!(count = messages.len(), "loaded messages");

    let model = providers::connect(request.provider, credential, request.model.clone())?;
    let encoder = request.encoder.build()?;

    let mut pipeline = Pipeline::new(config, encoder, Box::new(KMeans::new()), model)?;
    pipeline.run_to_file(&messages, &request.output).await
}
