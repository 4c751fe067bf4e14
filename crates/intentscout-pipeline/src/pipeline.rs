use crate::error::PipelineError;
use chrono::Utc;
use intentscout_analyze::{ClusterAnalyzer, ReasoningModel};
use intentscout_cluster::Partitioner;
use intentscout_core::{group_clusters, ClusterOutcome, Message, PipelineConfig};
use intentscout_embed::{EncodeError, Encoder};
use intentscout_report::{write_report, Report, RunSummary};
use std::path::Path;

/// Everything a finished run produced
#[derive(Debug)]
pub struct RunOutput {
    pub report: Report,
    pub outcomes: Vec<ClusterOutcome>,
    pub summary: RunSummary,
}

/// Encode → partition → analyze → aggregate.
///
/// Encoding and partitioning errors abort the run; per-cluster analysis
/// failures end up as skipped outcomes.
pub struct Pipeline {
    config: PipelineConfig,
    encoder: Box<dyn Encoder>,
    partitioner: Box<dyn Partitioner>,
    analyzer: ClusterAnalyzer,
}

impl Pipeline {
    pub fn new(
        config: PipelineConfig,
        encoder: Box<dyn Encoder>,
        partitioner: Box<dyn Partitioner>,
        model: Box<dyn ReasoningModel>,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        let analyzer = ClusterAnalyzer::new(model, config.taxonomy.clone(), config.call_interval);
        Ok(Self {
            config,
            encoder,
            partitioner,
            analyzer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline over an already-loaded corpus
    pub async fn analyze_messages(
        &mut self,
        messages: &[Message],
    ) -> Result<RunOutput, PipelineError> {
        let started_at = Utc::now();
        let texts: Vec<String> = messages.iter().map(|m| m.text.clone()).collect();

        tracing::info!(
            encoder = self.encoder.name(),
            count = texts.len(),
            "converting messages to embeddings"
        );
        let vectors = self.encoder.encode(&texts)?;
        intentscout_embed::check_output(texts.len(), &vectors)?;
        if let (Some(expected), Some(first)) = (self.encoder.dimension(), vectors.first()) {
            if first.len() != expected {
                return Err(EncodeError::InvalidDimension {
                    index: 0,
                    expected,
                    actual: first.len(),
                }
                .into());
            }
        }

        tracing::info!(
            partitioner = self.partitioner.name(),
            k = self.config.num_clusters,
            seed = self.config.seed,
            "grouping similar messages"
        );
        let assignment =
            self.partitioner
                .partition(&vectors, self.config.num_clusters, self.config.seed)?;
        tracing::debug!(sizes = ?assignment.sizes(), "cluster sizes");

        let clusters = group_clusters(messages, &assignment, self.config.sample_size);

        tracing::info!(
            model = self.analyzer.model_name(),
            clusters = clusters.len(),
            "analyzing clusters"
        );
        let outcomes = self.analyzer.analyze_all(&clusters).await;

        let report = Report::from_outcomes(&outcomes);
        let summary = RunSummary::from_outcomes(started_at, messages.len(), &outcomes);
        summary.log();

        Ok(RunOutput {
            report,
            outcomes,
            summary,
        })
    }

    /// Analyze `messages` and persist the report to `output`.
    ///
    /// The file is written only once the whole run has succeeded.
    pub async fn run_to_file(
        &mut self,
        messages: &[Message],
        output: &Path,
    ) -> Result<RunOutput, PipelineError> {
        let run = self.analyze_messages(messages).await?;
        write_report(output, &run.report)?;
        Ok(run)
    }
}
