//! Cluster-by-cluster judgment loop

use crate::error::AnalysisError;
use crate::model::ReasoningModel;
use crate::pacer::Pacer;
use crate::prompt::build_analysis_prompt;
use crate::response::parse_analysis;
use intentscout_core::{Action, AnalysisResult, Cluster, ClusterOutcome};
use std::time::Duration;

/// Drives one reasoning-model call per non-empty cluster.
///
/// Clusters are processed sequentially in the order given. A failed call or
/// a malformed verdict only skips that cluster; nothing here is retried.
pub struct ClusterAnalyzer {
    model: Box<dyn ReasoningModel>,
    taxonomy: String,
    pacer: Pacer,
}

impl ClusterAnalyzer {
    pub fn new(
        model: Box<dyn ReasoningModel>,
        taxonomy: impl Into<String>,
        interval: Duration,
    ) -> Self {
        Self {
            model,
            taxonomy: taxonomy.into(),
            pacer: Pacer::new(interval),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Analyze every cluster, returning one outcome per cluster in input order
    pub async fn analyze_all(&self, clusters: &[Cluster]) -> Vec<ClusterOutcome> {
        let mut outcomes = Vec::with_capacity(clusters.len());
        for cluster in clusters {
            outcomes.push(self.analyze(cluster).await);
        }
        outcomes
    }

    pub async fn analyze(&self, cluster: &Cluster) -> ClusterOutcome {
        if cluster.is_empty() {
            tracing::info!(cluster_id = cluster.id, "cluster is empty, skipping");
            return ClusterOutcome::SkippedEmpty {
                cluster_id: cluster.id,
            };
        }

        tracing::info!(
            cluster_id = cluster.id,
            size = cluster.size(),
            samples = cluster.samples.len(),
            "analyzing cluster"
        );

        self.pacer.wait().await;
        let verdict = self.invoke(cluster).await;
        self.pacer.mark().await;

        match verdict {
            Ok(result) => {
                log_verdict(&result);
                ClusterOutcome::Analyzed(result)
            }
            Err(err) => {
                tracing::warn!(cluster_id = cluster.id, error = %err, "skipping cluster");
                ClusterOutcome::SkippedMalformed {
                    cluster_id: cluster.id,
                    reason: err.to_string(),
                }
            }
        }
    }

    async fn invoke(&self, cluster: &Cluster) -> Result<AnalysisResult, AnalysisError> {
        let prompt = build_analysis_prompt(&cluster.samples, &self.taxonomy);
        let raw = self.model.generate(&prompt).await?;
        tracing::debug!(cluster_id = cluster.id, response = %raw, "raw model response");
        parse_analysis(&raw, cluster.id, &cluster.samples)
    }
}

fn log_verdict(result: &AnalysisResult) {
    match (&result.action, &result.proposed_intent) {
        (Action::CreateNew, Some(intent)) => tracing::info!(
            cluster_id = result.cluster_id,
            action = %result.action,
            proposed = %intent,
            "gap found"
        ),
        _ => tracing::info!(
            cluster_id = result.cluster_id,
            action = %result.action,
            "covered by current taxonomy"
        ),
    }
}
