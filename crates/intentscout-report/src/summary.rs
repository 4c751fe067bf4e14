//! Run-level bookkeeping

use chrono::{DateTime, Utc};
use intentscout_core::ClusterOutcome;

/// What happened during one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub messages: usize,
    pub clusters: usize,
    pub analyzed: usize,
    pub skipped_empty: usize,
    /// (cluster id, reason)
    pub skipped_malformed: Vec<(usize, String)>,
}

impl RunSummary {
    pub fn from_outcomes(
        started_at: DateTime<Utc>,
        messages: usize,
        outcomes: &[ClusterOutcome],
    ) -> Self {
        let mut summary = Self {
            started_at,
            finished_at: Utc::now(),
            messages,
            clusters: outcomes.len(),
            analyzed: 0,
            skipped_empty: 0,
            skipped_malformed: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                ClusterOutcome::Analyzed(_) => summary.analyzed += 1,
                ClusterOutcome::SkippedEmpty { .. } => summary.skipped_empty += 1,
                ClusterOutcome::SkippedMalformed { cluster_id, reason } => {
                    summary.skipped_malformed.push((*cluster_id, reason.clone()))
                }
            }
        }
        summary
    }

    pub fn elapsed_secs(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    pub fn log(&self) {
        tracing::info!(
            messages = self.messages,
            clusters = self.clusters,
            analyzed = self.analyzed,
            skipped_empty = self.skipped_empty,
            skipped_malformed = self.skipped_malformed.len(),
            elapsed_secs = self.elapsed_secs(),
            "run finished"
        );
        for (cluster_id, reason) in &self.skipped_malformed {
            tracing::warn!(cluster_id, reason = %reason, "cluster omitted from report");
        }
    }
}
