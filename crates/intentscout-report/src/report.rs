//! The final intent-gap report

use intentscout_core::{Action, AnalysisResult, ClusterOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Successfully analyzed clusters, ascending by cluster id.
///
/// Serializes as a bare JSON array of analysis objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<AnalysisResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the analyzed outcomes; skipped clusters leave no entry
    pub fn from_outcomes(outcomes: &[ClusterOutcome]) -> Self {
        let mut entries: Vec<AnalysisResult> = outcomes
            .iter()
            .filter_map(|o| o.analysis().cloned())
            .collect();
        entries.sort_by_key(|e| e.cluster_id);
        entries.dedup_by_key(|e| e.cluster_id);
        Self { entries }
    }

    pub fn entries(&self) -> &[AnalysisResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> ReportStats {
        let create_new = self
            .entries
            .iter()
            .filter(|e| e.action == Action::CreateNew)
            .count();
        ReportStats {
            total: self.entries.len(),
            keep_existing: self.entries.len() - create_new,
            create_new,
            proposals: self
                .entries
                .iter()
                .filter_map(|e| {
                    e.proposed_intent
                        .as_ref()
                        .map(|p| (e.cluster_id, p.clone(), e.summary.clone()))
                })
                .collect(),
        }
    }
}

/// Summary counts over a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub keep_existing: usize,
    pub create_new: usize,
    /// (cluster id, proposed intent, summary)
    pub proposals: Vec<(usize, String, String)>,
}

impl fmt::Display for ReportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return write!(f, "Report is empty: no clusters were analyzed.");
        }
        writeln!(f, "Intent Gap Report")?;
        writeln!(f, "=================")?;
        writeln!(f, "Clusters analyzed: {}", self.total)?;
        writeln!(f, "Covered (KEEP_EXISTING): {}", self.keep_existing)?;
        write!(f, "Gaps (CREATE_NEW): {}", self.create_new)?;
        if !self.proposals.is_empty() {
            write!(f, "\n\nProposed intents\n----------------")?;
            for (cluster_id, intent, summary) in &self.proposals {
                write!(f, "\n  #{} {} ({})", cluster_id, intent, summary)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(cluster_id: usize, action: Action, proposal: Option<&str>) -> AnalysisResult {
        AnalysisResult {
            cluster_id,
            summary: format!("summary {}", cluster_id),
            action,
            proposed_intent: proposal.map(String::from),
            reason: "because".to_string(),
            examples: vec![format!("message {}", cluster_id)],
        }
    }

    #[test]
    fn test_from_outcomes_keeps_only_analyzed_in_order() {
        let outcomes = vec![
            ClusterOutcome::Analyzed(result(2, Action::KeepExisting, None)),
            ClusterOutcome::SkippedEmpty { cluster_id: 1 },
            ClusterOutcome::Analyzed(result(0, Action::CreateNew, Some("A -> B"))),
            ClusterOutcome::SkippedMalformed {
                cluster_id: 3,
                reason: "bad json".to_string(),
            },
        ];
        let report = Report::from_outcomes(&outcomes);
        let ids: Vec<usize> = report.entries().iter().map(|e| e.cluster_id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_empty_report_serializes_as_empty_array() {
        let report = Report::from_outcomes(&[ClusterOutcome::SkippedEmpty { cluster_id: 0 }]);
        assert!(report.is_empty());
        assert_eq!(serde_json::to_string(&report).unwrap(), "[]");
    }

    #[test]
    fn test_serialized_keys() {
        let report = Report::from_outcomes(&[
            ClusterOutcome::Analyzed(result(0, Action::KeepExisting, None)),
            ClusterOutcome::Analyzed(result(1, Action::CreateNew, Some("Logistics -> Customs"))),
        ]);
        let json = serde_json::to_value(&report).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 2);

        let keep = arr[0].as_object().unwrap();
        let mut keys: Vec<&str> = keep.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["action", "cluster_id", "examples", "reason", "summary"]
        );
        assert_eq!(arr[1]["proposed_intent"], "Logistics -> Customs");
    }

    #[test]
    fn test_stats() {
        let report = Report::from_outcomes(&[
            ClusterOutcome::Analyzed(result(0, Action::KeepExisting, None)),
            ClusterOutcome::Analyzed(result(1, Action::CreateNew, Some("About Product -> Allergens"))),
            ClusterOutcome::Analyzed(result(2, Action::KeepExisting, None)),
        ]);
        let stats = report.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.keep_existing, 2);
        assert_eq!(stats.create_new, 1);
        assert_eq!(stats.proposals[0].1, "About Product -> Allergens");

        let text = stats.to_string();
        assert!(text.contains("Gaps (CREATE_NEW): 1"));
        assert!(text.contains("#1 About Product -> Allergens"));
    }

    #[test]
    fn test_empty_stats_display() {
        let stats = Report::new().stats();
        assert!(stats.to_string().contains("empty"));
    }
}
