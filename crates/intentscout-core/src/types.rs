//! Core types for the cluster-then-judge pipeline

use serde::{Deserialize, Serialize};

/// A single customer message, identified by its position in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: usize,
    pub text: String,
}

impl Message {
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Verdict returned by the reasoning model for one cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The current taxonomy clearly covers the topic
    #[serde(rename = "KEEP_EXISTING")]
    KeepExisting,
    /// The topic is a gap; a new intent should be added
    #[serde(rename = "CREATE_NEW")]
    CreateNew,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::KeepExisting => "KEEP_EXISTING",
            Action::CreateNew => "CREATE_NEW",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "KEEP_EXISTING" => Some(Action::KeepExisting),
            "CREATE_NEW" => Some(Action::CreateNew),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cluster label per message, `labels[i]` belongs to message `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterAssignment {
    pub labels: Vec<usize>,
    pub k: usize,
}

impl ClusterAssignment {
    pub fn new(labels: Vec<usize>, k: usize) -> Self {
        Self { labels, k }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of members per cluster id
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        for &label in &self.labels {
            if label < self.k {
                sizes[label] += 1;
            }
        }
        sizes
    }
}

/// A topical group of messages. Empty clusters are valid and get skipped.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub id: usize,
    pub members: Vec<Message>,
    pub samples: Vec<String>,
}

impl Cluster {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Group messages by cluster id.
///
/// Returns exactly `assignment.k` clusters in ascending id order. Members keep
/// corpus order and `samples` holds at most `sample_size` of their texts.
pub fn group_clusters(
    messages: &[Message],
    assignment: &ClusterAssignment,
    sample_size: usize,
) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = (0..assignment.k)
        .map(|id| Cluster {
            id,
            members: Vec::new(),
            samples: Vec::new(),
        })
        .collect();

    for (message, &label) in messages.iter().zip(assignment.labels.iter()) {
        if let Some(cluster) = clusters.get_mut(label) {
            cluster.members.push(message.clone());
        }
    }

    for cluster in &mut clusters {
        cluster.samples = cluster
            .members
            .iter()
            .take(sample_size)
            .map(|m| m.text.clone())
            .collect();
    }

    clusters
}

/// Validated analysis of one cluster; one entry of the final report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub cluster_id: usize,
    pub summary: String,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_intent: Option<String>,
    pub reason: String,
    pub examples: Vec<String>,
}

/// Per-cluster outcome; failures are values, not aborts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterOutcome {
    Analyzed(AnalysisResult),
    SkippedEmpty { cluster_id: usize },
    SkippedMalformed { cluster_id: usize, reason: String },
}

impl ClusterOutcome {
    pub fn cluster_id(&self) -> usize {
        match self {
            ClusterOutcome::Analyzed(result) => result.cluster_id,
            ClusterOutcome::SkippedEmpty { cluster_id }
            | ClusterOutcome::SkippedMalformed { cluster_id, .. } => *cluster_id,
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match self {
            ClusterOutcome::Analyzed(result) => Some(result),
            _ => None,
        }
    }
}
