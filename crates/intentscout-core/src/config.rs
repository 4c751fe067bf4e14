//! Configuration for the intent-gap pipeline

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Intent map the reasoning model compares each cluster against
pub const DEFAULT_TAXONOMY: &str = "\
- Basic Interactions (Greetings, Acknowledgment)
- About Company (Contact, Team)
- About Product (Ingredients, Price, Usage, Effectiveness)
- Logistics (Order Status, Returns, Shipping, Cancellation)
- Recommendation (Skin type queries, Solution seeking)
";

/// Field names used to pull message text out of the input payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSchema {
    /// Top-level key holding the record array
    pub records_key: String,
    /// Per-record key holding the message text
    pub text_field: String,
}

impl CorpusSchema {
    pub fn new() -> Self {
        Self {
            records_key: "customer_messages".to_string(),
            text_field: "current_human_message".to_string(),
        }
    }
}

impl Default for CorpusSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of clusters (K), fixed before partitioning
    pub num_clusters: usize,

    /// Representative samples sent per cluster (M)
    pub sample_size: usize,

    /// Minimum pause between reasoning-model invocations
    pub call_interval: Duration,

    /// Partitioner seed
    pub seed: u64,

    /// Current intent taxonomy description
    pub taxonomy: String,

    /// Input payload field names
    pub schema: CorpusSchema,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self {
            num_clusters: 10,
            sample_size: 5,
            call_interval: Duration::from_secs(2),
            seed: 42,
            taxonomy: DEFAULT_TAXONOMY.to_string(),
            schema: CorpusSchema::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_clusters == 0 {
            return Err(ConfigError::Invalid(
                "num_clusters must be at least 1".to_string(),
            ));
        }
        if self.sample_size == 0 {
            return Err(ConfigError::Invalid(
                "sample_size must be at least 1".to_string(),
            ));
        }
        if self.taxonomy.trim().is_empty() {
            return Err(ConfigError::Invalid("taxonomy is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hosted reasoning-model provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Gemini,
    Anthropic,
}

impl Provider {
    /// Environment variable holding the provider's API key
    pub fn credential_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-2.5-flash",
            Provider::Anthropic => "claude-3-5-haiku-latest",
        }
    }
}

/// API key for the reasoning service. Never printed.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::MissingCredential("<inline>".to_string()));
        }
        Ok(Self(key.trim().to_string()))
    }

    /// Read the key for `provider` from its environment variable
    pub fn from_env(provider: Provider) -> Result<Self, ConfigError> {
        let var = provider.credential_var();
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(ConfigError::MissingCredential(var.to_string())),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
