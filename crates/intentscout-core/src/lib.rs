//! Core types, configuration and corpus loading for intent-gap discovery

mod config;
mod corpus;
mod error;
mod types;

pub use config::{CorpusSchema, Credential, PipelineConfig, Provider, DEFAULT_TAXONOMY};
pub use corpus::{load_corpus, parse_corpus};
pub use error::{ConfigError, SchemaError};
pub use types::{
    group_clusters, Action, AnalysisResult, Cluster, ClusterAssignment, ClusterOutcome, Message,
};
