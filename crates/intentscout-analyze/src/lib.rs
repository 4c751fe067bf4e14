//! Per-cluster judgment against a hosted reasoning model

mod analyzer;
mod error;
mod model;
mod pacer;
mod prompt;
pub mod providers;
mod response;

pub use analyzer::ClusterAnalyzer;
pub use error::{AnalysisError, ModelError};
pub use model::ReasoningModel;
pub use pacer::Pacer;
pub use prompt::build_analysis_prompt;
pub use response::{parse_analysis, strip_wrappers};
