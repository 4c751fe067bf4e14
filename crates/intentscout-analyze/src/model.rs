use crate::error::ModelError;
use async_trait::async_trait;

/// A generative model that answers a text prompt with free-form text
#[async_trait]
pub trait ReasoningModel: Send + Sync {
    /// Provider/model label used in logs
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
