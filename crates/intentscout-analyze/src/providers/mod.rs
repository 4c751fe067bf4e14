//! Hosted reasoning-model clients

mod anthropic;
mod gemini;

pub use anthropic::AnthropicModel;
pub use gemini::GeminiModel;

use crate::error::ModelError;
use crate::model::ReasoningModel;
use intentscout_core::{Credential, Provider};

/// Build the client for `provider`, using its default model unless overridden
pub fn connect(
    provider: Provider,
    credential: Credential,
    model: Option<String>,
) -> Result<Box<dyn ReasoningModel>, ModelError> {
    let model = model.unwrap_or_else(|| provider.default_model().to_string());
    match provider {
        Provider::Gemini => Ok(Box::new(GeminiModel::new(credential, model)?)),
        Provider::Anthropic => Ok(Box::new(AnthropicModel::new(credential, model)?)),
    }
}
