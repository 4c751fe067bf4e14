use std::time::Duration;

use async_trait::async_trait;
use intentscout_core::Credential;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::ReasoningModel;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic Messages API client
pub struct AnthropicModel {
    credential: Credential,
    model: String,
    max_tokens: usize,
    client: Client,
}

impl AnthropicModel {
    pub fn new(credential: Credential, model: String) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            credential,
            model,
            max_tokens: 1024,
            client,
        })
    }
}

#[async_trait]
impl ReasoningModel for AnthropicModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(self.credential.expose())
                .map_err(|_| ModelError::Other("invalid Anthropic API key".to_string()))?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static("2023-06-01"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let resp = self
            .client
            .post(MESSAGES_URL)
            .headers(headers)
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(ModelError::Status {
                provider: "Anthropic",
                status,
                body: text,
            });
        }

        let parsed: MessagesResponse = resp.json().await?;
        extract_text(parsed)
    }
}

fn extract_text(parsed: MessagesResponse) -> Result<String, ModelError> {
    let answer = parsed
        .content
        .into_iter()
        .filter_map(|block| match block {
            ResponseBlock::Text { text } => Some(text),
            ResponseBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("\n");
    if answer.trim().is_empty() {
        return Err(ModelError::EmptyResponse("Anthropic"));
    }
    Ok(answer)
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: usize,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}
