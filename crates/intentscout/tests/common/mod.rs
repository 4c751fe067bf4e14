#![allow(dead_code)]

use async_trait::async_trait;
use intentscout_analyze::{ModelError, ReasoningModel};
use intentscout_core::{Message, PipelineConfig};
use intentscout_embed::{EncodeError, Encoder};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const TOPICS: [&[&str]; 3] = [
    &["order", "shipped", "delivery", "package"],
    &["vegan", "cruelty"],
    &["hello", "thanks"],
];

/// Places each message on the axis of the topic its keywords hit
pub struct KeywordEncoder;

impl Encoder for KeywordEncoder {
    fn name(&self) -> &str {
        "keyword"
    }

    fn encode(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>, EncodeError> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                TOPICS
                    .iter()
                    .map(|words| words.iter().filter(|w| lower.contains(*w)).count() as f32)
                    .collect()
            })
            .collect())
    }

    fn dimension(&self) -> Option<usize> {
        Some(TOPICS.len())
    }
}

/// Answers CREATE_NEW for vegan questions and KEEP_EXISTING otherwise
pub struct TopicModel {
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl TopicModel {
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                prompts: Arc::clone(&prompts),
            },
            prompts,
        )
    }
}

#[async_trait]
impl ReasoningModel for TopicModel {
    fn name(&self) -> &str {
        "topic"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if prompt.contains("vegan") {
            Ok("```json\n{\"summary\":\"Vegan certification\",\"action\":\"CREATE_NEW\",\
                \"proposed_intent\":\"About Product -> Vegan Certification\",\
                \"reason\":\"Ingredients do not cover certifications\"}\n```"
                .to_string())
        } else {
            Ok(r#"{"summary":"Order tracking","action":"KEEP_EXISTING","reason":"Logistics covers order status"}"#.to_string())
        }
    }
}

/// Always answers with prose the parser cannot use
pub struct ChattyModel;

#[async_trait]
impl ReasoningModel for ChattyModel {
    fn name(&self) -> &str {
        "chatty"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        Ok("I think these users mostly want help.".to_string())
    }
}

pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new(0, "Where is my order?"),
        Message::new(1, "Has my order left the warehouse"),
        Message::new(2, "Is this cream vegan?"),
    ]
}

pub fn sample_config(k: usize) -> PipelineConfig {
    PipelineConfig {
        num_clusters: k,
        call_interval: Duration::ZERO,
        ..PipelineConfig::default()
    }
}

pub fn write_corpus(dir: &Path, texts: &[&str]) -> PathBuf {
    let records: Vec<serde_json::Value> = texts
        .iter()
        .map(|t| serde_json::json!({ "current_human_message": t }))
        .collect();
    let path = dir.join("inputs_for_assignment.json");
    let payload = serde_json::json!({ "customer_messages": records });
    std::fs::write(&path, payload.to_string()).unwrap();
    path
}
