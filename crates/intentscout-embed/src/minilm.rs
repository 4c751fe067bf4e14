//! Local sentence-embedding model via fastembed

use crate::encoder::{check_output, Encoder};
use crate::error::{EncodeError, Result};
use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};

const DEFAULT_BATCH_SIZE: usize = 64;
const MINILM_DIMENSION: usize = 384;

/// all-MiniLM-L6-v2 sentence embeddings (384 dimensions)
pub struct FastEmbedEncoder {
    model: TextEmbedding,
    batch_size: usize,
}

impl FastEmbedEncoder {
    /// Load the model, downloading it on first use
    pub fn new() -> Result<Self> {
        let options = TextInitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_show_download_progress(false);
        let model =
            TextEmbedding::try_new(options).map_err(|e| EncodeError::Unavailable(e.to_string()))?;
        Ok(Self {
            model,
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

impl Encoder for FastEmbedEncoder {
    fn name(&self) -> &str {
        "all-MiniLM-L6-v2"
    }

    fn encode(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(count = texts.len(), "embedding messages");
        let vectors = self
            .model
            .embed(texts.to_vec(), Some(self.batch_size))
            .map_err(|e| EncodeError::Failed(e.to_string()))?;
        check_output(texts.len(), &vectors)?;
        Ok(vectors)
    }

    fn dimension(&self) -> Option<usize> {
        Some(MINILM_DIMENSION)
    }
}
