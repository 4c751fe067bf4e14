//! Offline bag-of-words encoder

use crate::encoder::{check_output, Encoder};
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();

const DEFAULT_DIMENSION: usize = 256;

/// Feature-hashing encoder: each token lands in a bucket, the vector is
/// L2-normalized. Deterministic and needs no model download.
#[derive(Debug, Clone)]
pub struct HashingEncoder {
    dimension: usize,
}

impl HashingEncoder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        for token in tokenize(text) {
            let bucket = (fnv1a(token.as_bytes()) % self.dimension as u64) as usize;
            vector[bucket] += 1.0;
        }
        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in vector.iter_mut() {
                *x /= norm;
            }
        }
        vector
    }
}

impl Default for HashingEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

impl Encoder for HashingEncoder {
    fn name(&self) -> &str {
        "hashing"
    }

    fn encode(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let vectors: Vec<Vec<f32>> = texts.iter().map(|t| self.embed_one(t)).collect();
        check_output(texts.len(), &vectors)?;
        Ok(vectors)
    }

    fn dimension(&self) -> Option<usize> {
        Some(self.dimension)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"[a-z0-9]{2,}").unwrap());
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

// FNV-1a, stable across runs and platforms
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
