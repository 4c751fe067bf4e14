use crate::error::{EncodeError, Result};

/// Maps message texts to fixed-length vectors.
///
/// Implementations must be total and order-preserving: the output holds one
/// vector per input, `vectors[i]` belonging to `texts[i]`.
pub trait Encoder {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    fn encode(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Vector length this encoder promises, when known up front
    fn dimension(&self) -> Option<usize>;
}

/// Verify an encoder's output covers every text with equal-length vectors
pub fn check_output(expected: usize, vectors: &[Vec<f32>]) -> Result<()> {
    if vectors.len() != expected {
        return Err(EncodeError::CountMismatch {
            expected,
            actual: vectors.len(),
        });
    }
    let Some(first) = vectors.first() else {
        return Ok(());
    };
    let dim = first.len();
    if dim == 0 {
        return Err(EncodeError::InvalidDimension {
            index: 0,
            expected: 1,
            actual: 0,
        });
    }
    for (index, v) in vectors.iter().enumerate() {
        if v.len() != dim {
            return Err(EncodeError::InvalidDimension {
                index,
                expected: dim,
                actual: v.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a < 1e-8 || norm_b < 1e-8 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
