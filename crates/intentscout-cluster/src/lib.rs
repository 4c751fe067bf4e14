//! Topic partitioning of message embeddings

mod error;
mod kmeans;

pub use error::PartitionError;
pub use kmeans::KMeans;

use intentscout_core::ClusterAssignment;

/// Assigns every vector to exactly one cluster id in `[0, k)`.
///
/// Identical vectors, `k` and `seed` must produce identical assignments.
pub trait Partitioner {
    fn name(&self) -> &str;

    fn partition(
        &self,
        vectors: &[Vec<f32>],
        k: usize,
        seed: u64,
    ) -> Result<ClusterAssignment, PartitionError>;
}

/// Shared input validation for partitioners
pub fn validate_input(vectors: &[Vec<f32>], k: usize) -> Result<usize, PartitionError> {
    if vectors.is_empty() {
        return Err(PartitionError::NoVectors);
    }
    if k == 0 || k > vectors.len() {
        return Err(PartitionError::InvalidK {
            k,
            n: vectors.len(),
        });
    }
    let dim = vectors[0].len();
    if dim == 0 {
        return Err(PartitionError::ZeroDimension);
    }
    for (index, v) in vectors.iter().enumerate() {
        if v.len() != dim {
            return Err(PartitionError::DimensionMismatch {
                index,
                expected: dim,
                actual: v.len(),
            });
        }
        if v.iter().any(|x| !x.is_finite()) {
            return Err(PartitionError::NonFinite(index));
        }
    }
    Ok(dim)
}
