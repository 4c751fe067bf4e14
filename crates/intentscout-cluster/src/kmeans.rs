//! Seeded k-means (k-means++ init, Lloyd iterations)

use crate::error::PartitionError;
use crate::{validate_input, Partitioner};
use intentscout_core::ClusterAssignment;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Centroid-based partitioner.
///
/// Runs `n_init` independent k-means++ initialisations from one seeded RNG
/// and keeps the run with the lowest inertia. A centroid that loses all its
/// members keeps its last position, so clusters can legitimately end empty.
#[derive(Debug, Clone)]
pub struct KMeans {
    pub max_iter: usize,
    pub n_init: usize,
    /// Stop once no centroid moves more than this (squared distance)
    pub tolerance: f64,
}

impl KMeans {
    pub fn new() -> Self {
        Self {
            max_iter: 300,
            n_init: 10,
            tolerance: 1e-4,
        }
    }

    fn run_once(&self, points: &[Vec<f64>], k: usize, rng: &mut StdRng) -> (Vec<usize>, f64) {
        let mut centroids = kmeans_plus_plus(points, k, rng);
        let mut labels = vec![0usize; points.len()];

        for _ in 0..self.max_iter {
            assign(points, &centroids, &mut labels);
            let updated = recompute(points, &labels, &centroids);
            let shift = centroids
                .iter()
                .zip(updated.iter())
                .map(|(old, new)| squared_distance(old, new))
                .fold(0.0f64, f64::max);
            centroids = updated;
            if shift <= self.tolerance {
                break;
            }
        }

        let inertia = assign(points, &centroids, &mut labels);
        (labels, inertia)
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner for KMeans {
    fn name(&self) -> &str {
        "kmeans"
    }

    fn partition(
        &self,
        vectors: &[Vec<f32>],
        k: usize,
        seed: u64,
    ) -> Result<ClusterAssignment, PartitionError> {
        validate_input(vectors, k)?;

        let points: Vec<Vec<f64>> = vectors
            .iter()
            .map(|v| v.iter().map(|&x| x as f64).collect())
            .collect();

        let mut rng = StdRng::seed_from_u64(seed);
        let mut best: Option<(f64, Vec<usize>)> = None;

        for run in 0..self.n_init.max(1) {
            let (labels, inertia) = self.run_once(&points, k, &mut rng);
            tracing::trace!(run, inertia, "k-means run finished");
            let improved = match &best {
                Some((best_inertia, _)) => inertia < *best_inertia,
                None => true,
            };
            if improved {
                best = Some((inertia, labels));
            }
        }

        let (inertia, labels) = best.unwrap_or_else(|| (0.0, vec![0; points.len()]));
        tracing::debug!(k, n = points.len(), inertia, "partitioned vectors");
        Ok(ClusterAssignment::new(labels, k))
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// k-means++ seeding: each next centroid drawn with probability
/// proportional to its squared distance from the nearest chosen one
fn kmeans_plus_plus(points: &[Vec<f64>], k: usize, rng: &mut StdRng) -> Vec<Vec<f64>> {
    let n = points.len();
    let mut centroids: Vec<Vec<f64>> = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..n)].clone());

    let mut nearest: Vec<f64> = points
        .iter()
        .map(|p| squared_distance(p, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = nearest.iter().sum();
        let next = if total > 0.0 {
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = nearest.iter().rposition(|&d| d > 0.0).unwrap_or(n - 1);
            for (i, &d) in nearest.iter().enumerate() {
                if d <= 0.0 {
                    continue;
                }
                if target < d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            chosen
        } else {
            // every point coincides with a centroid already
            rng.gen_range(0..n)
        };

        let centroid = points[next].clone();
        for (d, p) in nearest.iter_mut().zip(points.iter()) {
            *d = d.min(squared_distance(p, &centroid));
        }
        centroids.push(centroid);
    }

    centroids
}

/// Assign each point to its nearest centroid (ties go to the lower id).
/// Returns the inertia.
fn assign(points: &[Vec<f64>], centroids: &[Vec<f64>], labels: &mut [usize]) -> f64 {
    let mut inertia = 0.0;
    for (label, p) in labels.iter_mut().zip(points.iter()) {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (ci, c) in centroids.iter().enumerate() {
            let d = squared_distance(p, c);
            if d < best_dist {
                best_dist = d;
                best = ci;
            }
        }
        *label = best;
        inertia += best_dist;
    }
    inertia
}

fn recompute(points: &[Vec<f64>], labels: &[usize], previous: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let dim = previous[0].len();
    let mut sums = vec![vec![0.0f64; dim]; previous.len()];
    let mut counts = vec![0usize; previous.len()];

    for (p, &label) in points.iter().zip(labels.iter()) {
        counts[label] += 1;
        for (s, x) in sums[label].iter_mut().zip(p.iter()) {
            *s += x;
        }
    }

    sums.into_iter()
        .zip(counts)
        .zip(previous.iter())
        .map(|((sum, count), old)| {
            if count == 0 {
                old.clone()
            } else {
                sum.into_iter().map(|s| s / count as f64).collect()
            }
        })
        .collect()
}
