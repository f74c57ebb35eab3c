//! Synthetic labeled point clouds for binary classification.
//!
//! The generator produces two clusters of points, one per class label. With the
//! default [`ClusterShape::SplitUniform`] scheme, class [`Label::Zero`] draws
//! every feature uniformly from `[0, 0.5)` and class [`Label::One`] from
//! `[0.5, 1.0)`, so the classes are linearly separable by construction.
//!
//! All sampling goes through an injected [`rand::Rng`]; callers that need
//! reproducible datasets pass a seeded generator (or use
//! [`generate_clusters_seeded`]).

use ndarray::{Array1, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as RandDistribution, Normal};
use serde::{Deserialize, Serialize};

/// Binary class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// The negative class.
    Zero,
    /// The positive class.
    One,
}

impl Label {
    /// Threshold rule shared by training and evaluation: `One` iff the
    /// activation is non-negative.
    pub fn from_activation(activation: f64) -> Self {
        if activation >= 0.0 {
            Label::One
        } else {
            Label::Zero
        }
    }

    /// Numeric value used by the perceptron update rule.
    pub fn as_f64(self) -> f64 {
        match self {
            Label::Zero => 0.0,
            Label::One => 1.0,
        }
    }
}

/// A single labeled observation with a fixed-length feature vector.
///
/// Points are immutable once constructed; training and evaluation only read
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    features: Array1<f64>,
    label: Label,
}

impl LabeledPoint {
    /// Create a point from a feature vector of any dimensionality.
    pub fn new(features: Array1<f64>, label: Label) -> Self {
        Self { features, label }
    }

    /// Convenience constructor for the planar (D = 2) case.
    pub fn planar(x: f64, y: f64, label: Label) -> Self {
        Self::new(Array1::from_vec(vec![x, y]), label)
    }

    /// The feature vector.
    pub fn features(&self) -> ArrayView1<f64> {
        self.features.view()
    }

    /// The class label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Feature-vector length.
    pub fn dim(&self) -> usize {
        self.features.len()
    }
}

/// Sampling scheme used for each class cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClusterShape {
    /// Class `Zero` draws every feature from `[0, 0.5)`, class `One` from
    /// `[0.5, 1.0)`. Linearly separable by construction.
    SplitUniform,
    /// Gaussian blobs centered at 0.25 (class `Zero`) and 0.75 (class `One`)
    /// on every axis. Separability is likely for a small `std_dev` but not
    /// guaranteed.
    Gaussian {
        /// Standard deviation of each blob, clamped below at `1e-6`.
        std_dev: f64,
    },
}

/// Configuration for synthetic cluster generation.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of points generated per class.
    pub points_per_class: usize,
    /// Feature-vector dimensionality (2 for the planar case, must be >= 1).
    pub dimensions: usize,
    /// Sampling scheme for both clusters.
    pub shape: ClusterShape,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            points_per_class: 100,
            dimensions: 2,
            shape: ClusterShape::SplitUniform,
        }
    }
}

/// Generate `2 * points_per_class` labeled points, class `Zero` block first.
///
/// The generated order is the order the trainer visits points in, so a fixed
/// seed pins the whole downstream run.
///
/// # Arguments
/// * `config` - Cluster sizes, dimensionality, and sampling scheme
/// * `rng` - Random source for all feature draws
pub fn generate_clusters<R: Rng>(config: &ClusterConfig, rng: &mut R) -> Vec<LabeledPoint> {
    let mut points = Vec::with_capacity(2 * config.points_per_class);
    sample_class(config, Label::Zero, rng, &mut points);
    sample_class(config, Label::One, rng, &mut points);
    points
}

/// Generate clusters from a fixed seed via [`ChaCha8Rng`].
pub fn generate_clusters_seeded(config: &ClusterConfig, seed: u64) -> Vec<LabeledPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_clusters(config, &mut rng)
}

fn sample_class<R: Rng>(
    config: &ClusterConfig,
    label: Label,
    rng: &mut R,
    points: &mut Vec<LabeledPoint>,
) {
    match config.shape {
        ClusterShape::SplitUniform => {
            let (low, high) = match label {
                Label::Zero => (0.0, 0.5),
                Label::One => (0.5, 1.0),
            };
            for _ in 0..config.points_per_class {
                let features =
                    Array1::from_iter((0..config.dimensions).map(|_| rng.random_range(low..high)));
                points.push(LabeledPoint::new(features, label));
            }
        }
        ClusterShape::Gaussian { std_dev } => {
            let center = match label {
                Label::Zero => 0.25,
                Label::One => 0.75,
            };
            let normal = Normal::new(center, std_dev.max(1e-6)).ok();
            for _ in 0..config.points_per_class {
                let features = match &normal {
                    Some(dist) => {
                        Array1::from_iter((0..config.dimensions).map(|_| dist.sample(rng)))
                    }
                    None => Array1::from_elem(config.dimensions, center),
                };
                points.push(LabeledPoint::new(features, label));
            }
        }
    }
}
