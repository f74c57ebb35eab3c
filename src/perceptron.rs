//! Single-layer perceptron training and prediction.
//!
//! Implements the classic Rosenblatt learning rule over arbitrary feature
//! dimensionality; the planar case is simply D = 2. For each point, in the
//! order the dataset was generated, for each of `epochs` full passes:
//!
//! 1. `activation = bias + weights . features`
//! 2. `predicted = One` iff `activation >= 0`
//! 3. `error = label - predicted` (in {-1, 0, 1})
//! 4. `weights += learning_rate * error * features`
//! 5. `bias += learning_rate * error`
//!
//! Updates only move the model on misclassified points. Training runs the
//! full epoch budget by default; [`TrainConfig::stop_on_convergence`] opts in
//! to stopping after the first epoch with zero misclassifications.
//!
//! Weights and bias initialize from independent uniform `[0, 1)` draws on the
//! injected [`rand::Rng`], so a fixed seed makes whole runs reproducible.

use ndarray::{Array1, ArrayView1};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::datasets::{Label, LabeledPoint};
use crate::error::{LinsepError, Result};

/// Training configuration for the perceptron.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Number of full passes over the dataset.
    pub epochs: usize,
    /// Step size applied to each correction.
    pub learning_rate: f64,
    /// Stop after the first epoch with zero misclassifications.
    pub stop_on_convergence: bool,
    /// Whether to print per-epoch progress.
    pub verbose: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.1,
            stop_on_convergence: false,
            verbose: false,
        }
    }
}

impl TrainConfig {
    /// Set the epoch budget.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the learning rate.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Enable or disable early stopping on a zero-error epoch.
    pub fn with_stop_on_convergence(mut self, stop_on_convergence: bool) -> Self {
        self.stop_on_convergence = stop_on_convergence;
        self
    }

    /// Set verbosity.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(LinsepError::InvalidParameter(
                "epochs must be at least 1".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LinsepError::InvalidParameter(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

/// Metadata about a completed training run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of epochs actually run.
    pub epochs_run: usize,
    /// Whether training stopped before the full epoch budget.
    pub stopped_early: bool,
    /// Misclassification count per epoch, in order.
    pub error_history: Vec<usize>,
}

impl TrainingSummary {
    /// Misclassification count of the final epoch.
    pub fn final_errors(&self) -> usize {
        self.error_history.last().copied().unwrap_or(0)
    }

    /// Whether the final epoch made no classification mistakes.
    pub fn converged(&self) -> bool {
        self.error_history.last() == Some(&0)
    }
}

/// A trained single-layer perceptron: a weight vector plus a scalar bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Array1<f64>,
    bias: f64,
}

impl Perceptron {
    /// Build a perceptron from explicit weights and bias.
    pub fn from_parts(weights: Array1<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// The learned weight vector.
    pub fn weights(&self) -> ArrayView1<f64> {
        self.weights.view()
    }

    /// The learned bias term.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Feature dimensionality this perceptron accepts.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Weighted sum of the features plus bias.
    ///
    /// Fails with [`LinsepError::DimensionMismatch`] when the feature vector
    /// length differs from the weight vector length.
    pub fn activation(&self, features: ArrayView1<f64>) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(LinsepError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        Ok(self.bias + self.weights.dot(&features))
    }

    /// Predicted class for the features, thresholding the activation at zero.
    pub fn predict(&self, features: ArrayView1<f64>) -> Result<Label> {
        Ok(Label::from_activation(self.activation(features)?))
    }

    /// Train a perceptron on the given points, discarding the run summary.
    ///
    /// # Arguments
    /// * `points` - Non-empty slice of points sharing one dimensionality
    /// * `config` - Epoch budget, learning rate, and stopping behavior
    /// * `rng` - Random source for the uniform `[0, 1)` weight and bias init
    pub fn fit<R: Rng>(
        points: &[LabeledPoint],
        config: &TrainConfig,
        rng: &mut R,
    ) -> Result<Self> {
        Self::fit_with_history(points, config, rng).map(|(model, _)| model)
    }

    /// Train a perceptron from a fixed seed via [`ChaCha8Rng`].
    pub fn fit_seeded(points: &[LabeledPoint], config: &TrainConfig, seed: u64) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::fit(points, config, &mut rng)
    }

    /// Train a perceptron, also returning per-epoch training metadata.
    ///
    /// # Returns
    /// The trained model and its [`TrainingSummary`], or:
    /// * [`LinsepError::EmptyDataset`] when `points` is empty
    /// * [`LinsepError::DimensionMismatch`] when points disagree on length
    /// * [`LinsepError::InvalidParameter`] for a zero epoch budget or a
    ///   non-positive learning rate
    pub fn fit_with_history<R: Rng>(
        points: &[LabeledPoint],
        config: &TrainConfig,
        rng: &mut R,
    ) -> Result<(Self, TrainingSummary)> {
        config.validate()?;
        let dim = uniform_dim(points)?;

        // Weights first, in feature order, then bias: a fixed seed pins the
        // whole initial state.
        let weights = Array1::from_iter((0..dim).map(|_| rng.random::<f64>()));
        let bias = rng.random::<f64>();
        let mut model = Perceptron { weights, bias };

        let mut error_history = Vec::with_capacity(config.epochs);
        let mut epochs_run = 0;
        let mut stopped_early = false;

        for epoch in 0..config.epochs {
            let mut misclassified = 0usize;
            for point in points {
                let activation = model.bias + model.weights.dot(&point.features());
                let predicted = Label::from_activation(activation);
                let error = point.label().as_f64() - predicted.as_f64();
                if error != 0.0 {
                    misclassified += 1;
                    model.weights.scaled_add(config.learning_rate * error, &point.features());
                    model.bias += config.learning_rate * error;
                }
            }
            error_history.push(misclassified);
            epochs_run = epoch + 1;

            if config.verbose && (epoch % 10 == 0 || epoch + 1 == config.epochs) {
                println!("[{}] misclassified: {}/{}", epoch, misclassified, points.len());
            }
            if config.stop_on_convergence && misclassified == 0 {
                stopped_early = epoch + 1 < config.epochs;
                break;
            }
        }

        let summary = TrainingSummary {
            epochs_run,
            stopped_early,
            error_history,
        };
        Ok((model, summary))
    }
}

fn uniform_dim(points: &[LabeledPoint]) -> Result<usize> {
    let first = points.first().ok_or(LinsepError::EmptyDataset)?;
    let dim = first.dim();
    for point in points {
        if point.dim() != dim {
            return Err(LinsepError::DimensionMismatch {
                expected: dim,
                actual: point.dim(),
            });
        }
    }
    Ok(dim)
}
