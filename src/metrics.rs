//! Model evaluation against labeled data.
//!
//! Evaluation applies the same activation/threshold rule as training and
//! counts agreement with the ground-truth labels. It reads the model through
//! a shared reference and mutates nothing, so repeated calls on the same
//! inputs return identical results.

use serde::{Deserialize, Serialize};

use crate::datasets::{Label, LabeledPoint};
use crate::error::{LinsepError, Result};
use crate::perceptron::Perceptron;

/// Classification counts from a single evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Points classified correctly.
    pub correct: usize,
    /// Total points evaluated.
    pub total: usize,
    /// Class `One` points predicted `One`.
    pub true_positives: usize,
    /// Class `Zero` points predicted `Zero`.
    pub true_negatives: usize,
    /// Class `Zero` points predicted `One`.
    pub false_positives: usize,
    /// Class `One` points predicted `Zero`.
    pub false_negatives: usize,
}

impl Evaluation {
    /// Fraction of correct predictions, as a percentage.
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / self.total as f64 * 100.0
    }

    /// Fraction of incorrect predictions, as a percentage.
    pub fn error_rate(&self) -> f64 {
        100.0 - self.accuracy()
    }

    /// Of the points predicted `One`, the fraction actually labeled `One`.
    pub fn precision(&self) -> f64 {
        self.true_positives as f64 / (self.true_positives + self.false_positives) as f64
    }

    /// Of the points labeled `One`, the fraction predicted `One`.
    pub fn recall(&self) -> f64 {
        self.true_positives as f64 / (self.true_positives + self.false_negatives) as f64
    }
}

/// Evaluate a trained perceptron against labeled points.
///
/// # Arguments
/// * `model` - Trained weights and bias, read-only
/// * `points` - Non-empty slice of points matching the model dimensionality
///
/// # Returns
/// The per-class [`Evaluation`] counts, or:
/// * [`LinsepError::EmptyDataset`] when `points` is empty
/// * [`LinsepError::DimensionMismatch`] when any point's feature-vector
///   length differs from the weight vector length
pub fn evaluate(model: &Perceptron, points: &[LabeledPoint]) -> Result<Evaluation> {
    if points.is_empty() {
        return Err(LinsepError::EmptyDataset);
    }

    let mut eval = Evaluation {
        correct: 0,
        total: points.len(),
        true_positives: 0,
        true_negatives: 0,
        false_positives: 0,
        false_negatives: 0,
    };
    for point in points {
        let predicted = model.predict(point.features())?;
        match (point.label(), predicted) {
            (Label::One, Label::One) => {
                eval.correct += 1;
                eval.true_positives += 1;
            }
            (Label::Zero, Label::Zero) => {
                eval.correct += 1;
                eval.true_negatives += 1;
            }
            (Label::Zero, Label::One) => eval.false_positives += 1,
            (Label::One, Label::Zero) => eval.false_negatives += 1,
        }
    }
    Ok(eval)
}

/// Classification accuracy percentage, `correct / total * 100`.
pub fn accuracy(model: &Perceptron, points: &[LabeledPoint]) -> Result<f64> {
    evaluate(model, points).map(|eval| eval.accuracy())
}
