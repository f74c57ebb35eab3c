//! Scalar activation functions for per-point diagnostics.
//!
//! These response curves are display-only: the perceptron itself classifies
//! with a hard threshold at zero (see [`crate::datasets::Label::from_activation`])
//! and nothing here feeds back into training. Hosts apply them to raw
//! activations to tabulate how each point sits relative to the boundary.

use serde::{Deserialize, Serialize};

/// Activation function types for diagnostic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    /// Logistic sigmoid `1 / (1 + e^-z)`, mapping into (0, 1).
    Sigmoid,
    /// Hyperbolic tangent, mapping into (-1, 1).
    Tanh,
    /// Rectified linear unit `max(0, z)`.
    Relu,
}

impl Activation {
    /// All variants, in display order.
    pub const ALL: [Activation; 3] = [Activation::Sigmoid, Activation::Tanh, Activation::Relu];

    /// Apply the activation to a single value.
    pub fn apply(&self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-z).exp()),
            Activation::Tanh => z.tanh(),
            Activation::Relu => z.max(0.0),
        }
    }

    /// Display name for table headers.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "Sigmoid",
            Activation::Tanh => "Tanh",
            Activation::Relu => "ReLU",
        }
    }
}
