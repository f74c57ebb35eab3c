//! # linsep
//!
//! Linearly separable toy data, closed-form least-squares fits, and
//! single-layer perceptron training.
//!
//! This crate generates labeled point clouds of any dimensionality, fits a
//! straight line to planar data, and trains a Rosenblatt perceptron with an
//! injectable random source so every run is reproducible.
//!
//! ## Features
//!
//! - `plotting` - Enable PNG rendering of clusters, regression fits, and
//!   decision boundaries (enabled by default)
//!
//! ## Example
//!
//! ```
//! use linsep::prelude::*;
//!
//! # fn main() -> linsep::error::Result<()> {
//! // Two seeded clusters, a straight-line fit, and a trained perceptron.
//! let points = generate_clusters_seeded(&ClusterConfig::default(), 42);
//!
//! let line = fit_line(&points)?;
//! let model = Perceptron::fit_seeded(&points, &TrainConfig::default(), 7)?;
//! let eval = evaluate(&model, &points)?;
//!
//! println!("fit: y = {:.3}x + {:.3}", line.slope, line.intercept);
//! println!("accuracy: {:.1}%", eval.accuracy());
//! # Ok(())
//! # }
//! ```

pub mod activations;
pub mod datasets;
pub mod error;
pub mod metrics;
pub mod perceptron;
#[cfg(feature = "plotting")]
pub mod plotting;
pub mod regression;

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::activations::Activation;
    pub use crate::datasets::{
        ClusterConfig, ClusterShape, Label, LabeledPoint, generate_clusters,
        generate_clusters_seeded,
    };
    pub use crate::error::{LinsepError, Result};
    pub use crate::metrics::{Evaluation, accuracy, evaluate};
    pub use crate::perceptron::{Perceptron, TrainConfig, TrainingSummary};
    pub use crate::regression::{RegressionLine, fit_line};

    #[cfg(feature = "plotting")]
    pub use crate::plotting::{PlotConfig, plot_clusters, plot_decision_boundary, plot_regression};
}
