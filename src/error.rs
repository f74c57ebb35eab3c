//! Error types for linsep.

use thiserror::Error;

/// Result type alias for linsep operations.
pub type Result<T> = std::result::Result<T, LinsepError>;

/// Errors that can occur in linsep operations.
#[derive(Error, Debug)]
pub enum LinsepError {
    /// Training or evaluation was invoked with no points.
    #[error("Dataset is empty")]
    EmptyDataset,
    /// Feature-vector length differs from the expected dimensionality.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// Input admits no defined result (for example zero-variance x-values).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
    /// Invalid parameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// An error occurred during plotting.
    #[error("Plotting error: {0}")]
    Plotting(String),
}
