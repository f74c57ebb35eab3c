//! Closed-form ordinary least squares line fitting.
//!
//! Operates on 2D point sets, reading feature 0 as x and feature 1 as y;
//! labels are ignored. The slope is the ratio of the mean-centered
//! cross-moment to the x variance moment, `intercept = meanY - slope * meanX`.

use serde::{Deserialize, Serialize};

use crate::datasets::LabeledPoint;
use crate::error::{LinsepError, Result};

/// A fitted least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Y-intercept of the fitted line.
    pub intercept: f64,
}

impl RegressionLine {
    /// Predicted y for the given x.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line through a 2D point set.
///
/// # Arguments
/// * `points` - Non-empty slice of 2D points; labels are ignored
///
/// # Returns
/// The fitted [`RegressionLine`], or:
/// * [`LinsepError::EmptyDataset`] when `points` is empty
/// * [`LinsepError::DimensionMismatch`] when any point is not 2D
/// * [`LinsepError::DegenerateInput`] when the x-values have zero variance
///   (the slope is undefined; this includes the single-point case)
pub fn fit_line(points: &[LabeledPoint]) -> Result<RegressionLine> {
    if points.is_empty() {
        return Err(LinsepError::EmptyDataset);
    }
    for point in points {
        if point.dim() != 2 {
            return Err(LinsepError::DimensionMismatch {
                expected: 2,
                actual: point.dim(),
            });
        }
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.features()[0]).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.features()[1]).sum::<f64>() / n;

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    for point in points {
        let dx = point.features()[0] - mean_x;
        let dy = point.features()[1] - mean_y;
        ss_xy += dx * dy;
        ss_xx += dx * dx;
    }

    if ss_xx == 0.0 {
        return Err(LinsepError::DegenerateInput(
            "x-values have zero variance, slope is undefined".to_string(),
        ));
    }

    let slope = ss_xy / ss_xx;
    Ok(RegressionLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
