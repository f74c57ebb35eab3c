//! Plotting functionality for linsep.
//!
//! This module renders the library's standard views as PNG files:
//! - Labeled cluster scatter plots
//! - Cluster scatter with the fitted least-squares line
//! - Cluster scatter with a trained perceptron's decision boundary
//!
//! Requires the `plotting` feature to be enabled.

use std::ops::Range;

use plotters::prelude::*;

use crate::datasets::{Label, LabeledPoint};
use crate::error::{LinsepError, Result};
use crate::perceptron::Perceptron;
use crate::regression::RegressionLine;

/// Scatter color for class `Zero` points.
pub const CLASS_ZERO_COLOR: RGBColor = RGBColor(214, 39, 40);
/// Scatter color for class `One` points.
pub const CLASS_ONE_COLOR: RGBColor = RGBColor(31, 119, 180);
/// Line color for the fitted regression line.
pub const FIT_LINE_COLOR: RGBColor = RGBColor(255, 127, 14);
/// Line color for the perceptron decision boundary.
pub const BOUNDARY_COLOR: RGBColor = RGBColor(44, 160, 44);

/// Plot configuration options.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Width of the plot in pixels.
    pub width: u32,
    /// Height of the plot in pixels.
    pub height: u32,
    /// Title of the plot.
    pub title: Option<String>,
    /// X-axis label.
    pub x_label: Option<String>,
    /// Y-axis label.
    pub y_label: Option<String>,
    /// Font size for labels.
    pub font_size: u32,
    /// Radius of scatter points in pixels.
    pub point_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            x_label: None,
            y_label: None,
            font_size: 16,
            point_size: 3,
        }
    }
}

/// Padded axis ranges covering every point. Planar data only.
fn planar_ranges(points: &[LabeledPoint]) -> Result<(Range<f64>, Range<f64>)> {
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

    let x_min = points.iter().map(|p| p.features()[0]).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.features()[0]).fold(f64::NEG_INFINITY, f64::max);
    let y_min = points.iter().map(|p| p.features()[1]).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.features()[1]).fold(f64::NEG_INFINITY, f64::max);

    let x_pad = ((x_max - x_min) * 0.05).max(0.05);
    let y_pad = ((y_max - y_min) * 0.05).max(0.05);
    Ok(((x_min - x_pad)..(x_max + x_pad), (y_min - y_pad)..(y_max + y_pad)))
}

/// Plot labeled planar points as a scatter, one color per class.
///
/// # Arguments
/// * `points` - Labeled two-dimensional points to draw
/// * `path` - Output file path (PNG format)
/// * `config` - Plot configuration
pub fn plot_clusters(points: &[LabeledPoint], path: &str, config: &PlotConfig) -> Result<()> {
    let (x_range, y_range) = planar_ranges(points)?;
    let point_size = config.point_size as i32;

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "Labeled clusters".to_string());

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", config.font_size).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_deref().unwrap_or("x"))
        .y_desc(config.y_label.as_deref().unwrap_or("y"))
        .draw()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    chart
        .draw_series(points.iter().filter(|p| p.label() == Label::Zero).map(|p| {
            Circle::new(
                (p.features()[0], p.features()[1]),
                point_size,
                CLASS_ZERO_COLOR.filled(),
            )
        }))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("class 0")
        .legend(move |(x, y)| Circle::new((x + 10, y), point_size, CLASS_ZERO_COLOR.filled()));

    chart
        .draw_series(points.iter().filter(|p| p.label() == Label::One).map(|p| {
            Circle::new(
                (p.features()[0], p.features()[1]),
                point_size,
                CLASS_ONE_COLOR.filled(),
            )
        }))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("class 1")
        .legend(move |(x, y)| Circle::new((x + 10, y), point_size, CLASS_ONE_COLOR.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    root.present()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    Ok(())
}

/// Plot labeled planar points together with a fitted regression line.
///
/// # Arguments
/// * `points` - Labeled two-dimensional points to draw
/// * `line` - Fitted least-squares line, drawn across the x-range
/// * `path` - Output file path (PNG format)
/// * `config` - Plot configuration
pub fn plot_regression(
    points: &[LabeledPoint],
    line: &RegressionLine,
    path: &str,
    config: &PlotConfig,
) -> Result<()> {
    let (x_range, y_range) = planar_ranges(points)?;
    let point_size = config.point_size as i32;
    let endpoints = vec![
        (x_range.start, line.predict(x_range.start)),
        (x_range.end, line.predict(x_range.end)),
    ];

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "Linear regression fit".to_string());

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", config.font_size).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_deref().unwrap_or("x"))
        .y_desc(config.y_label.as_deref().unwrap_or("y"))
        .draw()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    chart
        .draw_series(points.iter().filter(|p| p.label() == Label::Zero).map(|p| {
            Circle::new(
                (p.features()[0], p.features()[1]),
                point_size,
                CLASS_ZERO_COLOR.filled(),
            )
        }))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("class 0")
        .legend(move |(x, y)| Circle::new((x + 10, y), point_size, CLASS_ZERO_COLOR.filled()));

    chart
        .draw_series(points.iter().filter(|p| p.label() == Label::One).map(|p| {
            Circle::new(
                (p.features()[0], p.features()[1]),
                point_size,
                CLASS_ONE_COLOR.filled(),
            )
        }))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("class 1")
        .legend(move |(x, y)| Circle::new((x + 10, y), point_size, CLASS_ONE_COLOR.filled()));

    chart
        .draw_series(LineSeries::new(endpoints, FIT_LINE_COLOR.stroke_width(2)))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("OLS fit")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], FIT_LINE_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    root.present()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    Ok(())
}

/// Plot labeled planar points together with a perceptron's decision boundary.
///
/// The boundary is the line where the activation is zero, `w0*x + w1*y + b = 0`,
/// drawn as `y = -(w0*x + b) / w1` across the x-range.
///
/// # Arguments
/// * `points` - Labeled two-dimensional points to draw
/// * `model` - Trained planar perceptron
/// * `path` - Output file path (PNG format)
/// * `config` - Plot configuration
pub fn plot_decision_boundary(
    points: &[LabeledPoint],
    model: &Perceptron,
    path: &str,
    config: &PlotConfig,
) -> Result<()> {
    if model.dim() != 2 {
        return Err(LinsepError::DimensionMismatch {
            expected: 2,
            actual: model.dim(),
        });
    }
    let weights = model.weights();
    let (w0, w1) = (weights[0], weights[1]);
    if w1 == 0.0 {
        return Err(LinsepError::DegenerateInput(
            "second weight is zero, the decision boundary is vertical".to_string(),
        ));
    }
    let bias = model.bias();

    let (x_range, y_range) = planar_ranges(points)?;
    let point_size = config.point_size as i32;
    let endpoints = vec![
        (x_range.start, -(w0 * x_range.start + bias) / w1),
        (x_range.end, -(w0 * x_range.end + bias) / w1),
    ];

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| "Perceptron decision boundary".to_string());

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", config.font_size).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_deref().unwrap_or("x"))
        .y_desc(config.y_label.as_deref().unwrap_or("y"))
        .draw()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    chart
        .draw_series(points.iter().filter(|p| p.label() == Label::Zero).map(|p| {
            Circle::new(
                (p.features()[0], p.features()[1]),
                point_size,
                CLASS_ZERO_COLOR.filled(),
            )
        }))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("class 0")
        .legend(move |(x, y)| Circle::new((x + 10, y), point_size, CLASS_ZERO_COLOR.filled()));

    chart
        .draw_series(points.iter().filter(|p| p.label() == Label::One).map(|p| {
            Circle::new(
                (p.features()[0], p.features()[1]),
                point_size,
                CLASS_ONE_COLOR.filled(),
            )
        }))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("class 1")
        .legend(move |(x, y)| Circle::new((x + 10, y), point_size, CLASS_ONE_COLOR.filled()));

    chart
        .draw_series(LineSeries::new(endpoints, BOUNDARY_COLOR.stroke_width(2)))
        .map_err(|e| LinsepError::Plotting(e.to_string()))?
        .label("decision boundary")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BOUNDARY_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    root.present()
        .map_err(|e| LinsepError::Plotting(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    fn sample_points() -> Vec<LabeledPoint> {
        vec![
            LabeledPoint::planar(0.1, 0.2, Label::Zero),
            LabeledPoint::planar(0.3, 0.1, Label::Zero),
            LabeledPoint::planar(0.7, 0.9, Label::One),
            LabeledPoint::planar(0.8, 0.6, Label::One),
        ]
    }

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.title.is_none());
        assert_eq!(config.point_size, 3);
    }

    #[test]
    fn test_plot_clusters() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clusters.png");

        let result =
            plot_clusters(&sample_points(), path.to_str().unwrap(), &PlotConfig::default());
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_plot_regression() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("regression.png");

        let line = RegressionLine {
            slope: 1.0,
            intercept: 0.0,
        };
        let result = plot_regression(
            &sample_points(),
            &line,
            path.to_str().unwrap(),
            &PlotConfig::default(),
        );
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_plot_decision_boundary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("boundary.png");

        let model = Perceptron::from_parts(array![1.0, 1.0], -1.0);
        let result = plot_decision_boundary(
            &sample_points(),
            &model,
            path.to_str().unwrap(),
            &PlotConfig::default(),
        );
        assert!(result.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_empty_points_rejected() {
        let result = plot_clusters(&[], "unused.png", &PlotConfig::default());
        assert!(matches!(result, Err(LinsepError::EmptyDataset)));
    }

    #[test]
    fn test_non_planar_points_rejected() {
        let points = vec![LabeledPoint::new(array![0.1, 0.2, 0.3], Label::Zero)];
        let result = plot_clusters(&points, "unused.png", &PlotConfig::default());
        assert!(matches!(
            result,
            Err(LinsepError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_vertical_boundary_rejected() {
        let model = Perceptron::from_parts(array![1.0, 0.0], -0.5);
        let result = plot_decision_boundary(
            &sample_points(),
            &model,
            "unused.png",
            &PlotConfig::default(),
        );
        assert!(matches!(result, Err(LinsepError::DegenerateInput(_))));
    }

    #[test]
    fn test_boundary_model_dimension_mismatch() {
        let model = Perceptron::from_parts(array![1.0, 1.0, 1.0], 0.0);
        let result = plot_decision_boundary(
            &sample_points(),
            &model,
            "unused.png",
            &PlotConfig::default(),
        );
        assert!(matches!(
            result,
            Err(LinsepError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }
}
