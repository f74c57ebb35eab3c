//! Integration tests for linsep.

use linsep::prelude::*;
use ndarray::array;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_planar_pipeline() {
    let config = ClusterConfig::default();
    let points = generate_clusters_seeded(&config, 42);
    assert_eq!(points.len(), 200);

    let line = fit_line(&points).unwrap();
    assert!(line.slope.is_finite());
    assert!(line.intercept.is_finite());

    let model = Perceptron::fit_seeded(&points, &TrainConfig::default(), 7).unwrap();
    assert_eq!(model.dim(), 2);

    let eval = evaluate(&model, &points).unwrap();
    assert_eq!(eval.total, 200);
    assert!(
        eval.accuracy() >= 95.0,
        "expected separable clusters to train cleanly, got {:.1}%",
        eval.accuracy()
    );
}

#[test]
fn test_hypercube_pipeline() {
    let config = ClusterConfig {
        points_per_class: 150,
        dimensions: 3,
        shape: ClusterShape::SplitUniform,
    };
    let points = generate_clusters_seeded(&config, 9);

    let model = Perceptron::fit_seeded(&points, &TrainConfig::default(), 11).unwrap();
    assert_eq!(model.dim(), 3);
    assert!(accuracy(&model, &points).unwrap() >= 95.0);
}

// =============================================================================
// Cluster Generation Tests
// =============================================================================

mod generator_tests {
    use super::*;

    #[test]
    fn test_class_blocks_and_counts() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 1);
        assert_eq!(points.len(), 200);
        assert!(points[..100].iter().all(|p| p.label() == Label::Zero));
        assert!(points[100..].iter().all(|p| p.label() == Label::One));
    }

    #[test]
    fn test_split_uniform_bounds() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 2);
        for point in &points {
            for &coord in point.features() {
                match point.label() {
                    Label::Zero => assert!((0.0..0.5).contains(&coord)),
                    Label::One => assert!((0.5..1.0).contains(&coord)),
                }
            }
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        let config = ClusterConfig::default();
        let first = generate_clusters_seeded(&config, 42);
        let second = generate_clusters_seeded(&config, 42);
        let other = generate_clusters_seeded(&config, 43);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_with_shared_rng() {
        let config = ClusterConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let first = generate_clusters(&config, &mut rng);
        let second = generate_clusters(&config, &mut rng);

        // The rng advances across calls, so the batches differ.
        assert_ne!(first, second);
    }

    #[test]
    fn test_dimensions_respected() {
        let config = ClusterConfig {
            points_per_class: 10,
            dimensions: 5,
            shape: ClusterShape::SplitUniform,
        };
        let points = generate_clusters_seeded(&config, 3);

        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.dim() == 5));
    }

    #[test]
    fn test_gaussian_blob_centers() {
        let config = ClusterConfig {
            points_per_class: 200,
            dimensions: 2,
            shape: ClusterShape::Gaussian { std_dev: 0.05 },
        };
        let points = generate_clusters_seeded(&config, 4);

        let mean_of = |label: Label| {
            let coords: Vec<f64> = points
                .iter()
                .filter(|p| p.label() == label)
                .flat_map(|p| p.features().to_vec())
                .collect();
            coords.iter().sum::<f64>() / coords.len() as f64
        };

        assert!((mean_of(Label::Zero) - 0.25).abs() < 0.02);
        assert!((mean_of(Label::One) - 0.75).abs() < 0.02);
    }
}

// =============================================================================
// Perceptron Training Tests
// =============================================================================

mod training_tests {
    use super::*;

    fn wide_margin_points() -> Vec<LabeledPoint> {
        vec![
            LabeledPoint::planar(0.1, 0.1, Label::Zero),
            LabeledPoint::planar(0.15, 0.2, Label::Zero),
            LabeledPoint::planar(0.85, 0.9, Label::One),
            LabeledPoint::planar(0.9, 0.8, Label::One),
        ]
    }

    #[test]
    fn test_training_is_reproducible() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 6);
        let config = TrainConfig::default();

        let mut rng_a = ChaCha8Rng::seed_from_u64(99);
        let mut rng_b = ChaCha8Rng::seed_from_u64(99);
        let (model_a, summary_a) =
            Perceptron::fit_with_history(&points, &config, &mut rng_a).unwrap();
        let (model_b, summary_b) =
            Perceptron::fit_with_history(&points, &config, &mut rng_b).unwrap();

        assert_eq!(model_a, model_b);
        assert_eq!(summary_a, summary_b);
    }

    #[test]
    fn test_full_budget_by_default() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let (_, summary) =
            Perceptron::fit_with_history(&wide_margin_points(), &TrainConfig::default(), &mut rng)
                .unwrap();

        assert_eq!(summary.epochs_run, 100);
        assert!(!summary.stopped_early);
        assert_eq!(summary.error_history.len(), 100);
        assert!(summary.converged());
    }

    #[test]
    fn test_stop_on_convergence() {
        let points = wide_margin_points();
        let config = TrainConfig::default().with_stop_on_convergence(true);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (model, summary) = Perceptron::fit_with_history(&points, &config, &mut rng).unwrap();

        assert!(summary.stopped_early);
        assert!(summary.epochs_run < 100);
        assert_eq!(summary.final_errors(), 0);
        assert_eq!(accuracy(&model, &points).unwrap(), 100.0);
    }

    #[test]
    fn test_one_dimensional_training() {
        let points = vec![
            LabeledPoint::new(array![0.1], Label::Zero),
            LabeledPoint::new(array![0.2], Label::Zero),
            LabeledPoint::new(array![0.8], Label::One),
            LabeledPoint::new(array![0.9], Label::One),
        ];
        let config = TrainConfig::default().with_stop_on_convergence(true);
        let model = Perceptron::fit_seeded(&points, &config, 3).unwrap();

        assert_eq!(model.dim(), 1);
        assert_eq!(accuracy(&model, &points).unwrap(), 100.0);
    }

    #[test]
    fn test_error_history_tracks_epochs() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 8);
        let config = TrainConfig::default().with_epochs(7);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let (_, summary) = Perceptron::fit_with_history(&points, &config, &mut rng).unwrap();

        assert_eq!(summary.epochs_run, 7);
        assert_eq!(summary.error_history.len(), 7);
    }
}

// =============================================================================
// Least-Squares Regression Tests
// =============================================================================

mod regression_tests {
    use super::*;

    #[test]
    fn test_known_line_recovery() {
        let points: Vec<LabeledPoint> = (0..5)
            .map(|i| {
                let x = i as f64;
                LabeledPoint::planar(x, 2.0 * x + 3.0, Label::Zero)
            })
            .collect();

        let line = fit_line(&points).unwrap();
        assert!((line.slope - 2.0).abs() < 1e-10);
        assert!((line.intercept - 3.0).abs() < 1e-10);
        assert!((line.predict(10.0) - 23.0).abs() < 1e-10);
    }

    #[test]
    fn test_cluster_fit_slope_is_positive() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 10);
        let line = fit_line(&points).unwrap();

        // Class 1 sits above and to the right of class 0, so the fitted
        // line tracks that diagonal trend.
        assert!(line.slope > 0.4 && line.slope < 1.1);
    }

    #[test]
    fn test_vertical_data_is_degenerate() {
        let points = vec![
            LabeledPoint::planar(5.0, 1.0, Label::Zero),
            LabeledPoint::planar(5.0, 2.0, Label::Zero),
            LabeledPoint::planar(5.0, 3.0, Label::One),
        ];
        assert!(matches!(fit_line(&points), Err(LinsepError::DegenerateInput(_))));
    }
}

// =============================================================================
// Evaluation Tests
// =============================================================================

mod evaluation_tests {
    use super::*;

    #[test]
    fn test_hand_built_model_scores_perfectly() {
        let model = Perceptron::from_parts(array![1.0, 1.0], 0.0);
        let points = vec![LabeledPoint::planar(1.0, 1.0, Label::One)];

        let eval = evaluate(&model, &points).unwrap();
        assert_eq!(eval.correct, 1);
        assert_eq!(eval.accuracy(), 100.0);
    }

    #[test]
    fn test_counts_partition_the_dataset() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 12);
        let model = Perceptron::fit_seeded(&points, &TrainConfig::default(), 13).unwrap();

        let eval = evaluate(&model, &points).unwrap();
        assert_eq!(eval.total, points.len());
        assert_eq!(eval.correct, eval.true_positives + eval.true_negatives);
        assert_eq!(
            eval.total,
            eval.true_positives + eval.true_negatives + eval.false_positives + eval.false_negatives
        );
    }

    #[test]
    fn test_repeated_evaluation_matches() {
        let points = generate_clusters_seeded(&ClusterConfig::default(), 14);
        let model = Perceptron::fit_seeded(&points, &TrainConfig::default(), 15).unwrap();

        let first = evaluate(&model, &points).unwrap();
        let second = evaluate(&model, &points).unwrap();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Error Handling Tests
// =============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_empty_dataset_everywhere() {
        let model = Perceptron::from_parts(array![1.0, 1.0], 0.0);
        let config = TrainConfig::default();

        assert!(matches!(fit_line(&[]), Err(LinsepError::EmptyDataset)));
        assert!(matches!(
            Perceptron::fit_seeded(&[], &config, 0),
            Err(LinsepError::EmptyDataset)
        ));
        assert!(matches!(evaluate(&model, &[]), Err(LinsepError::EmptyDataset)));
    }

    #[test]
    fn test_mixed_dimensions_rejected() {
        let points = vec![
            LabeledPoint::planar(0.1, 0.2, Label::Zero),
            LabeledPoint::new(array![0.5, 0.5, 0.5], Label::One),
        ];
        assert!(matches!(
            Perceptron::fit_seeded(&points, &TrainConfig::default(), 0),
            Err(LinsepError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_evaluation_dimension_mismatch() {
        let model = Perceptron::from_parts(array![1.0, 1.0], 0.0);
        let points = vec![LabeledPoint::new(array![1.0, 2.0, 3.0], Label::One)];

        assert!(matches!(
            evaluate(&model, &points),
            Err(LinsepError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_regression_needs_planar_points() {
        let points = vec![
            LabeledPoint::new(array![0.1, 0.2, 0.3], Label::Zero),
            LabeledPoint::new(array![0.4, 0.5, 0.6], Label::One),
        ];
        assert!(matches!(
            fit_line(&points),
            Err(LinsepError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_invalid_train_config() {
        let points = vec![LabeledPoint::planar(0.1, 0.2, Label::Zero)];

        let zero_epochs = TrainConfig::default().with_epochs(0);
        assert!(matches!(
            Perceptron::fit_seeded(&points, &zero_epochs, 0),
            Err(LinsepError::InvalidParameter(_))
        ));

        let bad_rate = TrainConfig::default().with_learning_rate(-0.5);
        assert!(matches!(
            Perceptron::fit_seeded(&points, &bad_rate, 0),
            Err(LinsepError::InvalidParameter(_))
        ));
    }
}

// =============================================================================
// Plotting Tests
// =============================================================================

#[cfg(feature = "plotting")]
mod plotting_tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_all_stages() {
        let dir = tempdir().unwrap();
        let points = generate_clusters_seeded(&ClusterConfig::default(), 21);
        let plot_config = PlotConfig::default();

        let clusters = dir.path().join("clusters.png");
        plot_clusters(&points, clusters.to_str().unwrap(), &plot_config).unwrap();
        assert!(clusters.exists());

        let line = fit_line(&points).unwrap();
        let regression = dir.path().join("regression.png");
        plot_regression(&points, &line, regression.to_str().unwrap(), &plot_config).unwrap();
        assert!(regression.exists());

        let model = Perceptron::fit_seeded(&points, &TrainConfig::default(), 22).unwrap();
        let boundary = dir.path().join("boundary.png");
        plot_decision_boundary(&points, &model, boundary.to_str().unwrap(), &plot_config).unwrap();
        assert!(boundary.exists());
    }

    #[test]
    fn test_plotting_rejects_higher_dimensions() {
        let config = ClusterConfig {
            points_per_class: 5,
            dimensions: 3,
            shape: ClusterShape::SplitUniform,
        };
        let points = generate_clusters_seeded(&config, 23);

        assert!(matches!(
            plot_clusters(&points, "unused.png", &PlotConfig::default()),
            Err(LinsepError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }
}
