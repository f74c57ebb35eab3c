//! End-to-end planar walkthrough with linsep.
//!
//! Generates two labeled clusters, fits a least-squares line, trains a
//! perceptron, and renders each stage as a PNG in the working directory.

use linsep::activations::Activation;
use linsep::datasets::{ClusterConfig, generate_clusters_seeded};
use linsep::metrics::evaluate;
use linsep::perceptron::{Perceptron, TrainConfig};
use linsep::plotting::{PlotConfig, plot_clusters, plot_decision_boundary, plot_regression};
use linsep::regression::fit_line;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Planar Cluster Classification Example");
    println!("=====================================");

    // 200 planar points: class 0 in [0, 0.5)^2, class 1 in [0.5, 1.0)^2
    let config = ClusterConfig::default();
    let points = generate_clusters_seeded(&config, 42);
    println!(
        "Generated {} points ({} per class, {} dimensions)",
        points.len(),
        config.points_per_class,
        config.dimensions
    );

    let plot_config = PlotConfig::default();
    plot_clusters(&points, "points.png", &plot_config)?;
    println!("Cluster scatter written to points.png");

    // Closed-form least-squares fit through the whole cloud
    let line = fit_line(&points)?;
    println!("\nOLS fit: y = {:.4}x + {:.4}", line.slope, line.intercept);
    plot_regression(&points, &line, "regression.png", &plot_config)?;
    println!("Regression plot written to regression.png");

    // Online perceptron training with per-epoch progress output
    println!("\nTraining perceptron...");
    let train_config = TrainConfig::default().with_verbose(true);
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let (model, summary) = Perceptron::fit_with_history(&points, &train_config, &mut rng)?;
    println!(
        "Finished after {} epochs (stopped early: {})",
        summary.epochs_run, summary.stopped_early
    );
    println!("Weights: {:?}", model.weights());
    println!("Bias: {:.4}", model.bias());

    plot_decision_boundary(&points, &model, "boundary.png", &plot_config)?;
    println!("Decision boundary written to boundary.png");

    let eval = evaluate(&model, &points)?;
    println!("\nTraining-set accuracy: {:.1}%", eval.accuracy());

    // Raw activations pushed through each squashing function
    println!("\nActivation diagnostics for the first 3 points:");
    for point in points.iter().take(3) {
        let z = model.activation(point.features())?;
        print!("z = {:+.4}", z);
        for activation in Activation::ALL {
            print!("  {} = {:.4}", activation.name(), activation.apply(z));
        }
        println!();
    }

    println!("\nExample completed successfully!");
    Ok(())
}
