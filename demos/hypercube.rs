//! Higher-dimensional training demo.
//!
//! Runs the same perceptron pipeline on 3-D clusters, first with the
//! split-uniform shape and then with Gaussian blobs around the class centers.

use linsep::datasets::{ClusterConfig, ClusterShape, generate_clusters_seeded};
use linsep::metrics::accuracy;
use linsep::perceptron::{Perceptron, TrainConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Hypercube Cluster Classification Example");
    println!("========================================");

    // Uniform cube halves: class 0 in [0, 0.5)^3, class 1 in [0.5, 1.0)^3
    let config = ClusterConfig {
        points_per_class: 150,
        dimensions: 3,
        shape: ClusterShape::SplitUniform,
    };
    let points = generate_clusters_seeded(&config, 7);
    println!("Generated {} points in {} dimensions", points.len(), config.dimensions);

    let train_config = TrainConfig::default().with_stop_on_convergence(true);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let (model, summary) = Perceptron::fit_with_history(&points, &train_config, &mut rng)?;
    println!(
        "Uniform clusters: {} epochs, stopped early: {}, accuracy {:.1}%",
        summary.epochs_run,
        summary.stopped_early,
        accuracy(&model, &points)?
    );
    println!("Weights: {:?}", model.weights());
    println!("Bias: {:.4}", model.bias());

    // Gaussian blobs around the two hypercube centers
    let gaussian_config = ClusterConfig {
        shape: ClusterShape::Gaussian { std_dev: 0.08 },
        ..config
    };
    let gaussian_points = generate_clusters_seeded(&gaussian_config, 7);
    let mut gaussian_rng = ChaCha8Rng::seed_from_u64(11);
    let (gaussian_model, gaussian_summary) =
        Perceptron::fit_with_history(&gaussian_points, &train_config, &mut gaussian_rng)?;
    println!(
        "\nGaussian clusters: {} epochs, stopped early: {}, accuracy {:.1}%",
        gaussian_summary.epochs_run,
        gaussian_summary.stopped_early,
        accuracy(&gaussian_model, &gaussian_points)?
    );

    println!("\nExample completed successfully!");
    Ok(())
}
