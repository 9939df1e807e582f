//! K-means on a small 2D dataset: fit, inspect the model, classify new points.
//!
//! Run with `RUST_LOG=debug` to see the fit log.

use centroid::{Kmeans, KmeansConfig};

fn main() -> centroid::Result<()> {
    pretty_env_logger::init();

    // 30 points in five loose groups; k=3 merges neighbouring groups.
    let data: Vec<Vec<f64>> = vec![
        // Near (1, 2)
        vec![1.0, 2.0],
        vec![1.1, 2.1],
        vec![0.9, 2.2],
        vec![1.2, 1.9],
        vec![1.0, 1.8],
        vec![1.3, 2.3],
        // Near (2, 2.5)
        vec![2.0, 2.5],
        vec![2.1, 2.6],
        vec![1.8, 2.7],
        vec![2.2, 2.4],
        vec![2.3, 2.3],
        vec![2.1, 2.8],
        // Near (5, 8)
        vec![5.0, 8.0],
        vec![5.1, 8.2],
        vec![4.9, 7.8],
        vec![5.2, 8.1],
        vec![5.0, 7.9],
        vec![5.3, 8.3],
        // Near (5.5, 8.5)
        vec![5.5, 8.5],
        vec![5.6, 8.6],
        vec![5.4, 8.4],
        vec![5.3, 8.2],
        vec![5.2, 8.0],
        vec![5.7, 8.7],
        // Near (9, 1)
        vec![9.0, 1.0],
        vec![9.1, 1.1],
        vec![9.2, 0.9],
        vec![8.9, 1.2],
        vec![9.3, 1.3],
        vec![9.0, 0.8],
    ];

    let mut kmeans = Kmeans::with_config(KmeansConfig::new(3).with_seed(7))?;
    println!("Fitting k-means with {} points...", data.len());
    kmeans.fit(&data)?;

    let labels = kmeans.labels()?;
    println!("\n=== Training results ===");
    println!("  clusters:   {}", kmeans.k());
    println!("  iterations: {} (converged: {})", kmeans.n_iter()?, kmeans.converged()?);
    println!("  inertia:    {:.4}", kmeans.inertia()?);

    println!("\n=== Training assignments ===");
    for (point, label) in data.iter().zip(labels) {
        println!("  [{:4.1}, {:4.1}] => cluster {}", point[0], point[1], label);
    }

    println!("\n=== Centroids ===");
    for (i, c) in kmeans.centroids()?.iter().enumerate() {
        println!("  cluster {} centroid: [{:6.3}, {:6.3}]", i, c[0], c[1]);
    }

    let test: Vec<Vec<f64>> = vec![
        vec![1.05, 2.0],
        vec![5.1, 8.0],
        vec![9.0, 1.0],
        vec![2.2, 2.6],
        vec![5.6, 8.6],
    ];
    let predicted = kmeans.predict(&test)?;
    println!("\n=== Predictions ===");
    for (point, label) in test.iter().zip(&predicted) {
        println!("  [{:4.2}, {:4.1}] => cluster {}", point[0], point[1], label);
    }

    Ok(())
}
