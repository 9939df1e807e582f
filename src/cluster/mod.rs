//! Clustering of dense vectors.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat until the centroids
//! stop moving.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! The engine is generic over the coordinate type (`f32` or `f64`, see
//! [`Scalar`]) and keeps the fitted model, so new points can be classified
//! with [`Kmeans::predict`] after training.
//!
//! ## Usage
//!
//! ```rust
//! use centroid::cluster::{Clustering, Kmeans, KmeansConfig};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let mut kmeans = Kmeans::with_config(KmeansConfig::new(2).with_seed(42)).unwrap();
//! let labels = kmeans.fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! let predicted = kmeans.predict(&[vec![9.9, 10.0]]).unwrap();
//! assert_eq!(predicted[0], labels[2]);
//! ```

mod init;
mod kmeans;
mod traits;
mod util;

pub use kmeans::{Kmeans, KmeansConfig, KmeansFit, DEFAULT_MAX_ITER, DEFAULT_TOL};
pub use traits::Clustering;
pub use util::Scalar;
