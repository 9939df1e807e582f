//! Lloyd's k-means for dense vectors.
//!
//! `centroid` partitions points into `k` groups by iteratively refining `k`
//! centroid positions, then classifies new points against the learned centroids.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Kmeans`]: the clustering engine (fit, predict, fitted-model queries)
//! - [`KmeansConfig`]: cluster count, iteration cap, tolerance, seed
//! - [`KmeansFit`]: centroids, labels, inertia and convergence diagnostics

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, Kmeans, KmeansConfig, KmeansFit, Scalar};
pub use error::{Error, ErrorKind, Result};
