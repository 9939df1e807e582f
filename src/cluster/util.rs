use crate::error::{Error, Result};
use num_traits::Float;
use std::fmt::Debug;

/// Floating-point coordinate type accepted by the clustering engine.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + Debug + Send + Sync + 'static {
    /// A point count as a coordinate value, rounded to the nearest representable one.
    fn from_count(n: usize) -> Self;

    /// An `f64` constant narrowed to this type.
    fn from_f64_lossy(x: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn from_count(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_count(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x
    }
}

#[inline]
pub(crate) fn squared_euclidean<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).fold(T::zero(), |acc, (&x, &y)| {
        let d = x - y;
        acc + d * d
    })
}

#[inline]
pub(crate) fn euclidean<T: Scalar>(a: &[T], b: &[T]) -> T {
    squared_euclidean(a, b).sqrt()
}

/// Index of the closest centroid.
///
/// Linear scan with a strict comparison, so ties resolve to the lowest index.
/// `centroids` must be non-empty.
pub(crate) fn nearest<T: Scalar>(point: &[T], centroids: &[Vec<T>]) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = T::infinity();

    for (c, centroid) in centroids.iter().enumerate() {
        let dist = euclidean(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = c;
        }
    }

    best_cluster
}

/// Check that `data` is non-empty, has at least one coordinate, and is not ragged.
///
/// Returns the shared dimensionality.
pub(crate) fn validate_dataset<T>(data: &[Vec<T>]) -> Result<usize> {
    let d = match data.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(Error::EmptyInput),
    };

    check_dims(data, d)?;
    Ok(d)
}

/// Reject the first point whose length is not `d`.
pub(crate) fn check_dims<T>(data: &[Vec<T>], d: usize) -> Result<()> {
    match data.iter().find(|p| p.len() != d) {
        Some(p) => Err(Error::DimensionMismatch {
            expected: d,
            found: p.len(),
        }),
        None => Ok(()),
    }
}
