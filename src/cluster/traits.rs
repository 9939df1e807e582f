use super::util::Scalar;
use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering<T: Scalar> {
    /// Fit the model to `data` and return one cluster label per input point.
    fn fit_predict(&mut self, data: &[Vec<T>]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}
