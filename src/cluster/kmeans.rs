//! K-means clustering.
//!
//! Partitions data into k clusters by minimizing **within-cluster sum of squares**
//! (WCSS, also called inertia).
//!
//! # The Objective
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. Seed k centroids with k distinct training points, chosen uniformly
//! 2. **Assign**: each point → nearest centroid (ties → lowest index)
//! 3. **Update**: each centroid → mean of its assigned points
//! 4. Stop once no centroid moves more than `tol`, or after `max_iter` rounds
//!
//! WCSS never increases across rounds: assignment can only shorten each
//! point's distance to its centroid, and the mean minimizes the squared
//! distance to a fixed set of points. The per-round values are kept in
//! [`KmeansFit::inertia_history`].
//!
//! # Empty Clusters
//!
//! A centroid that attracts no points in a round stays where it was. It is
//! neither reseeded nor dropped, so the model always has exactly k centroids
//! and never produces NaN coordinates.
//!
//! # Failure Modes
//!
//! - **Local optima**: Lloyd finds a local minimum only; results depend on seeding
//! - **Non-spherical clusters**: assumes roughly spherical, similar-sized clusters
//! - **Wrong k**: k must be chosen by the caller

use super::init::sample_distinct_indices;
use super::traits::Clustering;
use super::util::{self, Scalar};
use crate::error::{Error, Result};
use log::{debug, trace};
use rand::prelude::*;

/// Default iteration cap.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Default convergence tolerance on centroid movement.
pub const DEFAULT_TOL: f64 = 1e-4;

/// K-means configuration.
///
/// Built with [`KmeansConfig::new`] and the `with_*` methods, and validated
/// when handed to [`Kmeans::with_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansConfig<T = f64> {
    /// Number of clusters.
    pub k: usize,
    /// Maximum number of assign/update rounds.
    pub max_iter: usize,
    /// Stop once every centroid moves by at most this (Euclidean) distance.
    pub tol: T,
    /// Seed for centroid initialization. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl<T: Scalar> KmeansConfig<T> {
    /// Configuration for `k` clusters with default iteration cap and tolerance.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: DEFAULT_MAX_ITER,
            tol: T::from_f64_lossy(DEFAULT_TOL),
            seed: None,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: T) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if self.tol.is_nan() || self.tol < T::zero() {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be non-negative",
            });
        }
        Ok(())
    }
}

/// Result of a successful fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit<T = f64> {
    data: Vec<Vec<T>>,
    centroids: Vec<Vec<T>>,
    labels: Vec<usize>,
    inertia: T,
    n_iter: usize,
    converged: bool,
    inertia_history: Vec<T>,
}

impl<T: Scalar> KmeansFit<T> {
    /// Copy of the training set the model was fitted on.
    pub fn data(&self) -> &[Vec<T>] {
        &self.data
    }

    /// Final centroids, indexed by cluster id.
    pub fn centroids(&self) -> &[Vec<T>] {
        &self.centroids
    }

    /// Cluster id of each training point.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Sum of squared distances from each training point to its centroid.
    pub fn inertia(&self) -> T {
        self.inertia
    }

    /// Number of assign/update rounds that ran.
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the loop stopped because centroids settled (as opposed to hitting `max_iter`).
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Inertia measured after each update step, one entry per round.
    pub fn inertia_history(&self) -> &[T] {
        &self.inertia_history
    }

    /// Dimensionality of the training points.
    pub fn dim(&self) -> usize {
        self.centroids.first().map_or(0, Vec::len)
    }
}

/// K-means clustering engine.
///
/// Holds its configuration from construction onwards, and the most recent
/// successful [`KmeansFit`] once [`fit`](Kmeans::fit) has been called.
#[derive(Debug, Clone)]
pub struct Kmeans<T = f64> {
    config: KmeansConfig<T>,
    fit: Option<KmeansFit<T>>,
}

impl<T: Scalar> Kmeans<T> {
    /// Create an engine for `k` clusters with default settings.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `k == 0`.
    pub fn new(k: usize) -> Result<Self> {
        Self::with_config(KmeansConfig::new(k))
    }

    /// Create an engine from a full configuration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `k` or `max_iter` is zero, or `tol` is
    /// negative or NaN.
    pub fn with_config(config: KmeansConfig<T>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, fit: None })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &KmeansConfig<T> {
        &self.config
    }

    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Maximum number of iterations.
    pub fn max_iter(&self) -> usize {
        self.config.max_iter
    }

    /// Convergence tolerance.
    pub fn tol(&self) -> T {
        self.config.tol
    }

    /// Fit on `data`, seeding from the configured seed (or OS entropy).
    ///
    /// Replaces any previous fit. On error the engine is left untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if `data` or its first point is empty.
    /// - [`Error::DimensionMismatch`] if points differ in length.
    /// - [`Error::InvalidClusterCount`] if `k` exceeds the number of points.
    pub fn fit(&mut self, data: &[Vec<T>]) -> Result<()> {
        match self.config.seed {
            Some(seed) => self.fit_with_rng(data, &mut StdRng::seed_from_u64(seed)),
            None => self.fit_with_rng(data, &mut rand::rng()),
        }
    }

    /// Fit on `data`, drawing the initial centroids from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`fit`](Kmeans::fit).
    pub fn fit_with_rng<R: Rng + ?Sized>(&mut self, data: &[Vec<T>], rng: &mut R) -> Result<()> {
        self.check_training_set(data)?;

        let centroids: Vec<Vec<T>> = sample_distinct_indices(rng, data.len(), self.config.k)
            .into_iter()
            .map(|i| data[i].clone())
            .collect();

        self.fit = Some(self.lloyd(data, centroids));
        Ok(())
    }

    /// Fit on `data` starting from caller-chosen centroids instead of random seeding.
    ///
    /// # Errors
    ///
    /// Same as [`fit`](Kmeans::fit), plus [`Error::InvalidParameter`] if
    /// `initial` does not hold exactly `k` points and
    /// [`Error::DimensionMismatch`] if they do not match the data's dimensionality.
    pub fn fit_from_centroids(&mut self, data: &[Vec<T>], initial: Vec<Vec<T>>) -> Result<()> {
        let d = self.check_training_set(data)?;
        if initial.len() != self.config.k {
            return Err(Error::InvalidParameter {
                name: "initial",
                message: "must contain exactly k centroids",
            });
        }
        util::check_dims(&initial, d)?;

        self.fit = Some(self.lloyd(data, initial));
        Ok(())
    }

    /// Nearest-centroid label for each point in `data`.
    ///
    /// Read-only; repeated calls with the same input give the same output.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFitted`] before a successful fit.
    /// - [`Error::DimensionMismatch`] if a point's length differs from the training data's.
    pub fn predict(&self, data: &[Vec<T>]) -> Result<Vec<usize>> {
        let fit = self.fitted_or_err()?;
        util::check_dims(data, fit.dim())?;

        Ok(data
            .iter()
            .map(|point| util::nearest(point, &fit.centroids))
            .collect())
    }

    /// The most recent successful fit, if any.
    pub fn fitted(&self) -> Option<&KmeansFit<T>> {
        self.fit.as_ref()
    }

    /// Whether a fit has succeeded.
    pub fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }

    /// Final centroids.
    pub fn centroids(&self) -> Result<&[Vec<T>]> {
        Ok(self.fitted_or_err()?.centroids())
    }

    /// Training labels.
    pub fn labels(&self) -> Result<&[usize]> {
        Ok(self.fitted_or_err()?.labels())
    }

    /// Within-cluster sum of squares of the training set.
    pub fn inertia(&self) -> Result<T> {
        Ok(self.fitted_or_err()?.inertia())
    }

    /// Rounds run by the last fit.
    pub fn n_iter(&self) -> Result<usize> {
        Ok(self.fitted_or_err()?.n_iter())
    }

    /// Whether the last fit converged within `max_iter`.
    pub fn converged(&self) -> Result<bool> {
        Ok(self.fitted_or_err()?.converged())
    }

    /// Per-round inertia of the last fit.
    pub fn inertia_history(&self) -> Result<&[T]> {
        Ok(self.fitted_or_err()?.inertia_history())
    }

    fn fitted_or_err(&self) -> Result<&KmeansFit<T>> {
        self.fit.as_ref().ok_or(Error::NotFitted)
    }

    fn check_training_set(&self, data: &[Vec<T>]) -> Result<usize> {
        let d = util::validate_dataset(data)?;
        if self.config.k > data.len() {
            return Err(Error::InvalidClusterCount {
                requested: self.config.k,
                n_items: data.len(),
            });
        }
        Ok(d)
    }

    /// Assign/update rounds from `centroids` until they settle or `max_iter` runs out.
    ///
    /// Inputs are already validated: `data` is non-empty and rectangular and
    /// `centroids` holds `k` points of the same dimensionality.
    fn lloyd(&self, data: &[Vec<T>], mut centroids: Vec<Vec<T>>) -> KmeansFit<T> {
        let n = data.len();
        let k = self.config.k;
        let d = data[0].len();
        debug!("kmeans fit: n={n} d={d} k={k} max_iter={}", self.config.max_iter);

        let mut labels = vec![0usize; n];
        let mut inertia_history = Vec::new();
        let mut n_iter = 0;
        let mut converged = false;

        while n_iter < self.config.max_iter {
            n_iter += 1;

            // Assignment step
            for (label, point) in labels.iter_mut().zip(data) {
                *label = util::nearest(point, &centroids);
            }

            // Update step
            let mut sums = vec![vec![T::zero(); d]; k];
            let mut counts = vec![0usize; k];
            for (point, &c) in data.iter().zip(&labels) {
                for (s, &x) in sums[c].iter_mut().zip(point) {
                    *s = *s + x;
                }
                counts[c] += 1;
            }

            let mut settled = true;
            let mut max_shift = T::zero();
            for (c, sum) in sums.into_iter().enumerate() {
                if counts[c] == 0 {
                    trace!("kmeans round {n_iter}: cluster {c} is empty, keeping centroid");
                    continue;
                }
                let count = T::from_count(counts[c]);
                let mean: Vec<T> = sum.into_iter().map(|s| s / count).collect();

                let shift = util::euclidean(&centroids[c], &mean);
                if shift.is_nan() || shift > self.config.tol {
                    settled = false;
                }
                max_shift = max_shift.max(shift);
                centroids[c] = mean;
            }

            let round_inertia = wcss(data, &centroids, &labels);
            trace!("kmeans round {n_iter}: max_shift={max_shift:?} inertia={round_inertia:?}");
            inertia_history.push(round_inertia);

            if settled {
                converged = true;
                break;
            }
        }

        let inertia = wcss(data, &centroids, &labels);
        debug!("kmeans done: n_iter={n_iter} converged={converged} inertia={inertia:?}");

        KmeansFit {
            data: data.to_vec(),
            centroids,
            labels,
            inertia,
            n_iter,
            converged,
            inertia_history,
        }
    }
}

fn wcss<T: Scalar>(data: &[Vec<T>], centroids: &[Vec<T>], labels: &[usize]) -> T {
    data.iter()
        .zip(labels)
        .fold(T::zero(), |acc, (point, &c)| {
            let dist = util::euclidean(point, &centroids[c]);
            acc + dist * dist
        })
}

impl<T: Scalar> Clustering<T> for Kmeans<T> {
    fn fit_predict(&mut self, data: &[Vec<T>]) -> Result<Vec<usize>> {
        self.fit(data)?;
        Ok(self.labels()?.to_vec())
    }

    fn n_clusters(&self) -> usize {
        self.config.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rand::rngs::StdRng;

    fn two_blobs() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ]
    }

    #[test]
    fn test_kmeans_basic() {
        let mut kmeans = Kmeans::with_config(KmeansConfig::new(2).with_seed(42)).unwrap();
        let labels = kmeans.fit_predict(&two_blobs()).unwrap();

        // Points 0,1 should be in same cluster, points 2,3 in another
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
        assert!(kmeans.converged().unwrap());
    }

    #[test]
    fn test_kmeans_f32() {
        let data: Vec<Vec<f32>> = vec![vec![0.0], vec![0.2], vec![5.0], vec![5.2]];
        let mut kmeans = Kmeans::<f32>::with_config(KmeansConfig::new(2).with_seed(1)).unwrap();
        kmeans.fit(&data).unwrap();

        let mut centroids: Vec<f32> = kmeans.centroids().unwrap().iter().map(|c| c[0]).collect();
        centroids.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((centroids[0] - 0.1).abs() < 1e-6);
        assert!((centroids[1] - 5.1).abs() < 1e-6);
    }

    #[test]
    fn test_defaults() {
        let kmeans = Kmeans::<f64>::new(3).unwrap();
        assert_eq!(kmeans.k(), 3);
        assert_eq!(kmeans.max_iter(), DEFAULT_MAX_ITER);
        assert_eq!(kmeans.tol(), 1e-4);
        assert!(!kmeans.is_fitted());
        assert_eq!(kmeans.n_clusters(), 3);
    }

    #[test]
    fn test_invalid_config() {
        let err = Kmeans::<f64>::new(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let err = Kmeans::with_config(KmeansConfig::<f64>::new(2).with_max_iter(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let err = Kmeans::with_config(KmeansConfig::new(2).with_tol(-1.0f64)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let err = Kmeans::with_config(KmeansConfig::new(2).with_tol(f64::NAN)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        // Zero tolerance is allowed.
        assert!(Kmeans::with_config(KmeansConfig::new(2).with_tol(0.0f64)).is_ok());
    }

    #[test]
    fn test_not_fitted() {
        let kmeans = Kmeans::<f64>::new(2).unwrap();
        assert_eq!(kmeans.predict(&two_blobs()), Err(Error::NotFitted));
        assert_eq!(kmeans.centroids().unwrap_err(), Error::NotFitted);
        assert_eq!(kmeans.labels().unwrap_err(), Error::NotFitted);
        assert_eq!(kmeans.inertia().unwrap_err(), Error::NotFitted);
        assert_eq!(kmeans.n_iter().unwrap_err(), Error::NotFitted);
        assert!(kmeans.fitted().is_none());
    }

    #[test]
    fn test_failed_fit_keeps_previous_state() {
        let mut kmeans = Kmeans::with_config(KmeansConfig::new(2).with_seed(3)).unwrap();
        kmeans.fit(&two_blobs()).unwrap();
        let before = kmeans.fitted().cloned();

        let too_small = vec![vec![1.0, 1.0]];
        let err = kmeans.fit(&too_small).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidClusterCount {
                requested: 2,
                n_items: 1
            }
        );
        assert_eq!(kmeans.fitted().cloned(), before);

        let ragged = vec![vec![1.0, 1.0], vec![2.0]];
        assert!(kmeans.fit(&ragged).is_err());
        assert_eq!(kmeans.fitted().cloned(), before);

        // A failed first fit leaves the engine unfitted.
        let mut fresh = Kmeans::<f64>::new(2).unwrap();
        assert_eq!(fresh.fit(&[]), Err(Error::EmptyInput));
        assert!(!fresh.is_fitted());
    }

    #[test]
    fn test_empty_cluster_keeps_centroid() {
        // Centroid 1 sits far away and never wins a point.
        let data = vec![vec![0.0f64, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]];
        let initial = vec![vec![0.0, 0.0], vec![100.0, 100.0]];

        let mut kmeans = Kmeans::<f64>::new(2).unwrap();
        kmeans.fit_from_centroids(&data, initial).unwrap();

        let centroids = kmeans.centroids().unwrap();
        assert_eq!(centroids[1], vec![100.0, 100.0]);
        assert!((centroids[0][0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((centroids[0][1] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(kmeans.labels().unwrap(), &[0, 0, 0]);
        assert!(centroids.iter().flatten().all(|x| x.is_finite()));
    }

    #[test]
    fn test_fit_from_centroids_validation() {
        let mut kmeans = Kmeans::new(2).unwrap();
        let data = two_blobs();

        let err = kmeans
            .fit_from_centroids(&data, vec![vec![0.0, 0.0]])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let err = kmeans
            .fit_from_centroids(&data, vec![vec![0.0, 0.0], vec![1.0]])
            .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
        assert!(!kmeans.is_fitted());
    }

    #[test]
    fn test_max_iter_caps_rounds() {
        // Points on a line, seeded badly; one round can't settle.
        let data: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
        let config = KmeansConfig::new(2).with_max_iter(1).with_tol(0.0);
        let mut kmeans = Kmeans::with_config(config).unwrap();
        kmeans
            .fit_from_centroids(&data, vec![vec![0.0], vec![1.0]])
            .unwrap();

        assert_eq!(kmeans.n_iter().unwrap(), 1);
        assert!(!kmeans.converged().unwrap());
        assert_eq!(kmeans.inertia_history().unwrap().len(), 1);
    }

    #[test]
    fn test_nan_shift_never_counts_as_settled() {
        let data = vec![vec![0.0f64], vec![f64::NAN], vec![4.0]];
        let config = KmeansConfig::new(2).with_max_iter(5).with_tol(1.0);
        let mut kmeans = Kmeans::with_config(config).unwrap();
        kmeans
            .fit_from_centroids(&data, vec![vec![0.0], vec![4.0]])
            .unwrap();

        assert_eq!(kmeans.n_iter().unwrap(), 5);
        assert!(!kmeans.converged().unwrap());
    }

    #[test]
    fn test_every_nonempty_cluster_is_updated() {
        // Uneven cluster sizes; each mean is sum / count exactly.
        let data = vec![
            vec![0.0f32],
            vec![1.0],
            vec![2.0],
            vec![10.0],
            vec![12.0],
            vec![100.0],
        ];
        let mut kmeans = Kmeans::<f32>::new(3).unwrap();
        kmeans
            .fit_from_centroids(&data, vec![vec![0.0], vec![10.0], vec![100.0]])
            .unwrap();

        assert_eq!(
            kmeans.centroids().unwrap(),
            &[vec![1.0f32], vec![11.0], vec![100.0]]
        );
        assert_eq!(kmeans.labels().unwrap(), &[0, 0, 0, 1, 1, 2]);
    }

    #[test]
    fn test_converges_before_max_iter() {
        let data = two_blobs();
        let mut kmeans = Kmeans::new(2).unwrap();
        kmeans
            .fit_from_centroids(&data, vec![vec![0.0, 0.0], vec![10.0, 10.0]])
            .unwrap();

        // Round 1 moves the centroids to the blob means, round 2 sees no movement.
        assert_eq!(kmeans.n_iter().unwrap(), 2);
        assert!(kmeans.converged().unwrap());
        assert_eq!(kmeans.labels().unwrap(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_inertia_matches_final_state() {
        let data = two_blobs();
        let mut kmeans = Kmeans::with_config(KmeansConfig::new(2).with_seed(5)).unwrap();
        kmeans.fit(&data).unwrap();

        let fit = kmeans.fitted().unwrap();
        let expected: f64 = data
            .iter()
            .zip(fit.labels())
            .map(|(p, &c)| util::squared_euclidean(p, &fit.centroids()[c]))
            .sum();
        assert!((fit.inertia() - expected).abs() < 1e-9);
        // Each blob has two points 0.1*sqrt(2) apart: 2 * 2 * (0.05^2 * 2) = 0.02.
        assert!((fit.inertia() - 0.02).abs() < 1e-9);
        assert_eq!(fit.inertia_history().last().copied(), Some(fit.inertia()));
        assert_eq!(fit.data(), data.as_slice());
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let mut kmeans = Kmeans::with_config(KmeansConfig::new(2).with_seed(9)).unwrap();
        kmeans.fit(&two_blobs()).unwrap();

        let err = kmeans.predict(&[vec![1.0, 2.0, 3.0]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(kmeans.predict(&[]).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_refit_discards_previous() {
        let mut kmeans = Kmeans::with_config(KmeansConfig::new(2).with_seed(11)).unwrap();
        kmeans.fit(&two_blobs()).unwrap();

        let other = vec![vec![0.0f64, 0.0, 0.0], vec![1.0, 1.0, 1.0], vec![2.0, 2.0, 2.0]];
        kmeans.fit(&other).unwrap();
        assert_eq!(kmeans.labels().unwrap().len(), 3);
        assert!(kmeans.centroids().unwrap().iter().all(|c| c.len() == 3));
        assert_eq!(kmeans.fitted().unwrap().data(), other.as_slice());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let data: Vec<Vec<f64>> = (0..40)
            .map(|i| vec![(i % 7) as f64, (i / 7) as f64 * 0.5])
            .collect();

        let config = KmeansConfig::new(4).with_seed(42);
        let mut a = Kmeans::with_config(config.clone()).unwrap();
        let mut b = Kmeans::with_config(config).unwrap();
        a.fit(&data).unwrap();
        b.fit(&data).unwrap();
        assert_eq!(a.fitted(), b.fitted());
    }

    #[test]
    fn test_fit_with_rng() {
        let data = two_blobs();
        let mut a = Kmeans::new(2).unwrap();
        let mut b = Kmeans::new(2).unwrap();
        a.fit_with_rng(&data, &mut StdRng::seed_from_u64(8)).unwrap();
        b.fit_with_rng(&data, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a.labels().unwrap(), b.labels().unwrap());
        assert_eq!(a.centroids().unwrap(), b.centroids().unwrap());
    }
}
