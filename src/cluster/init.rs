//! Random centroid seeding.
//!
//! Picks `k` distinct training points uniformly at random. Sampling is by
//! rejection: draw uniform indices into an ordered set until it holds `k`
//! members. The expected number of draws is `n * (H(n) - H(n - k))`, which
//! stays small for the `k <= n` regime k-means is used in.

use rand::Rng;
use std::collections::BTreeSet;

/// Draw `k` distinct indices from `0..n`, returned in ascending order.
///
/// Callers guarantee `k <= n`.
pub(crate) fn sample_distinct_indices<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    k: usize,
) -> Vec<usize> {
    debug_assert!(k <= n);
    let mut picked = BTreeSet::new();
    while picked.len() < k {
        picked.insert(rng.random_range(0..n));
    }
    picked.into_iter().collect()
}
