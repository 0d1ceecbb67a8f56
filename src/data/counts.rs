#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::{Category, WeightMap};
use itertools::Itertools;
use std::collections::HashMap;

/// Number of occurrences of each observed category.
///
/// Stores the total number of observations and the count of each distinct
/// value seen, including values that are not recognized by any `WeightMap`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde1",
    serde(bound(
        serialize = "K: Serialize + Eq + std::hash::Hash",
        deserialize = "K: Deserialize<'de> + Eq + std::hash::Hash"
    ))
)]
pub struct ObservationCounts<K> {
    n: usize,
    counts: HashMap<K, usize>,
}

impl<K: Category> ObservationCounts<K> {
    /// Tally a sample
    ///
    /// # Example
    ///
    /// ```
    /// # use chi2fit::data::ObservationCounts;
    /// let counts = ObservationCounts::from_observations(&["a", "b", "a"]);
    ///
    /// assert_eq!(counts.n(), 3);
    /// assert_eq!(counts.get(&"a"), 2);
    /// assert_eq!(counts.get(&"z"), 0);
    /// ```
    pub fn from_observations(xs: &[K]) -> Self {
        ObservationCounts {
            n: xs.len(),
            counts: xs.iter().cloned().counts(),
        }
    }

    /// Get the total number of observations
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of occurrences of `key`, zero if it was never observed
    #[inline]
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct values observed
    #[inline]
    pub fn n_distinct(&self) -> usize {
        self.counts.len()
    }

    /// `(category, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &ct)| (k, ct))
    }

    /// Counts of each category in `weights`, in the weight map's order
    ///
    /// Observed values outside the weight map are left out, categories never
    /// observed count as zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use chi2fit::data::{ObservationCounts, WeightMap};
    /// let weights = WeightMap::uniform(vec!['x', 'y', 'z']);
    /// let counts =
    ///     ObservationCounts::from_observations(&['z', 'q', 'z', 'x']);
    ///
    /// assert_eq!(counts.restrict_to(&weights), vec![1, 0, 2]);
    /// ```
    pub fn restrict_to(&self, weights: &WeightMap<K>) -> Vec<usize> {
        weights.keys().map(|k| self.get(k)).collect()
    }
}

impl<K: Category> PartialEq for ObservationCounts<K> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.counts == other.counts
    }
}
