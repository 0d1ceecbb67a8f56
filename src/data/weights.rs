#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::Category;
use std::collections::HashMap;
use std::fmt;

/// Expected weight of each category
///
/// The keys define the universe of recognized categories. Weights do not need
/// to be normalized. Entries keep their insertion order, which is the order
/// categories are visited when computing statistics.
///
/// With `serde1`, a map serializes as its list of `(key, weight)` pairs and
/// the weights are validated again on the way back in.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(try_from = "Vec<(K, f64)>"))]
#[cfg_attr(feature = "serde1", serde(into = "Vec<(K, f64)>"))]
#[cfg_attr(
    feature = "serde1",
    serde(bound(
        serialize = "K: Serialize + Clone",
        deserialize = "K: Deserialize<'de> + Category"
    ))
)]
pub struct WeightMap<K> {
    entries: Vec<(K, f64)>,
    /// Position of each key in `entries`
    index: HashMap<K, usize>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum WeightMapError {
    /// The weight for `key` is less than zero
    NegativeWeight { key: String, weight: f64 },
    /// The weight for `key` is infinite or NaN
    NonFiniteWeight { key: String, weight: f64 },
}

impl<K: Category> Default for WeightMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Category> WeightMap<K> {
    /// An empty weight map
    pub fn new() -> Self {
        WeightMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a weight map from `(key, weight)` pairs
    ///
    /// A repeated key overwrites the earlier weight but keeps its position.
    ///
    /// # Example
    ///
    /// ```
    /// use chi2fit::data::WeightMap;
    ///
    /// let weights =
    ///     WeightMap::from_pairs(vec![("a", 1.0), ("b", 3.0)]).unwrap();
    /// assert_eq!(weights.len(), 2);
    /// assert_eq!(weights.get(&"b"), Some(3.0));
    ///
    /// assert!(WeightMap::from_pairs(vec![("a", -1.0)]).is_err());
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, WeightMapError>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let mut weights = Self::new();
        pairs.into_iter().try_for_each(|(key, weight)| {
            weights.insert(key, weight).map(|_| ())
        })?;
        Ok(weights)
    }

    /// Equal weight for every key, e.g. the faces of a fair die
    ///
    /// # Example
    ///
    /// ```
    /// use chi2fit::data::WeightMap;
    ///
    /// let die = WeightMap::uniform(1..=6_u8);
    /// assert_eq!(die.len(), 6);
    /// assert_eq!(die.sum(), 6.0);
    /// ```
    pub fn uniform<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut weights = Self::new();
        keys.into_iter().for_each(|key| {
            if !weights.contains_key(&key) {
                weights.push(key, 1.0);
            }
        });
        weights
    }

    /// Set the weight of `key`, returning the previous weight if there was one
    pub fn insert(
        &mut self,
        key: K,
        weight: f64,
    ) -> Result<Option<f64>, WeightMapError> {
        if !weight.is_finite() {
            return Err(WeightMapError::NonFiniteWeight {
                key: key.to_string(),
                weight,
            });
        } else if weight < 0.0 {
            return Err(WeightMapError::NegativeWeight {
                key: key.to_string(),
                weight,
            });
        }

        match self.index.get(&key) {
            Some(&ix) => {
                Ok(Some(std::mem::replace(&mut self.entries[ix].1, weight)))
            }
            None => {
                self.push(key, weight);
                Ok(None)
            }
        }
    }

    fn push(&mut self, key: K, weight: f64) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, weight));
    }

    /// The weight of `key`, if it is a recognized category
    pub fn get(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&ix| self.entries[ix].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of categories
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// `(category, weight)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.entries.iter().map(|(k, w)| (k, *w))
    }

    /// Sum of all weights
    pub fn sum(&self) -> f64 {
        self.entries.iter().fold(0.0, |acc, (_, w)| acc + w)
    }

    /// Expected number of occurrences of each category, in insertion order,
    /// out of `n` observations
    ///
    /// # Example
    ///
    /// ```
    /// use chi2fit::data::WeightMap;
    ///
    /// let weights =
    ///     WeightMap::from_pairs(vec![('x', 1.0), ('y', 3.0)]).unwrap();
    /// assert_eq!(weights.expected(8), vec![2.0, 6.0]);
    /// ```
    pub fn expected(&self, n: usize) -> Vec<f64> {
        let weight_sum = self.sum();
        let nf = n as f64;
        self.entries
            .iter()
            .map(|(_, w)| w / weight_sum * nf)
            .collect()
    }
}

impl<K: PartialEq> PartialEq for WeightMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K> From<WeightMap<K>> for Vec<(K, f64)> {
    fn from(weights: WeightMap<K>) -> Self {
        weights.entries
    }
}

impl<K: Category> TryFrom<Vec<(K, f64)>> for WeightMap<K> {
    type Error = WeightMapError;

    fn try_from(pairs: Vec<(K, f64)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl std::error::Error for WeightMapError {}

impl fmt::Display for WeightMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeWeight { key, weight } => write!(
                f,
                "weight ({}) for key \"{}\" was negative",
                weight, key
            ),
            Self::NonFiniteWeight { key, weight } => write!(
                f,
                "weight ({}) for key \"{}\" was non-finite",
                weight, key
            ),
        }
    }
}
