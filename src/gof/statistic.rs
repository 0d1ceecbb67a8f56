#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::{GofError, Warning, WarningThresholds};
use crate::data::{Category, ObservationCounts, WeightMap};
use log::{debug, warn};

/// Χ<sup>2</sup> statistic of a sample with an optional data-quality warning
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ChiSquareResult {
    /// Σ (observed - expected)² / expected over the weighted categories
    pub chi_square: f64,
    #[cfg_attr(
        feature = "serde1",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub warning: Option<Warning>,
}

/// Χ<sup>2</sup> statistic of `observations` against the expected `weights`
///
/// The expected count of each category is its share of the total weight
/// times the number of observations. Categories with zero expected count are
/// left out of the sum. Observed values that are not weighted categories are
/// ignored.
///
/// At most one [`Warning`] is attached. Checks run in this order and a later
/// one replaces an earlier one:
/// 1. the first observed value that is not a weighted category,
/// 2. at least 20% of expected counts are below 5,
/// 3. any expected count is below 1.
///
/// # Example
///
/// ```
/// use chi2fit::data::WeightMap;
/// use chi2fit::gof::compute_chi_square;
///
/// let weights = WeightMap::uniform(vec!["a", "b"]);
/// let obs = vec!["a"; 10];
///
/// let res = compute_chi_square(&obs, &weights).unwrap();
/// assert_eq!(res.chi_square, 10.0);
/// assert!(res.warning.is_none());
/// ```
pub fn compute_chi_square<K: Category>(
    observations: &[K],
    weights: &WeightMap<K>,
) -> Result<ChiSquareResult, GofError> {
    let thresholds = WarningThresholds::default();
    compute_chi_square_with(observations, weights, &thresholds)
}

/// [`compute_chi_square`] with explicit warning cutoffs
pub fn compute_chi_square_with<K: Category>(
    observations: &[K],
    weights: &WeightMap<K>,
    thresholds: &WarningThresholds,
) -> Result<ChiSquareResult, GofError> {
    if weights.is_empty() {
        return Err(GofError::EmptyWeights);
    }

    let weight_sum = weights.sum();
    if weight_sum <= 0.0 {
        return Err(GofError::NonPositiveWeightSum { sum: weight_sum });
    }

    let counts = ObservationCounts::from_observations(observations);
    let expected = weights.expected(counts.n());

    let mut warning = observations
        .iter()
        .find(|x| !weights.contains_key(x))
        .map(|key| Warning::UnknownKey {
            key: key.to_string(),
        });

    let chi_square = counts
        .restrict_to(weights)
        .iter()
        .zip(expected.iter())
        .filter(|&(_, &e)| e != 0.0)
        .fold(0.0, |acc, (&o, &e)| acc + (o as f64 - e).powi(2) / e);

    if let Some(sparse) = thresholds.assess(&expected) {
        warning = Some(sparse);
    }

    debug!(
        "χ² = {} from {} observations over {} categories (weight sum {})",
        chi_square,
        counts.n(),
        weights.len(),
        weight_sum
    );
    if let Some(ref w) = warning {
        warn!("{}", w);
    }

    Ok(ChiSquareResult {
        chi_square,
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a sample from runs of repeated values, e.g. `[("a", 2), ("b", 1)]`
    /// gives `["a", "a", "b"]`.
    fn runs(lengths: &[(&'static str, usize)]) -> Vec<&'static str> {
        lengths
            .iter()
            .flat_map(|&(x, n)| std::iter::repeat(x).take(n))
            .collect()
    }

    fn six_sided() -> WeightMap<&'static str> {
        WeightMap::uniform(vec!["a", "b", "c", "d", "e", "f"])
    }

    #[test]
    fn known_statistic() {
        let obs = runs(&[
            ("a", 4),
            ("b", 4),
            ("c", 12),
            ("d", 0),
            ("e", 9),
            ("f", 19),
        ]);
        let res = compute_chi_square(&obs, &six_sided()).unwrap();
        assert_eq!(res.chi_square, 29.25);
        assert_eq!(res.warning, None);
    }

    #[test]
    fn single_category_is_zero() {
        let weights = WeightMap::uniform(vec!["a"]);
        let res = compute_chi_square(&runs(&[("a", 4)]), &weights).unwrap();
        assert_eq!(res.chi_square, 0.0);
    }

    #[test]
    fn no_observations_is_zero() {
        let weights = WeightMap::uniform(vec!["a"]);
        let res = compute_chi_square(&[], &weights).unwrap();
        assert_eq!(res.chi_square, 0.0);
        assert_eq!(res.warning, Some(Warning::NearZeroExpected { count: 1 }));
    }

    #[test]
    fn empty_weights_is_an_error() {
        let weights: WeightMap<&str> = WeightMap::new();
        assert_eq!(
            compute_chi_square(&["a"], &weights),
            Err(GofError::EmptyWeights)
        );
    }

    #[test]
    fn all_zero_weights_is_an_error() {
        let weights =
            WeightMap::from_pairs(vec![("a", 0.0), ("b", 0.0)]).unwrap();
        assert_eq!(
            compute_chi_square(&["a"], &weights),
            Err(GofError::NonPositiveWeightSum { sum: 0.0 })
        );
    }

    #[test]
    fn unknown_key_warns_and_is_ignored() {
        let weights = WeightMap::uniform(vec!["a", "b"]);
        let mut obs = runs(&[("a", 10), ("b", 10)]);
        obs.push("z");
        obs.push("y");

        let res = compute_chi_square(&obs, &weights).unwrap();
        // 22 observations, 11 expected per category
        assert::close(res.chi_square, 2.0 / 11.0, 1E-12);
        assert_eq!(
            res.warning,
            Some(Warning::UnknownKey {
                key: String::from("z")
            })
        );
    }

    #[test]
    fn sparse_warning_overrides_unknown_key() {
        let weights = WeightMap::uniform(vec!["a", "b"]);
        let obs = runs(&[("a", 2), ("q", 2)]);
        let res = compute_chi_square(&obs, &weights).unwrap();
        assert_eq!(
            res.warning,
            Some(Warning::InfrequentExpected {
                percent: 100.0,
                below: 5.0
            })
        );
    }

    #[test]
    fn zero_expected_category_is_skipped() {
        let weights =
            WeightMap::from_pairs(vec![("a", 1.0), ("b", 1.0), ("c", 0.0)])
                .unwrap();
        let obs = runs(&[("a", 10), ("b", 10), ("c", 3)]);
        let res = compute_chi_square(&obs, &weights).unwrap();
        // 23 observations, 11.5 expected for a and b
        let want = 2.0 * 1.5_f64.powi(2) / 11.5;
        assert::close(res.chi_square, want, 1E-12);
        assert_eq!(res.warning, Some(Warning::NearZeroExpected { count: 1 }));
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = WarningThresholds {
            sparse_expected: 10.0,
            sparse_fraction: 0.5,
            near_zero_expected: 0.0,
        };
        let obs = runs(&[
            ("a", 8),
            ("b", 8),
            ("c", 8),
            ("d", 8),
            ("e", 8),
            ("f", 8),
        ]);
        let res =
            compute_chi_square_with(&obs, &six_sided(), &thresholds).unwrap();
        assert_eq!(
            res.warning.map(|w| w.to_string()),
            Some(String::from(
                "expectedValues contains 100% infrequent (below 10) values"
            ))
        );
    }

    #[test]
    fn integer_categories() {
        let weights =
            WeightMap::from_pairs(vec![(1_u32, 1.0), (2, 3.0)]).unwrap();
        let obs: Vec<u32> = vec![1, 1, 1, 1, 2, 2, 2, 2];
        let res = compute_chi_square(&obs, &weights).unwrap();
        // expected 2 and 6
        assert::close(res.chi_square, 2.0 + 4.0 / 6.0, 1E-12);
    }
}
