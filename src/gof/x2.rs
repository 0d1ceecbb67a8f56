#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::{compute_chi_square_with, GofError, Warning, WarningThresholds};
use crate::data::{Category, WeightMap};
use crate::dist::chi2_cdf;
use log::debug;

/// Outcome of a Χ<sup>2</sup> goodness-of-fit test
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct ChiTestResult {
    /// Probability of a statistic at least this large if the observations
    /// follow the weights
    pub p: f64,
    /// The Χ<sup>2</sup> statistic
    pub chi_square: f64,
    /// Degrees of freedom, one less than the number of categories
    pub dof: usize,
    #[cfg_attr(
        feature = "serde1",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub warning: Option<Warning>,
}

/// Χ<sup>2</sup> (Chi-squared) goodness-of-fit test.
///
/// `p = 1 - F(Χ², k - 1)` where `F` is the Χ<sup>2</sup> CDF and `k` the
/// number of weighted categories. Any warning from
/// [`compute_chi_square`](crate::gof::compute_chi_square) is passed along
/// unchanged.
///
/// # Example
///
/// Test whether die rolls were generated uniformly.
///
/// ```
/// use chi2fit::data::WeightMap;
/// use chi2fit::gof::chi_test;
///
/// let weights = WeightMap::uniform(1..=6_u8);
/// let rolls: Vec<u8> = vec![
///     1, 2, 3, 4, 5, 6, 6, 5, 4, 3, 2, 1,
///     1, 3, 5, 2, 4, 6, 6, 4, 2, 5, 3, 1,
///     1, 6, 2, 5, 3, 4,
/// ];
///
/// let res = chi_test(&rolls, &weights).unwrap();
/// assert!(res.p > 0.05);
/// assert_eq!(res.dof, 5);
/// ```
pub fn chi_test<K: Category>(
    observations: &[K],
    weights: &WeightMap<K>,
) -> Result<ChiTestResult, GofError> {
    chi_test_with(observations, weights, &WarningThresholds::default())
}

/// [`chi_test`] with explicit warning cutoffs
pub fn chi_test_with<K: Category>(
    observations: &[K],
    weights: &WeightMap<K>,
    thresholds: &WarningThresholds,
) -> Result<ChiTestResult, GofError> {
    if weights.is_empty() {
        return Err(GofError::EmptyWeights);
    }

    let dof = weights.len() - 1;
    if dof < 1 {
        return Err(GofError::TooFewCategories {
            n_categories: weights.len(),
        });
    }

    let stat = compute_chi_square_with(observations, weights, thresholds)?;

    // The k = 1 CDF seed overshoots slightly, which can push p below zero
    let p = (1.0 - chi2_cdf(stat.chi_square, dof as f64)).clamp(0.0, 1.0);
    debug!("χ² test: χ² = {}, dof = {}, p = {}", stat.chi_square, dof, p);

    Ok(ChiTestResult {
        p,
        chi_square: stat.chi_square,
        dof,
        warning: stat.warning,
    })
}
