#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

/// Advisory attached to an otherwise complete result when the data make the
/// Χ<sup>2</sup> approximation questionable
///
/// Only one warning is kept per result. See
/// [`compute_chi_square`](crate::gof::compute_chi_square) for precedence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum Warning {
    /// An observed value is not one of the weighted categories
    UnknownKey { key: String },
    /// Too large a share of categories have few expected observations
    InfrequentExpected { percent: f64, below: f64 },
    /// Some categories expect (almost) no observations
    NearZeroExpected { count: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { key } => {
                write!(f, "key \"{}\" is not found in given weights", key)
            }
            Self::InfrequentExpected { percent, below } => write!(
                f,
                "expectedValues contains {}% infrequent (below {}) values",
                percent, below
            ),
            Self::NearZeroExpected { count } => write!(
                f,
                "expectedValues contains {} values that are near zero",
                count
            ),
        }
    }
}

/// Cutoffs for the data-quality warnings
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct WarningThresholds {
    /// Expected counts below this are infrequent
    pub sparse_expected: f64,
    /// Warn when at least this fraction of categories are infrequent
    pub sparse_fraction: f64,
    /// Expected counts below this are near zero
    pub near_zero_expected: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            sparse_expected: 5.0,
            sparse_fraction: 0.2,
            near_zero_expected: 1.0,
        }
    }
}

impl WarningThresholds {
    /// Check expected counts for sparseness
    ///
    /// The near-zero check runs last and wins over the infrequent check.
    pub fn assess(&self, expected: &[f64]) -> Option<Warning> {
        if expected.is_empty() {
            return None;
        }

        let mut warning = None;

        let n_sparse = expected
            .iter()
            .filter(|&&e| e < self.sparse_expected)
            .count();
        let sparse_fraction = n_sparse as f64 / expected.len() as f64;
        if sparse_fraction >= self.sparse_fraction {
            warning = Some(Warning::InfrequentExpected {
                percent: sparse_fraction * 100.0,
                below: self.sparse_expected,
            });
        }

        let n_near_zero = expected
            .iter()
            .filter(|&&e| e < self.near_zero_expected)
            .count();
        if n_near_zero > 0 {
            warning = Some(Warning::NearZeroExpected { count: n_near_zero });
        }

        warning
    }
}
