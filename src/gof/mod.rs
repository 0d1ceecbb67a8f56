//! Χ<sup>2</sup> goodness-of-fit testing of categorical observations
mod statistic;
mod tally;
mod warning;
mod x2;

pub use self::statistic::{
    compute_chi_square, compute_chi_square_with, ChiSquareResult,
};
pub use self::tally::Tally;
pub use self::warning::{Warning, WarningThresholds};
pub use self::x2::{chi_test, chi_test_with, ChiTestResult};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum GofError {
    /// No categories were given
    EmptyWeights,
    /// The weights sum to zero
    NonPositiveWeightSum { sum: f64 },
    /// The test needs at least two categories for one degree of freedom
    TooFewCategories { n_categories: usize },
}

impl std::error::Error for GofError {}

impl fmt::Display for GofError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWeights => {
                write!(f, "invalid argument, weights must be present")
            }
            Self::NonPositiveWeightSum { sum } => write!(
                f,
                "invalid argument, weights sum to {} but must sum to a \
                 positive value",
                sum
            ),
            Self::TooFewCategories { n_categories } => write!(
                f,
                "invalid argument, must specify at least two weights \
                 ({} given)",
                n_categories
            ),
        }
    }
}
