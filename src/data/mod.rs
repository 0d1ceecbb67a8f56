//! Observation and weight containers
mod counts;
mod weights;

pub use self::counts::ObservationCounts;
pub use self::weights::{WeightMap, WeightMapError};

use std::fmt::Display;
use std::hash::Hash;

/// The trait that must be implemented by all categorical observations
///
/// Any hashable value that can be rendered into a warning message qualifies,
/// e.g. `String`, `&str`, `char`, or the integer types.
pub trait Category: Clone + Eq + Hash + Display {}

impl<T> Category for T where T: Clone + Eq + Hash + Display {}

/// Split free-form text into observations
///
/// Tokens are separated by runs of non-word characters (anything other than
/// ASCII letters, digits, and `_`). Empty tokens are dropped.
///
/// # Example
///
/// ```
/// use chi2fit::data::parse_observations;
///
/// let obs = parse_observations("1, 2,3  ,4;;a_b");
/// assert_eq!(obs, vec!["1", "2", "3", "4", "a_b"]);
///
/// assert!(parse_observations(" , ").is_empty());
/// ```
pub fn parse_observations(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
