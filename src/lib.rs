//! Χ<sup>2</sup> goodness-of-fit testing for categorical data.
//!
//! Compare a sample of categorical answers against expected category weights
//! and get back a p-value along with an advisory warning when the sample is
//! too sparse for the Χ<sup>2</sup> approximation to be trusted.
//!
//! # Example
//!
//! ```
//! use chi2fit::data::WeightMap;
//! use chi2fit::gof::chi_test;
//!
//! let weights = WeightMap::uniform(vec!["yes", "no"]);
//! let answers = vec!["yes"; 30]
//!     .into_iter()
//!     .chain(vec!["no"; 10])
//!     .collect::<Vec<_>>();
//!
//! let res = chi_test(&answers, &weights).unwrap();
//! assert!(res.p < 0.01);
//! ```
pub mod consts;
pub mod data;
pub mod dist;
pub mod gof;
pub mod misc;
pub mod prelude;
pub mod traits;
