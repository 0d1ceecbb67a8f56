//! Probability distributions
mod chi_squared;

pub use chi_squared::{chi2_cdf, chi2_pdf, ChiSquared, ChiSquaredError};
