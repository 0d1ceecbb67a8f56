//! Trait definitions for continuous distributions

/// Trait describing continuous probability distributions
pub trait ContinuousDistr {
    /// The value of the Probability Density Function (PDF) at `x`
    fn pdf(&self, x: f64) -> f64;

    /// The value of the log Probability Density Function (PDF) at `x`
    fn ln_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }
}

/// Cumulative distribution of a continuous distribution over the reals
///
/// # Example
///
/// ```
/// use chi2fit::dist::ChiSquared;
/// use chi2fit::traits::Cdf;
///
/// let x2 = ChiSquared::new(2.0).unwrap();
///
/// assert_eq!(x2.cdf(0.0), 0.0);
/// assert!((x2.cdf(4.606) - 0.9).abs() < 0.01);
/// assert!((x2.sf(4.606) - 0.1).abs() < 0.01);
/// ```
pub trait Cdf {
    /// The value of the Cumulative Density Function at `x`
    fn cdf(&self, x: f64) -> f64;

    /// Survival function
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }
}
