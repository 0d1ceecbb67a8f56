//! Χ<sup>2</sup> over x in (0, ∞)
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::misc::{gamma, trapezoid_integrate};
use crate::traits::*;
use std::fmt;

/// [Χ<sup>2</sup> distribution](https://en.wikipedia.org/wiki/Chi-squared_distribution)
/// Χ<sup>2</sup>(k).
///
/// # Example
///
/// ```
/// use chi2fit::dist::ChiSquared;
/// use chi2fit::traits::*;
///
/// let x2 = ChiSquared::new(2.0).unwrap();
/// assert!((x2.cdf(2.0) - 0.6321).abs() < 0.01);
/// ```
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct ChiSquared {
    /// Degrees of freedom in (0, ∞)
    k: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub enum ChiSquaredError {
    /// k parameter is less than or equal to zero
    KTooLow { k: f64 },
    /// k parameter is infinite or NaN
    KNotFinite { k: f64 },
}

impl ChiSquared {
    /// Create a new Chi-squared distribution
    ///
    /// # Arguments
    /// - k: Degrees of freedom in (0, ∞)
    pub fn new(k: f64) -> Result<Self, ChiSquaredError> {
        if k <= 0.0 {
            Err(ChiSquaredError::KTooLow { k })
        } else if !k.is_finite() {
            Err(ChiSquaredError::KNotFinite { k })
        } else {
            Ok(ChiSquared { k })
        }
    }

    /// Create a new ChiSquared without checking whether the parameters are
    /// valid.
    #[inline]
    pub fn new_unchecked(k: f64) -> Self {
        ChiSquared { k }
    }

    /// Get the degrees of freedom, `k`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use chi2fit::dist::ChiSquared;
    /// let x2 = ChiSquared::new(1.2).unwrap();
    /// assert_eq!(x2.k(), 1.2);
    /// ```
    #[inline]
    pub fn k(&self) -> f64 {
        self.k
    }
}

impl From<&ChiSquared> for String {
    fn from(x2: &ChiSquared) -> String {
        format!("χ²({})", x2.k)
    }
}

impl fmt::Display for ChiSquared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from(self))
    }
}

impl ContinuousDistr for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        chi2_pdf(x, self.k)
    }
}

impl Cdf for ChiSquared {
    fn cdf(&self, x: f64) -> f64 {
        chi2_cdf(x, self.k)
    }
}

impl std::error::Error for ChiSquaredError {}

impl fmt::Display for ChiSquaredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KTooLow { k } => {
                write!(f, "k ({}) must be greater than zero", k)
            }
            Self::KNotFinite { k } => write!(f, "k ({}) must be finite", k),
        }
    }
}

/// Χ<sup>2</sup> probability density at `x` with `k` degrees of freedom
///
/// Diverges at `x = 0` when `k = 1`; [`chi2_cdf`] works around that.
///
/// # Example
///
/// ```
/// use chi2fit::dist::chi2_pdf;
///
/// assert!((chi2_pdf(2.0, 2.0) - 0.1839).abs() < 1E-4);
/// ```
pub fn chi2_pdf(x: f64, k: f64) -> f64 {
    let k2 = k / 2.0;
    (-x / 2.0).exp() * x.powf(k2 - 1.0) / 2.0_f64.powf(k2) / gamma(k2)
}

/// Χ<sup>2</sup> cumulative density from 0 to `x` with `k` degrees of
/// freedom, by numerical integration of [`chi2_pdf`]
///
/// With `k = 1` the density is infinite at 0, so the mass near the origin is
/// seeded with a constant and integration starts away from zero. Results for
/// `k = 1` and `x < 0.01` are inaccurate.
///
/// # Example
///
/// ```
/// use chi2fit::dist::chi2_cdf;
///
/// assert_eq!(chi2_cdf(0.0, 3.0), 0.0);
/// assert!((chi2_cdf(9.236, 5.0) - 0.9).abs() < 0.009);
/// ```
pub fn chi2_cdf(x: f64, k: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }

    let (seed, start) = if k == 1.0 {
        if x >= 0.1 {
            (0.25, 0.1)
        } else {
            (0.08, 0.01)
        }
    } else {
        (0.0, 0.0)
    };

    seed + trapezoid_integrate(start, x, |t| chi2_pdf(t, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1E-12;

    fn rel_close(actual: f64, expected: f64, rel: f64) -> bool {
        (actual - expected).abs() <= rel * actual.abs()
    }

    #[test]
    fn new() {
        let x2 = ChiSquared::new(3.2).unwrap();
        assert::close(x2.k, 3.2, TOL);
    }

    #[test]
    fn new_should_reject_k_leq_zero() {
        assert!(ChiSquared::new(f64::MIN_POSITIVE).is_ok());
        assert_eq!(
            ChiSquared::new(0.0),
            Err(ChiSquaredError::KTooLow { k: 0.0 })
        );
        assert!(ChiSquared::new(-f64::MIN_POSITIVE).is_err());
        assert!(ChiSquared::new(-1.0).is_err());
    }

    #[test]
    fn new_should_reject_non_finite_k() {
        assert!(ChiSquared::new(f64::INFINITY).is_err());
        assert!(ChiSquared::new(f64::NAN).is_err());
        assert!(ChiSquared::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn display() {
        let x2 = ChiSquared::new(2.5).unwrap();
        assert_eq!(format!("{}", x2), "χ²(2.5)");
    }

    #[test]
    fn pdf() {
        let cases = [
            (1.0, 1.0, 0.2420),
            (2.0, 2.0, 0.1839),
            (3.0, 3.0, 0.1542),
            (4.0, 4.0, 0.1353),
            (5.0, 5.0, 0.1220),
            (6.0, 6.0, 0.1120),
        ];
        for (x, k, want) in cases {
            let f = chi2_pdf(x, k);
            assert!(rel_close(f, want, 1E-3), "f({x}; {k}) = {f}");
        }
    }

    #[test]
    fn pdf_diverges_at_zero_for_k_one() {
        assert_eq!(chi2_pdf(0.0, 1.0), f64::INFINITY);
    }

    #[test]
    fn ln_pdf_is_log_of_pdf() {
        let x2 = ChiSquared::new(2.5).unwrap();
        assert::close(x2.ln_pdf(1.2), x2.pdf(1.2).ln(), TOL);
    }

    #[test]
    fn cdf() {
        let cases = [
            (1.0, 1.0, 0.6827),
            (2.0, 2.0, 0.6321),
            (3.0, 3.0, 0.6084),
            (4.0, 4.0, 0.5940),
            (5.0, 5.0, 0.5841),
            (0.016, 1.0, 0.100),
            (0.211, 2.0, 0.100),
            (0.584, 3.0, 0.100),
            (1.064, 4.0, 0.100),
            (2.706, 1.0, 0.900),
            (4.606, 2.0, 0.900),
            (6.251, 3.0, 0.900),
            (7.779, 4.0, 0.900),
            (0.412, 5.0, 0.005),
            (0.554, 5.0, 0.010),
            (0.831, 5.0, 0.025),
            (1.145, 5.0, 0.050),
            (1.610, 5.0, 0.100),
            (9.236, 5.0, 0.900),
            (11.070, 5.0, 0.950),
            (12.833, 5.0, 0.975),
            (15.086, 5.0, 0.990),
            (16.750, 5.0, 0.995),
        ];
        for (x, k, want) in cases {
            let p = chi2_cdf(x, k);
            assert!(rel_close(p, want, 1E-2), "F({x}; {k}) = {p}");
        }
    }

    #[test]
    fn cdf_is_zero_at_and_below_origin() {
        for k in [0.5, 1.0, 2.0, 7.0] {
            assert_eq!(chi2_cdf(0.0, k), 0.0);
            assert_eq!(chi2_cdf(-1.0, k), 0.0);
        }
    }

    #[test]
    fn cdf_k_one_uses_seeds() {
        assert::close(chi2_cdf(0.1, 1.0), 0.25, TOL);
        assert::close(chi2_cdf(0.01, 1.0), 0.08, TOL);
    }

    #[test]
    fn cdf_tracks_inc_gamma() {
        use special::Gamma as _;

        for k in [2.0, 3.0, 4.0, 6.0, 9.0] {
            for x in [1.0_f64, 2.5, 5.0, 10.0, 20.0] {
                let want = (x / 2.0).inc_gamma(k / 2.0);
                assert::close(chi2_cdf(x, k), want, 5E-3);
            }
        }
    }

    #[test]
    fn sf_is_complement() {
        let x2 = ChiSquared::new(4.0).unwrap();
        assert::close(x2.sf(3.0), 1.0 - x2.cdf(3.0), TOL);
    }
}
