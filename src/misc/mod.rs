//! Numerical utilities
mod gamma;
mod trapezoid;

pub use gamma::{gamma, try_gamma, GammaError};
pub use trapezoid::{
    trapezoid_integrate, trapezoid_integrate_with, TrapezoidParams,
};
