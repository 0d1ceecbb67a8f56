//! Mathematical constants

/// The square root of 2π
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_5;
/// The square root of π
pub const SQRT_PI: f64 = 1.772_453_850_905_515_9;
