//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::data::{Category, ObservationCounts, WeightMap};
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::gof::*;
#[doc(no_inline)]
pub use crate::traits::*;
