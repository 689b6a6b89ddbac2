//! Pure derivation of display data from raw metric series.
//!
//! Nothing in here touches the DOM or the network, so every function is
//! unit-tested natively.

pub mod format;
pub mod transform;

pub use format::*;
pub use transform::*;
