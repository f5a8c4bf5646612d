//! Heading selection for SAILNAV.
//!
//! Implements the vessel's polar diagram and the per-tack VMG optimizer
//! with tack hysteresis. Pure functions over plain data; no navigator state.

pub mod optimizer;
pub mod polar;

pub use optimizer::{HeadingOptimizer, TackOption};
pub use polar::PolarModel;
