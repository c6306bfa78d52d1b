//! Optimizer module - the seam for system-originated portfolio events.

mod optimizer_traits;
mod synthetic_source;

pub use optimizer_traits::OptimizerEventSourceTrait;
pub use synthetic_source::{SyntheticOptimizerSource, SYNTHETIC_EVENT_COUNT};
