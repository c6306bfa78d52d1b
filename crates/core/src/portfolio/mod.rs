//! Portfolio module - positions, aggregate metrics and the performance series.

pub mod investments;
pub mod metrics;
pub mod performance;

pub use investments::*;
pub use metrics::*;
pub use performance::*;
