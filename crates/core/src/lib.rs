//! Vaultfolio Core - activity aggregation and portfolio metrics.
//!
//! This crate turns raw transaction and investment feeds into the views a
//! yield-vault dashboard renders: a merged, filterable activity feed,
//! portfolio totals with a weighted APR, and a trailing performance curve.
//! It performs no network I/O; feeds are supplied through the traits in [`feeds`].

pub mod activities;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod feeds;
pub mod optimizer;
pub mod portfolio;
pub mod settings;
pub mod utils;
pub mod vaults;

// Re-export common types from activity and portfolio modules
pub use activities::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
