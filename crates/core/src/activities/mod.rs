//! Activities module - the unified activity feed.

mod activities_constants;
mod activities_errors;
mod activities_model;
mod csv_export;
mod merger;
mod normalizer;

#[cfg(test)]
mod activities_model_tests;

pub use activities_constants::*;
pub use activities_errors::ActivityError;
pub use activities_model::{parse_timestamp, Activity, ActivityFilterMode, ActivityKind};
pub use csv_export::export_activities_csv;
pub use merger::{filter_activities, merge_activities};
pub use normalizer::{mask_actor_ref, normalize_transaction, normalize_transactions};
