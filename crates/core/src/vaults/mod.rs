//! Vaults module - catalog browsing over vault summaries.

mod catalog;
mod vaults_model;

pub use catalog::{catalog_overview, search_vaults, sort_vaults};
pub use vaults_model::{CatalogOverview, RiskLevel, VaultSort, VaultSummary};
