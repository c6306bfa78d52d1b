use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Catalog entry for one vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Percent.
    pub apr: Decimal,
    pub tvl: Decimal,
    pub risk_level: RiskLevel,
}

/// Catalog ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum VaultSort {
    /// Upstream order.
    #[default]
    All,
    TopApr,
    LowestRisk,
    /// By id ascending; no creation date is available upstream.
    Newest,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub vault_count: usize,
    pub total_tvl: Decimal,
    /// Unweighted mean of vault APRs; zero for an empty catalog.
    pub average_apr: Decimal,
}
