use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level totals and the value-weighted APR estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub total_principal: Decimal,
    pub total_current_value: Decimal,
    pub total_profit: Decimal,
    /// Percent, e.g. `18.9`.
    #[serde(rename = "weightedAPR")]
    pub weighted_apr: Decimal,
}
