use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of the reconstructed value curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub value: Decimal,
    pub profit: Decimal,
    /// Sum of deposits made that day; absent rather than zero when there were none.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposited_that_day: Option<Decimal>,
}
