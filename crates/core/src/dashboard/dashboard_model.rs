use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::activities::Activity;
use crate::portfolio::{Investment, PortfolioMetrics};

/// Output of one activity-feed recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeedSnapshot {
    /// Normalized user transactions, in feed order.
    pub transactions: Vec<Activity>,
    /// Transactions and optimizer events, newest first.
    pub merged: Vec<Activity>,
    pub computed_at: DateTime<Utc>,
}

/// Output of one investment recomputation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub investments: Vec<Investment>,
    pub metrics: PortfolioMetrics,
    pub computed_at: DateTime<Utc>,
}
