use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::activities::{Activity, ActivityFilterMode};
use crate::errors::Result;
use crate::portfolio::{Investment, PerformancePoint, PortfolioMetrics};

/// Read and refresh surface of the dashboard engine.
///
/// Reads return the views computed by the latest refresh and never recompute.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Fetches transaction history and rebuilds the activity feed and performance series.
    async fn refresh_transactions(&self, now: DateTime<Utc>);

    /// Fetches investment positions and rebuilds metrics and the performance series.
    async fn refresh_investments(&self, now: DateTime<Utc>);

    /// Fetches both feeds concurrently and applies them.
    async fn refresh_all(&self, now: DateTime<Utc>);

    fn get_merged_activities(&self, mode: ActivityFilterMode) -> Vec<Activity>;

    fn get_portfolio_metrics(&self) -> PortfolioMetrics;

    fn get_performance_series(&self) -> Vec<PerformancePoint>;

    fn get_investments(&self) -> Vec<Investment>;

    /// Exports the filtered merged feed as CSV.
    fn export_activities_csv(&self, mode: ActivityFilterMode) -> Result<String>;
}
