use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::dashboard_model::{ActivityFeedSnapshot, PortfolioSnapshot};
use super::dashboard_traits::DashboardServiceTrait;
use crate::activities::{self, Activity, ActivityFilterMode};
use crate::errors::Result;
use crate::feeds::{
    FeedError, InvestmentFeedTrait, InvestmentRecord, TransactionFeedTrait, TransactionRecord,
};
use crate::optimizer::OptimizerEventSourceTrait;
use crate::portfolio::{
    build_investments, calculate_portfolio_metrics, synthesize_performance_series, Investment,
    PerformancePoint, PortfolioMetrics, ValuationModelTrait,
};
use crate::settings::EngineSettings;

struct DashboardState {
    activity_feed: Arc<ActivityFeedSnapshot>,
    portfolio: Arc<PortfolioSnapshot>,
    performance: Arc<Vec<PerformancePoint>>,
}

/// Engine façade: keeps the latest input snapshots and the views derived from them.
///
/// Every `apply_*` call replaces whole snapshots; nothing is patched in place.
pub struct DashboardService {
    transaction_feed: Arc<dyn TransactionFeedTrait>,
    investment_feed: Arc<dyn InvestmentFeedTrait>,
    optimizer_source: Arc<dyn OptimizerEventSourceTrait>,
    valuation_model: Arc<dyn ValuationModelTrait>,
    settings: EngineSettings,
    state: RwLock<DashboardState>,
}

impl DashboardService {
    /// Builds the zero-input views for `now`. Fails if `settings` do not validate.
    pub fn new(
        transaction_feed: Arc<dyn TransactionFeedTrait>,
        investment_feed: Arc<dyn InvestmentFeedTrait>,
        optimizer_source: Arc<dyn OptimizerEventSourceTrait>,
        valuation_model: Arc<dyn ValuationModelTrait>,
        settings: EngineSettings,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        settings.validate()?;
        let activity_feed = build_activity_feed(Vec::new(), optimizer_source.as_ref(), now);
        let portfolio = build_portfolio(&[], &settings, now);
        let performance = synthesize_performance_series(
            portfolio.metrics.total_principal,
            &activity_feed.transactions,
            now.date_naive(),
            valuation_model.as_ref(),
        );

        Ok(DashboardService {
            transaction_feed,
            investment_feed,
            optimizer_source,
            valuation_model,
            settings,
            state: RwLock::new(DashboardState {
                activity_feed: Arc::new(activity_feed),
                portfolio: Arc::new(portfolio),
                performance: Arc::new(performance),
            }),
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Applies a transaction feed result. A failed fetch counts as an empty history.
    pub fn apply_transactions(
        &self,
        result: std::result::Result<Vec<TransactionRecord>, FeedError>,
        now: DateTime<Utc>,
    ) {
        let records = records_or_empty(result);
        let normalized =
            activities::normalize_transactions(&records, self.settings.actor_ref_prefix_len);
        let activity_feed = build_activity_feed(normalized, self.optimizer_source.as_ref(), now);

        let mut state = self.write_state();
        let performance = synthesize_performance_series(
            state.portfolio.metrics.total_principal,
            &activity_feed.transactions,
            now.date_naive(),
            self.valuation_model.as_ref(),
        );
        state.activity_feed = Arc::new(activity_feed);
        state.performance = Arc::new(performance);
        debug!(
            "Activity feed rebuilt: {} transactions, {} merged entries",
            state.activity_feed.transactions.len(),
            state.activity_feed.merged.len()
        );
    }

    /// Applies an investment feed result. A failed fetch counts as no positions.
    pub fn apply_investments(
        &self,
        result: std::result::Result<Vec<InvestmentRecord>, FeedError>,
        now: DateTime<Utc>,
    ) {
        let records = records_or_empty(result);
        let portfolio = build_portfolio(&records, &self.settings, now);

        let mut state = self.write_state();
        let performance = synthesize_performance_series(
            portfolio.metrics.total_principal,
            &state.activity_feed.transactions,
            now.date_naive(),
            self.valuation_model.as_ref(),
        );
        state.portfolio = Arc::new(portfolio);
        state.performance = Arc::new(performance);
        debug!(
            "Portfolio rebuilt: {} positions",
            state.portfolio.investments.len()
        );
    }

    /// Latest activity feed snapshot.
    pub fn activity_feed_snapshot(&self) -> Arc<ActivityFeedSnapshot> {
        Arc::clone(&self.read_state().activity_feed)
    }

    /// Latest portfolio snapshot.
    pub fn portfolio_snapshot(&self) -> Arc<PortfolioSnapshot> {
        Arc::clone(&self.read_state().portfolio)
    }

    // Views are replaced atomically under the lock, so a poisoned lock still holds a
    // consistent snapshot.
    fn read_state(&self) -> RwLockReadGuard<'_, DashboardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, DashboardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn refresh_transactions(&self, now: DateTime<Utc>) {
        let result = self.transaction_feed.fetch_transactions().await;
        self.apply_transactions(result, now);
    }

    async fn refresh_investments(&self, now: DateTime<Utc>) {
        let result = self.investment_feed.fetch_investments().await;
        self.apply_investments(result, now);
    }

    async fn refresh_all(&self, now: DateTime<Utc>) {
        info!("Refreshing dashboard feeds");
        let (transactions, investments) = futures::join!(
            self.transaction_feed.fetch_transactions(),
            self.investment_feed.fetch_investments()
        );
        self.apply_transactions(transactions, now);
        self.apply_investments(investments, now);
    }

    fn get_merged_activities(&self, mode: ActivityFilterMode) -> Vec<Activity> {
        let feed = self.activity_feed_snapshot();
        activities::filter_activities(&feed.merged, mode)
    }

    fn get_portfolio_metrics(&self) -> PortfolioMetrics {
        self.read_state().portfolio.metrics
    }

    fn get_performance_series(&self) -> Vec<PerformancePoint> {
        self.read_state().performance.as_ref().clone()
    }

    fn get_investments(&self) -> Vec<Investment> {
        self.portfolio_snapshot().investments.clone()
    }

    fn export_activities_csv(&self, mode: ActivityFilterMode) -> Result<String> {
        activities::export_activities_csv(&self.get_merged_activities(mode))
    }
}

fn records_or_empty<T>(result: std::result::Result<Vec<T>, FeedError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!("{}; treating feed as empty", e);
            Vec::new()
        }
    }
}

fn build_activity_feed(
    transactions: Vec<Activity>,
    optimizer_source: &dyn OptimizerEventSourceTrait,
    now: DateTime<Utc>,
) -> ActivityFeedSnapshot {
    let optimizer_events = optimizer_source.optimizer_events(now);
    let merged = activities::merge_activities(transactions.clone(), optimizer_events);
    ActivityFeedSnapshot {
        transactions,
        merged,
        computed_at: now,
    }
}

fn build_portfolio(
    records: &[InvestmentRecord],
    settings: &EngineSettings,
    now: DateTime<Utc>,
) -> PortfolioSnapshot {
    let investments = build_investments(records);
    let metrics = calculate_portfolio_metrics(&investments, &settings.yield_policies);
    PortfolioSnapshot {
        investments,
        metrics,
        computed_at: now,
    }
}
