//! Dashboard module - the read surface consumed by presentation code.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;


pub use dashboard_model::{ActivityFeedSnapshot, PortfolioSnapshot};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
