use async_trait::async_trait;

use super::feeds_errors::FeedError;
use super::feeds_model::{InvestmentRecord, TransactionRecord};

/// Source of the user's transaction history.
///
/// Implementations own fetching, caching and retries. A returned error is
/// surfaced to the engine as "no data".
#[async_trait]
pub trait TransactionFeedTrait: Send + Sync {
    async fn fetch_transactions(&self) -> Result<Vec<TransactionRecord>, FeedError>;
}

/// Source of the user's current investment positions.
#[async_trait]
pub trait InvestmentFeedTrait: Send + Sync {
    async fn fetch_investments(&self) -> Result<Vec<InvestmentRecord>, FeedError>;
}
