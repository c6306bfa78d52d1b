//! Feeds module - raw upstream record shapes and collaborator contracts.
//!
//! The engine never performs I/O itself; transaction history and investment
//! positions arrive through the traits declared here.

mod feed_parser;
mod feeds_errors;
mod feeds_model;
mod feeds_traits;

pub use feed_parser::{parse_investment_feed, parse_transaction_feed};
pub use feeds_errors::FeedError;
pub use feeds_model::{InvestmentRecord, TransactionRecord};
pub use feeds_traits::{InvestmentFeedTrait, TransactionFeedTrait};
