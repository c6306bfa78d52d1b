//! Tolerant decoding of feed payloads.
//!
//! A payload is decoded element by element so that one bad record only
//! shrinks the result instead of failing the whole feed.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::feeds_errors::FeedError;
use super::feeds_model::{InvestmentRecord, TransactionRecord};

const TRANSACTION_FEED: &str = "transactions";
const INVESTMENT_FEED: &str = "investments";

/// Decodes a transaction history payload (a JSON array of records).
pub fn parse_transaction_feed(payload: &str) -> Result<Vec<TransactionRecord>, FeedError> {
    parse_records(TRANSACTION_FEED, payload)
}

/// Decodes an investment positions payload (a JSON array of records).
pub fn parse_investment_feed(payload: &str) -> Result<Vec<InvestmentRecord>, FeedError> {
    parse_records(INVESTMENT_FEED, payload)
}

fn parse_records<T: DeserializeOwned>(feed: &str, payload: &str) -> Result<Vec<T>, FeedError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| FeedError::MalformedPayload(feed.to_string(), e.to_string()))?;

    let elements = match value {
        Value::Array(elements) => elements,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(FeedError::MalformedPayload(
                feed.to_string(),
                format!("expected an array, found {}", json_type_name(&other)),
            ))
        }
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value::<T>(element) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping {} record at index {}: {}", feed, index, e);
                None
            }
        })
        .collect();

    debug!(
        "Decoded {} of {} {} records",
        records.len(),
        total,
        feed
    );
    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
