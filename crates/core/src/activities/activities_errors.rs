use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Reasons a raw record cannot become an `Activity`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActivityError {
    #[error("Unsupported transaction type '{transaction_type}' on record {record_id}")]
    UnsupportedType {
        record_id: String,
        transaction_type: String,
    },

    #[error("Record {record_id} is missing required field '{field}'")]
    MissingField {
        record_id: String,
        field: &'static str,
    },

    #[error("Record {record_id} has an invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        record_id: String,
        value: String,
        #[source]
        source: ChronoParseError,
    },

    #[error("Invalid activity data: {0}")]
    InvalidData(String),
}
