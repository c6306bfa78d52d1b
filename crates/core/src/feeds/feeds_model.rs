//! Raw record shapes delivered by the upstream feeds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction as returned by the transaction history feed.
///
/// Nothing here is validated; the activity normalizer decides whether the
/// record becomes an `Activity` or is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(default)]
    #[serde(deserialize_with = "decimal_input_format::deserialize_option_decimal")]
    pub amount: Option<Decimal>,
    pub timestamp: String,
    pub vault_name: String,
}

/// A position snapshot as returned by the investment feed.
///
/// `profit` is carried for diagnostics only; the engine recomputes it from
/// `current_value - principal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRecord {
    pub vault_id: String,
    #[serde(deserialize_with = "decimal_input_format::deserialize_decimal")]
    pub principal: Decimal,
    #[serde(deserialize_with = "decimal_input_format::deserialize_decimal")]
    pub current_value: Decimal,
    #[serde(default)]
    #[serde(deserialize_with = "decimal_input_format::deserialize_option_decimal")]
    pub profit: Option<Decimal>,
}

// Feeds send numbers, but stringly-typed amounts are common enough upstream to accept.
mod decimal_input_format {
    use rust_decimal::Decimal;
    use serde::{self, Deserialize, Deserializer};
    use serde_json::Number;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalInput {
        String(String),
        Number(Number),
        Null,
    }

    fn parse_decimal_value(value: &str) -> Result<Decimal, String> {
        let trimmed = value.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| format!("Invalid decimal value '{}': {}", value, e))
    }

    pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DecimalInput>::deserialize(deserializer)?;
        match raw {
            None | Some(DecimalInput::Null) => Ok(None),
            Some(DecimalInput::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                parse_decimal_value(trimmed)
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
            Some(DecimalInput::Number(n)) => parse_decimal_value(&n.to_string())
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }

    pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_option_decimal(deserializer)?
            .ok_or_else(|| serde::de::Error::custom("Expected a decimal value, found null"))
    }
}
