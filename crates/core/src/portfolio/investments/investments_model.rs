//! Investment position snapshots.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::feeds::InvestmentRecord;

/// A user's stake in one vault.
///
/// `profit` is always `current_value - principal`. Snapshots are replaced
/// wholesale on every investment feed refresh, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub vault_ref: String,
    pub principal: Decimal,
    pub current_value: Decimal,
    pub profit: Decimal,
}

impl Investment {
    /// Panics if `current_value - principal` overflows; feed data goes
    /// through [`Investment::from_record`] instead.
    pub fn new(vault_ref: impl Into<String>, principal: Decimal, current_value: Decimal) -> Self {
        Investment {
            vault_ref: vault_ref.into(),
            principal,
            current_value,
            profit: current_value - principal,
        }
    }

    /// Builds a position from a feed record, or `None` when the record has no
    /// vault or its profit cannot be represented.
    pub fn from_record(record: &InvestmentRecord) -> Option<Self> {
        let vault_ref = record.vault_id.trim();
        if vault_ref.is_empty() {
            warn!("Dropping investment record without a vault id");
            return None;
        }

        let Some(profit) = record.current_value.checked_sub(record.principal) else {
            warn!(
                "Dropping investment record for vault {}: profit overflows",
                vault_ref
            );
            return None;
        };

        if let Some(reported) = record.profit {
            if reported != profit {
                warn!(
                    "Upstream profit {} for vault {} differs from current value minus principal ({}); using the latter",
                    reported, vault_ref, profit
                );
            }
        }
        Some(Investment {
            vault_ref: vault_ref.to_string(),
            principal: record.principal,
            current_value: record.current_value,
            profit,
        })
    }
}

/// Builds the investment snapshot from feed records, dropping malformed ones.
pub fn build_investments(records: &[InvestmentRecord]) -> Vec<Investment> {
    let investments: Vec<Investment> = records.iter().filter_map(Investment::from_record).collect();

    debug!(
        "Built {} of {} investment positions",
        investments.len(),
        records.len()
    );
    investments
}
