//! Turns raw transaction records into canonical activities.

use log::{debug, warn};

use super::activities_errors::ActivityError;
use super::activities_model::{parse_timestamp, Activity, ActivityKind};
use crate::feeds::TransactionRecord;

/// Masks a record id into a short display reference.
///
/// This is a truncation, not an address lookup.
pub fn mask_actor_ref(id: &str, prefix_len: usize) -> String {
    id.chars().take(prefix_len).collect()
}

/// Normalizes a single transaction record.
///
/// Unknown transaction types and records missing a required field are
/// reported as errors; callers decide whether to drop them.
pub fn normalize_transaction(
    record: &TransactionRecord,
    actor_ref_prefix_len: usize,
) -> Result<Activity, ActivityError> {
    let record_id = record.id.trim();
    if record_id.is_empty() {
        return Err(ActivityError::MissingField {
            record_id: String::new(),
            field: "id",
        });
    }

    let kind = ActivityKind::from_transaction_type(record.transaction_type.trim()).ok_or_else(
        || ActivityError::UnsupportedType {
            record_id: record_id.to_string(),
            transaction_type: record.transaction_type.clone(),
        },
    )?;

    if record.vault_name.trim().is_empty() {
        return Err(ActivityError::MissingField {
            record_id: record_id.to_string(),
            field: "vaultName",
        });
    }

    let amount = record.amount.ok_or_else(|| ActivityError::MissingField {
        record_id: record_id.to_string(),
        field: "amount",
    })?;

    let timestamp =
        parse_timestamp(&record.timestamp).map_err(|source| ActivityError::InvalidTimestamp {
            record_id: record_id.to_string(),
            value: record.timestamp.clone(),
            source,
        })?;

    Ok(Activity::user_transaction(
        kind,
        record_id,
        timestamp,
        record.vault_name.as_str(),
        amount,
        Some(mask_actor_ref(record_id, actor_ref_prefix_len)),
    ))
}

/// Normalizes a batch of records, dropping the ones that cannot be mapped.
///
/// Input order is preserved for the records that survive.
pub fn normalize_transactions(
    records: &[TransactionRecord],
    actor_ref_prefix_len: usize,
) -> Vec<Activity> {
    let activities: Vec<Activity> = records
        .iter()
        .filter_map(
            |record| match normalize_transaction(record, actor_ref_prefix_len) {
                Ok(activity) => Some(activity),
                Err(e) => {
                    warn!("Dropping transaction record: {}", e);
                    None
                }
            },
        )
        .collect();

    debug!(
        "Normalized {} of {} transaction records",
        activities.len(),
        records.len()
    );
    activities
}
