//! CSV export of the activity feed.

use csv::WriterBuilder;
use log::debug;

use super::activities_model::Activity;
use crate::errors::{Error, Result};

const CSV_HEADER: [&str; 8] = [
    "id",
    "kind",
    "timestamp",
    "vault",
    "amount",
    "actor",
    "optimizer_action",
    "optimizer_result",
];

/// Serializes activities to CSV, one row per activity in the given order.
///
/// Absent optional fields are written as empty cells.
pub fn export_activities_csv(activities: &[Activity]) -> Result<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for activity in activities {
        let timestamp = activity.timestamp.to_rfc3339();
        let amount = activity
            .amount
            .map(|amount| amount.to_string())
            .unwrap_or_default();
        writer.write_record([
            activity.id.as_str(),
            activity.kind.as_str(),
            timestamp.as_str(),
            activity.vault_ref.as_str(),
            amount.as_str(),
            activity.actor_ref.as_deref().unwrap_or(""),
            activity.optimizer_action.as_deref().unwrap_or(""),
            activity.optimizer_result.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Export(e.to_string()))?;
    debug!("Exported {} activities to CSV", activities.len());
    String::from_utf8(bytes).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_export_header_only_for_empty_feed() {
        let csv = export_activities_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "id,kind,timestamp,vault,amount,actor,optimizer_action,optimizer_result\n"
        );
    }

    #[test]
    fn test_export_rows() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let activities = vec![
            Activity::deposit("tx1", ts, "SUI-USDC", dec!(100.5), Some("tx1".to_string())),
            Activity::optimization("opt-1", ts, "DEEP-SUI", "Rebalanced LP positions", "$240 fees captured"),
        ];

        let csv = export_activities_csv(&activities).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "tx1,deposit,2024-01-01T00:00:00+00:00,SUI-USDC,100.5,tx1,,");
        assert_eq!(
            lines[2],
            "opt-1,optimization,2024-01-01T00:00:00+00:00,DEEP-SUI,,,Rebalanced LP positions,$240 fees captured"
        );
    }

    #[test]
    fn test_export_quotes_fields_with_commas() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let activities = vec![Activity::optimization(
            "opt-1",
            ts,
            "DEEP-SUI",
            "Protected assets",
            "Protected $15,000",
        )];

        let csv = export_activities_csv(&activities).unwrap();
        assert!(csv.contains("\"Protected $15,000\""));
    }
}
