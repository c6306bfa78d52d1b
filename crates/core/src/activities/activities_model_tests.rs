//! Tests for Activity domain models.

#[cfg(test)]
mod tests {
    use crate::activities::activities_model::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    // ============================================================================
    // ActivityKind Tests
    // ============================================================================

    #[test]
    fn test_activity_kind_from_transaction_type() {
        assert_eq!(
            ActivityKind::from_transaction_type("deposit"),
            Some(ActivityKind::Deposit)
        );
        assert_eq!(
            ActivityKind::from_transaction_type("withdraw"),
            Some(ActivityKind::Withdraw)
        );
        assert_eq!(ActivityKind::from_transaction_type("optimization"), None);
        assert_eq!(ActivityKind::from_transaction_type("transfer"), None);
        assert_eq!(ActivityKind::from_transaction_type("DEPOSIT"), None);
    }

    #[test]
    fn test_activity_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ActivityKind::Optimization).unwrap(),
            r#""optimization""#
        );
        let kind: ActivityKind = serde_json::from_str(r#""withdraw""#).unwrap();
        assert_eq!(kind, ActivityKind::Withdraw);
    }

    // ============================================================================
    // Activity Constructor Tests
    // ============================================================================

    #[test]
    fn test_constructors_populate_kind_specific_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        let deposit = Activity::deposit("d1", ts, "SUI-USDC", dec!(10), None);
        assert!(deposit.is_well_formed());
        assert_eq!(deposit.amt(), dec!(10));

        let optimization = Activity::optimization("o1", ts, "DEEP-SUI", "act", "res");
        assert!(optimization.is_well_formed());
        assert_eq!(optimization.amount, None);
        assert_eq!(optimization.amt(), Decimal::ZERO);
        assert_eq!(optimization.optimizer_action.as_deref(), Some("act"));
    }

    #[test]
    fn test_is_well_formed_detects_mixed_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

        let mut optimization = Activity::optimization("o1", ts, "DEEP-SUI", "act", "res");
        optimization.amount = Some(dec!(1));
        assert!(!optimization.is_well_formed());

        let mut deposit = Activity::deposit("d1", ts, "SUI-USDC", dec!(10), None);
        deposit.optimizer_result = Some("res".to_string());
        assert!(!deposit.is_well_formed());
    }

    #[test]
    fn test_effective_date_uses_utc_calendar_day() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 59).unwrap();
        let activity = Activity::deposit("d1", ts, "SUI-USDC", dec!(10), None);
        assert_eq!(
            activity.effective_date(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    // ============================================================================
    // Serialization Tests
    // ============================================================================

    #[test]
    fn test_optimization_serialization_omits_amount() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let activity = Activity::optimization("o1", ts, "DEEP-SUI", "act", "res");
        let value = serde_json::to_value(&activity).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "o1",
                "kind": "optimization",
                "timestamp": "2024-01-15T10:30:00+00:00",
                "vaultRef": "DEEP-SUI",
                "optimizerAction": "act",
                "optimizerResult": "res"
            })
        );
    }

    #[test]
    fn test_activity_deserialization_accepts_date_only_timestamp() {
        let activity: Activity = serde_json::from_value(json!({
            "id": "d1",
            "kind": "deposit",
            "timestamp": "2024-01-15",
            "vaultRef": "SUI-USDC",
            "amount": 25
        }))
        .unwrap();

        assert_eq!(
            activity.timestamp,
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()
        );
        assert_eq!(activity.amount, Some(dec!(25)));
    }

    // ============================================================================
    // Timestamp Parsing Tests
    // ============================================================================

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01T08:15:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-01T08:15:00.000Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-03-01T08:15:00").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2024-03-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
        );
        assert!(parse_timestamp("03/01/2024").is_err());
        assert!(parse_timestamp("").is_err());
    }

    // ============================================================================
    // ActivityFilterMode Tests
    // ============================================================================

    #[test]
    fn test_filter_mode_matches() {
        assert!(ActivityFilterMode::All.matches(ActivityKind::Optimization));
        assert!(ActivityFilterMode::User.matches(ActivityKind::Deposit));
        assert!(ActivityFilterMode::User.matches(ActivityKind::Withdraw));
        assert!(!ActivityFilterMode::User.matches(ActivityKind::Optimization));
        assert!(ActivityFilterMode::Optimizer.matches(ActivityKind::Optimization));
        assert!(!ActivityFilterMode::Optimizer.matches(ActivityKind::Deposit));
    }

    #[test]
    fn test_filter_mode_from_str() {
        assert_eq!("all".parse::<ActivityFilterMode>().unwrap(), ActivityFilterMode::All);
        assert_eq!(" User ".parse::<ActivityFilterMode>().unwrap(), ActivityFilterMode::User);
        assert_eq!(
            "optimizer".parse::<ActivityFilterMode>().unwrap(),
            ActivityFilterMode::Optimizer
        );
        assert_eq!("ai".parse::<ActivityFilterMode>().unwrap(), ActivityFilterMode::Optimizer);
        assert!("everything".parse::<ActivityFilterMode>().is_err());
    }

    #[test]
    fn test_filter_mode_default_is_all() {
        assert_eq!(ActivityFilterMode::default(), ActivityFilterMode::All);
    }
}
