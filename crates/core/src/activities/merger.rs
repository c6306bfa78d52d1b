//! Merging and projecting the unified activity feed.

use log::debug;

use super::activities_model::{Activity, ActivityFilterMode};

/// Combines normalized transactions with optimizer events into one
/// reverse-chronological sequence.
///
/// The sort is stable: activities sharing a timestamp keep their concatenation
/// order, so normalizer-derived entries precede optimizer-derived ones.
pub fn merge_activities(normalized: Vec<Activity>, optimizer: Vec<Activity>) -> Vec<Activity> {
    let mut merged = normalized;
    merged.extend(optimizer);
    merged.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    debug!("Merged activity feed holds {} entries", merged.len());
    merged
}

/// Projects the merged feed by category. Never re-sorts.
pub fn filter_activities(activities: &[Activity], mode: ActivityFilterMode) -> Vec<Activity> {
    match mode {
        ActivityFilterMode::All => activities.to_vec(),
        _ => activities
            .iter()
            .filter(|activity| mode.matches(activity.kind))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::ActivityKind;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn deposit(id: &str, minutes_ago: i64) -> Activity {
        Activity::deposit(
            id,
            base_time() - Duration::minutes(minutes_ago),
            "SUI-USDC",
            dec!(100),
            Some(id.to_string()),
        )
    }

    fn optimization(id: &str, minutes_ago: i64) -> Activity {
        Activity::optimization(
            id,
            base_time() - Duration::minutes(minutes_ago),
            "DEEP-SUI",
            "Optimized position range",
            "+0.4% APR",
        )
    }

    fn ids(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_merge_sorts_newest_first() {
        let merged = merge_activities(
            vec![deposit("tx-old", 60), deposit("tx-new", 1)],
            vec![optimization("opt-mid", 10), optimization("opt-older", 30)],
        );

        assert_eq!(ids(&merged), vec!["tx-new", "opt-mid", "opt-older", "tx-old"]);
        for pair in merged.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_merge_ties_keep_normalized_first() {
        let merged = merge_activities(
            vec![deposit("tx-a", 5), deposit("tx-b", 5)],
            vec![optimization("opt-a", 5)],
        );
        assert_eq!(ids(&merged), vec!["tx-a", "tx-b", "opt-a"]);
    }

    #[test]
    fn test_merge_with_empty_inputs() {
        assert!(merge_activities(Vec::new(), Vec::new()).is_empty());

        let only_optimizer = merge_activities(Vec::new(), vec![optimization("opt-1", 2)]);
        assert_eq!(ids(&only_optimizer), vec!["opt-1"]);
    }

    #[test]
    fn test_filter_user_and_optimizer_partition_feed() {
        let merged = merge_activities(
            vec![deposit("tx-1", 1), deposit("tx-2", 20)],
            vec![optimization("opt-1", 10)],
        );

        let user = filter_activities(&merged, ActivityFilterMode::User);
        let optimizer = filter_activities(&merged, ActivityFilterMode::Optimizer);
        let all = filter_activities(&merged, ActivityFilterMode::All);

        assert_eq!(ids(&user), vec!["tx-1", "tx-2"]);
        assert!(user.iter().all(|a| a.kind.is_user_initiated()));
        assert_eq!(ids(&optimizer), vec!["opt-1"]);
        assert!(optimizer
            .iter()
            .all(|a| a.kind == ActivityKind::Optimization));
        assert_eq!(all, merged);
    }

    #[test]
    fn test_filter_preserves_order() {
        let activities = vec![deposit("tx-late", 1), deposit("tx-early", 2)];
        let user = filter_activities(&activities, ActivityFilterMode::User);
        assert_eq!(ids(&user), vec!["tx-late", "tx-early"]);
    }
}
