use chrono::{DateTime, Days, NaiveDate, Utc};

pub fn get_days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        if let Some(next) = current.succ_opt() {
            current = next;
        } else {
            break;
        }
    }
    days
}

/// Calendar days of the trailing window of `window_days` ending on `end`, ascending.
pub fn trailing_window(end: NaiveDate, window_days: usize) -> Vec<NaiveDate> {
    if window_days == 0 {
        return Vec::new();
    }
    let span = Days::new((window_days - 1) as u64);
    let start = end.checked_sub_days(span).unwrap_or(NaiveDate::MIN);
    get_days_between(start, end)
}

/// Compact relative label ("45s", "12m", "3h", "2d") for `timestamp` seen from `now`.
///
/// Timestamps in the future clamp to "0s".
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds().max(0);
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}
