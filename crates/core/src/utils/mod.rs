pub mod time_utils;

pub use time_utils::{format_time_ago, get_days_between, trailing_window};
