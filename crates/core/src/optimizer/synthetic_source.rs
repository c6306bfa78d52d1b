//! Placeholder optimizer feed.
//!
//! Emits a fixed set of optimizer actions positioned relative to the
//! reference instant. It stands in for a live optimizer stream until one
//! exists.

use chrono::{DateTime, Duration, Utc};

use super::optimizer_traits::OptimizerEventSourceTrait;
use crate::activities::Activity;

struct SyntheticEvent {
    minutes_ago: i64,
    vault_ref: &'static str,
    action: &'static str,
    result: &'static str,
}

const SYNTHETIC_EVENTS: [SyntheticEvent; 8] = [
    SyntheticEvent {
        minutes_ago: 2,
        vault_ref: "DEEP-SUI",
        action: "Optimized position range",
        result: "+0.4% APR",
    },
    SyntheticEvent {
        minutes_ago: 5,
        vault_ref: "CETUS-SUI",
        action: "Rebalanced LP positions",
        result: "$240 fees captured",
    },
    SyntheticEvent {
        minutes_ago: 8,
        vault_ref: "SUI-USDC",
        action: "Modified fee tier allocation",
        result: "Reduced slippage",
    },
    SyntheticEvent {
        minutes_ago: 15,
        vault_ref: "DEEP-SUI",
        action: "Adjusted impermanent loss parameters",
        result: "Risk -9%",
    },
    SyntheticEvent {
        minutes_ago: 22,
        vault_ref: "SUI-USDC",
        action: "Executed price protection strategy",
        result: "Protected $15K assets",
    },
    SyntheticEvent {
        minutes_ago: 37,
        vault_ref: "CETUS-SUI",
        action: "Dynamic fee recalibration",
        result: "+5.2% efficiency",
    },
    SyntheticEvent {
        minutes_ago: 48,
        vault_ref: "DEEP-SUI",
        action: "Price volatility analysis",
        result: "Position shift initiated",
    },
    SyntheticEvent {
        minutes_ago: 67,
        vault_ref: "SUI-USDC",
        action: "Market sentiment adjustment",
        result: "Strategy updated",
    },
];

/// Number of activities emitted per call.
pub const SYNTHETIC_EVENT_COUNT: usize = SYNTHETIC_EVENTS.len();

/// Deterministic stand-in for the optimizer event stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticOptimizerSource;

impl SyntheticOptimizerSource {
    pub fn new() -> Self {
        SyntheticOptimizerSource
    }
}

impl OptimizerEventSourceTrait for SyntheticOptimizerSource {
    fn optimizer_events(&self, now: DateTime<Utc>) -> Vec<Activity> {
        SYNTHETIC_EVENTS
            .iter()
            .enumerate()
            .map(|(index, event)| {
                Activity::optimization(
                    format!("optimizer-{}", index + 1),
                    now - Duration::minutes(event.minutes_ago),
                    event.vault_ref,
                    event.action,
                    event.result,
                )
            })
            .collect()
    }
}
