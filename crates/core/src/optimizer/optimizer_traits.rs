use chrono::{DateTime, Utc};

use crate::activities::Activity;

/// Source of optimizer activities.
///
/// Implementations must only emit `optimization`-kind activities. The
/// reference instant is passed in so output never depends on the wall clock.
pub trait OptimizerEventSourceTrait: Send + Sync {
    fn optimizer_events(&self, now: DateTime<Utc>) -> Vec<Activity>;
}
