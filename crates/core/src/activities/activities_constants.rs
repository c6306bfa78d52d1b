//! Activity kinds
//!
//! Raw transaction `type` values accepted from the transaction feed and the
//! labels used when an activity is serialized or exported.

/// Funds entering a vault. Carries an amount.
pub const ACTIVITY_KIND_DEPOSIT: &str = "deposit";

/// Funds leaving a vault. Carries an amount.
pub const ACTIVITY_KIND_WITHDRAW: &str = "withdraw";

/// System-originated portfolio adjustment. Carries an action and a result, never an amount.
pub const ACTIVITY_KIND_OPTIMIZATION: &str = "optimization";

