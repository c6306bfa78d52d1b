use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Number of trailing days covered by the performance series, today inclusive.
pub const PERFORMANCE_WINDOW_DAYS: usize = 30;

/// Default number of leading id characters kept in a masked actor reference.
pub const DEFAULT_ACTOR_REF_PREFIX_LEN: usize = 8;

/// APR (percent) applied to vaults that have no entry in the yield policy table.
pub const DEFAULT_APR_ESTIMATE: Decimal = dec!(15.2);
