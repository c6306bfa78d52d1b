//! Valuation models used to draw the performance curve.

use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// Growth factor of portfolio value relative to principal on a given day.
///
/// `day_index` runs from 0 (oldest day) to `window_days - 1` (today).
/// A historical valuation feed would implement this same trait.
pub trait ValuationModelTrait: Send + Sync {
    fn growth_factor(&self, day_index: usize, window_days: usize) -> Decimal;
}

/// Placeholder curve: a small oscillation on top of a linear drift.
///
/// `1 + sin(i / 5) * 0.01 + (i / (window - 1)) * 0.08`
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticGrowthModel;

const OSCILLATION_PERIOD: f64 = 5.0;
const OSCILLATION_AMPLITUDE: f64 = 0.01;
const WINDOW_DRIFT: f64 = 0.08;

impl ValuationModelTrait for SyntheticGrowthModel {
    fn growth_factor(&self, day_index: usize, window_days: usize) -> Decimal {
        let i = day_index as f64;
        let drift = if window_days > 1 {
            i / (window_days - 1) as f64
        } else {
            0.0
        };
        let factor = 1.0 + (i / OSCILLATION_PERIOD).sin() * OSCILLATION_AMPLITUDE + drift * WINDOW_DRIFT;
        Decimal::from_f64(factor).unwrap_or(Decimal::ONE)
    }
}
