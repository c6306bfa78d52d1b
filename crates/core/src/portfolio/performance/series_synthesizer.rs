//! Trailing-window performance series.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::growth_model::ValuationModelTrait;
use super::performance_model::PerformancePoint;
use crate::activities::{Activity, ActivityKind};
use crate::constants::PERFORMANCE_WINDOW_DAYS;
use crate::utils::time_utils::trailing_window;

/// Builds the value curve for the trailing window ending on `today`, inclusive.
///
/// Values come from `model` applied to `total_principal`. Deposits in
/// `activities` are attributed to their UTC calendar day; days whose deposit
/// sum is not positive carry no `deposited_that_day`. A day whose value
/// overflows is reported as zero value and zero profit.
pub fn synthesize_performance_series(
    total_principal: Decimal,
    activities: &[Activity],
    today: NaiveDate,
    model: &dyn ValuationModelTrait,
) -> Vec<PerformancePoint> {
    let days = trailing_window(today, PERFORMANCE_WINDOW_DAYS);
    let deposits = deposits_by_day(activities, &days);

    let series: Vec<PerformancePoint> = days
        .iter()
        .enumerate()
        .map(|(day_index, date)| {
            let factor = model.growth_factor(day_index, PERFORMANCE_WINDOW_DAYS);
            let (value, profit) = total_principal
                .checked_mul(factor)
                .and_then(|value| Some((value, value.checked_sub(total_principal)?)))
                .unwrap_or_else(|| {
                    warn!(
                        "Performance value for {} overflows (principal {}, factor {}); reporting zero",
                        date, total_principal, factor
                    );
                    (Decimal::ZERO, Decimal::ZERO)
                });
            PerformancePoint {
                date: *date,
                value,
                profit,
                deposited_that_day: deposits
                    .get(date)
                    .copied()
                    .filter(|amount| *amount > Decimal::ZERO),
            }
        })
        .collect();

    debug!(
        "Synthesized {} performance points ending {} from principal {}",
        series.len(),
        today,
        total_principal
    );
    series
}

fn deposits_by_day(activities: &[Activity], days: &[NaiveDate]) -> HashMap<NaiveDate, Decimal> {
    let (first, last) = match (days.first(), days.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return HashMap::new(),
    };

    let mut totals: HashMap<NaiveDate, Decimal> = HashMap::new();
    for activity in activities
        .iter()
        .filter(|activity| activity.kind == ActivityKind::Deposit)
    {
        let date = activity.effective_date();
        if date < first || date > last {
            continue;
        }
        let total = totals.entry(date).or_insert(Decimal::ZERO);
        match total.checked_add(activity.amt()) {
            Some(sum) => *total = sum,
            None => warn!(
                "Leaving deposit {} out of the {} total: sum overflows",
                activity.id, date
            ),
        }
    }
    totals
}
