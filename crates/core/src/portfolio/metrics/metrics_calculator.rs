//! Portfolio totals and weighted yield.

use log::{debug, warn};
use rust_decimal::Decimal;

use super::metrics_model::PortfolioMetrics;
use crate::portfolio::investments::Investment;
use crate::settings::YieldPolicyTable;

/// Computes portfolio totals and the value-weighted APR.
///
/// `weighted_apr = sum(current_value_i * apr_i) / total_current_value`, with
/// `apr_i` resolved through `policies`. When the total current value is not
/// positive the weighted APR is zero. A position whose contribution would
/// overflow any total is left out of every total.
pub fn calculate_portfolio_metrics(
    investments: &[Investment],
    policies: &YieldPolicyTable,
) -> PortfolioMetrics {
    let mut totals = Totals::default();
    for investment in investments {
        match totals.with(investment, policies.apr_for(&investment.vault_ref)) {
            Some(next) => totals = next,
            None => warn!(
                "Leaving position in vault {} out of portfolio metrics: totals overflow",
                investment.vault_ref
            ),
        }
    }

    let weighted_apr = if totals.current_value > Decimal::ZERO {
        totals
            .weighted_sum
            .checked_div(totals.current_value)
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    let metrics = PortfolioMetrics {
        total_principal: totals.principal,
        total_current_value: totals.current_value,
        total_profit: totals.profit,
        weighted_apr,
    };
    debug!(
        "Portfolio metrics over {} positions: value {}, weighted APR {}",
        investments.len(),
        metrics.total_current_value,
        metrics.weighted_apr
    );
    metrics
}

#[derive(Default)]
struct Totals {
    principal: Decimal,
    current_value: Decimal,
    profit: Decimal,
    weighted_sum: Decimal,
}

impl Totals {
    /// Totals after adding `investment`, or `None` if any sum overflows.
    fn with(&self, investment: &Investment, apr: Decimal) -> Option<Totals> {
        let principal = self.principal.checked_add(investment.principal)?;
        let current_value = self.current_value.checked_add(investment.current_value)?;
        let weighted = investment.current_value.checked_mul(apr)?;
        Some(Totals {
            principal,
            current_value,
            profit: current_value.checked_sub(principal)?,
            weighted_sum: self.weighted_sum.checked_add(weighted)?,
        })
    }
}
