//! Explicit vault to yield-policy mapping.
//!
//! APR estimates are looked up by vault reference. There is no inference from
//! vault names: a vault missing from the table gets `default_apr`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::DEFAULT_APR_ESTIMATE;
use crate::errors::{Error, Result};

/// Normalizes a vault reference for table lookups (trimmed, ASCII lowercase).
pub fn normalize_vault_ref(vault_ref: &str) -> String {
    vault_ref.trim().to_ascii_lowercase()
}

/// Yield estimate for one vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPolicy {
    pub vault_ref: String,
    /// Annual percentage rate, in percent (e.g. `21.5`).
    pub apr_estimate: Decimal,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YieldPolicyTable {
    pub policies: Vec<YieldPolicy>,
    pub default_apr: Decimal,
}

impl Default for YieldPolicyTable {
    fn default() -> Self {
        YieldPolicyTable {
            policies: vec![
                YieldPolicy {
                    vault_ref: "deep-sui".to_string(),
                    apr_estimate: dec!(21.5),
                    label: Some("DEEP-SUI".to_string()),
                },
                YieldPolicy {
                    vault_ref: "cetus-sui".to_string(),
                    apr_estimate: dec!(18.9),
                    label: Some("CETUS-SUI".to_string()),
                },
            ],
            default_apr: DEFAULT_APR_ESTIMATE,
        }
    }
}

impl YieldPolicyTable {
    pub fn new(policies: Vec<YieldPolicy>, default_apr: Decimal) -> Self {
        YieldPolicyTable {
            policies,
            default_apr,
        }
    }

    pub fn policy_for(&self, vault_ref: &str) -> Option<&YieldPolicy> {
        let key = normalize_vault_ref(vault_ref);
        self.policies
            .iter()
            .find(|policy| normalize_vault_ref(&policy.vault_ref) == key)
    }

    /// APR estimate for a vault, falling back to `default_apr`.
    pub fn apr_for(&self, vault_ref: &str) -> Decimal {
        self.policy_for(vault_ref)
            .map(|policy| policy.apr_estimate)
            .unwrap_or(self.default_apr)
    }

    /// Smallest and largest APR any lookup can return.
    pub fn apr_bounds(&self) -> (Decimal, Decimal) {
        self.policies.iter().fold(
            (self.default_apr, self.default_apr),
            |(lo, hi), policy| (lo.min(policy.apr_estimate), hi.max(policy.apr_estimate)),
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_apr.is_sign_negative() {
            return Err(Error::InvalidConfigValue(format!(
                "defaultApr must not be negative, got {}",
                self.default_apr
            )));
        }

        let mut seen = HashSet::new();
        for policy in &self.policies {
            let key = normalize_vault_ref(&policy.vault_ref);
            if key.is_empty() {
                return Err(Error::InvalidConfigValue(
                    "yield policy with an empty vaultRef".to_string(),
                ));
            }
            if policy.apr_estimate.is_sign_negative() {
                return Err(Error::InvalidConfigValue(format!(
                    "aprEstimate for '{}' must not be negative, got {}",
                    policy.vault_ref, policy.apr_estimate
                )));
            }
            if !seen.insert(key) {
                return Err(Error::InvalidConfigValue(format!(
                    "duplicate yield policy for '{}'",
                    policy.vault_ref
                )));
            }
        }
        Ok(())
    }
}
