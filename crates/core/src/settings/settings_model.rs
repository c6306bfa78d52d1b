//! Engine settings.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::yield_policy::YieldPolicyTable;
use crate::constants::DEFAULT_ACTOR_REF_PREFIX_LEN;
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    pub actor_ref_prefix_len: usize,
    pub yield_policies: YieldPolicyTable,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            actor_ref_prefix_len: DEFAULT_ACTOR_REF_PREFIX_LEN,
            yield_policies: YieldPolicyTable::default(),
        }
    }
}

impl EngineSettings {
    /// Parses settings from JSON. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        debug!(
            "Loaded engine settings with {} yield policies",
            settings.yield_policies.policies.len()
        );
        Ok(settings)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading engine settings from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.actor_ref_prefix_len == 0 {
            return Err(Error::InvalidConfigValue(
                "actorRefPrefixLen must be at least 1".to_string(),
            ));
        }
        self.yield_policies.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_json_yields_defaults() {
        let settings = EngineSettings::from_json_str("{}").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.actor_ref_prefix_len, 8);
    }

    #[test]
    fn test_custom_policy_table() {
        let settings = EngineSettings::from_json_str(
            r#"{
                "actorRefPrefixLen": 6,
                "yieldPolicies": {
                    "policies": [{"vaultRef": "sui-usdc", "aprEstimate": 9.75}],
                    "defaultApr": 5
                }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.actor_ref_prefix_len, 6);
        assert_eq!(settings.yield_policies.apr_for("SUI-USDC"), dec!(9.75));
        assert_eq!(settings.yield_policies.apr_for("deep-sui"), dec!(5));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            EngineSettings::from_json_str(r#"{"actorRefPrefixLen": 0}"#),
            Err(Error::InvalidConfigValue(_))
        ));
        assert!(matches!(
            EngineSettings::from_json_str(r#"{"actorRefPrefixLen": "eight"}"#),
            Err(Error::InvalidConfigValue(_))
        ));
    }

    #[test]
    fn test_missing_file_is_config_io_error() {
        let err = EngineSettings::from_file("/nonexistent/vaultfolio/settings.json").unwrap_err();
        assert!(matches!(err, Error::ConfigIO(_)));
    }
}
