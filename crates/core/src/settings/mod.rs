pub mod settings_model;
pub mod yield_policy;
pub use settings_model::*;
pub use yield_policy::{normalize_vault_ref, YieldPolicy, YieldPolicyTable};
