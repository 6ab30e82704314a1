//! Loadable signing limits.

use crate::{
    NetworkType, ADDRESS_VERSION, MAX_INVOCATION_SCRIPT, MAX_NESTING_DEPTH,
    MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT, MAX_SIGNER_SUBITEMS, MAX_VERIFICATION_SCRIPT,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Per-list caps and condition depth enforced by a signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerLimits {
    pub max_allowed_contracts: usize,
    pub max_allowed_groups: usize,
    pub max_rules: usize,
    pub max_nesting_depth: usize,
}

impl Default for SignerLimits {
    fn default() -> Self {
        Self {
            max_allowed_contracts: MAX_SIGNER_SUBITEMS,
            max_allowed_groups: MAX_SIGNER_SUBITEMS,
            max_rules: MAX_SIGNER_SUBITEMS,
            max_nesting_depth: MAX_NESTING_DEPTH,
        }
    }
}

impl SignerLimits {
    /// Rejects limits that would make every non-empty list invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("max_allowed_contracts", self.max_allowed_contracts),
            ("max_allowed_groups", self.max_allowed_groups),
            ("max_rules", self.max_rules),
            ("max_nesting_depth", self.max_nesting_depth),
        ];
        for (field, value) in checks {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Settings consumed by the signing crates.
///
/// Every field has a protocol default, so a settings file only needs to
/// name the values it overrides:
///
/// ```toml
/// network = "MainNet"
///
/// [signer]
/// max_rules = 8
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningSettings {
    pub network: NetworkType,
    pub address_version: u8,
    pub max_invocation_script: usize,
    pub max_verification_script: usize,
    pub max_multisig_public_keys: usize,
    pub signer: SignerLimits,
}

impl Default for SigningSettings {
    fn default() -> Self {
        Self {
            network: NetworkType::default(),
            address_version: ADDRESS_VERSION,
            max_invocation_script: MAX_INVOCATION_SCRIPT,
            max_verification_script: MAX_VERIFICATION_SCRIPT,
            max_multisig_public_keys: MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT,
            signer: SignerLimits::default(),
        }
    }
}

impl SigningSettings {
    /// Parses settings from TOML text and validates them.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: SigningSettings = toml::from_str(text)?;
        settings.validate()?;
        debug!(
            network = ?settings.network,
            max_nesting_depth = settings.signer.max_nesting_depth,
            "loaded signing settings"
        );
        Ok(settings)
    }

    /// Reads and parses a TOML settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Err(err) = self.signer.validate() {
            warn!(%err, "rejected signer limits");
            return Err(err);
        }
        if self.max_invocation_script == 0 || self.max_verification_script == 0 {
            return Err(ConfigError::Invalid {
                field: "max_invocation_script",
                reason: "script caps must be greater than zero".to_string(),
            });
        }
        if self.max_multisig_public_keys == 0
            || self.max_multisig_public_keys > MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT
        {
            return Err(ConfigError::Invalid {
                field: "max_multisig_public_keys",
                reason: format!("must be in 1..={MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT}"),
            });
        }
        Ok(())
    }
}
