//! Loading signing settings the way an application would.

use neo_config::{ConfigError, NetworkType, SignerLimits, SigningSettings};
use std::io::Write;

/// Settings written by an operator, with comments and partial tables.
const OPERATOR_SETTINGS: &str = r#"
# Signing limits for a private network
network = "Private"
address_version = 53

[signer]
max_allowed_contracts = 4
max_rules = 2
"#;

#[test]
fn test_operator_file_overrides_only_named_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(OPERATOR_SETTINGS.as_bytes()).unwrap();

    let settings = SigningSettings::load(file.path()).unwrap();
    assert_eq!(settings.network, NetworkType::Private);
    assert_eq!(settings.network.magic(), 0);
    assert_eq!(
        settings.signer,
        SignerLimits {
            max_allowed_contracts: 4,
            max_rules: 2,
            ..SignerLimits::default()
        }
    );
    assert_eq!(settings.max_verification_script, 1024);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SigningSettings::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_multisig_key_cap_bounded_by_protocol() {
    let err = SigningSettings::from_toml_str("max_multisig_public_keys = 2048").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "max_multisig_public_keys",
            ..
        }
    ));
}

#[test]
fn test_settings_serialize_back_to_same_values() {
    let settings = SigningSettings::from_toml_str(OPERATOR_SETTINGS).unwrap();
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(json["network"], "Private");
    assert_eq!(json["signer"]["max_rules"], 2);

    let text = toml::to_string(&settings).unwrap();
    assert_eq!(SigningSettings::from_toml_str(&text).unwrap(), settings);
}
