//! Accounts: the wallet-side material a signer is built from.

use crate::{CoreError, CoreResult, VerificationScript, Witness};
use neo_config::{SigningSettings, ADDRESS_VERSION};
use neo_cryptography::{KeyPair, PublicKey};
use neo_primitives::Hash160;
use tracing::debug;

/// An account identified by its script hash.
///
/// Depending on how it was created an account may also know its
/// verification script and hold the key pair that signs for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    script_hash: Hash160,
    key_pair: Option<KeyPair>,
    verification_script: Option<VerificationScript>,
    address_version: u8,
}

impl Account {
    /// A single-signature account that can sign.
    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        let verification_script = VerificationScript::from_public_key(key_pair.public_key());
        Self {
            script_hash: verification_script.script_hash(),
            key_pair: Some(key_pair),
            verification_script: Some(verification_script),
            address_version: ADDRESS_VERSION,
        }
    }

    /// A single-signature account without its private key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self::from_verification_script(VerificationScript::from_public_key(public_key))
    }

    /// A `threshold`-of-`public_keys.len()` multi-signature account.
    pub fn multi_sig(threshold: usize, public_keys: &[PublicKey]) -> CoreResult<Self> {
        let script = VerificationScript::from_public_keys(threshold, public_keys)?;
        debug!(
            threshold,
            keys = public_keys.len(),
            account = %script.script_hash(),
            "multi-sig account created"
        );
        Ok(Self::from_verification_script(script))
    }

    /// A multi-signature account under operator settings: the key cap is
    /// `max_multisig_public_keys` and the address uses `address_version`.
    pub fn multi_sig_with_settings(
        threshold: usize,
        public_keys: &[PublicKey],
        settings: &SigningSettings,
    ) -> CoreResult<Self> {
        let script = VerificationScript::from_public_keys_with_max(
            threshold,
            public_keys,
            settings.max_multisig_public_keys,
        )?;
        Ok(Self::from_verification_script(script).with_settings(settings))
    }

    pub fn from_verification_script(verification_script: VerificationScript) -> Self {
        Self {
            script_hash: verification_script.script_hash(),
            key_pair: None,
            verification_script: Some(verification_script),
            address_version: ADDRESS_VERSION,
        }
    }

    /// An account known only by hash, such as a deployed contract.
    pub fn from_script_hash(script_hash: Hash160) -> Self {
        Self {
            script_hash,
            key_pair: None,
            verification_script: None,
            address_version: ADDRESS_VERSION,
        }
    }

    pub fn from_address(address: &str) -> CoreResult<Self> {
        Ok(Self::from_script_hash(Hash160::from_address(address)?))
    }

    /// Uses `version` instead of the N3 default when rendering the address.
    pub fn with_address_version(mut self, version: u8) -> Self {
        self.address_version = version;
        self
    }

    /// Applies the address version of `settings`.
    pub fn with_settings(self, settings: &SigningSettings) -> Self {
        self.with_address_version(settings.address_version)
    }

    pub fn address_version(&self) -> u8 {
        self.address_version
    }

    pub fn script_hash(&self) -> Hash160 {
        self.script_hash
    }

    pub fn address(&self) -> String {
        self.script_hash.to_address_with_version(self.address_version)
    }

    pub fn key_pair(&self) -> Option<&KeyPair> {
        self.key_pair.as_ref()
    }

    pub fn verification_script(&self) -> Option<&VerificationScript> {
        self.verification_script.as_ref()
    }

    pub fn is_multi_sig(&self) -> bool {
        self.verification_script
            .as_ref()
            .is_some_and(VerificationScript::is_multi_sig)
    }

    /// Number of signatures the account needs.
    pub fn signing_threshold(&self) -> CoreResult<usize> {
        self.known_script()?.signing_threshold()
    }

    pub fn nr_of_participants(&self) -> CoreResult<usize> {
        self.known_script()?.nr_of_accounts()
    }

    /// Signs `message` and returns a single-signature witness.
    pub fn sign(&self, message: &[u8]) -> CoreResult<Witness> {
        let key_pair = self.key_pair.as_ref().ok_or_else(|| {
            CoreError::InvalidAccount(format!("account {} holds no key pair", self.script_hash))
        })?;
        Witness::create(message, key_pair)
    }

    fn known_script(&self) -> CoreResult<&VerificationScript> {
        self.verification_script.as_ref().ok_or_else(|| {
            CoreError::InvalidAccount(format!(
                "account {} has no verification script",
                self.script_hash
            ))
        })
    }
}
