//! Invocation and verification scripts of a witness.

use crate::{CoreError, CoreResult};
use neo_cryptography::{KeyPair, PublicKey, Signature};
use neo_primitives::Hash160;
use neo_smart_contract::{helper, Contract, ContractParameter, ScriptBuilderExt};
use neo_vm::{OpCode, ScriptBuilder, ScriptReader};
use std::fmt;

/// Inputs consumed by a verification script or a contract's `verify`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct InvocationScript(Vec<u8>);

impl InvocationScript {
    pub fn new(script: Vec<u8>) -> Self {
        Self(script)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// A script pushing a single signature.
    pub fn from_signature(signature: &Signature) -> Self {
        Self::from_signatures(std::slice::from_ref(signature))
    }

    /// A script pushing each signature, in the given order.
    pub fn from_signatures(signatures: &[Signature]) -> Self {
        let mut builder = ScriptBuilder::with_capacity(signatures.len() * 66);
        for signature in signatures {
            // 64 bytes always fits PUSHDATA1.
            builder
                .emit_instruction(OpCode::PUSHDATA1, &[signature.as_bytes().len() as u8])
                .emit_raw(signature.as_bytes());
        }
        Self(builder.into_script())
    }

    /// Signs `message` with `key_pair` and wraps the signature.
    pub fn from_message_and_key_pair(message: &[u8], key_pair: &KeyPair) -> CoreResult<Self> {
        let signature = key_pair.sign(message)?;
        Ok(Self::from_signature(&signature))
    }

    /// A script pushing each parameter in order, as arguments for a
    /// contract's `verify` method.
    pub fn from_parameters(parameters: &[ContractParameter]) -> CoreResult<Self> {
        let mut builder = ScriptBuilder::new();
        for parameter in parameters {
            builder.emit_push_parameter(parameter)?;
        }
        Ok(Self(builder.into_script()))
    }

    /// The signatures pushed by this script. Pushes that are not 64 bytes
    /// long are skipped.
    pub fn signatures(&self) -> Vec<Signature> {
        ScriptReader::new(&self.0)
            .map_while(Result::ok)
            .filter_map(|instruction| instruction.push_data())
            .filter_map(|data| Signature::from_slice(data).ok())
            .collect()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for InvocationScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvocationScript({})", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for InvocationScript {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for InvocationScript {
    fn from(script: Vec<u8>) -> Self {
        Self(script)
    }
}

/// The script whose hash identifies an account and which checks its
/// signatures.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct VerificationScript(Vec<u8>);

impl VerificationScript {
    pub fn new(script: Vec<u8>) -> Self {
        Self(script)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The single-signature check script of `public_key`.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(Contract::create_signature_redeem_script(public_key))
    }

    /// The `threshold`-of-`public_keys.len()` check script. Keys are sorted.
    pub fn from_public_keys(threshold: usize, public_keys: &[PublicKey]) -> CoreResult<Self> {
        Ok(Self(Contract::create_multi_sig_redeem_script(
            threshold,
            public_keys,
        )?))
    }

    /// As [`VerificationScript::from_public_keys`], rejecting more than
    /// `max_public_keys` keys.
    pub fn from_public_keys_with_max(
        threshold: usize,
        public_keys: &[PublicKey],
        max_public_keys: usize,
    ) -> CoreResult<Self> {
        Ok(Self(Contract::create_multi_sig_redeem_script_with_max(
            threshold,
            public_keys,
            max_public_keys,
        )?))
    }

    pub fn is_single_sig(&self) -> bool {
        helper::is_signature_contract(&self.0)
    }

    pub fn is_multi_sig(&self) -> bool {
        helper::is_multi_sig_contract(&self.0)
    }

    /// Number of signatures needed to satisfy this script.
    pub fn signing_threshold(&self) -> CoreResult<usize> {
        if self.is_single_sig() {
            return Ok(1);
        }
        helper::parse_multi_sig_contract(&self.0)
            .map(|(threshold, _)| threshold)
            .ok_or_else(|| CoreError::InvalidAccount(self.not_standard()))
    }

    /// Number of keys that may sign for this script.
    pub fn nr_of_accounts(&self) -> CoreResult<usize> {
        Ok(self.public_keys()?.len())
    }

    /// The keys this script checks, in script order.
    pub fn public_keys(&self) -> CoreResult<Vec<PublicKey>> {
        if let Some(key) = helper::signature_contract_key(&self.0) {
            return Ok(vec![key]);
        }
        helper::parse_multi_sig_contract(&self.0)
            .map(|(_, keys)| keys)
            .ok_or_else(|| CoreError::InvalidAccount(self.not_standard()))
    }

    pub fn script_hash(&self) -> Hash160 {
        Hash160::from_script(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn not_standard(&self) -> String {
        format!(
            "verification script {} is neither single- nor multi-signature",
            self.script_hash()
        )
    }
}

impl fmt::Debug for VerificationScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerificationScript({})", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for VerificationScript {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for VerificationScript {
    fn from(script: Vec<u8>) -> Self {
        Self(script)
    }
}
