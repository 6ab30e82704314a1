//! Contract: a verification script together with its parameter list.

use crate::{ContractError, ContractParameterType, ContractResult};
use neo_config::MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT;
use neo_cryptography::PublicKey;
use neo_primitives::Hash160;
use neo_vm::{InteropService, OpCode, ScriptBuilder};
use std::sync::OnceLock;
use tracing::debug;

/// Represents a contract that can be invoked
#[derive(Clone, Debug)]
pub struct Contract {
    /// The script of the contract
    pub script: Vec<u8>,

    /// The parameters of the contract
    pub parameter_list: Vec<ContractParameterType>,

    /// Cached script hash
    script_hash_cache: OnceLock<Hash160>,
}

impl Contract {
    /// Creates a new instance
    pub fn create(parameter_list: Vec<ContractParameterType>, redeem_script: Vec<u8>) -> Self {
        Self {
            script: redeem_script,
            parameter_list,
            script_hash_cache: OnceLock::new(),
        }
    }

    /// Constructs a special contract with empty script
    pub fn create_with_hash(
        script_hash: Hash160,
        parameter_list: Vec<ContractParameterType>,
    ) -> Self {
        Self {
            script: Vec::new(),
            parameter_list,
            script_hash_cache: OnceLock::from(script_hash),
        }
    }

    /// Gets the hash of the contract
    pub fn script_hash(&self) -> Hash160 {
        *self
            .script_hash_cache
            .get_or_init(|| Hash160::from_script(&self.script))
    }

    pub fn address(&self) -> String {
        self.script_hash().to_address()
    }

    pub fn address_with_version(&self, version: u8) -> String {
        self.script_hash().to_address_with_version(version)
    }

    /// Creates a signature contract
    pub fn create_signature_contract(public_key: &PublicKey) -> Self {
        let script = Self::create_signature_redeem_script(public_key);
        Self::create(vec![ContractParameterType::Signature], script)
    }

    /// Creates the script of a signature contract.
    pub fn create_signature_redeem_script(public_key: &PublicKey) -> Vec<u8> {
        let mut builder = ScriptBuilder::with_capacity(40);
        builder
            .emit_push_public_key(public_key)
            .emit_syscall(InteropService::SystemCryptoCheckSig);
        builder.into_script()
    }

    /// Creates a multi-sig contract
    pub fn create_multi_sig_contract(m: usize, public_keys: &[PublicKey]) -> ContractResult<Self> {
        let script = Self::create_multi_sig_redeem_script(m, public_keys)?;
        Ok(Self::create(vec![ContractParameterType::Signature; m], script))
    }

    /// Creates the script of a multi-sig contract.
    ///
    /// Keys are emitted in ascending order whatever order they are given in,
    /// so the same key set always yields the same script.
    pub fn create_multi_sig_redeem_script(
        m: usize,
        public_keys: &[PublicKey],
    ) -> ContractResult<Vec<u8>> {
        Self::create_multi_sig_redeem_script_with_max(
            m,
            public_keys,
            MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT,
        )
    }

    /// Like [`Contract::create_multi_sig_redeem_script`] with an operator
    /// supplied cap on the number of keys.
    pub fn create_multi_sig_redeem_script_with_max(
        m: usize,
        public_keys: &[PublicKey],
        max_public_keys: usize,
    ) -> ContractResult<Vec<u8>> {
        let n = public_keys.len();
        if n > max_public_keys {
            return Err(ContractError::TooManyPublicKeys {
                count: n,
                max: max_public_keys,
            });
        }
        if !(1..=n).contains(&m) {
            return Err(ContractError::InvalidThreshold {
                threshold: m,
                keys: n,
            });
        }

        let mut sorted_keys = public_keys.to_vec();
        sorted_keys.sort();

        let mut builder = ScriptBuilder::with_capacity(n * 34 + 8);
        builder.emit_push_int(m as i64);
        for key in &sorted_keys {
            builder.emit_push_public_key(key);
        }
        builder
            .emit_push_int(n as i64)
            .emit_syscall(InteropService::SystemCryptoCheckMultisig);

        debug!(threshold = m, keys = n, "multi-sig redeem script built");
        Ok(builder.into_script())
    }
}

impl PartialEq for Contract {
    fn eq(&self, other: &Self) -> bool {
        self.script_hash() == other.script_hash() && self.parameter_list == other.parameter_list
    }
}

impl Eq for Contract {}

trait EmitPublicKey {
    fn emit_push_public_key(&mut self, key: &PublicKey) -> &mut Self;
}

impl EmitPublicKey for ScriptBuilder {
    // 33 bytes always fits PUSHDATA1.
    fn emit_push_public_key(&mut self, key: &PublicKey) -> &mut Self {
        let compressed = key.to_compressed();
        self.emit_instruction(OpCode::PUSHDATA1, &[compressed.len() as u8])
            .emit_raw(&compressed)
    }
}
