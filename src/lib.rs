//! # Neo Signing: Neo N3 transaction witnesses in Rust
//!
//! Builds the pieces a Neo N3 transaction needs before it can be relayed:
//! invocation scripts, signers with their witness scopes, and the witnesses
//! that authorize them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neo_signing::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = SigningSettings::default();
//!     let key_pair = KeyPair::generate(&mut rand::thread_rng())?;
//!     let signer = Signer::called_by_entry(Account::from_key_pair(key_pair));
//!
//!     let mut builder = ScriptBuilder::new();
//!     builder.emit_contract_call(
//!         &Hash160::parse("0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5")?,
//!         "symbol",
//!         &[],
//!         CallFlags::READ_ONLY,
//!     )?;
//!     let script = builder.into_script();
//!
//!     let tx_hash = Hash256::sha256(&script);
//!     let witnesses = sign_transaction(&[signer], &tx_hash, &settings)?;
//!     assert_eq!(witnesses.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`neo_io`] - Binary codec: var-ints, readers, writers
//! - [`neo_primitives`] - `Hash160`, `Hash256` and addresses
//! - [`neo_cryptography`] - secp256r1 keys and signatures
//! - [`neo_vm`] - Opcodes and the script builder
//! - [`neo_smart_contract`] - Contract parameters, contract calls, verification scripts
//! - [`neo_core`] - Witness scopes, rules, signers and witnesses
//! - [`neo_config`] - Protocol constants and loadable limits

#![warn(rustdoc::missing_crate_level_docs)]

pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_io as io;
pub use neo_primitives as primitives;
pub use neo_smart_contract as smart_contract;
pub use neo_vm as vm;

pub mod signing;

pub use signing::sign_transaction;

/// Common imports for building and signing transactions
pub mod prelude {
    pub use crate::config::{NetworkType, SignerLimits, SigningSettings};
    pub use crate::core::{
        Account, CoreError, CoreResult, InvocationScript, Signer, SignerBuilder, SignerKind,
        VerificationScript, Witness, WitnessCondition, WitnessRule, WitnessRuleAction,
        WitnessScope,
    };
    pub use crate::crypto::{KeyPair, PrivateKey, PublicKey, Signature};
    pub use crate::io::{BinaryWriter, MemoryReader, Serializable, SerializableExt};
    pub use crate::primitives::{Hash160, Hash256};
    pub use crate::signing::sign_transaction;
    pub use crate::smart_contract::{
        CallFlags, Contract, ContractParameter, ContractParameterType, ScriptBuilderExt,
    };
    pub use crate::vm::{OpCode, ScriptBuilder};
}
