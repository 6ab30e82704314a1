// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! # Neo Core
//!
//! Signers and witnesses for Neo N3 transactions.
//!
//! ## Features
//!
//! - **Witness scopes**: the flag set restricting where a witness is valid
//! - **Witness rules**: nested Allow/Deny condition trees with bounded depth
//! - **Signers**: account and contract signers with checked allow-lists
//! - **Witnesses**: single-signature, multi-signature and contract witnesses
//!
//! ## Example
//!
//! ```rust,no_run
//! use neo_core::{Account, SignerBuilder, WitnessScope};
//! use neo_primitives::Hash160;
//!
//! # fn main() -> Result<(), neo_core::CoreError> {
//! let account = Account::from_address("NPvKVTGZapmFWABLsyvfreuqn73jCjJtN1")?;
//! let signer = SignerBuilder::create_empty()
//!     .account(account)
//!     .add_witness_scope(WitnessScope::CalledByEntry)?
//!     .allow_contract(Hash160::parse("0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5")?)?
//!     .build()?;
//! println!("{}", signer.to_json());
//! # Ok(())
//! # }
//! ```

/// Wallet-supplied account material
pub mod account;
/// Builder pattern implementations for complex types
pub mod builders;
/// Core error types
pub mod error;
/// Transaction signers
pub mod signer;
/// Witness implementation
pub mod witness;
/// Witness rules and conditions
pub mod witness_rule;
/// Witness scope flags
pub mod witness_scope;
/// Invocation and verification scripts
pub mod witness_script;

pub use account::Account;
pub use builders::SignerBuilder;
pub use error::{CoreError, CoreResult};
pub use signer::{Signer, SignerKind};
pub use witness::{get_sign_data, Witness};
pub use witness_rule::{WitnessCondition, WitnessConditionType, WitnessRule, WitnessRuleAction};
pub use witness_scope::WitnessScope;
pub use witness_script::{InvocationScript, VerificationScript};
