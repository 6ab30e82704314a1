// Copyright (C) 2015-2025 The Neo Project.
//
// signer_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Builder for transaction signers.

use crate::{
    Account, CoreError, CoreResult, Signer, SignerKind, WitnessCondition, WitnessRule,
    WitnessRuleAction, WitnessScope,
};
use neo_config::SignerLimits;
use neo_cryptography::PublicKey;
use neo_primitives::Hash160;
use neo_smart_contract::ContractParameter;

/// Builder for transaction signers.
///
/// The signer starts with a placeholder `None` scope that the first added
/// scope, contract, group or rule replaces. Each step is checked as it is
/// applied, so a conflicting step fails right away.
#[derive(Debug)]
pub struct SignerBuilder {
    signer: Signer,
    has_account: bool,
}

impl SignerBuilder {
    /// Creates an empty SignerBuilder.
    ///
    /// # Returns
    ///
    /// A new SignerBuilder with no account and no scope.
    pub fn create_empty() -> Self {
        Self {
            signer: Signer::unscoped(
                Hash160::ZERO,
                SignerKind::Account(Account::from_script_hash(Hash160::ZERO)),
            ),
            has_account: false,
        }
    }

    /// Sets the account for the signer.
    ///
    /// # Arguments
    ///
    /// * `account` - The wallet account that signs
    ///
    /// # Returns
    ///
    /// Self for method chaining
    pub fn account(mut self, account: Account) -> Self {
        self.signer
            .set_identity(account.script_hash(), SignerKind::Account(account));
        self.has_account = true;
        self
    }

    /// Sets a contract as the signer.
    ///
    /// # Arguments
    ///
    /// * `contract_hash` - The hash of the contract that authorizes
    /// * `verify_params` - Arguments for the contract's `verify` method
    pub fn contract(mut self, contract_hash: Hash160, verify_params: Vec<ContractParameter>) -> Self {
        self.signer
            .set_identity(contract_hash, SignerKind::Contract { verify_params });
        self.has_account = true;
        self
    }

    /// Replaces the caps applied to the following steps.
    pub fn limits(mut self, limits: SignerLimits) -> Self {
        self.signer = self.signer.with_limits(limits);
        self
    }

    /// Allows a specific contract.
    ///
    /// # Arguments
    ///
    /// * `contract_hash` - The hash of the contract to allow
    ///
    /// # Errors
    ///
    /// Fails on a `Global` or `None` signer, or past the contract cap.
    pub fn allow_contract(mut self, contract_hash: Hash160) -> CoreResult<Self> {
        self.signer.allow_contracts(&[contract_hash])?;
        Ok(self)
    }

    /// Allows a specific group.
    ///
    /// # Arguments
    ///
    /// * `public_key` - The public key of the group to allow
    ///
    /// # Errors
    ///
    /// Fails on a `Global` or `None` signer, or past the group cap.
    pub fn allow_group(mut self, public_key: PublicKey) -> CoreResult<Self> {
        self.signer.allow_groups(&[public_key])?;
        Ok(self)
    }

    /// Adds a witness scope.
    ///
    /// # Arguments
    ///
    /// * `scope` - The witness scope to add
    ///
    /// # Errors
    ///
    /// Fails when `Global` or `None` would be combined with anything else.
    pub fn add_witness_scope(mut self, scope: WitnessScope) -> CoreResult<Self> {
        self.signer.add_scope(scope)?;
        Ok(self)
    }

    /// Adds a witness rule.
    ///
    /// # Arguments
    ///
    /// * `action` - Whether a match allows or denies the witness
    /// * `condition` - The condition to match
    ///
    /// # Errors
    ///
    /// Fails on a `Global` or `None` signer, past the rule cap, or when the
    /// condition is nested too deeply.
    pub fn add_witness_rule(
        mut self,
        action: WitnessRuleAction,
        condition: WitnessCondition,
    ) -> CoreResult<Self> {
        self.signer
            .add_rules(&[WitnessRule::new(action, condition)])?;
        Ok(self)
    }

    /// Builds the signer.
    ///
    /// A builder that never received a scope yields a `None` signer.
    pub fn build(self) -> CoreResult<Signer> {
        if !self.has_account {
            return Err(CoreError::InvalidAccount(
                "signer account was not set".to_string(),
            ));
        }
        self.signer.validate()?;
        Ok(self.signer)
    }
}

impl Default for SignerBuilder {
    fn default() -> Self {
        Self::create_empty()
    }
}
