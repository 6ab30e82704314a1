//! Transaction signers: an account plus the scopes its witness is valid in.

use crate::{Account, CoreError, CoreResult, Witness, WitnessRule, WitnessScope};
use neo_config::{SignerLimits, ADDRESS_SIZE};
use neo_cryptography::PublicKey;
use neo_io::serializable::helper::{
    deserialize_array, deserialize_array_with, get_array_size, serialize_array,
};
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use neo_primitives::Hash160;
use neo_smart_contract::ContractParameter;
use serde_json::{Map as JsonMap, Value};
use std::fmt;
use tracing::debug;

/// What stands behind a signer's script hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerKind {
    /// A wallet account, possibly holding the key that signs for it.
    Account(Account),
    /// A deployed contract authorizing through its `verify` method.
    Contract {
        /// Arguments passed to `verify`.
        verify_params: Vec<ContractParameter>,
    },
}

/// Represents a signer of a transaction.
///
/// Scope consistency is checked whenever the signer is mutated: `Global` and
/// `None` never share the scope byte with another flag, and each allow-list
/// stays within its [`SignerLimits`] cap.
#[derive(Debug, Clone)]
pub struct Signer {
    account: Hash160,
    scopes: WitnessScope,
    allowed_contracts: Vec<Hash160>,
    allowed_groups: Vec<PublicKey>,
    rules: Vec<WitnessRule>,
    kind: SignerKind,
    limits: SignerLimits,
    // `None` set only as a starting value, replaced by the first flag added.
    placeholder: bool,
}

impl Signer {
    fn with_kind(account: Hash160, kind: SignerKind, scopes: WitnessScope) -> Self {
        Self {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
            rules: Vec::new(),
            kind,
            limits: SignerLimits::default(),
            placeholder: false,
        }
    }

    /// A signer for `account` whose witness is only used for fee payment.
    pub fn none(account: Account) -> Self {
        Self::with_kind(
            account.script_hash(),
            SignerKind::Account(account),
            WitnessScope::None,
        )
    }

    /// A signer for `account` valid in the entry script and contracts it
    /// calls directly.
    pub fn called_by_entry(account: Account) -> Self {
        Self::with_kind(
            account.script_hash(),
            SignerKind::Account(account),
            WitnessScope::CalledByEntry,
        )
    }

    /// A signer for `account` valid everywhere.
    pub fn global(account: Account) -> Self {
        Self::with_kind(
            account.script_hash(),
            SignerKind::Account(account),
            WitnessScope::Global,
        )
    }

    /// A signer for `account` with the combination of `scopes`.
    pub fn with_scopes(account: Account, scopes: &[WitnessScope]) -> CoreResult<Self> {
        let combined = WitnessScope::combine_all(scopes)?;
        Ok(Self::with_kind(
            account.script_hash(),
            SignerKind::Account(account),
            combined,
        ))
    }

    /// A contract signer with the given scopes.
    pub fn contract(
        contract_hash: Hash160,
        verify_params: Vec<ContractParameter>,
        scopes: &[WitnessScope],
    ) -> CoreResult<Self> {
        let combined = WitnessScope::combine_all(scopes)?;
        Ok(Self::with_kind(
            contract_hash,
            SignerKind::Contract { verify_params },
            combined,
        ))
    }

    pub fn contract_called_by_entry(
        contract_hash: Hash160,
        verify_params: Vec<ContractParameter>,
    ) -> Self {
        Self::with_kind(
            contract_hash,
            SignerKind::Contract { verify_params },
            WitnessScope::CalledByEntry,
        )
    }

    pub fn contract_global(contract_hash: Hash160, verify_params: Vec<ContractParameter>) -> Self {
        Self::with_kind(
            contract_hash,
            SignerKind::Contract { verify_params },
            WitnessScope::Global,
        )
    }

    /// A signer whose `None` scope gives way to the first flag added.
    pub(crate) fn unscoped(account: Hash160, kind: SignerKind) -> Self {
        let mut signer = Self::with_kind(account, kind, WitnessScope::None);
        signer.placeholder = true;
        signer
    }

    /// Rebinds the signer to another account or contract, keeping its
    /// scopes and lists.
    pub(crate) fn set_identity(&mut self, account: Hash160, kind: SignerKind) {
        self.account = account;
        self.kind = kind;
    }

    /// Replaces the caps checked by later mutations.
    pub fn with_limits(mut self, limits: SignerLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn account(&self) -> Hash160 {
        self.account
    }

    pub fn scopes(&self) -> WitnessScope {
        self.scopes
    }

    pub fn allowed_contracts(&self) -> &[Hash160] {
        &self.allowed_contracts
    }

    pub fn allowed_groups(&self) -> &[PublicKey] {
        &self.allowed_groups
    }

    pub fn rules(&self) -> &[WitnessRule] {
        &self.rules
    }

    pub fn kind(&self) -> &SignerKind {
        &self.kind
    }

    pub fn limits(&self) -> &SignerLimits {
        &self.limits
    }

    pub fn is_contract(&self) -> bool {
        matches!(self.kind, SignerKind::Contract { .. })
    }

    /// Parameters for the contract's `verify`, empty for account signers.
    pub fn verify_params(&self) -> &[ContractParameter] {
        match &self.kind {
            SignerKind::Contract { verify_params } => verify_params,
            SignerKind::Account(_) => &[],
        }
    }

    /// Adds `scope` to the signer's scope set.
    ///
    /// `Global` and `None` may only be set on a signer that has no other
    /// flag and no allow-lists.
    pub fn add_scope(&mut self, scope: WitnessScope) -> CoreResult<&mut Self> {
        if !scope.is_valid() {
            return Err(CoreError::InvalidScope(format!("0x{:02x}", scope.to_byte())));
        }
        let has_lists = !(self.allowed_contracts.is_empty()
            && self.allowed_groups.is_empty()
            && self.rules.is_empty());
        if scope == WitnessScope::Global && has_lists {
            return Err(CoreError::GlobalScopeConflict);
        }
        if scope == WitnessScope::None && has_lists {
            return Err(CoreError::NoneScopeConflict);
        }

        let mut scopes = Vec::with_capacity(2);
        if !self.placeholder {
            scopes.push(self.scopes);
        }
        scopes.push(scope);
        let combined = WitnessScope::combine_all(&scopes)?;

        debug!(account = %self.account, scopes = %combined, "signer scope added");
        self.scopes = combined;
        self.placeholder = false;
        Ok(self)
    }

    /// Appends contracts this witness may be used in and sets
    /// `CustomContracts`.
    pub fn allow_contracts(&mut self, contracts: &[Hash160]) -> CoreResult<&mut Self> {
        self.check_list(
            "allowed contracts",
            self.allowed_contracts.len() + contracts.len(),
            self.limits.max_allowed_contracts,
        )?;
        self.allowed_contracts.extend_from_slice(contracts);
        self.set_flag(WitnessScope::CustomContracts);
        Ok(self)
    }

    /// Appends group keys this witness may be used under and sets
    /// `CustomGroups`.
    pub fn allow_groups(&mut self, groups: &[PublicKey]) -> CoreResult<&mut Self> {
        self.check_list(
            "allowed groups",
            self.allowed_groups.len() + groups.len(),
            self.limits.max_allowed_groups,
        )?;
        self.allowed_groups.extend_from_slice(groups);
        self.set_flag(WitnessScope::CustomGroups);
        Ok(self)
    }

    /// Appends witness rules and sets `WitnessRules`.
    ///
    /// Each rule's condition tree is checked against the nesting limit
    /// first; nothing is added if any rule fails.
    pub fn add_rules(&mut self, rules: &[WitnessRule]) -> CoreResult<&mut Self> {
        self.check_list(
            "rules",
            self.rules.len() + rules.len(),
            self.limits.max_rules,
        )?;
        for rule in rules {
            rule.validate(self.limits.max_nesting_depth)?;
        }
        self.rules.extend_from_slice(rules);
        self.set_flag(WitnessScope::WitnessRules);
        Ok(self)
    }

    fn check_list(&self, list: &'static str, actual: usize, max: usize) -> CoreResult<()> {
        if self.scopes == WitnessScope::Global {
            return Err(CoreError::GlobalScopeConflict);
        }
        if self.scopes == WitnessScope::None && !self.placeholder {
            return Err(CoreError::NoneScopeConflict);
        }
        if actual > max {
            return Err(CoreError::TooManySubitems { list, max, actual });
        }
        Ok(())
    }

    fn set_flag(&mut self, flag: WitnessScope) {
        self.scopes = if self.placeholder {
            flag
        } else {
            self.scopes.combine(flag)
        };
        self.placeholder = false;
        debug!(account = %self.account, scopes = %self.scopes, "signer scope updated");
    }

    /// Builds the witness for this signer over `message`.
    ///
    /// Contract signers produce a contract witness from their `verify`
    /// parameters. Account signers need a single-signature account holding
    /// its key pair; multi-signature witnesses are assembled from collected
    /// signatures with [`Witness::create_multi_sig`].
    pub fn create_witness(&self, message: &[u8]) -> CoreResult<Witness> {
        match &self.kind {
            SignerKind::Contract { verify_params } => Witness::create_contract_witness(verify_params),
            SignerKind::Account(account) if account.is_multi_sig() => {
                Err(CoreError::InvalidAccount(format!(
                    "account {} is multi-signature; collect signatures and use Witness::create_multi_sig",
                    self.account
                )))
            }
            SignerKind::Account(account) => account.sign(message),
        }
    }

    /// Decodes a signer, checking each list against `limits`.
    ///
    /// Decoded signers are backed by a script-hash-only account.
    pub fn deserialize_with_limits(
        reader: &mut MemoryReader,
        limits: &SignerLimits,
    ) -> IoResult<Self> {
        let account = <Hash160 as Serializable>::deserialize(reader)?;
        let scope_byte = reader.read_u8()?;
        let scopes = WitnessScope::from_byte(scope_byte)
            .ok_or_else(|| IoError::invalid_data(format!("invalid witness scope 0x{scope_byte:02x}")))?;

        let allowed_contracts = if scopes.has_flag(WitnessScope::CustomContracts) {
            deserialize_array::<Hash160>(reader, limits.max_allowed_contracts)?
        } else {
            Vec::new()
        };
        let allowed_groups = if scopes.has_flag(WitnessScope::CustomGroups) {
            deserialize_array::<PublicKey>(reader, limits.max_allowed_groups)?
        } else {
            Vec::new()
        };
        let rules = if scopes.has_flag(WitnessScope::WitnessRules) {
            deserialize_array_with(reader, limits.max_rules, |reader| {
                WitnessRule::deserialize_with_depth(reader, limits.max_nesting_depth)
            })?
        } else {
            Vec::new()
        };

        Ok(Self {
            account,
            scopes,
            allowed_contracts,
            allowed_groups,
            rules,
            kind: SignerKind::Account(Account::from_script_hash(account)),
            limits: *limits,
            placeholder: false,
        })
    }

    /// Converts the signer to the JSON object used by RPC calls.
    pub fn to_json(&self) -> Value {
        let mut json = JsonMap::new();
        json.insert("account".to_string(), Value::String(self.account.to_string()));
        json.insert("scopes".to_string(), Value::String(self.scopes.to_string()));
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            json.insert(
                "allowedcontracts".to_string(),
                Value::Array(
                    self.allowed_contracts
                        .iter()
                        .map(|hash| Value::String(hash.to_string()))
                        .collect(),
                ),
            );
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            json.insert(
                "allowedgroups".to_string(),
                Value::Array(
                    self.allowed_groups
                        .iter()
                        .map(|group| Value::String(group.to_hex()))
                        .collect(),
                ),
            );
        }
        if self.scopes.has_flag(WitnessScope::WitnessRules) {
            json.insert(
                "rules".to_string(),
                Value::Array(self.rules.iter().map(WitnessRule::to_json).collect()),
            );
        }
        Value::Object(json)
    }

    /// Parses the object produced by [`Signer::to_json`] with default limits.
    pub fn from_json(json: &Value) -> CoreResult<Self> {
        Self::from_json_with_limits(json, &SignerLimits::default())
    }

    /// Parses a signer, checking it against `limits`.
    ///
    /// Lists are only read for the scope flags that require them.
    pub fn from_json_with_limits(json: &Value, limits: &SignerLimits) -> CoreResult<Self> {
        let account: Hash160 = json_str(json, "account")?.parse()?;
        let scopes: WitnessScope = json_str(json, "scopes")?.parse()?;

        let allowed_contracts = if scopes.has_flag(WitnessScope::CustomContracts) {
            json_list(json, "allowedcontracts")?
                .iter()
                .map(|value| Ok(json_item_str(value)?.parse::<Hash160>()?))
                .collect::<CoreResult<Vec<_>>>()?
        } else {
            Vec::new()
        };
        let allowed_groups = if scopes.has_flag(WitnessScope::CustomGroups) {
            json_list(json, "allowedgroups")?
                .iter()
                .map(|value| Ok(PublicKey::from_hex(json_item_str(value)?)?))
                .collect::<CoreResult<Vec<_>>>()?
        } else {
            Vec::new()
        };
        let rules = if scopes.has_flag(WitnessScope::WitnessRules) {
            json_list(json, "rules")?
                .iter()
                .map(WitnessRule::from_json)
                .collect::<CoreResult<Vec<_>>>()?
        } else {
            Vec::new()
        };

        let signer = Self {
            account,
            scopes,
            allowed_contracts,
            allowed_groups,
            rules,
            kind: SignerKind::Account(Account::from_script_hash(account)),
            limits: *limits,
            placeholder: false,
        };
        signer.validate()?;
        Ok(signer)
    }

    /// Checks the whole signer against its limits: scope exclusivity,
    /// per-list caps and rule nesting.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.scopes.is_valid() {
            return Err(CoreError::InvalidScope(self.scopes.to_string()));
        }
        let has_lists = !(self.allowed_contracts.is_empty()
            && self.allowed_groups.is_empty()
            && self.rules.is_empty());
        if has_lists && self.scopes == WitnessScope::Global {
            return Err(CoreError::GlobalScopeConflict);
        }
        if has_lists && self.scopes == WitnessScope::None {
            return Err(CoreError::NoneScopeConflict);
        }
        let caps = [
            (
                "allowed contracts",
                self.allowed_contracts.len(),
                self.limits.max_allowed_contracts,
            ),
            (
                "allowed groups",
                self.allowed_groups.len(),
                self.limits.max_allowed_groups,
            ),
            ("rules", self.rules.len(), self.limits.max_rules),
        ];
        for (list, actual, max) in caps {
            if actual > max {
                return Err(CoreError::TooManySubitems { list, max, actual });
            }
        }
        self.rules
            .iter()
            .try_for_each(|rule| rule.validate(self.limits.max_nesting_depth))
    }
}

fn json_str<'a>(json: &'a Value, name: &str) -> CoreResult<&'a str> {
    json.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| CoreError::json(format!("signer missing '{name}'")))
}

fn json_list<'a>(json: &'a Value, name: &str) -> CoreResult<&'a [Value]> {
    match json.get(name) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(CoreError::json(format!("signer '{name}' must be an array"))),
    }
}

fn json_item_str(value: &Value) -> CoreResult<&str> {
    value
        .as_str()
        .ok_or_else(|| CoreError::json(format!("expected a string, got {value}")))
}

/// Signers compare by their wire fields only.
impl PartialEq for Signer {
    fn eq(&self, other: &Self) -> bool {
        self.account == other.account
            && self.scopes == other.scopes
            && self.allowed_contracts == other.allowed_contracts
            && self.allowed_groups == other.allowed_groups
            && self.rules == other.rules
    }
}

impl Eq for Signer {}

impl fmt::Display for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.account, self.scopes)
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = ADDRESS_SIZE + 1;
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            size += get_array_size(&self.allowed_contracts);
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            size += get_array_size(&self.allowed_groups);
        }
        if self.scopes.has_flag(WitnessScope::WitnessRules) {
            size += get_array_size(&self.rules);
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        <Hash160 as Serializable>::serialize(&self.account, writer)?;
        writer.write_u8(self.scopes.to_byte())?;
        if self.scopes.has_flag(WitnessScope::CustomContracts) {
            serialize_array(&self.allowed_contracts, writer)?;
        }
        if self.scopes.has_flag(WitnessScope::CustomGroups) {
            serialize_array(&self.allowed_groups, writer)?;
        }
        if self.scopes.has_flag(WitnessScope::WitnessRules) {
            serialize_array(&self.rules, writer)?;
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::deserialize_with_limits(reader, &SignerLimits::default())
    }
}

impl serde::Serialize for Signer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Signer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Signer::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WitnessCondition;
    use hex_literal::hex;
    use neo_cryptography::{KeyPair, PrivateKey};
    use neo_io::SerializableExt;
    use serde_json::json;

    fn key_pair(seed: u8) -> KeyPair {
        KeyPair::from_private(PrivateKey::new([seed; 32])).unwrap()
    }

    fn account(seed: u8) -> Account {
        Account::from_key_pair(key_pair(seed))
    }

    fn contract_hash(seed: u8) -> Hash160 {
        Hash160::from_array([seed; 20])
    }

    fn nested_and(levels: usize) -> WitnessCondition {
        let mut condition = WitnessCondition::CalledByEntry;
        for _ in 0..levels {
            condition = WitnessCondition::And {
                conditions: vec![condition],
            };
        }
        condition
    }

    #[test]
    fn test_allow_contracts_adds_flag() {
        let mut signer = Signer::called_by_entry(account(1));
        signer.allow_contracts(&[contract_hash(2)]).unwrap();
        assert_eq!(
            signer.scopes(),
            WitnessScope::CalledByEntry | WitnessScope::CustomContracts
        );
        assert_eq!(signer.allowed_contracts(), &[contract_hash(2)]);
    }

    #[test]
    fn test_global_and_none_reject_lists() {
        let mut global = Signer::global(account(1));
        assert!(matches!(
            global.allow_contracts(&[contract_hash(2)]),
            Err(CoreError::GlobalScopeConflict)
        ));
        assert!(matches!(
            global.add_rules(&[WitnessRule::allow(WitnessCondition::CalledByEntry)]),
            Err(CoreError::GlobalScopeConflict)
        ));

        let mut none = Signer::none(account(1));
        assert!(matches!(
            none.allow_groups(&[*key_pair(3).public_key()]),
            Err(CoreError::NoneScopeConflict)
        ));
        assert_eq!(none.scopes(), WitnessScope::None);

        let mut entry = Signer::called_by_entry(account(1));
        assert!(matches!(
            entry.add_scope(WitnessScope::Global),
            Err(CoreError::GlobalScopeConflict)
        ));
    }

    #[test]
    fn test_placeholder_none_is_replaced() {
        let mut signer = Signer::unscoped(
            contract_hash(9),
            SignerKind::Account(Account::from_script_hash(contract_hash(9))),
        );
        signer.allow_groups(&[*key_pair(4).public_key()]).unwrap();
        assert_eq!(signer.scopes(), WitnessScope::CustomGroups);
    }

    #[test]
    fn test_per_list_caps() {
        let limits = SignerLimits {
            max_allowed_contracts: 2,
            ..SignerLimits::default()
        };
        let mut signer = Signer::called_by_entry(account(1)).with_limits(limits);
        signer
            .allow_contracts(&[contract_hash(1), contract_hash(2)])
            .unwrap();
        let err = signer.allow_contracts(&[contract_hash(3)]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::TooManySubitems {
                list: "allowed contracts",
                max: 2,
                actual: 3
            }
        ));
        assert_eq!(signer.allowed_contracts().len(), 2);

        // Groups keep their own cap.
        let groups: Vec<PublicKey> = (1..=3).map(|s| *key_pair(s).public_key()).collect();
        signer.allow_groups(&groups).unwrap();
    }

    #[test]
    fn test_rule_depth_checked_on_add() {
        let mut signer = Signer::called_by_entry(account(1));
        signer
            .add_rules(&[WitnessRule::allow(nested_and(2))])
            .unwrap();
        assert!(matches!(
            signer.add_rules(&[WitnessRule::deny(nested_and(3))]),
            Err(CoreError::NestingDepthExceeded { max: 2 })
        ));
        assert_eq!(signer.rules().len(), 1);
    }

    #[test]
    fn test_wire_layout() {
        let mut signer = Signer::called_by_entry(Account::from_script_hash(contract_hash(0xAA)));
        signer.allow_contracts(&[contract_hash(0xBB)]).unwrap();

        let bytes = signer.to_array().unwrap();
        let mut expected = vec![0xAA; 20];
        expected.extend_from_slice(&hex!("11 01"));
        expected.extend_from_slice(&[0xBB; 20]);
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), signer.size());
        assert_eq!(Signer::from_array(&bytes).unwrap(), signer);
    }

    #[test]
    fn test_deserialize_rejects_list_over_cap() {
        let mut bytes = vec![0x01; 20];
        bytes.push(0x10);
        bytes.push(17);
        bytes.extend(std::iter::repeat(0x02).take(17 * 20));
        assert!(Signer::from_array(&bytes).is_err());

        let mut global_mixed = vec![0x01; 20];
        global_mixed.push(0x81);
        assert!(Signer::from_array(&global_mixed).is_err());
    }

    #[test]
    fn test_json_projection() {
        let group = *key_pair(5).public_key();
        let mut signer = Signer::called_by_entry(Account::from_script_hash(contract_hash(1)));
        signer
            .allow_contracts(&[contract_hash(2)])
            .unwrap()
            .allow_groups(&[group])
            .unwrap();

        let json = signer.to_json();
        assert_eq!(json["scopes"], "CalledByEntry,CustomContracts,CustomGroups");
        assert_eq!(json["account"], contract_hash(1).to_string());
        assert_eq!(json["allowedgroups"], json!([group.to_hex()]));
        assert!(json.get("rules").is_none());
        assert_eq!(Signer::from_json(&json).unwrap(), signer);

        let plain = Signer::called_by_entry(account(2)).to_json();
        assert!(plain.get("allowedcontracts").is_none());
    }

    #[test]
    fn test_contract_signer_witness() {
        let signer = Signer::contract_called_by_entry(
            contract_hash(3),
            vec![ContractParameter::integer(5)],
        );
        assert!(signer.is_contract());
        let witness = signer.create_witness(b"ignored").unwrap();
        assert_eq!(witness.invocation_script.as_bytes(), &[0x15]);
        assert!(witness.verification_script.is_empty());

        let account_signer = Signer::called_by_entry(account(4));
        let witness = account_signer.create_witness(b"tx").unwrap();
        assert!(witness.is_compatible_with(&account_signer.account()));
    }
}
