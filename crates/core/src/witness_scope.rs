// Copyright (C) 2015-2025 The Neo Project.
//
// witness_scope.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of WitnessScope, representing the scope of a witness.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Represents the scope of a witness.
///
/// This is a flags type: the scopes of a signer are OR-ed together into a
/// single byte on the wire. `Global` and `None` never share the byte with
/// another flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WitnessScope(u8);

#[allow(non_upper_case_globals)]
impl WitnessScope {
    /// Indicates that no contract was witnessed. Only sign the transaction.
    pub const None: WitnessScope = WitnessScope(0x00);

    /// Indicates that the calling contract must be the entry contract.
    /// The witness/permission/signature given on first invocation will automatically expire if entering deeper internal invokes.
    pub const CalledByEntry: WitnessScope = WitnessScope(0x01);

    /// Custom hash for contract-specific.
    pub const CustomContracts: WitnessScope = WitnessScope(0x10);

    /// Custom pubkey for group members.
    pub const CustomGroups: WitnessScope = WitnessScope(0x20);

    /// Indicates that the current context must satisfy the specified rules.
    pub const WitnessRules: WitnessScope = WitnessScope(0x40);

    /// Global scope allows this witness in all contexts.
    /// This cannot be combined with other flags.
    pub const Global: WitnessScope = WitnessScope(0x80);
}

const NAMED_FLAGS: [(WitnessScope, &str); 5] = [
    (WitnessScope::CalledByEntry, "CalledByEntry"),
    (WitnessScope::CustomContracts, "CustomContracts"),
    (WitnessScope::CustomGroups, "CustomGroups"),
    (WitnessScope::WitnessRules, "WitnessRules"),
    (WitnessScope::Global, "Global"),
];

const VALID_FLAGS: u8 = 0x01 | 0x10 | 0x20 | 0x40 | 0x80;

impl WitnessScope {
    /// Checks if this scope has the specified flag.
    pub fn has_flag(self, flag: WitnessScope) -> bool {
        self.0 & flag.0 != 0
    }

    /// Alias for [`WitnessScope::has_flag`].
    pub fn contains(self, flag: WitnessScope) -> bool {
        self.has_flag(flag)
    }

    /// Bitwise OR of two scopes, without the Global/None exclusivity check.
    ///
    /// Use [`WitnessScope::combine_all`] for user-supplied scope lists.
    pub fn combine(self, other: WitnessScope) -> Self {
        WitnessScope(self.0 | other.0)
    }

    /// Combines a list of scopes into one flag set.
    ///
    /// Fails if `Global` or `None` appears together with any other scope.
    /// An empty list yields `None`.
    pub fn combine_all(scopes: &[WitnessScope]) -> CoreResult<Self> {
        let has_other = |excluded: WitnessScope| scopes.iter().any(|s| *s != excluded);
        if scopes.contains(&WitnessScope::Global) && has_other(WitnessScope::Global) {
            return Err(CoreError::GlobalScopeConflict);
        }
        if scopes.contains(&WitnessScope::None) && has_other(WitnessScope::None) {
            return Err(CoreError::NoneScopeConflict);
        }
        let combined = scopes
            .iter()
            .fold(WitnessScope::None, |acc, scope| acc.combine(*scope));
        if !combined.is_valid() {
            return Err(CoreError::InvalidScope(format!("0x{:02x}", combined.0)));
        }
        Ok(combined)
    }

    /// Creates a WitnessScope from a byte value.
    ///
    /// Returns `None` for unknown bits or for `Global` mixed with other flags.
    pub fn from_byte(value: u8) -> Option<Self> {
        let scope = WitnessScope(value);
        scope.is_valid().then_some(scope)
    }

    /// Converts the WitnessScope to a byte value.
    pub fn to_byte(self) -> u8 {
        self.0
    }

    /// Validates that the scope combination is valid.
    pub fn is_valid(self) -> bool {
        if self.has_flag(WitnessScope::Global) && self != WitnessScope::Global {
            return false;
        }
        (self.0 & !VALID_FLAGS) == 0
    }

    /// The individual flags set in this scope, in wire bit order.
    pub fn flags(self) -> Vec<WitnessScope> {
        if self == WitnessScope::None {
            return vec![WitnessScope::None];
        }
        NAMED_FLAGS
            .iter()
            .filter(|(flag, _)| self.has_flag(*flag))
            .map(|(flag, _)| *flag)
            .collect()
    }
}

impl BitOr for WitnessScope {
    type Output = WitnessScope;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

/// Formats as the comma-joined flag names used in JSON, for example
/// `CalledByEntry,CustomContracts`.
impl fmt::Display for WitnessScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == WitnessScope::None {
            return f.write_str("None");
        }
        let mut first = true;
        for (flag, name) in NAMED_FLAGS {
            if self.has_flag(flag) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Parses flag names separated by `,` or `|`, tolerating whitespace.
impl FromStr for WitnessScope {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let mut scopes = Vec::new();
        for part in s.split([',', '|']) {
            let name = part.trim();
            let scope = if name == "None" {
                WitnessScope::None
            } else {
                NAMED_FLAGS
                    .iter()
                    .find(|(_, flag_name)| *flag_name == name)
                    .map(|(flag, _)| *flag)
                    .ok_or_else(|| CoreError::InvalidScope(name.to_string()))?
            };
            scopes.push(scope);
        }
        WitnessScope::combine_all(&scopes)
    }
}

impl TryFrom<u8> for WitnessScope {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        Self::from_byte(value).ok_or_else(|| CoreError::InvalidScope(format!("0x{value:02x}")))
    }
}

impl From<WitnessScope> for u8 {
    fn from(scope: WitnessScope) -> Self {
        scope.to_byte()
    }
}

impl Serialize for WitnessScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WitnessScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_witness_scope_values() {
        assert_eq!(WitnessScope::None.to_byte(), 0x00);
        assert_eq!(WitnessScope::CalledByEntry.to_byte(), 0x01);
        assert_eq!(WitnessScope::CustomContracts.to_byte(), 0x10);
        assert_eq!(WitnessScope::CustomGroups.to_byte(), 0x20);
        assert_eq!(WitnessScope::WitnessRules.to_byte(), 0x40);
        assert_eq!(WitnessScope::Global.to_byte(), 0x80);
    }

    #[test]
    fn test_witness_scope_has_flag() {
        let scope = WitnessScope::CalledByEntry;
        assert!(scope.has_flag(WitnessScope::CalledByEntry));
        assert!(!scope.has_flag(WitnessScope::CustomContracts));

        let combined = WitnessScope::CalledByEntry | WitnessScope::CustomContracts;
        assert!(combined.has_flag(WitnessScope::CalledByEntry));
        assert!(combined.has_flag(WitnessScope::CustomContracts));
        assert_eq!(combined.to_byte(), 0x11);
    }

    #[test]
    fn test_witness_scope_from_byte() {
        assert_eq!(WitnessScope::from_byte(0x00), Some(WitnessScope::None));
        assert_eq!(
            WitnessScope::from_byte(0x01),
            Some(WitnessScope::CalledByEntry)
        );
        assert_eq!(WitnessScope::from_byte(0x80), Some(WitnessScope::Global));
        assert_eq!(WitnessScope::from_byte(0x71).map(u8::from), Some(0x71));
        assert_eq!(WitnessScope::from_byte(0x81), None);
        assert_eq!(WitnessScope::from_byte(0x02), None);
        assert!(WitnessScope::try_from(0xFF).is_err());
    }

    #[test]
    fn test_combine_all_exclusivity() {
        assert!(matches!(
            WitnessScope::combine_all(&[WitnessScope::Global, WitnessScope::CalledByEntry]),
            Err(CoreError::GlobalScopeConflict)
        ));
        assert!(matches!(
            WitnessScope::combine_all(&[WitnessScope::None, WitnessScope::CustomGroups]),
            Err(CoreError::NoneScopeConflict)
        ));
        assert_eq!(
            WitnessScope::combine_all(&[WitnessScope::Global, WitnessScope::Global]).unwrap(),
            WitnessScope::Global
        );
        assert_eq!(
            WitnessScope::combine_all(&[]).unwrap(),
            WitnessScope::None
        );
    }

    #[test]
    fn test_witness_scope_display() {
        assert_eq!(WitnessScope::None.to_string(), "None");
        assert_eq!(WitnessScope::Global.to_string(), "Global");
        assert_eq!(
            (WitnessScope::CalledByEntry | WitnessScope::CustomContracts).to_string(),
            "CalledByEntry,CustomContracts"
        );
    }

    #[test]
    fn test_witness_scope_parse() {
        assert_eq!(
            "CalledByEntry, CustomContracts".parse::<WitnessScope>().unwrap(),
            WitnessScope::CalledByEntry | WitnessScope::CustomContracts
        );
        assert_eq!(
            "WitnessRules|CustomGroups".parse::<WitnessScope>().unwrap(),
            WitnessScope::WitnessRules | WitnessScope::CustomGroups
        );
        assert!("Global,CalledByEntry".parse::<WitnessScope>().is_err());
        assert!("Everything".parse::<WitnessScope>().is_err());
    }

    #[test]
    fn test_flags() {
        let scope = WitnessScope::WitnessRules | WitnessScope::CalledByEntry;
        assert_eq!(
            scope.flags(),
            vec![WitnessScope::CalledByEntry, WitnessScope::WitnessRules]
        );
        assert_eq!(WitnessScope::None.flags(), vec![WitnessScope::None]);
    }
}
