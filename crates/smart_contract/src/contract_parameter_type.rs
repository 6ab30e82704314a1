//! ContractParameterType, the type tag of a contract parameter.

use crate::{ContractError, ContractResult};
use std::fmt;
use std::str::FromStr;

/// Represents the type of ContractParameter.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContractParameterType {
    /// Indicates that the parameter can be of any type
    #[default]
    Any = 0x00,

    /// Indicates that the parameter is of Boolean type
    Boolean = 0x10,

    /// Indicates that the parameter is an integer
    Integer = 0x11,

    /// Indicates that the parameter is a byte array
    ByteArray = 0x12,

    /// Indicates that the parameter is a string
    String = 0x13,

    /// Indicates that the parameter is a 160-bit hash
    Hash160 = 0x14,

    /// Indicates that the parameter is a 256-bit hash
    Hash256 = 0x15,

    /// Indicates that the parameter is a public key
    PublicKey = 0x16,

    /// Indicates that the parameter is a signature
    Signature = 0x17,

    /// Indicates that the parameter is an array
    Array = 0x20,

    /// Indicates that the parameter is a map
    Map = 0x22,

    /// Indicates that the parameter is an interoperable interface
    InteropInterface = 0x30,

    /// It can be only used as the return type of a method, meaning that the method has no return value
    Void = 0xff,
}

impl ContractParameterType {
    const ALL: [ContractParameterType; 13] = [
        ContractParameterType::Any,
        ContractParameterType::Boolean,
        ContractParameterType::Integer,
        ContractParameterType::ByteArray,
        ContractParameterType::String,
        ContractParameterType::Hash160,
        ContractParameterType::Hash256,
        ContractParameterType::PublicKey,
        ContractParameterType::Signature,
        ContractParameterType::Array,
        ContractParameterType::Map,
        ContractParameterType::InteropInterface,
        ContractParameterType::Void,
    ];

    /// Returns the canonical manifest name for this parameter type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractParameterType::Any => "Any",
            ContractParameterType::Boolean => "Boolean",
            ContractParameterType::Integer => "Integer",
            ContractParameterType::ByteArray => "ByteArray",
            ContractParameterType::String => "String",
            ContractParameterType::Hash160 => "Hash160",
            ContractParameterType::Hash256 => "Hash256",
            ContractParameterType::PublicKey => "PublicKey",
            ContractParameterType::Signature => "Signature",
            ContractParameterType::Array => "Array",
            ContractParameterType::Map => "Map",
            ContractParameterType::InteropInterface => "InteropInterface",
            ContractParameterType::Void => "Void",
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.to_byte() == value)
    }

    /// Container types cannot be used as map keys.
    pub fn is_container(self) -> bool {
        matches!(self, ContractParameterType::Array | ContractParameterType::Map)
    }

    /// Whether a parameter of this type can be pushed by a script.
    pub fn is_pushable(self) -> bool {
        !matches!(
            self,
            ContractParameterType::InteropInterface | ContractParameterType::Void
        )
    }
}

impl FromStr for ContractParameterType {
    type Err = ContractError;

    fn from_str(s: &str) -> ContractResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContractError::UnknownParameterType(s.to_string()))
    }
}

impl fmt::Display for ContractParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ContractParameterType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for ContractParameterType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
