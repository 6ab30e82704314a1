//! ContractParameter, a typed value passed to a contract method.

use crate::{ContractError, ContractParameterType, ContractResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use neo_cryptography::{PublicKey, Signature};
use neo_primitives::{Hash160, Hash256};
use num_bigint::BigInt;
use serde_json::{json, Map as JsonMap, Value};

/// Represents a parameter of a smart contract method.
///
/// The payload is optional: a parameter without a value is pushed as
/// `PUSHNULL` and projected to JSON without a `value` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParameter {
    /// Optional parameter name, as declared in a manifest.
    pub name: Option<String>,

    /// The type of the parameter.
    pub param_type: ContractParameterType,

    /// The value of the parameter.
    pub value: Option<ContractParameterValue>,
}

/// Represents the possible values of smart contract parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameterValue {
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(Hash160),
    Hash256(Hash256),
    PublicKey(PublicKey),
    Signature(Signature),
    Array(Vec<ContractParameter>),
    /// Entries in insertion order.
    Map(Vec<(ContractParameter, ContractParameter)>),
}

impl ContractParameter {
    /// Creates a parameter, checking that the value matches the type.
    pub fn new(
        param_type: ContractParameterType,
        value: Option<ContractParameterValue>,
    ) -> ContractResult<Self> {
        let parameter = Self {
            name: None,
            param_type,
            value,
        };
        parameter.validate()?;
        Ok(parameter)
    }

    fn typed(param_type: ContractParameterType, value: ContractParameterValue) -> Self {
        Self {
            name: None,
            param_type,
            value: Some(value),
        }
    }

    /// A null parameter of type `Any`.
    pub fn any() -> Self {
        Self {
            name: None,
            param_type: ContractParameterType::Any,
            value: None,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(
            ContractParameterType::Boolean,
            ContractParameterValue::Boolean(value),
        )
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::typed(
            ContractParameterType::Integer,
            ContractParameterValue::Integer(value.into()),
        )
    }

    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        Self::typed(
            ContractParameterType::ByteArray,
            ContractParameterValue::ByteArray(value.into()),
        )
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::typed(
            ContractParameterType::String,
            ContractParameterValue::String(value.into()),
        )
    }

    pub fn hash160(value: Hash160) -> Self {
        Self::typed(
            ContractParameterType::Hash160,
            ContractParameterValue::Hash160(value),
        )
    }

    pub fn hash256(value: Hash256) -> Self {
        Self::typed(
            ContractParameterType::Hash256,
            ContractParameterValue::Hash256(value),
        )
    }

    pub fn public_key(value: PublicKey) -> Self {
        Self::typed(
            ContractParameterType::PublicKey,
            ContractParameterValue::PublicKey(value),
        )
    }

    pub fn signature(value: Signature) -> Self {
        Self::typed(
            ContractParameterType::Signature,
            ContractParameterValue::Signature(value),
        )
    }

    /// A signature parameter from raw bytes, which must be exactly 64 long.
    pub fn signature_from_slice(bytes: &[u8]) -> ContractResult<Self> {
        Ok(Self::signature(Signature::from_slice(bytes)?))
    }

    pub fn array(items: Vec<ContractParameter>) -> Self {
        Self::typed(
            ContractParameterType::Array,
            ContractParameterValue::Array(items),
        )
    }

    /// A map parameter. Keys may not be arrays or maps.
    pub fn map(entries: Vec<(ContractParameter, ContractParameter)>) -> ContractResult<Self> {
        let parameter = Self::typed(
            ContractParameterType::Map,
            ContractParameterValue::Map(entries),
        );
        parameter.validate()?;
        Ok(parameter)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Checks recursively that every payload matches its declared type and
    /// that no map is keyed by a container.
    pub fn validate(&self) -> ContractResult<()> {
        use ContractParameterType as T;
        use ContractParameterValue as V;

        let Some(value) = &self.value else {
            return Ok(());
        };
        match (self.param_type, value) {
            (T::Boolean, V::Boolean(_))
            | (T::Integer, V::Integer(_))
            | (T::ByteArray, V::ByteArray(_))
            | (T::String, V::String(_))
            | (T::Hash160, V::Hash160(_))
            | (T::Hash256, V::Hash256(_))
            | (T::PublicKey, V::PublicKey(_))
            | (T::Signature, V::Signature(_)) => Ok(()),
            (T::Array, V::Array(items)) => items.iter().try_for_each(ContractParameter::validate),
            (T::Map, V::Map(entries)) => {
                for (key, item) in entries {
                    if key.param_type.is_container() {
                        return Err(ContractError::InvalidMapKey(key.param_type));
                    }
                    key.validate()?;
                    item.validate()?;
                }
                Ok(())
            }
            (param_type, _) => Err(ContractError::TypeMismatch(param_type)),
        }
    }

    /// Converts the parameter to its JSON form.
    ///
    /// Byte payloads are base64, integers decimal strings, hashes `0x` hex
    /// and public keys compressed hex. Maps are lists of `{key, value}`.
    pub fn to_json(&self) -> Value {
        let mut json = JsonMap::new();
        if let Some(name) = &self.name {
            json.insert("name".to_string(), Value::String(name.clone()));
        }
        json.insert(
            "type".to_string(),
            Value::String(self.param_type.as_str().to_string()),
        );
        if let Some(value) = &self.value {
            json.insert("value".to_string(), value_to_json(value));
        }
        Value::Object(json)
    }

    /// Parses the JSON form produced by [`ContractParameter::to_json`].
    ///
    /// Integers are accepted both as strings and as JSON numbers.
    pub fn from_json(json: &Value) -> ContractResult<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| ContractError::invalid_json("parameter must be an object"))?;
        let param_type: ContractParameterType = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ContractError::invalid_json("missing 'type' field"))?
            .parse()?;
        let name = match object.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(_) => return Err(ContractError::invalid_json("'name' must be a string")),
        };
        let value = match object.get("value") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value_from_json(param_type, value)?),
        };

        let mut parameter = Self::new(param_type, value)?;
        parameter.name = name;
        Ok(parameter)
    }
}

fn value_to_json(value: &ContractParameterValue) -> Value {
    match value {
        ContractParameterValue::Boolean(b) => Value::Bool(*b),
        ContractParameterValue::Integer(i) => Value::String(i.to_string()),
        ContractParameterValue::ByteArray(bytes) => Value::String(BASE64.encode(bytes)),
        ContractParameterValue::String(s) => Value::String(s.clone()),
        ContractParameterValue::Hash160(hash) => Value::String(hash.to_string()),
        ContractParameterValue::Hash256(hash) => Value::String(hash.to_string()),
        ContractParameterValue::PublicKey(key) => Value::String(key.to_hex()),
        ContractParameterValue::Signature(sig) => Value::String(BASE64.encode(sig.as_bytes())),
        ContractParameterValue::Array(items) => {
            Value::Array(items.iter().map(ContractParameter::to_json).collect())
        }
        ContractParameterValue::Map(entries) => Value::Array(
            entries
                .iter()
                .map(|(key, item)| json!({ "key": key.to_json(), "value": item.to_json() }))
                .collect(),
        ),
    }
}

fn value_from_json(
    param_type: ContractParameterType,
    value: &Value,
) -> ContractResult<ContractParameterValue> {
    let as_str = || {
        value.as_str().ok_or_else(|| {
            ContractError::invalid_json(format!("{param_type} value must be a string"))
        })
    };
    let decode_base64 = |text: &str| {
        BASE64
            .decode(text)
            .map_err(|e| ContractError::invalid_json(format!("invalid base64: {e}")))
    };

    let parsed = match param_type {
        ContractParameterType::Boolean => ContractParameterValue::Boolean(
            value
                .as_bool()
                .ok_or_else(|| ContractError::invalid_json("Boolean value must be a bool"))?,
        ),
        ContractParameterType::Integer => {
            let text = match value {
                Value::Number(number) => number.to_string(),
                Value::String(text) => text.clone(),
                _ => return Err(ContractError::invalid_json("Integer value must be a number")),
            };
            let parsed = text
                .parse::<BigInt>()
                .map_err(|_| ContractError::invalid_json(format!("invalid integer: {text}")))?;
            ContractParameterValue::Integer(parsed)
        }
        ContractParameterType::ByteArray => {
            ContractParameterValue::ByteArray(decode_base64(as_str()?)?)
        }
        ContractParameterType::Signature => {
            ContractParameterValue::Signature(Signature::from_slice(&decode_base64(as_str()?)?)?)
        }
        ContractParameterType::String => ContractParameterValue::String(as_str()?.to_string()),
        ContractParameterType::Hash160 => ContractParameterValue::Hash160(as_str()?.parse()?),
        ContractParameterType::Hash256 => ContractParameterValue::Hash256(as_str()?.parse()?),
        ContractParameterType::PublicKey => {
            ContractParameterValue::PublicKey(PublicKey::from_hex(as_str()?)?)
        }
        ContractParameterType::Array => {
            let items = value
                .as_array()
                .ok_or_else(|| ContractError::invalid_json("Array value must be a list"))?;
            ContractParameterValue::Array(
                items
                    .iter()
                    .map(ContractParameter::from_json)
                    .collect::<ContractResult<_>>()?,
            )
        }
        ContractParameterType::Map => {
            let entries = value
                .as_array()
                .ok_or_else(|| ContractError::invalid_json("Map value must be a list"))?;
            let mut parsed = Vec::with_capacity(entries.len());
            for entry in entries {
                let key = entry
                    .get("key")
                    .ok_or_else(|| ContractError::invalid_json("map entry without key"))?;
                let item = entry
                    .get("value")
                    .ok_or_else(|| ContractError::invalid_json("map entry without value"))?;
                parsed.push((
                    ContractParameter::from_json(key)?,
                    ContractParameter::from_json(item)?,
                ));
            }
            ContractParameterValue::Map(parsed)
        }
        ContractParameterType::Any
        | ContractParameterType::InteropInterface
        | ContractParameterType::Void => return Err(ContractError::TypeMismatch(param_type)),
    };
    Ok(parsed)
}

impl serde::Serialize for ContractParameter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ContractParameter {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        ContractParameter::from_json(&value).map_err(serde::de::Error::custom)
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<Hash160> for ContractParameter {
    fn from(value: Hash160) -> Self {
        Self::hash160(value)
    }
}

impl From<Hash256> for ContractParameter {
    fn from(value: Hash256) -> Self {
        Self::hash256(value)
    }
}

impl From<PublicKey> for ContractParameter {
    fn from(value: PublicKey) -> Self {
        Self::public_key(value)
    }
}
