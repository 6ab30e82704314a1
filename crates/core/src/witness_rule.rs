//! Witness rules: an allow/deny action paired with a condition tree.

use crate::{CoreError, CoreResult};
use neo_config::{ADDRESS_SIZE, MAX_NESTING_DEPTH, MAX_SIGNER_SUBITEMS, PUBLIC_KEY_SIZE};
use neo_cryptography::PublicKey;
use neo_io::serializable::helper::get_var_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use neo_primitives::Hash160;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// The action to be taken if the current context meets with the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WitnessRuleAction {
    /// Deny the witness if the condition is met.
    Deny = 0,
    /// Allow the witness if the condition is met.
    Allow = 1,
}

impl WitnessRuleAction {
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Deny),
            1 => Some(Self::Allow),
            _ => None,
        }
    }
}

impl FromStr for WitnessRuleAction {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Deny" | "deny" => Ok(Self::Deny),
            "Allow" | "allow" => Ok(Self::Allow),
            other => Err(CoreError::json(format!("invalid witness rule action: {other}"))),
        }
    }
}

impl fmt::Display for WitnessRuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WitnessRuleAction::Deny => write!(f, "Deny"),
            WitnessRuleAction::Allow => write!(f, "Allow"),
        }
    }
}

/// The type of witness condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WitnessConditionType {
    Boolean = 0x00,
    Not = 0x01,
    And = 0x02,
    Or = 0x03,
    ScriptHash = 0x18,
    Group = 0x19,
    CalledByEntry = 0x20,
    CalledByContract = 0x28,
    CalledByGroup = 0x29,
}

impl WitnessConditionType {
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Boolean),
            0x01 => Some(Self::Not),
            0x02 => Some(Self::And),
            0x03 => Some(Self::Or),
            0x18 => Some(Self::ScriptHash),
            0x19 => Some(Self::Group),
            0x20 => Some(Self::CalledByEntry),
            0x28 => Some(Self::CalledByContract),
            0x29 => Some(Self::CalledByGroup),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Not => "Not",
            Self::And => "And",
            Self::Or => "Or",
            Self::ScriptHash => "ScriptHash",
            Self::Group => "Group",
            Self::CalledByEntry => "CalledByEntry",
            Self::CalledByContract => "CalledByContract",
            Self::CalledByGroup => "CalledByGroup",
        }
    }
}

impl fmt::Display for WitnessConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of a witness condition tree.
///
/// `Not`, `And` and `Or` are composite: each level of them consumes one unit
/// of the nesting budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessCondition {
    /// Boolean condition with a fixed value.
    Boolean { value: bool },
    /// Not condition that negates another condition.
    Not { condition: Box<WitnessCondition> },
    /// And condition that requires all sub-conditions to be true.
    And { conditions: Vec<WitnessCondition> },
    /// Or condition that requires at least one sub-condition to be true.
    Or { conditions: Vec<WitnessCondition> },
    /// The executing script hash matches.
    ScriptHash { hash: Hash160 },
    /// The executing contract belongs to the group.
    Group { group: PublicKey },
    /// Called by entry condition.
    CalledByEntry,
    /// The calling contract matches.
    CalledByContract { hash: Hash160 },
    /// The calling contract belongs to the group.
    CalledByGroup { group: PublicKey },
}

impl WitnessCondition {
    /// Maximum number of sub-conditions of an `And` or `Or`.
    pub const MAX_SUBITEMS: usize = MAX_SIGNER_SUBITEMS;
    /// Default nesting budget for composite conditions.
    pub const MAX_NESTING_DEPTH: usize = MAX_NESTING_DEPTH;

    pub fn not(condition: WitnessCondition) -> Self {
        WitnessCondition::Not {
            condition: Box::new(condition),
        }
    }

    /// Gets the type of the condition.
    pub fn condition_type(&self) -> WitnessConditionType {
        match self {
            WitnessCondition::Boolean { .. } => WitnessConditionType::Boolean,
            WitnessCondition::Not { .. } => WitnessConditionType::Not,
            WitnessCondition::And { .. } => WitnessConditionType::And,
            WitnessCondition::Or { .. } => WitnessConditionType::Or,
            WitnessCondition::ScriptHash { .. } => WitnessConditionType::ScriptHash,
            WitnessCondition::Group { .. } => WitnessConditionType::Group,
            WitnessCondition::CalledByEntry => WitnessConditionType::CalledByEntry,
            WitnessCondition::CalledByContract { .. } => WitnessConditionType::CalledByContract,
            WitnessCondition::CalledByGroup { .. } => WitnessConditionType::CalledByGroup,
        }
    }

    /// Walks the tree checking the nesting budget and sub-condition counts.
    ///
    /// Every composite node needs one unit of `max_depth`; a composite
    /// reached with no budget left fails with
    /// [`CoreError::NestingDepthExceeded`].
    pub fn validate(&self, max_depth: usize) -> CoreResult<()> {
        self.validate_remaining(max_depth, max_depth)
    }

    fn validate_remaining(&self, remaining: usize, max: usize) -> CoreResult<()> {
        match self {
            WitnessCondition::Not { condition } => {
                let next = remaining
                    .checked_sub(1)
                    .ok_or(CoreError::NestingDepthExceeded { max })?;
                condition.validate_remaining(next, max)
            }
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
                let next = remaining
                    .checked_sub(1)
                    .ok_or(CoreError::NestingDepthExceeded { max })?;
                if conditions.is_empty() || conditions.len() > Self::MAX_SUBITEMS {
                    return Err(CoreError::InvalidSubconditionCount {
                        max: Self::MAX_SUBITEMS,
                        actual: conditions.len(),
                    });
                }
                conditions
                    .iter()
                    .try_for_each(|c| c.validate_remaining(next, max))
            }
            _ => Ok(()),
        }
    }

    /// Whether the tree passes [`WitnessCondition::validate`].
    pub fn is_valid(&self, max_depth: usize) -> bool {
        self.validate(max_depth).is_ok()
    }

    /// Deepest chain of composite nodes; leaves have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            WitnessCondition::Not { condition } => 1 + condition.depth(),
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
                1 + conditions.iter().map(|c| c.depth()).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Decodes a condition, failing once more than `max_depth` composite
    /// levels are nested.
    pub fn deserialize_with_depth(reader: &mut MemoryReader, max_depth: usize) -> IoResult<Self> {
        let type_byte = reader.read_u8()?;
        let condition_type = WitnessConditionType::from_byte(type_byte).ok_or_else(|| {
            IoError::invalid_data(format!("invalid witness condition type 0x{type_byte:02x}"))
        })?;

        let nested_budget = || {
            max_depth.checked_sub(1).ok_or_else(|| {
                IoError::invalid_data(format!("{condition_type} condition nested too deeply"))
            })
        };

        let condition = match condition_type {
            WitnessConditionType::Boolean => WitnessCondition::Boolean {
                value: reader.read_bool()?,
            },
            WitnessConditionType::Not => {
                let next = nested_budget()?;
                WitnessCondition::not(Self::deserialize_with_depth(reader, next)?)
            }
            WitnessConditionType::And | WitnessConditionType::Or => {
                let next = nested_budget()?;
                let count = reader.read_var_int(Self::MAX_SUBITEMS as u64)? as usize;
                if count == 0 {
                    return Err(IoError::invalid_data(format!(
                        "{condition_type} condition without sub-conditions"
                    )));
                }
                let mut conditions = Vec::with_capacity(count);
                for _ in 0..count {
                    conditions.push(Self::deserialize_with_depth(reader, next)?);
                }
                if condition_type == WitnessConditionType::And {
                    WitnessCondition::And { conditions }
                } else {
                    WitnessCondition::Or { conditions }
                }
            }
            WitnessConditionType::ScriptHash => WitnessCondition::ScriptHash {
                hash: <Hash160 as Serializable>::deserialize(reader)?,
            },
            WitnessConditionType::Group => WitnessCondition::Group {
                group: <PublicKey as Serializable>::deserialize(reader)?,
            },
            WitnessConditionType::CalledByEntry => WitnessCondition::CalledByEntry,
            WitnessConditionType::CalledByContract => WitnessCondition::CalledByContract {
                hash: <Hash160 as Serializable>::deserialize(reader)?,
            },
            WitnessConditionType::CalledByGroup => WitnessCondition::CalledByGroup {
                group: <PublicKey as Serializable>::deserialize(reader)?,
            },
        };
        Ok(condition)
    }

    pub fn to_json(&self) -> Value {
        let kind = self.condition_type().as_str();
        match self {
            WitnessCondition::Boolean { value } => json!({ "type": kind, "expression": value }),
            WitnessCondition::Not { condition } => {
                json!({ "type": kind, "expression": condition.to_json() })
            }
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => json!({
                "type": kind,
                "expressions": conditions.iter().map(|c| c.to_json()).collect::<Vec<_>>(),
            }),
            WitnessCondition::ScriptHash { hash } | WitnessCondition::CalledByContract { hash } => {
                json!({ "type": kind, "hash": hash.to_string() })
            }
            WitnessCondition::Group { group } | WitnessCondition::CalledByGroup { group } => {
                json!({ "type": kind, "group": group.to_hex() })
            }
            WitnessCondition::CalledByEntry => json!({ "type": kind }),
        }
    }

    pub fn from_json(json: &Value) -> CoreResult<Self> {
        let field = |name: &str| {
            json.get(name)
                .ok_or_else(|| CoreError::json(format!("witness condition missing '{name}'")))
        };
        let str_field = |name: &str| {
            field(name)?
                .as_str()
                .ok_or_else(|| CoreError::json(format!("witness condition '{name}' must be a string")))
        };
        let expressions = || -> CoreResult<Vec<WitnessCondition>> {
            field("expressions")?
                .as_array()
                .ok_or_else(|| CoreError::json("'expressions' must be a list"))?
                .iter()
                .map(WitnessCondition::from_json)
                .collect()
        };

        let condition = match str_field("type")? {
            "Boolean" => {
                // Nodes print the constant either as a JSON bool or as a string.
                let value = match field("expression")? {
                    Value::Bool(value) => *value,
                    Value::String(text) if text.eq_ignore_ascii_case("true") => true,
                    Value::String(text) if text.eq_ignore_ascii_case("false") => false,
                    _ => return Err(CoreError::json("Boolean condition needs a bool expression")),
                };
                WitnessCondition::Boolean { value }
            }
            "Not" => WitnessCondition::not(WitnessCondition::from_json(field("expression")?)?),
            "And" => WitnessCondition::And {
                conditions: expressions()?,
            },
            "Or" => WitnessCondition::Or {
                conditions: expressions()?,
            },
            "ScriptHash" => WitnessCondition::ScriptHash {
                hash: str_field("hash")?.parse()?,
            },
            "Group" => WitnessCondition::Group {
                group: PublicKey::from_hex(str_field("group")?)?,
            },
            "CalledByEntry" => WitnessCondition::CalledByEntry,
            "CalledByContract" => WitnessCondition::CalledByContract {
                hash: str_field("hash")?.parse()?,
            },
            "CalledByGroup" => WitnessCondition::CalledByGroup {
                group: PublicKey::from_hex(str_field("group")?)?,
            },
            other => {
                return Err(CoreError::json(format!(
                    "unsupported witness condition type: {other}"
                )))
            }
        };
        Ok(condition)
    }
}

impl fmt::Display for WitnessCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |conditions: &[WitnessCondition]| {
            conditions
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            WitnessCondition::Boolean { value } => write!(f, "Boolean({value})"),
            WitnessCondition::Not { condition } => write!(f, "Not({condition})"),
            WitnessCondition::And { conditions } => write!(f, "And([{}])", join(conditions)),
            WitnessCondition::Or { conditions } => write!(f, "Or([{}])", join(conditions)),
            WitnessCondition::ScriptHash { hash } => write!(f, "ScriptHash({hash})"),
            WitnessCondition::Group { group } => write!(f, "Group({group})"),
            WitnessCondition::CalledByEntry => write!(f, "CalledByEntry"),
            WitnessCondition::CalledByContract { hash } => write!(f, "CalledByContract({hash})"),
            WitnessCondition::CalledByGroup { group } => write!(f, "CalledByGroup({group})"),
        }
    }
}

impl Serializable for WitnessCondition {
    fn size(&self) -> usize {
        let payload = match self {
            WitnessCondition::Boolean { .. } => 1,
            WitnessCondition::Not { condition } => condition.size(),
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
                get_var_size(conditions.len() as u64)
                    + conditions.iter().map(Serializable::size).sum::<usize>()
            }
            WitnessCondition::ScriptHash { .. } | WitnessCondition::CalledByContract { .. } => {
                ADDRESS_SIZE
            }
            WitnessCondition::Group { .. } | WitnessCondition::CalledByGroup { .. } => {
                PUBLIC_KEY_SIZE
            }
            WitnessCondition::CalledByEntry => 0,
        };
        1 + payload
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.condition_type().to_byte())?;
        match self {
            WitnessCondition::Boolean { value } => writer.write_bool(*value)?,
            WitnessCondition::Not { condition } => {
                <WitnessCondition as Serializable>::serialize(condition, writer)?
            }
            WitnessCondition::And { conditions } | WitnessCondition::Or { conditions } => {
                if conditions.is_empty() || conditions.len() > Self::MAX_SUBITEMS {
                    return Err(IoError::invalid_data(format!(
                        "composite witness condition with {} sub-conditions",
                        conditions.len()
                    )));
                }
                writer.write_var_int(conditions.len() as u64)?;
                for condition in conditions {
                    <WitnessCondition as Serializable>::serialize(condition, writer)?;
                }
            }
            WitnessCondition::ScriptHash { hash } | WitnessCondition::CalledByContract { hash } => {
                Serializable::serialize(hash, writer)?
            }
            WitnessCondition::Group { group } | WitnessCondition::CalledByGroup { group } => {
                Serializable::serialize(group, writer)?
            }
            WitnessCondition::CalledByEntry => {}
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::deserialize_with_depth(reader, Self::MAX_NESTING_DEPTH)
    }
}

impl Serialize for WitnessCondition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WitnessCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        WitnessCondition::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// The rule used to describe the scope of the witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessRule {
    /// Indicates the action to be taken if the current context meets with the rule.
    pub action: WitnessRuleAction,
    /// The condition of the rule.
    pub condition: WitnessCondition,
}

impl WitnessRule {
    pub fn new(action: WitnessRuleAction, condition: WitnessCondition) -> Self {
        Self { action, condition }
    }

    pub fn allow(condition: WitnessCondition) -> Self {
        Self::new(WitnessRuleAction::Allow, condition)
    }

    pub fn deny(condition: WitnessCondition) -> Self {
        Self::new(WitnessRuleAction::Deny, condition)
    }

    /// Validates the condition tree against `max_depth`.
    pub fn validate(&self, max_depth: usize) -> CoreResult<()> {
        self.condition.validate(max_depth)
    }

    pub fn deserialize_with_depth(reader: &mut MemoryReader, max_depth: usize) -> IoResult<Self> {
        let action_byte = reader.read_u8()?;
        let action = WitnessRuleAction::from_byte(action_byte).ok_or_else(|| {
            IoError::invalid_data(format!("invalid witness rule action 0x{action_byte:02x}"))
        })?;
        let condition = WitnessCondition::deserialize_with_depth(reader, max_depth)?;
        Ok(Self { action, condition })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "action": self.action.to_string(),
            "condition": self.condition.to_json(),
        })
    }

    pub fn from_json(value: &Value) -> CoreResult<Self> {
        let action = value
            .get("action")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::json("witness rule missing 'action'"))?
            .parse()?;
        let condition = value
            .get("condition")
            .ok_or_else(|| CoreError::json("witness rule missing 'condition'"))?;
        Ok(Self {
            action,
            condition: WitnessCondition::from_json(condition)?,
        })
    }
}

impl fmt::Display for WitnessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.condition)
    }
}

impl Serializable for WitnessRule {
    fn size(&self) -> usize {
        1 + self.condition.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.action.to_byte())?;
        <WitnessCondition as Serializable>::serialize(&self.condition, writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Self::deserialize_with_depth(reader, WitnessCondition::MAX_NESTING_DEPTH)
    }
}

impl Serialize for WitnessRule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WitnessRule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        WitnessRule::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo_io::SerializableExt;

    fn generator() -> PublicKey {
        PublicKey::from_hex("036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296")
            .unwrap()
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
    fn test_type_values() {
        assert_eq!(WitnessRuleAction::Deny as u8, 0);
        assert_eq!(WitnessRuleAction::Allow as u8, 1);
        assert_eq!(WitnessConditionType::ScriptHash as u8, 0x18);
        assert_eq!(WitnessConditionType::CalledByGroup as u8, 0x29);
        assert_eq!(WitnessConditionType::from_byte(0x04), None);
    }

    #[test]
    fn test_depth_bound() {
        assert!(nested_and(0).validate(2).is_ok());
        assert!(nested_and(2).validate(2).is_ok());
        assert!(matches!(
            nested_and(3).validate(2),
            Err(CoreError::NestingDepthExceeded { max: 2 })
        ));
        assert_eq!(nested_and(3).depth(), 3);

        let not_in_or = WitnessCondition::Or {
            conditions: vec![WitnessCondition::not(WitnessCondition::not(
                WitnessCondition::CalledByEntry,
            ))],
        };
        assert!(!not_in_or.is_valid(2));
        assert!(not_in_or.is_valid(3));

        // Not is charged like And/Or.
        let not_in_and = WitnessCondition::And {
            conditions: vec![WitnessCondition::not(WitnessCondition::CalledByEntry)],
        };
        assert!(not_in_and.is_valid(2));
        assert!(!not_in_and.is_valid(1));
        assert_eq!(not_in_and.depth(), 2);
    }

    #[test]
    fn test_subcondition_count() {
        let empty = WitnessCondition::And { conditions: vec![] };
        assert!(matches!(
            empty.validate(2),
            Err(CoreError::InvalidSubconditionCount { actual: 0, .. })
        ));
        let too_many = WitnessCondition::Or {
            conditions: vec![WitnessCondition::Boolean { value: true }; 17],
        };
        assert!(!too_many.is_valid(2));
    }

    #[test]
    fn test_serialize_vectors() {
        let hash = Hash160::from_array([0x11; 20]);
        let rule = WitnessRule::allow(WitnessCondition::And {
            conditions: vec![
                WitnessCondition::Boolean { value: true },
                WitnessCondition::CalledByContract { hash },
            ],
        });
        let bytes = rule.to_array().unwrap();
        let mut expected = hex!("01 02 02 00 01 28").to_vec();
        expected.extend_from_slice(&[0x11; 20]);
        assert_eq!(bytes, expected);
        assert_eq!(rule.size(), bytes.len());
        assert_eq!(WitnessRule::from_array(&bytes).unwrap(), rule);
    }

    #[test]
    fn test_group_condition_wire() {
        let condition = WitnessCondition::Group { group: generator() };
        let bytes = condition.to_array().unwrap();
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 0x19);
        assert_eq!(condition.size(), 34);
        assert_eq!(WitnessCondition::from_array(&bytes).unwrap(), condition);
    }

    #[test]
    fn test_deserialize_rejects_deep_nesting() {
        let mut writer = BinaryWriter::new();
        writer.write_serializable(&nested_and(3)).unwrap();
        let bytes = writer.into_bytes();
        assert!(WitnessCondition::from_array(&bytes).is_err());

        let mut reader = MemoryReader::new(&bytes);
        assert!(WitnessCondition::deserialize_with_depth(&mut reader, 3).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_bad_bytes() {
        assert!(WitnessCondition::from_array(&[0x04]).is_err());
        assert!(WitnessCondition::from_array(&[0x02, 0x00]).is_err());
        assert!(WitnessCondition::from_array(&[0x00, 0x02]).is_err());
        assert!(WitnessRule::from_array(&[0x02, 0x20]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let rule = WitnessRule::deny(WitnessCondition::Or {
            conditions: vec![
                WitnessCondition::CalledByGroup { group: generator() },
                WitnessCondition::not(WitnessCondition::Boolean { value: false }),
            ],
        });
        let json = rule.to_json();
        assert_eq!(
            json,
            json!({
                "action": "Deny",
                "condition": {
                    "type": "Or",
                    "expressions": [
                        {
                            "type": "CalledByGroup",
                            "group": "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"
                        },
                        {
                            "type": "Not",
                            "expression": { "type": "Boolean", "expression": false }
                        }
                    ]
                }
            })
        );
        assert_eq!(WitnessRule::from_json(&json).unwrap(), rule);
    }

    #[test]
    fn test_json_hash_condition() {
        let json = json!({
            "type": "ScriptHash",
            "hash": "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5"
        });
        let condition = WitnessCondition::from_json(&json).unwrap();
        assert_eq!(condition.to_json(), json);

        let boolean = json!({ "type": "Boolean", "expression": "true" });
        assert_eq!(
            WitnessCondition::from_json(&boolean).unwrap(),
            WitnessCondition::Boolean { value: true }
        );
        assert!(WitnessCondition::from_json(&json!({ "type": "Unknown" })).is_err());
    }
}
