//! Contract parameter pushes and contract invocation sequences for
//! [`ScriptBuilder`].

use crate::{ContractError, ContractParameter, ContractParameterValue, ContractResult};
use neo_primitives::Hash160;
use neo_vm::{CallFlags, InteropService, OpCode, ScriptBuilder};
use tracing::trace;

/// Extension methods that push [`ContractParameter`] values.
pub trait ScriptBuilderExt {
    /// Pushes a single parameter according to its type.
    ///
    /// Null values push `PUSHNULL`. Arrays push their elements in reverse
    /// followed by the count and `PACK`; maps push each value then its key,
    /// then the count and `PACKMAP`.
    fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> ContractResult<&mut Self>;

    /// Pushes `parameters` as one array. An empty slice is `NEWARRAY0`.
    fn emit_push_parameters(&mut self, parameters: &[ContractParameter])
        -> ContractResult<&mut Self>;

    /// Pushes the little-endian bytes of a script hash.
    fn emit_push_hash160(&mut self, hash: &Hash160) -> ContractResult<&mut Self>;

    /// Emits `System.Contract.Call` of `method` on `script_hash`.
    ///
    /// Pushes the argument array, the call flags, the method name and the
    /// script hash, in that order, then the syscall.
    fn emit_contract_call(
        &mut self,
        script_hash: &Hash160,
        method: &str,
        parameters: &[ContractParameter],
        call_flags: CallFlags,
    ) -> ContractResult<&mut Self>;
}

impl ScriptBuilderExt for ScriptBuilder {
    fn emit_push_parameter(&mut self, parameter: &ContractParameter) -> ContractResult<&mut Self> {
        let Some(value) = &parameter.value else {
            if parameter.param_type.is_pushable() {
                return Ok(self.emit_push_null());
            }
            return Err(ContractError::UnsupportedPush(parameter.param_type));
        };
        parameter.validate()?;

        match value {
            ContractParameterValue::Boolean(b) => {
                self.emit_push_bool(*b);
            }
            ContractParameterValue::Integer(i) => {
                self.emit_push_bigint(i)?;
            }
            ContractParameterValue::ByteArray(bytes) => {
                self.emit_push(bytes)?;
            }
            ContractParameterValue::String(s) => {
                self.emit_push_string(s)?;
            }
            ContractParameterValue::Hash160(hash) => {
                self.emit_push(hash.as_bytes())?;
            }
            ContractParameterValue::Hash256(hash) => {
                self.emit_push(hash.as_bytes())?;
            }
            ContractParameterValue::PublicKey(key) => {
                self.emit_push(&key.to_compressed())?;
            }
            ContractParameterValue::Signature(sig) => {
                self.emit_push(sig.as_bytes())?;
            }
            ContractParameterValue::Array(items) => {
                self.emit_push_parameters(items)?;
            }
            ContractParameterValue::Map(entries) => {
                for (key, item) in entries {
                    self.emit_push_parameter(item)?;
                    self.emit_push_parameter(key)?;
                }
                self.emit_push_int(entries.len() as i64);
                self.emit_pack_map();
            }
        }
        Ok(self)
    }

    fn emit_push_parameters(
        &mut self,
        parameters: &[ContractParameter],
    ) -> ContractResult<&mut Self> {
        if parameters.is_empty() {
            return Ok(self.emit_opcode(OpCode::NEWARRAY0));
        }
        for parameter in parameters.iter().rev() {
            self.emit_push_parameter(parameter)?;
        }
        self.emit_push_int(parameters.len() as i64);
        Ok(self.emit_pack())
    }

    fn emit_push_hash160(&mut self, hash: &Hash160) -> ContractResult<&mut Self> {
        Ok(self.emit_push(hash.as_bytes())?)
    }

    fn emit_contract_call(
        &mut self,
        script_hash: &Hash160,
        method: &str,
        parameters: &[ContractParameter],
        call_flags: CallFlags,
    ) -> ContractResult<&mut Self> {
        trace!(contract = %script_hash, method, args = parameters.len(), "contract call");
        self.emit_push_parameters(parameters)?;
        self.emit_push_int(i64::from(call_flags.bits()));
        self.emit_push_string(method)?;
        self.emit_push_hash160(script_hash)?;
        Ok(self.emit_syscall(InteropService::SystemContractCall))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContractParameterType;
    use hex_literal::hex;

    fn push(parameter: &ContractParameter) -> ContractResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        builder.emit_push_parameter(parameter)?;
        Ok(builder.into_script())
    }

    #[test]
    fn test_push_primitives() {
        assert_eq!(push(&ContractParameter::boolean(true)).unwrap(), vec![0x08]);
        assert_eq!(push(&ContractParameter::integer(5)).unwrap(), vec![0x15]);
        assert_eq!(
            push(&ContractParameter::string("neo")).unwrap(),
            hex!("0c036e656f").to_vec()
        );
        assert_eq!(
            push(&ContractParameter::byte_array(vec![0xAA, 0xBB])).unwrap(),
            hex!("0c02aabb").to_vec()
        );
        assert_eq!(push(&ContractParameter::any()).unwrap(), vec![0x0B]);
    }

    #[test]
    fn test_push_hash_uses_little_endian() {
        let hash: Hash160 = "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5".parse().unwrap();
        let script = push(&ContractParameter::hash160(hash)).unwrap();
        assert_eq!(
            script,
            hex!("0c14f563ea40bc283d4d0e05c48ea305b3f2a07340ef").to_vec()
        );
    }

    #[test]
    fn test_push_array_reversed_then_pack() {
        let script = push(&ContractParameter::array(vec![
            ContractParameter::integer(1),
            ContractParameter::integer(2),
        ]))
        .unwrap();
        assert_eq!(script, hex!("12 11 12 c0").to_vec());

        let empty = push(&ContractParameter::array(vec![])).unwrap();
        assert_eq!(empty, vec![0xC2]);
    }

    #[test]
    fn test_push_map_value_then_key() {
        let map = ContractParameter::map(vec![(
            ContractParameter::integer(1),
            ContractParameter::boolean(true),
        )])
        .unwrap();
        assert_eq!(push(&map).unwrap(), hex!("08 11 11 be").to_vec());
    }

    #[test]
    fn test_push_unsupported() {
        let interop = ContractParameter {
            name: None,
            param_type: ContractParameterType::InteropInterface,
            value: None,
        };
        assert_eq!(
            push(&interop),
            Err(ContractError::UnsupportedPush(
                ContractParameterType::InteropInterface
            ))
        );

        let mismatched = ContractParameter {
            name: None,
            param_type: ContractParameterType::Boolean,
            value: Some(ContractParameterValue::Integer(1.into())),
        };
        assert!(push(&mismatched).is_err());
    }

    #[test]
    fn test_contract_call_without_parameters() {
        let hash = Hash160::from_array([0x01; 20]);
        let mut builder = ScriptBuilder::new();
        builder
            .emit_contract_call(&hash, "symbol", &[], CallFlags::READ_ONLY)
            .unwrap();
        let script = builder.into_script();

        let mut expected = hex!("c2 15 0c06 73796d626f6c 0c14").to_vec();
        expected.extend_from_slice(&[0x01; 20]);
        expected.extend_from_slice(&hex!("41627d5b52"));
        assert_eq!(script, expected);
    }
}
