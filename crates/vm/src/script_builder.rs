//! Script builder module for the Neo Virtual Machine.
//!
//! This module provides a way to programmatically construct scripts for the Neo VM.

use crate::error::{VmError, VmResult};
use crate::interop_service::InteropService;
use crate::op_code::OpCode;
use num_bigint::{BigInt, Sign};
use tracing::trace;

/// Helps construct VM scripts programmatically.
///
/// Emission methods append to the script and return `&mut Self` so calls
/// can be chained; the finished script is taken with [`ScriptBuilder::into_script`].
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    /// The script being built
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self { script: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            script: Vec::with_capacity(capacity),
        }
    }

    /// Emits a single byte to the script.
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits raw bytes to the script.
    pub fn emit_raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.script.extend_from_slice(bytes);
        self
    }

    /// Emits an opcode followed by its operand.
    pub fn emit_instruction(&mut self, opcode: OpCode, operand: &[u8]) -> &mut Self {
        self.emit_opcode(opcode);
        self.emit_raw(operand)
    }

    /// Pushes a byte string using the smallest `PUSHDATA` form.
    pub fn emit_push(&mut self, data: &[u8]) -> VmResult<&mut Self> {
        let len = data.len();
        if len < 0x100 {
            self.emit_instruction(OpCode::PUSHDATA1, &[len as u8]);
        } else if len < 0x10000 {
            self.emit_instruction(OpCode::PUSHDATA2, &(len as u16).to_le_bytes());
        } else {
            let len32 = u32::try_from(len).map_err(|_| VmError::DataTooLarge { len })?;
            self.emit_instruction(OpCode::PUSHDATA4, &len32.to_le_bytes());
        }
        Ok(self.emit_raw(data))
    }

    /// Pushes the UTF-8 bytes of a string.
    pub fn emit_push_string(&mut self, value: &str) -> VmResult<&mut Self> {
        self.emit_push(value.as_bytes())
    }

    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit_opcode(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    pub fn emit_push_null(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PUSHNULL)
    }

    /// Pushes a 64-bit integer.
    ///
    /// `-1..=16` use their dedicated opcodes; everything else is the shortest
    /// `PUSHINT*` that holds the two's complement value.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        if let Some(op) = OpCode::for_small_int(value) {
            return self.emit_opcode(op);
        }
        let mut bytes = value.to_le_bytes().to_vec();
        while bytes.len() > 1 {
            let last = bytes[bytes.len() - 1];
            let prev_negative = bytes[bytes.len() - 2] & 0x80 != 0;
            if (last == 0x00 && !prev_negative) || (last == 0xFF && prev_negative) {
                bytes.pop();
            } else {
                break;
            }
        }
        match int_width(bytes.len()) {
            Some((opcode, width)) => {
                let padded = pad_signed(&bytes, width, value < 0);
                self.emit_instruction(opcode, &padded)
            }
            None => self.emit_instruction(OpCode::PUSHINT64, &value.to_le_bytes()),
        }
    }

    /// Pushes an arbitrary-precision integer, failing above 256 bits.
    pub fn emit_push_bigint(&mut self, value: &BigInt) -> VmResult<&mut Self> {
        if let Ok(small) = i64::try_from(value) {
            return Ok(self.emit_push_int(small));
        }

        let bytes = value.to_signed_bytes_le();
        let (opcode, width) =
            int_width(bytes.len()).ok_or(VmError::IntegerTooLarge { bytes: bytes.len() })?;
        let negative = matches!(value.sign(), Sign::Minus);
        let padded = pad_signed(&bytes, width, negative);
        Ok(self.emit_instruction(opcode, &padded))
    }

    /// Emits a `SYSCALL` to a known interop service.
    pub fn emit_syscall(&mut self, service: InteropService) -> &mut Self {
        self.emit_syscall_hash(service.hash())
    }

    pub fn emit_syscall_hash(&mut self, hash: u32) -> &mut Self {
        self.emit_instruction(OpCode::SYSCALL, &hash.to_le_bytes())
    }

    /// Emits PACK, turning the top `n` items (with `n` on top) into an array.
    pub fn emit_pack(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PACK)
    }

    pub fn emit_pack_map(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PACKMAP)
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.script
    }

    /// Copies the script built so far.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Finishes building and returns the script.
    pub fn into_script(self) -> Vec<u8> {
        trace!(len = self.script.len(), "script built");
        self.script
    }
}

/// Smallest `PUSHINT*` width that holds `len` two's complement bytes.
fn int_width(len: usize) -> Option<(OpCode, usize)> {
    match len {
        0..=1 => Some((OpCode::PUSHINT8, 1)),
        2 => Some((OpCode::PUSHINT16, 2)),
        3..=4 => Some((OpCode::PUSHINT32, 4)),
        5..=8 => Some((OpCode::PUSHINT64, 8)),
        9..=16 => Some((OpCode::PUSHINT128, 16)),
        17..=32 => Some((OpCode::PUSHINT256, 32)),
        _ => None,
    }
}

fn pad_signed(bytes: &[u8], target_len: usize, negative: bool) -> Vec<u8> {
    let mut padded = Vec::with_capacity(target_len);
    padded.extend_from_slice(bytes);
    let fill = if negative { 0xFF } else { 0x00 };
    while padded.len() < target_len {
        padded.push(fill);
    }
    padded
}
