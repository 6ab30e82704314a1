//! Instruction decoding for inspecting existing scripts.

use crate::error::{VmError, VmResult};
use crate::interop_service::InteropService;
use crate::op_code::OpCode;
use num_bigint::BigInt;

/// A decoded instruction borrowing its operand from the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    pub opcode: OpCode,
    /// Operand bytes, excluding any length prefix.
    pub operand: &'a [u8],
    /// Offset of the opcode byte within the script.
    pub offset: usize,
}

impl<'a> Instruction<'a> {
    /// The integer pushed by this instruction, if it is an integer push.
    pub fn push_integer(&self) -> Option<BigInt> {
        match self.opcode {
            OpCode::PUSHM1 => Some(BigInt::from(-1)),
            op if (OpCode::PUSH0..=OpCode::PUSH16).contains(&op) => {
                Some(BigInt::from(op as u8 - OpCode::PUSH0 as u8))
            }
            OpCode::PUSHINT8
            | OpCode::PUSHINT16
            | OpCode::PUSHINT32
            | OpCode::PUSHINT64
            | OpCode::PUSHINT128
            | OpCode::PUSHINT256 => Some(BigInt::from_signed_bytes_le(self.operand)),
            _ => None,
        }
    }

    /// The bytes pushed by a `PUSHDATA*` instruction.
    pub fn push_data(&self) -> Option<&'a [u8]> {
        match self.opcode {
            OpCode::PUSHDATA1 | OpCode::PUSHDATA2 | OpCode::PUSHDATA4 => Some(self.operand),
            _ => None,
        }
    }

    /// The service called by a `SYSCALL` instruction.
    pub fn syscall(&self) -> Option<u32> {
        if self.opcode != OpCode::SYSCALL {
            return None;
        }
        let bytes: [u8; 4] = self.operand.try_into().ok()?;
        Some(u32::from_le_bytes(bytes))
    }

    pub fn is_syscall(&self, service: InteropService) -> bool {
        self.syscall() == Some(service.hash())
    }
}

/// Iterates over the instructions of a script.
///
/// Yields an error, then stops, if the script ends mid-instruction or
/// contains an unassigned opcode.
#[derive(Debug, Clone)]
pub struct ScriptReader<'a> {
    script: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> ScriptReader<'a> {
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            pos: 0,
            failed: false,
        }
    }

    /// Decodes every instruction, failing on the first malformed one.
    pub fn decode_all(script: &'a [u8]) -> VmResult<Vec<Instruction<'a>>> {
        ScriptReader::new(script).collect()
    }

    fn take(&mut self, count: usize) -> VmResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|end| *end <= self.script.len())
            .ok_or(VmError::TruncatedScript { offset: self.pos })?;
        let slice = &self.script[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn read_instruction(&mut self) -> VmResult<Instruction<'a>> {
        let offset = self.pos;
        let byte = self.take(1)?[0];
        let opcode = OpCode::from_byte(byte).ok_or(VmError::InvalidOpCode(byte))?;
        let layout = opcode.operand_size();
        let operand = if layout.has_size_prefix() {
            let prefix = self.take(layout.size_prefix())?;
            let mut len_bytes = [0u8; 4];
            len_bytes[..prefix.len()].copy_from_slice(prefix);
            self.take(u32::from_le_bytes(len_bytes) as usize)?
        } else {
            self.take(layout.size())?
        };
        Ok(Instruction {
            opcode,
            operand,
            offset,
        })
    }
}

impl<'a> Iterator for ScriptReader<'a> {
    type Item = VmResult<Instruction<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.script.len() {
            return None;
        }
        let result = self.read_instruction();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
