//! Neo VM script tooling.
//!
//! This crate covers the parts of the Neo virtual machine a transaction
//! author needs: the opcode table, `SYSCALL` identifiers, a script builder
//! and an instruction reader for inspecting existing scripts. It does not
//! execute scripts.

pub mod call_flags;
pub mod error;
pub mod instruction;
pub mod interop_service;
pub mod op_code;
pub mod script_builder;

pub use call_flags::CallFlags;
pub use error::{VmError, VmResult};
pub use instruction::{Instruction, ScriptReader};
pub use interop_service::InteropService;
pub use op_code::{OpCode, OperandSize};
pub use script_builder::ScriptBuilder;
