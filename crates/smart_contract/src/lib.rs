//! Smart contract support for transaction authors.
//!
//! Provides the contract parameter model, the [`ScriptBuilderExt`]
//! extension that pushes parameters and emits contract calls, and the
//! standard signature and multi-signature verification contracts.

pub mod contract;
pub mod contract_parameter;
pub mod contract_parameter_type;
pub mod error;
pub mod helper;
pub mod script_builder_ext;

pub use contract::Contract;
pub use contract_parameter::{ContractParameter, ContractParameterValue};
pub use contract_parameter_type::ContractParameterType;
pub use error::{ContractError, ContractResult};
pub use script_builder_ext::ScriptBuilderExt;

pub use neo_vm::CallFlags;
