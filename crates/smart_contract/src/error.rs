use crate::ContractParameterType;
use neo_cryptography::CryptoError;
use neo_primitives::PrimitiveError;
use neo_vm::VmError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("value does not match parameter type {0:?}")]
    TypeMismatch(ContractParameterType),

    #[error("{0:?} parameters cannot be used as map keys")]
    InvalidMapKey(ContractParameterType),

    #[error("{0:?} parameters cannot be pushed onto the stack")]
    UnsupportedPush(ContractParameterType),

    #[error("unknown contract parameter type: {0}")]
    UnknownParameterType(String),

    #[error("invalid signing threshold {threshold} for {keys} public keys")]
    InvalidThreshold { threshold: usize, keys: usize },

    #[error("{count} public keys exceed the maximum of {max}")]
    TooManyPublicKeys { count: usize, max: usize },

    #[error("invalid contract parameter json: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Vm(#[from] VmError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}

impl ContractError {
    pub fn invalid_json(message: impl Into<String>) -> Self {
        Self::InvalidJson(message.into())
    }
}

pub type ContractResult<T> = Result<T, ContractError>;
