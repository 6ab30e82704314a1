//! Error types for signer and witness construction.

use neo_config::ConfigError;
use neo_cryptography::CryptoError;
use neo_io::IoError;
use neo_primitives::PrimitiveError;
use neo_smart_contract::ContractError;
use thiserror::Error;

/// Errors raised while assembling signers and witnesses.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Global scope cannot be combined with other scopes, allowed contracts, groups or rules")]
    GlobalScopeConflict,

    #[error("None scope cannot be combined with other scopes, allowed contracts, groups or rules")]
    NoneScopeConflict,

    #[error("too many {list}: {actual} exceeds the maximum of {max}")]
    TooManySubitems {
        list: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("witness condition nesting exceeds the maximum depth of {max}")]
    NestingDepthExceeded { max: usize },

    #[error("composite witness condition needs between 1 and {max} sub-conditions, got {actual}")]
    InvalidSubconditionCount { max: usize, actual: usize },

    #[error("insufficient signatures: {required} required, {provided} provided")]
    InsufficientSignatures { required: usize, provided: usize },

    #[error("invalid witness scope: {0}")]
    InvalidScope(String),

    #[error("{0}")]
    InvalidAccount(String),

    #[error("invalid json: {0}")]
    Json(String),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError {
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}

impl From<CoreError> for IoError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Io(inner) => inner,
            other => IoError::invalid_data(other.to_string()),
        }
    }
}

/// Result type for signer and witness operations.
pub type CoreResult<T> = Result<T, CoreError>;
