use thiserror::Error;

/// Errors raised while building or decoding scripts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("integer needs {bytes} bytes, PUSHINT256 holds at most 32")]
    IntegerTooLarge { bytes: usize },

    #[error("push data of {len} bytes exceeds PUSHDATA4 capacity")]
    DataTooLarge { len: usize },

    #[error("invalid opcode 0x{0:02x}")]
    InvalidOpCode(u8),

    #[error("script truncated at offset {offset}")]
    TruncatedScript { offset: usize },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl VmError {
    pub fn invalid_operation_msg(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }
}

pub type VmResult<T> = Result<T, VmError>;
