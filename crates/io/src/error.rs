// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IoError {
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("Value {value} exceeds maximum {max}")]
    ExceedsMaximum { value: u64, max: u64 },

    #[error("Non-canonical variable-length integer with prefix 0x{0:02x}")]
    NonCanonicalVarInt(u8),

    #[error("Invalid UTF-8 string")]
    InvalidUtf8,

    #[error("{0} trailing bytes after deserialization")]
    TrailingBytes(usize),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl IoError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn exceeds(value: usize, max: usize) -> Self {
        Self::ExceedsMaximum {
            value: value as u64,
            max: max as u64,
        }
    }
}

pub type IoResult<T> = Result<T, IoError>;
