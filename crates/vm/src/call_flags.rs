//! Call flags passed to `System.Contract.Call`.
//!
//! These restrict what the called contract may do during the invocation.

use std::fmt;
use std::ops::BitOr;

/// Flags that control what operations a contract can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallFlags(pub u8);

impl CallFlags {
    /// No flags.
    pub const NONE: Self = Self(0);

    /// Allow reading states.
    pub const READ_STATES: Self = Self(0x01);

    /// Allow writing states.
    pub const WRITE_STATES: Self = Self(0x02);

    /// Allow calling other contracts.
    pub const ALLOW_CALL: Self = Self(0x04);

    /// Allow sending notifications.
    pub const ALLOW_NOTIFY: Self = Self(0x08);

    /// Allow reading and writing states.
    pub const STATES: Self = Self(Self::READ_STATES.0 | Self::WRITE_STATES.0);

    /// Allow reading states and calling other contracts.
    pub const READ_ONLY: Self = Self(Self::READ_STATES.0 | Self::ALLOW_CALL.0);

    /// Allow all operations.
    pub const ALL: Self = Self(Self::STATES.0 | Self::ALLOW_CALL.0 | Self::ALLOW_NOTIFY.0);

    /// Checks if the flags include the specified flags.
    pub fn has_flag(&self, flag: Self) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Creates CallFlags from bits, returning None if invalid bits are set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl Default for CallFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for CallFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = [
            (Self::ALL, "All"),
            (Self::READ_ONLY, "ReadOnly"),
            (Self::STATES, "States"),
            (Self::NONE, "None"),
        ];
        if let Some((_, name)) = named.iter().find(|(flags, _)| flags == self) {
            return f.write_str(name);
        }
        let parts: Vec<&str> = [
            (Self::READ_STATES, "ReadStates"),
            (Self::WRITE_STATES, "WriteStates"),
            (Self::ALLOW_CALL, "AllowCall"),
            (Self::ALLOW_NOTIFY, "AllowNotify"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.has_flag(*flag))
        .map(|(_, name)| name)
        .collect();
        f.write_str(&parts.join(", "))
    }
}
