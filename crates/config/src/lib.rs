//! Neo Configuration Module
//!
//! Protocol constants shared by every signing crate, plus the
//! [`SigningSettings`] type used to tune the limits a signer enforces.

use serde::{Deserialize, Serialize};

mod settings;

pub use settings::{ConfigError, SignerLimits, SigningSettings};

/// Size of a hash (UInt256) in bytes
pub const HASH_SIZE: usize = 32;
/// Size of an address (UInt160) in bytes
pub const ADDRESS_SIZE: usize = 20;
/// Size of a compressed secp256r1 public key
pub const PUBLIC_KEY_SIZE: usize = 33;
/// Size of an ECDSA signature (r || s)
pub const SIGNATURE_SIZE: usize = 64;

/// Address version byte of Neo N3 addresses.
pub const ADDRESS_VERSION: u8 = 0x35;

/// Maximum number of allowed contracts, groups or rules on a single signer.
pub const MAX_SIGNER_SUBITEMS: usize = 16;
/// Maximum nesting of composite witness conditions.
pub const MAX_NESTING_DEPTH: usize = 2;
/// Maximum number of public keys in a multi-signature account.
pub const MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT: usize = 1024;

/// Maximum invocation script length of a witness.
pub const MAX_INVOCATION_SCRIPT: usize = 1024;
/// Maximum verification script length of a witness.
pub const MAX_VERIFICATION_SCRIPT: usize = 1024;

/// Network type for Neo blockchain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NetworkType {
    MainNet,
    #[default]
    TestNet,
    Private,
}

impl NetworkType {
    /// Gets the network magic number
    pub fn magic(&self) -> u32 {
        match self {
            NetworkType::MainNet => 0x334f454e, // "NEO3" in little endian
            NetworkType::TestNet => 0x3554334e, // "N3T5" in little endian
            NetworkType::Private => 0x00000000,
        }
    }

    /// Gets the address version
    pub fn address_version(&self) -> u8 {
        ADDRESS_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_magic() {
        assert_eq!(NetworkType::MainNet.magic(), 0x334f454e);
        assert_eq!(NetworkType::TestNet.magic(), 0x3554334e);
        assert_eq!(NetworkType::default(), NetworkType::TestNet);
    }

    #[test]
    fn test_address_version() {
        assert_eq!(NetworkType::MainNet.address_version(), 0x35);
        assert_eq!(NetworkType::Private.address_version(), ADDRESS_VERSION);
    }
}
