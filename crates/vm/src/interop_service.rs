//! System calls referenced by transaction and verification scripts.
//!
//! A `SYSCALL` operand is the first four bytes of SHA-256 over the ASCII
//! service name, read as a little-endian `u32`.

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use std::fmt;

/// Interop services emitted by the script builders in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteropService {
    SystemContractCall,
    SystemCryptoCheckSig,
    SystemCryptoCheckMultisig,
    SystemRuntimeCheckWitness,
    SystemRuntimeGetCallingScriptHash,
    SystemRuntimeGetScriptContainer,
}

impl InteropService {
    pub const ALL: [InteropService; 6] = [
        InteropService::SystemContractCall,
        InteropService::SystemCryptoCheckSig,
        InteropService::SystemCryptoCheckMultisig,
        InteropService::SystemRuntimeCheckWitness,
        InteropService::SystemRuntimeGetCallingScriptHash,
        InteropService::SystemRuntimeGetScriptContainer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InteropService::SystemContractCall => "System.Contract.Call",
            InteropService::SystemCryptoCheckSig => "System.Crypto.CheckSig",
            InteropService::SystemCryptoCheckMultisig => "System.Crypto.CheckMultisig",
            InteropService::SystemRuntimeCheckWitness => "System.Runtime.CheckWitness",
            InteropService::SystemRuntimeGetCallingScriptHash => {
                "System.Runtime.GetCallingScriptHash"
            }
            InteropService::SystemRuntimeGetScriptContainer => "System.Runtime.GetScriptContainer",
        }
    }

    /// The `SYSCALL` operand for this service.
    pub fn hash(self) -> u32 {
        HASHES[self as usize]
    }

    /// Looks a service up by its `SYSCALL` operand.
    pub fn from_hash(hash: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.hash() == hash)
    }

    /// Computes the `SYSCALL` operand for an arbitrary service name.
    pub fn hash_name(name: &str) -> u32 {
        let digest = Sha256::digest(name.as_bytes());
        u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
    }
}

// Indexed by discriminant; `ALL` lists the variants in declaration order.
static HASHES: Lazy<[u32; InteropService::ALL.len()]> =
    Lazy::new(|| InteropService::ALL.map(|service| InteropService::hash_name(service.name())));

impl fmt::Display for InteropService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
