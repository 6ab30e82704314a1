//! Cryptographic building blocks for Neo N3 signing.
//!
//! Neo uses secp256r1 (NIST P-256) ECDSA over SHA-256 message digests.
//! Public keys travel in 33-byte compressed SEC1 form and signatures are
//! the 64-byte `r || s` concatenation.

pub mod ecc256;
pub mod ecdsa;
mod error;
pub mod hash;

pub use ecc256::{KeyPair, PrivateKey, PublicKey, KEY_SIZE};
pub use ecdsa::{Secp256r1Sign, Secp256r1Verify, Signature};
pub use error::{CryptoError, CryptoResult};
pub use hash::{hash160, hash256, ripemd160, sha256};
