use std::fmt;

use neo_config::SIGNATURE_SIZE;
use p256::ecdsa::signature::{Signer, Verifier as P256Verifier};
use p256::ecdsa::{Signature as P256Signature, SigningKey, VerifyingKey};

use crate::ecc256::{KeyPair, PrivateKey, PublicKey};
use crate::{CryptoError, CryptoResult};

/// A 64-byte secp256r1 signature, `r || s` big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    pub const fn new(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let array: [u8; SIGNATURE_SIZE] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

pub trait Secp256r1Sign {
    /// Signs SHA-256(`message`).
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> CryptoResult<Signature>;
}

pub trait Secp256r1Verify {
    fn secp256r1_verify<T: AsRef<[u8]>>(&self, message: T, sign: &Signature) -> CryptoResult<()>;
}

impl Secp256r1Sign for PrivateKey {
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> CryptoResult<Signature> {
        let sk: SigningKey = self.to_secret()?.into();
        let sign: P256Signature = sk
            .try_sign(message.as_ref())
            .map_err(|_err| CryptoError::SigningFailed)?;
        Signature::from_slice(&sign.to_bytes())
    }
}

impl Secp256r1Sign for KeyPair {
    fn secp256r1_sign<T: AsRef<[u8]>>(&self, message: T) -> CryptoResult<Signature> {
        self.private_key().secp256r1_sign(message)
    }
}

impl Secp256r1Verify for PublicKey {
    #[inline]
    fn secp256r1_verify<T: AsRef<[u8]>>(&self, message: T, sign: &Signature) -> CryptoResult<()> {
        let sign =
            P256Signature::from_slice(sign.as_ref()).map_err(|_err| CryptoError::InvalidSignature)?;
        VerifyingKey::from(self.to_p256()?)
            .verify(message.as_ref(), &sign)
            .map_err(|_err| CryptoError::InvalidSignature)
    }
}

impl KeyPair {
    pub fn sign(&self, message: &[u8]) -> CryptoResult<Signature> {
        self.secp256r1_sign(message)
    }
}

impl PublicKey {
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.secp256r1_verify(message, signature).is_ok()
    }
}
