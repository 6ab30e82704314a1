use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("ecc256: invalid private key")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key encoding")]
    InvalidPublicKey,

    #[error("ecdsa: signature must be 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("ecdsa: invalid signature")]
    InvalidSignature,

    #[error("ecdsa: signing failed")]
    SigningFailed,
}

pub type CryptoResult<T> = Result<T, CryptoError>;
