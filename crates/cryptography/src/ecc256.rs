//! secp256r1 key material.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use neo_config::PUBLIC_KEY_SIZE;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use p256::{
    elliptic_curve::{
        rand_core::{CryptoRng, RngCore},
        sec1::{FromEncodedPoint, ToEncodedPoint},
    },
    EncodedPoint, PublicKey as P256PublicKey, SecretKey as P256SecretKey,
};
use serde::de::Error as SerdeDeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{CryptoError, CryptoResult};

pub const KEY_SIZE: usize = 32;

#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    #[inline]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            key: Zeroizing::new(bytes),
        }
    }

    #[inline]
    pub fn from_slice(slice: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self::new(bytes))
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub(crate) fn to_secret(&self) -> CryptoResult<P256SecretKey> {
        P256SecretKey::from_slice(self.as_be_bytes()).map_err(|_| CryptoError::InvalidPrivateKey)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

/// A validated secp256r1 public key.
///
/// Keys order by X coordinate, then Y coordinate, both compared as
/// big-endian integers. Multi-signature scripts list keys in this order.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct PublicKey {
    gx: [u8; KEY_SIZE],
    gy: [u8; KEY_SIZE],
}

impl PublicKey {
    /// Decodes a compressed (33 bytes) or uncompressed (65 bytes) SEC1 key.
    #[inline]
    pub fn from_sec1_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let public =
            P256PublicKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_p256(&public)
    }

    pub fn from_hex(value: &str) -> CryptoResult<Self> {
        let bytes = hex::decode(value.trim().trim_start_matches("0x"))
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_sec1_bytes(&bytes)
    }

    fn from_p256(public: &P256PublicKey) -> CryptoResult<Self> {
        let encoded = public.to_encoded_point(false);
        let (x, y) = match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return Err(CryptoError::InvalidPublicKey),
        };
        let mut gx = [0u8; KEY_SIZE];
        let mut gy = [0u8; KEY_SIZE];
        gx.copy_from_slice(x.as_ref());
        gy.copy_from_slice(y.as_ref());
        Ok(Self { gx, gy })
    }

    pub(crate) fn to_p256(self) -> CryptoResult<P256PublicKey> {
        let encoded = EncodedPoint::from_bytes(self.to_uncompressed())
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Option::from(P256PublicKey::from_encoded_point(&encoded)).ok_or(CryptoError::InvalidPublicKey)
    }

    #[inline]
    pub fn to_uncompressed(&self) -> [u8; 65] {
        let mut buf = [0u8; 65];
        buf[0] = 0x04;
        buf[1..33].copy_from_slice(&self.gx);
        buf[33..].copy_from_slice(&self.gy);
        buf
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; PUBLIC_KEY_SIZE] {
        let mut buf = [0u8; PUBLIC_KEY_SIZE];
        buf[0] = 0x02 + (self.gy[KEY_SIZE - 1] & 0x01);
        buf[1..].copy_from_slice(&self.gx);
        buf
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gx.cmp(&other.gx).then_with(|| self.gy.cmp(&other.gy))
    }
}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &self.to_hex())
            .finish()
    }
}

impl Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Written as the raw compressed point, without a length prefix.
impl Serializable for PublicKey {
    fn size(&self) -> usize {
        PUBLIC_KEY_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.to_compressed())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let prefix = reader.peek()?;
        let length = match prefix {
            0x02 | 0x03 => PUBLIC_KEY_SIZE,
            0x04 => 65,
            other => {
                return Err(IoError::invalid_data(format!(
                    "invalid public key prefix 0x{other:02x}"
                )))
            }
        };
        let bytes = reader.read_memory(length)?;
        PublicKey::from_sec1_bytes(bytes).map_err(|e| IoError::invalid_data(e.to_string()))
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(D::Error::custom)
    }
}

#[derive(Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    #[inline]
    pub fn from_private(private_key: PrivateKey) -> CryptoResult<Self> {
        let secret = private_key.to_secret()?;
        let public_key = PublicKey::from_p256(&secret.public_key())?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> CryptoResult<Self> {
        let secret = P256SecretKey::random(rng);
        let private_key = PrivateKey::from_slice(&secret.to_bytes())?;
        let public_key = PublicKey::from_p256(&secret.public_key())?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key == other.private_key
    }
}

impl Eq for KeyPair {}
