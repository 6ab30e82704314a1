//! Implementation of `Hash256`, the 32-byte hash used for transactions and blocks.

use crate::{parse_reversed_hex, to_reversed_hex, PrimitiveError, PrimitiveResult};
use neo_config::HASH_SIZE;
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::de::Error as SerdeDeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A 32-byte hash, stored little-endian.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Hash256([u8; HASH_SIZE]);

impl Hash256 {
    pub const LENGTH: usize = HASH_SIZE;
    pub const ZERO: Hash256 = Hash256([0u8; HASH_SIZE]);

    pub const fn from_array(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a little-endian byte slice of exactly 32 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; HASH_SIZE] =
            value
                .try_into()
                .map_err(|_| PrimitiveError::InvalidLength {
                    expected: HASH_SIZE,
                    actual: value.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Parses a big-endian hex string, with or without a `0x` prefix.
    pub fn parse(value: &str) -> PrimitiveResult<Self> {
        parse_reversed_hex::<HASH_SIZE>(value).map(Self)
    }

    /// SHA-256 of `data`, the way transaction hashes are computed.
    pub fn sha256(data: &[u8]) -> Self {
        let mut bytes = [0u8; HASH_SIZE];
        bytes.copy_from_slice(&Sha256::digest(data));
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_array(&self) -> [u8; HASH_SIZE] {
        self.0
    }

    pub fn to_hex_string(&self) -> String {
        to_reversed_hex(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl FromStr for Hash256 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_hex_string())
    }
}

impl PartialOrd for Hash256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hash256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl From<[u8; HASH_SIZE]> for Hash256 {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Hash256 {
    type Error = PrimitiveError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serializable for Hash256 {
    fn size(&self) -> usize {
        HASH_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array::<HASH_SIZE>()?))
    }
}

impl Serialize for Hash256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_parse_and_display() {
        let text = "0x0102030405060708091011121314151617181920212223242526272829303132";
        let hash = Hash256::parse(text).unwrap();
        assert_eq!(hash.as_bytes()[0], 0x32);
        assert_eq!(hash.as_bytes()[31], 0x01);
        assert_eq!(hash.to_string(), text);
    }

    #[test]
    fn test_sha256() {
        let hash = Hash256::sha256(b"");
        assert_eq!(
            hash.to_array(),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            Hash256::from_bytes(&[0u8; 20]),
            Err(PrimitiveError::InvalidLength {
                expected: 32,
                actual: 20
            })
        );
    }
}
