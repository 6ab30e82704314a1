//! Implementation of `Hash160`, the 20-byte script hash.

use crate::{parse_reversed_hex, to_reversed_hex, PrimitiveError, PrimitiveResult};
use neo_config::{ADDRESS_SIZE, ADDRESS_VERSION};
use neo_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use ripemd::Ripemd160;
use serde::de::Error as SerdeDeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Length of a Base58Check-decoded address: version + hash + checksum.
const ADDRESS_PAYLOAD_SIZE: usize = 1 + ADDRESS_SIZE + 4;

/// A 20-byte script hash identifying an account or contract.
///
/// Bytes are stored little-endian (wire order). Ordering compares the
/// big-endian form, so sorting matches numeric order of the hex strings.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Hash160([u8; ADDRESS_SIZE]);

impl Hash160 {
    pub const LENGTH: usize = ADDRESS_SIZE;
    pub const ZERO: Hash160 = Hash160([0u8; ADDRESS_SIZE]);

    /// Wraps little-endian bytes.
    pub const fn from_array(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a little-endian byte slice of exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; ADDRESS_SIZE] =
            value
                .try_into()
                .map_err(|_| PrimitiveError::InvalidLength {
                    expected: ADDRESS_SIZE,
                    actual: value.len(),
                })?;
        Ok(Self(bytes))
    }

    /// Creates a hash from big-endian bytes, e.g. the decoded hex form.
    pub fn from_be_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let mut hash = Self::from_bytes(value)?;
        hash.0.reverse();
        Ok(hash)
    }

    /// Parses a big-endian hex string, with or without a `0x` prefix.
    pub fn parse(value: &str) -> PrimitiveResult<Self> {
        parse_reversed_hex::<ADDRESS_SIZE>(value).map(Self)
    }

    /// Hashes a script: RIPEMD160(SHA256(script)).
    pub fn from_script(script: &[u8]) -> Self {
        let sha = Sha256::digest(script);
        let digest = Ripemd160::digest(sha);
        let mut bytes = [0u8; ADDRESS_SIZE];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Parses a Neo N3 address.
    pub fn from_address(address: &str) -> PrimitiveResult<Self> {
        Self::from_address_with_version(address, ADDRESS_VERSION)
    }

    /// Parses an address, requiring the given version byte.
    pub fn from_address_with_version(address: &str, version: u8) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| PrimitiveError::InvalidAddress(format!("invalid Base58: {e}")))?;

        if decoded.len() != ADDRESS_PAYLOAD_SIZE {
            return Err(PrimitiveError::InvalidAddress(format!(
                "expected {ADDRESS_PAYLOAD_SIZE} decoded bytes, got {}",
                decoded.len()
            )));
        }
        if decoded[0] != version {
            return Err(PrimitiveError::InvalidAddress(format!(
                "unexpected version byte 0x{:02x}",
                decoded[0]
            )));
        }

        let (data, checksum) = decoded.split_at(1 + ADDRESS_SIZE);
        if checksum != &address_checksum(data)[..] {
            return Err(PrimitiveError::InvalidAddress(
                "checksum mismatch".to_string(),
            ));
        }

        trace!(address, "decoded address");
        Self::from_bytes(&data[1..])
    }

    /// Encodes this hash as a Neo N3 address.
    pub fn to_address(&self) -> String {
        self.to_address_with_version(ADDRESS_VERSION)
    }

    /// Encodes this hash as a Base58Check address with the given version byte.
    pub fn to_address_with_version(&self, version: u8) -> String {
        let mut data = Vec::with_capacity(ADDRESS_PAYLOAD_SIZE);
        data.push(version);
        data.extend_from_slice(&self.0);
        let checksum = address_checksum(&data);
        data.extend_from_slice(&checksum);
        bs58::encode(data).into_string()
    }

    /// Little-endian bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    /// Little-endian bytes.
    pub fn to_array(&self) -> [u8; ADDRESS_SIZE] {
        self.0
    }

    /// Big-endian bytes.
    pub fn to_be_array(&self) -> [u8; ADDRESS_SIZE] {
        let mut bytes = self.0;
        bytes.reverse();
        bytes
    }

    /// Big-endian hex with `0x` prefix.
    pub fn to_hex_string(&self) -> String {
        to_reversed_hex(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

fn address_checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    [second[0], second[1], second[2], second[3]]
}

impl FromStr for Hash160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for Hash160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash160({})", self.to_hex_string())
    }
}

impl PartialOrd for Hash160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hash160 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl From<[u8; ADDRESS_SIZE]> for Hash160 {
    fn from(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Hash160 {
    type Error = PrimitiveError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl AsRef<[u8]> for Hash160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serializable for Hash160 {
    fn size(&self) -> usize {
        ADDRESS_SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self(reader.read_array::<ADDRESS_SIZE>()?))
    }
}

impl Serialize for Hash160 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Hash160 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(D::Error::custom)
    }
}
