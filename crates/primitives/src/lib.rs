//! Fixed-width hash value types used across Neo N3.
//!
//! Both [`Hash160`] and [`Hash256`] keep their bytes in little-endian order,
//! which is also the wire order. Hex strings are the byte-reversed
//! (big-endian) form with a `0x` prefix, the way explorers and RPC nodes
//! print them.

mod error;
mod hash160;
mod hash256;

pub use error::{PrimitiveError, PrimitiveResult};
pub use hash160::Hash160;
pub use hash256::Hash256;

/// Decodes a big-endian hex string (optional `0x`) into little-endian bytes.
fn parse_reversed_hex<const N: usize>(value: &str) -> PrimitiveResult<[u8; N]> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.len() != N * 2 {
        return Err(PrimitiveError::InvalidLength {
            expected: N * 2,
            actual: digits.len(),
        });
    }
    let mut bytes = [0u8; N];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| PrimitiveError::InvalidHex(e.to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

fn to_reversed_hex(bytes: &[u8]) -> String {
    let mut reversed = bytes.to_vec();
    reversed.reverse();
    format!("0x{}", hex::encode(reversed))
}
