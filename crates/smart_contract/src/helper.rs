//! Recognisers for standard verification scripts.

use neo_config::MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT;
use neo_cryptography::PublicKey;
use neo_vm::{InteropService, OpCode, ScriptReader};

/// Checks whether `script` is a single-signature verification script:
/// a 33-byte key push followed by `System.Crypto.CheckSig`.
pub fn is_signature_contract(script: &[u8]) -> bool {
    if script.len() != 40 {
        return false;
    }
    script[0] == OpCode::PUSHDATA1 as u8
        && script[1] == 33
        && script[35] == OpCode::SYSCALL as u8
        && script[36..40] == InteropService::SystemCryptoCheckSig.hash().to_le_bytes()
}

/// The public key of a single-signature verification script.
pub fn signature_contract_key(script: &[u8]) -> Option<PublicKey> {
    if !is_signature_contract(script) {
        return None;
    }
    PublicKey::from_sec1_bytes(&script[2..35]).ok()
}

/// Decodes a multi-signature verification script into its threshold and
/// public keys, in script order.
///
/// Returns `None` unless the script is exactly `m`, `n` key pushes, `n` and
/// `System.Crypto.CheckMultisig` with `1 <= m <= n`.
pub fn parse_multi_sig_contract(script: &[u8]) -> Option<(usize, Vec<PublicKey>)> {
    let instructions = ScriptReader::decode_all(script).ok()?;
    let (first, rest) = instructions.split_first()?;
    let (syscall, rest) = rest.split_last()?;
    let (count, keys) = rest.split_last()?;

    if !syscall.is_syscall(InteropService::SystemCryptoCheckMultisig) {
        return None;
    }
    let m = usize::try_from(first.push_integer()?).ok()?;
    let n = usize::try_from(count.push_integer()?).ok()?;
    if n != keys.len() || n > MAX_PUBLIC_KEYS_PER_MULTISIG_ACCOUNT || !(1..=n).contains(&m) {
        return None;
    }

    let public_keys = keys
        .iter()
        .map(|instruction| {
            let data = instruction.push_data()?;
            if data.len() != 33 {
                return None;
            }
            PublicKey::from_sec1_bytes(data).ok()
        })
        .collect::<Option<Vec<_>>>()?;
    Some((m, public_keys))
}

pub fn is_multi_sig_contract(script: &[u8]) -> bool {
    parse_multi_sig_contract(script).is_some()
}

/// Whether `script` is either kind of standard account script.
pub fn is_standard_contract(script: &[u8]) -> bool {
    is_signature_contract(script) || is_multi_sig_contract(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Contract;
    use neo_cryptography::{KeyPair, PrivateKey};

    fn keys(count: u8) -> Vec<PublicKey> {
        (1..=count)
            .map(|seed| {
                *KeyPair::from_private(PrivateKey::new([seed; 32]))
                    .unwrap()
                    .public_key()
            })
            .collect()
    }

    #[test]
    fn test_signature_contract() {
        let key = keys(1)[0];
        let script = Contract::create_signature_redeem_script(&key);
        assert!(is_signature_contract(&script));
        assert!(!is_multi_sig_contract(&script));
        assert_eq!(signature_contract_key(&script), Some(key));

        let mut broken = script.clone();
        broken[39] ^= 0xFF;
        assert!(!is_signature_contract(&broken));
    }

    #[test]
    fn test_multi_sig_contract() {
        let keys = keys(3);
        let script = Contract::create_multi_sig_redeem_script(2, &keys).unwrap();
        let (m, parsed) = parse_multi_sig_contract(&script).unwrap();
        assert_eq!(m, 2);

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(parsed, sorted);
        assert!(is_standard_contract(&script));
        assert!(!is_signature_contract(&script));
    }

    #[test]
    fn test_rejects_malformed_multi_sig() {
        let keys = keys(2);
        let script = Contract::create_multi_sig_redeem_script(1, &keys).unwrap();
        assert!(parse_multi_sig_contract(&script[..script.len() - 1]).is_none());

        // Keys still decode; only the trailing count disagrees with them.
        let mut wrong_count = script.clone();
        assert_eq!(wrong_count[71], OpCode::PUSH2 as u8);
        wrong_count[71] = OpCode::PUSH3 as u8;
        assert!(parse_multi_sig_contract(&wrong_count).is_none());

        let mut wrong_threshold = script.clone();
        wrong_threshold[0] = OpCode::PUSH3 as u8;
        assert!(parse_multi_sig_contract(&wrong_threshold).is_none());

        assert!(parse_multi_sig_contract(&[]).is_none());
    }
}
