// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{CoreError, CoreResult, InvocationScript, VerificationScript};
use base64::{engine::general_purpose, Engine as _};
use neo_config::{MAX_INVOCATION_SCRIPT, MAX_VERIFICATION_SCRIPT};
use neo_cryptography::{KeyPair, PublicKey, Signature};
use neo_io::serializable::helper::get_var_bytes_size;
use neo_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};
use neo_primitives::{Hash160, Hash256};
use neo_smart_contract::ContractParameter;
use serde_json::{json, Value};
use tracing::debug;

/// Represents a witness of a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Witness {
    /// The invocation script of the witness. Used to pass arguments for verification_script.
    pub invocation_script: InvocationScript,

    /// The verification script of the witness. It can be empty if the contract is deployed.
    pub verification_script: VerificationScript,
}

impl Witness {
    pub fn new(invocation_script: InvocationScript, verification_script: VerificationScript) -> Self {
        Self {
            invocation_script,
            verification_script,
        }
    }

    /// Creates an empty witness.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Signs `message` and pairs the signature with the single-signature
    /// script of the key pair's public key.
    pub fn create(message: &[u8], key_pair: &KeyPair) -> CoreResult<Self> {
        let verification_script = VerificationScript::from_public_key(key_pair.public_key());
        Self::create_single_sig(message, key_pair, verification_script)
    }

    /// Signs `message` and pairs the signature with `verification_script`.
    pub fn create_single_sig(
        message: &[u8],
        key_pair: &KeyPair,
        verification_script: VerificationScript,
    ) -> CoreResult<Self> {
        let invocation_script = InvocationScript::from_message_and_key_pair(message, key_pair)?;
        debug!(
            account = %verification_script.script_hash(),
            "single-signature witness created"
        );
        Ok(Self::new(invocation_script, verification_script))
    }

    /// Builds a multi-signature witness from collected signatures.
    ///
    /// The invocation script pushes the first `threshold` signatures in the
    /// order supplied. Fails if fewer signatures than the threshold of
    /// `verification_script` are given.
    pub fn create_multi_sig(
        signatures: &[Signature],
        verification_script: VerificationScript,
    ) -> CoreResult<Self> {
        if !verification_script.is_multi_sig() {
            return Err(CoreError::InvalidAccount(
                "verification script is not a multi-signature script".to_string(),
            ));
        }
        let threshold = verification_script.signing_threshold()?;
        if signatures.len() < threshold {
            return Err(CoreError::InsufficientSignatures {
                required: threshold,
                provided: signatures.len(),
            });
        }

        let invocation_script = InvocationScript::from_signatures(&signatures[..threshold]);
        debug!(
            threshold,
            supplied = signatures.len(),
            account = %verification_script.script_hash(),
            "multi-signature witness created"
        );
        Ok(Self::new(invocation_script, verification_script))
    }

    /// Same as [`Witness::create_multi_sig`], building the verification
    /// script from `threshold` and `public_keys`.
    pub fn create_multi_sig_with_keys(
        threshold: usize,
        signatures: &[Signature],
        public_keys: &[PublicKey],
    ) -> CoreResult<Self> {
        let verification_script = VerificationScript::from_public_keys(threshold, public_keys)?;
        Self::create_multi_sig(signatures, verification_script)
    }

    /// A witness for a contract account, passing `parameters` to the
    /// contract's `verify` method.
    ///
    /// The verification script stays empty. Without parameters the whole
    /// witness is empty.
    pub fn create_contract_witness(parameters: &[ContractParameter]) -> CoreResult<Self> {
        if parameters.is_empty() {
            return Ok(Self::empty());
        }
        let invocation_script = InvocationScript::from_parameters(parameters)?;
        debug!(
            parameters = parameters.len(),
            len = invocation_script.len(),
            "contract witness created"
        );
        Ok(Self::new(invocation_script, VerificationScript::empty()))
    }

    /// Gets the hash of the verification script.
    pub fn script_hash(&self) -> Hash160 {
        self.verification_script.script_hash()
    }

    /// Whether this witness' verification script hashes to `account`.
    pub fn is_compatible_with(&self, account: &Hash160) -> bool {
        self.script_hash() == *account
    }

    /// Converts the witness to JSON.
    pub fn to_json(&self) -> Value {
        json!({
            "invocation": general_purpose::STANDARD.encode(self.invocation_script.as_bytes()),
            "verification": general_purpose::STANDARD.encode(self.verification_script.as_bytes())
        })
    }

    pub fn from_json(json: &Value) -> CoreResult<Self> {
        let decode = |field: &str| -> CoreResult<Vec<u8>> {
            let text = json
                .get(field)
                .and_then(Value::as_str)
                .ok_or_else(|| CoreError::json(format!("witness missing '{field}'")))?;
            general_purpose::STANDARD
                .decode(text)
                .map_err(|e| CoreError::json(format!("witness '{field}' is not base64: {e}")))
        };
        Ok(Self::new(
            InvocationScript::new(decode("invocation")?),
            VerificationScript::new(decode("verification")?),
        ))
    }
}

/// The bytes signed for a transaction: the network magic (little-endian)
/// followed by the transaction hash.
pub fn get_sign_data(network: u32, hash: &Hash256) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&network.to_le_bytes());
    data.extend_from_slice(hash.as_bytes());
    data
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        get_var_bytes_size(self.invocation_script.as_bytes())
            + get_var_bytes_size(self.verification_script.as_bytes())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        if self.invocation_script.len() > MAX_INVOCATION_SCRIPT {
            return Err(IoError::exceeds(
                self.invocation_script.len(),
                MAX_INVOCATION_SCRIPT,
            ));
        }
        if self.verification_script.len() > MAX_VERIFICATION_SCRIPT {
            return Err(IoError::exceeds(
                self.verification_script.len(),
                MAX_VERIFICATION_SCRIPT,
            ));
        }
        writer.write_var_bytes(self.invocation_script.as_bytes())?;
        writer.write_var_bytes(self.verification_script.as_bytes())
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let invocation_script = reader.read_var_bytes(MAX_INVOCATION_SCRIPT)?;
        let verification_script = reader.read_var_bytes(MAX_VERIFICATION_SCRIPT)?;
        Ok(Self::new(
            InvocationScript::new(invocation_script),
            VerificationScript::new(verification_script),
        ))
    }
}

impl serde::Serialize for Witness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_json(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Witness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Witness::from_json(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_cryptography::PrivateKey;
    use neo_io::SerializableExt;

    fn key_pair(seed: u8) -> KeyPair {
        KeyPair::from_private(PrivateKey::new([seed; 32])).unwrap()
    }

    fn public_keys(count: u8) -> Vec<PublicKey> {
        (1..=count).map(|s| *key_pair(s).public_key()).collect()
    }

    #[test]
    fn test_single_sig_witness() {
        let key_pair = key_pair(1);
        let witness = Witness::create(b"hello", &key_pair).unwrap();
        assert_eq!(witness.invocation_script.len(), 66);
        assert_eq!(witness.verification_script.len(), 40);

        let signature = witness.invocation_script.signatures()[0];
        assert!(key_pair.public_key().verify(b"hello", &signature));

        let account = VerificationScript::from_public_key(key_pair.public_key()).script_hash();
        assert!(witness.is_compatible_with(&account));
        assert!(!witness.is_compatible_with(&Hash160::ZERO));
    }

    #[test]
    fn test_multi_sig_threshold_enforced() {
        let keys = public_keys(3);
        let script = VerificationScript::from_public_keys(2, &keys).unwrap();
        let signatures = [Signature::new([0xA1; 64]), Signature::new([0xB2; 64])];

        let result = Witness::create_multi_sig(&signatures[..1], script.clone());
        assert!(matches!(
            result,
            Err(CoreError::InsufficientSignatures {
                required: 2,
                provided: 1
            })
        ));

        let witness = Witness::create_multi_sig(&signatures, script.clone()).unwrap();
        assert_eq!(witness.invocation_script.signatures(), signatures.to_vec());
        assert_eq!(witness.verification_script, script);
    }

    #[test]
    fn test_multi_sig_uses_first_threshold_signatures() {
        let keys = public_keys(3);
        let signatures = [
            Signature::new([3; 64]),
            Signature::new([1; 64]),
            Signature::new([2; 64]),
        ];
        let witness = Witness::create_multi_sig_with_keys(2, &signatures, &keys).unwrap();
        assert_eq!(
            witness.invocation_script.signatures(),
            vec![signatures[0], signatures[1]]
        );
    }

    #[test]
    fn test_multi_sig_rejects_single_sig_script() {
        let script = VerificationScript::from_public_key(key_pair(1).public_key());
        assert!(Witness::create_multi_sig(&[Signature::new([0; 64])], script).is_err());
    }

    #[test]
    fn test_contract_witness() {
        let empty = Witness::create_contract_witness(&[]).unwrap();
        assert!(empty.invocation_script.is_empty());
        assert!(empty.verification_script.is_empty());

        let witness =
            Witness::create_contract_witness(&[ContractParameter::boolean(true)]).unwrap();
        assert_eq!(witness.invocation_script.as_bytes(), &[0x08]);
        assert!(witness.verification_script.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let witness = Witness::create(b"data", &key_pair(4)).unwrap();
        let bytes = witness.to_array().unwrap();
        assert_eq!(bytes.len(), witness.size());
        assert_eq!(bytes[0], 66);
        assert_eq!(bytes[67], 40);
        assert_eq!(Witness::from_array(&bytes).unwrap(), witness);
    }

    #[test]
    fn test_serialize_rejects_oversized_scripts() {
        let witness = Witness::new(
            InvocationScript::new(vec![0; MAX_INVOCATION_SCRIPT + 1]),
            VerificationScript::empty(),
        );
        assert!(witness.to_array().is_err());

        let mut bytes = vec![0xFD, 0x01, 0x04];
        bytes.extend_from_slice(&[0; 1025]);
        bytes.push(0);
        assert!(Witness::from_array(&bytes).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let witness = Witness::new(
            InvocationScript::new(vec![1, 2, 3]),
            VerificationScript::new(vec![4, 5]),
        );
        let json = witness.to_json();
        assert_eq!(json, json!({ "invocation": "AQID", "verification": "BAU=" }));
        assert_eq!(Witness::from_json(&json).unwrap(), witness);
        assert!(Witness::from_json(&json!({ "invocation": "!!" })).is_err());
    }

    #[test]
    fn test_sign_data_layout() {
        let hash = Hash256::sha256(b"tx");
        let data = get_sign_data(0x334f454e, &hash);
        assert_eq!(&data[..4], b"NEO3");
        assert_eq!(&data[4..], hash.as_bytes());
    }
}
