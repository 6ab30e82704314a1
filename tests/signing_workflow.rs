//! End-to-end signing workflows across the workspace crates.

use neo_signing::core::get_sign_data;
use neo_signing::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

fn key_pairs(count: usize) -> Vec<KeyPair> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..count)
        .map(|_| KeyPair::generate(&mut rng).unwrap())
        .collect()
}

fn transfer_script() -> Vec<u8> {
    let neo: Hash160 = "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5".parse().unwrap();
    let mut builder = ScriptBuilder::new();
    builder
        .emit_contract_call(
            &neo,
            "transfer",
            &[
                ContractParameter::hash160(Hash160::from_array([1; 20])),
                ContractParameter::hash160(Hash160::from_array([2; 20])),
                ContractParameter::integer(10),
                ContractParameter::any(),
            ],
            CallFlags::ALL,
        )
        .unwrap();
    builder.into_script()
}

#[test]
fn single_signature_signer_produces_verifiable_witness() {
    init_tracing();
    let settings = SigningSettings::default();
    let key_pair = key_pairs(1).remove(0);
    let account = Account::from_key_pair(key_pair.clone());
    let signer = SignerBuilder::create_empty()
        .account(account.clone())
        .add_witness_scope(WitnessScope::CalledByEntry)
        .unwrap()
        .build()
        .unwrap();

    let tx_hash = Hash256::sha256(&transfer_script());
    let witnesses = sign_transaction(&[signer], &tx_hash, &settings).unwrap();
    assert_eq!(witnesses.len(), 1);

    let witness = &witnesses[0];
    assert!(witness.is_compatible_with(&account.script_hash()));
    let signature = witness.invocation_script.signatures()[0];
    let message = get_sign_data(settings.network.magic(), &tx_hash);
    assert!(key_pair.public_key().verify(&message, &signature));
}

#[test]
fn multi_signature_witness_from_collected_signatures() {
    init_tracing();
    let key_pairs = key_pairs(3);
    let public_keys: Vec<PublicKey> = key_pairs.iter().map(|k| *k.public_key()).collect();
    let account = Account::multi_sig(2, &public_keys).unwrap();

    let message = get_sign_data(NetworkType::TestNet.magic(), &Hash256::sha256(b"tx"));
    let signatures: Vec<Signature> = key_pairs[..2]
        .iter()
        .map(|k| k.sign(&message).unwrap())
        .collect();

    let script = account.verification_script().unwrap().clone();
    assert!(matches!(
        Witness::create_multi_sig(&signatures[..1], script.clone()),
        Err(CoreError::InsufficientSignatures {
            required: 2,
            provided: 1
        })
    ));

    let witness = Witness::create_multi_sig(&signatures, script).unwrap();
    assert!(witness.is_compatible_with(&account.script_hash()));
    assert_eq!(witness.invocation_script.signatures(), signatures);

    // Multi-sig accounts cannot sign on their own.
    let signer = Signer::called_by_entry(account);
    assert!(sign_transaction(&[signer], &Hash256::ZERO, &SigningSettings::default()).is_err());
}

#[test]
fn contract_signer_delegates_to_verify() {
    init_tracing();
    let contract = Hash160::from_array([0x42; 20]);
    let signers = [
        Signer::contract_called_by_entry(contract, vec![ContractParameter::string("ok")]),
        Signer::contract_global(contract, Vec::new()),
    ];
    let witnesses =
        sign_transaction(&signers, &Hash256::ZERO, &SigningSettings::default()).unwrap();

    assert_eq!(witnesses[0].invocation_script.as_bytes(), &[0x0C, 0x02, b'o', b'k']);
    assert!(witnesses[0].verification_script.is_empty());
    assert_eq!(witnesses[1], Witness::empty());
}

#[test]
fn settings_file_limits_apply_to_signers() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "network = \"TestNet\"\n\n[signer]\nmax_rules = 1").unwrap();
    let settings = SigningSettings::load(file.path()).unwrap();

    let result = SignerBuilder::create_empty()
        .account(Account::from_script_hash(Hash160::from_array([5; 20])))
        .limits(settings.signer)
        .add_witness_rule(WitnessRuleAction::Allow, WitnessCondition::CalledByEntry)
        .unwrap()
        .add_witness_rule(WitnessRuleAction::Deny, WitnessCondition::Boolean { value: true });
    assert!(matches!(
        result,
        Err(CoreError::TooManySubitems {
            list: "rules",
            max: 1,
            actual: 2
        })
    ));
}

#[test]
fn signer_json_matches_rpc_shape() {
    init_tracing();
    let group = *key_pairs(1)[0].public_key();
    let contract: Hash160 = "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5".parse().unwrap();
    let signer = SignerBuilder::create_empty()
        .account(Account::from_script_hash(Hash160::from_array([9; 20])))
        .add_witness_scope(WitnessScope::CalledByEntry)
        .unwrap()
        .allow_contract(contract)
        .unwrap()
        .allow_group(group)
        .unwrap()
        .add_witness_rule(
            WitnessRuleAction::Allow,
            WitnessCondition::CalledByContract { hash: contract },
        )
        .unwrap()
        .build()
        .unwrap();

    let json = serde_json::to_value(&signer).unwrap();
    assert_eq!(
        json["scopes"],
        "CalledByEntry,CustomContracts,CustomGroups,WitnessRules"
    );
    assert_eq!(
        json["allowedcontracts"],
        serde_json::json!(["0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5"])
    );
    assert_eq!(json["allowedgroups"][0], group.to_hex());
    assert_eq!(json["rules"][0]["action"], "Allow");
    assert_eq!(json["rules"][0]["condition"]["type"], "CalledByContract");

    let parsed: Signer = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, signer);
}

#[test]
fn settings_file_drives_multi_sig_cap_and_address_version() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "address_version = 23\nmax_multisig_public_keys = 2").unwrap();
    let settings = SigningSettings::load(file.path()).unwrap();

    let public_keys: Vec<PublicKey> = key_pairs(3).iter().map(|k| *k.public_key()).collect();
    assert!(Account::multi_sig_with_settings(2, &public_keys, &settings).is_err());

    let account = Account::multi_sig_with_settings(2, &public_keys[..2], &settings).unwrap();
    assert_eq!(account.nr_of_participants().unwrap(), 2);
    assert!(account.address().starts_with('A'));
    assert!(!Account::multi_sig(2, &public_keys[..2])
        .unwrap()
        .address()
        .starts_with('A'));
}
