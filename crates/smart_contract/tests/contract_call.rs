use hex_literal::hex;
use neo_primitives::Hash160;
use neo_smart_contract::{CallFlags, Contract, ContractParameter, ScriptBuilderExt};
use neo_cryptography::{KeyPair, PublicKey};
use neo_vm::{InteropService, OpCode, ScriptBuilder, ScriptReader};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};

fn neo_token() -> Hash160 {
    "0xef4073a0f2b305a38ec4050e4d3d28bc40ea63f5".parse().unwrap()
}

fn account() -> Hash160 {
    let bytes: [u8; 20] = core::array::from_fn(|i| i as u8 + 1);
    Hash160::from_array(bytes)
}

#[test]
fn balance_of_script_matches_fixed_bytes() {
    let mut builder = ScriptBuilder::new();
    builder
        .emit_contract_call(
            &neo_token(),
            "balanceOf",
            &[ContractParameter::hash160(account())],
            CallFlags::ALL,
        )
        .unwrap();
    let script = builder.into_script();

    let mut expected = hex!("0c14").to_vec();
    expected.extend_from_slice(account().as_bytes());
    expected.extend_from_slice(&hex!(
        "11 c0"
        "1f"
        "0c09 62616c616e63654f66"
        "0c14 f563ea40bc283d4d0e05c48ea305b3f2a07340ef"
        "41 627d5b52"
    ));
    assert_eq!(script, expected);
}

#[test]
fn balance_of_script_decodes_in_stack_order() {
    let mut builder = ScriptBuilder::new();
    builder
        .emit_contract_call(
            &neo_token(),
            "balanceOf",
            &[ContractParameter::hash160(account())],
            CallFlags::ALL,
        )
        .unwrap();
    let script = builder.into_script();
    let instructions = ScriptReader::decode_all(&script).unwrap();

    let opcodes: Vec<OpCode> = instructions.iter().map(|i| i.opcode).collect();
    assert_eq!(
        opcodes,
        vec![
            OpCode::PUSHDATA1,
            OpCode::PUSH1,
            OpCode::PACK,
            OpCode::PUSH15,
            OpCode::PUSHDATA1,
            OpCode::PUSHDATA1,
            OpCode::SYSCALL,
        ]
    );
    assert_eq!(instructions[4].push_data(), Some(&b"balanceOf"[..]));
    assert!(instructions[6].is_syscall(InteropService::SystemContractCall));
}

fn random_keys(count: usize, seed: u64) -> Vec<PublicKey> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| *KeyPair::generate(&mut rng).unwrap().public_key())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn multi_sig_script_ignores_key_order(count in 1usize..8, seed in any::<u64>(), shuffle_seed in any::<u64>()) {
        let keys = random_keys(count, seed);
        let mut shuffled = keys.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(shuffle_seed));

        let threshold = count.div_ceil(2);
        let a = Contract::create_multi_sig_redeem_script(threshold, &keys).unwrap();
        let b = Contract::create_multi_sig_redeem_script(threshold, &shuffled).unwrap();
        prop_assert_eq!(a, b);
    }
}
