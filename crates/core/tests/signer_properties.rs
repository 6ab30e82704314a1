use neo_config::SignerLimits;
use neo_core::{
    Account, CoreError, InvocationScript, Signer, SignerBuilder, VerificationScript, Witness,
    WitnessCondition, WitnessRule, WitnessRuleAction, WitnessScope,
};
use neo_cryptography::{KeyPair, PublicKey};
use neo_io::{MemoryReader, Serializable, SerializableExt};
use neo_primitives::Hash160;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn group_keys(count: usize) -> Vec<PublicKey> {
    let mut rng = StdRng::seed_from_u64(0x4e454f);
    (0..count)
        .map(|_| *KeyPair::generate(&mut rng).unwrap().public_key())
        .collect()
}

fn leaf_condition() -> impl Strategy<Value = WitnessCondition> {
    prop_oneof![
        any::<bool>().prop_map(|value| WitnessCondition::Boolean { value }),
        Just(WitnessCondition::CalledByEntry),
        any::<[u8; 20]>().prop_map(|b| WitnessCondition::ScriptHash {
            hash: Hash160::from_array(b)
        }),
        any::<[u8; 20]>().prop_map(|b| WitnessCondition::CalledByContract {
            hash: Hash160::from_array(b)
        }),
    ]
}

fn condition() -> impl Strategy<Value = WitnessCondition> {
    prop_oneof![
        leaf_condition(),
        leaf_condition().prop_map(WitnessCondition::not),
        prop::collection::vec(leaf_condition(), 1..4)
            .prop_map(|conditions| WitnessCondition::And { conditions }),
        prop::collection::vec(leaf_condition().prop_map(WitnessCondition::not), 1..4)
            .prop_map(|conditions| WitnessCondition::Or { conditions }),
    ]
}

fn rule() -> impl Strategy<Value = WitnessRule> {
    (any::<bool>(), condition()).prop_map(|(allow, condition)| {
        let action = if allow {
            WitnessRuleAction::Allow
        } else {
            WitnessRuleAction::Deny
        };
        WitnessRule::new(action, condition)
    })
}

fn signer() -> impl Strategy<Value = Signer> {
    (
        any::<[u8; 20]>(),
        any::<bool>(),
        prop::collection::vec(any::<[u8; 20]>(), 0..4),
        0usize..3,
        prop::collection::vec(rule(), 0..3),
    )
        .prop_map(|(account, entry, contracts, groups, rules)| {
            let mut builder = SignerBuilder::create_empty()
                .account(Account::from_script_hash(Hash160::from_array(account)));
            if entry {
                builder = builder
                    .add_witness_scope(WitnessScope::CalledByEntry)
                    .unwrap();
            }
            for contract in contracts {
                builder = builder.allow_contract(Hash160::from_array(contract)).unwrap();
            }
            for group in group_keys(groups) {
                builder = builder.allow_group(group).unwrap();
            }
            for rule in rules {
                builder = builder
                    .add_witness_rule(rule.action, rule.condition)
                    .unwrap();
            }
            builder.build().unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn signer_wire_roundtrip(signer in signer()) {
        let bytes = signer.to_array().unwrap();
        prop_assert_eq!(bytes.len(), signer.size());
        prop_assert_eq!(Signer::from_array(&bytes).unwrap(), signer);
    }

    #[test]
    fn signer_json_roundtrip(signer in signer()) {
        prop_assert_eq!(Signer::from_json(&signer.to_json()).unwrap(), signer);
    }

    #[test]
    fn witness_wire_roundtrip(
        invocation in prop::collection::vec(any::<u8>(), 0..300),
        verification in prop::collection::vec(any::<u8>(), 0..120),
    ) {
        let witness = Witness::new(
            InvocationScript::new(invocation),
            VerificationScript::new(verification),
        );
        let bytes = witness.to_array().unwrap();
        prop_assert_eq!(Witness::from_array(&bytes).unwrap(), witness);
    }
}

#[test]
fn scope_exclusivity() {
    let account = Account::from_script_hash(Hash160::from_array([1; 20]));
    let contract = Hash160::from_array([2; 20]);

    assert!(matches!(
        Signer::global(account.clone()).allow_contracts(&[contract]),
        Err(CoreError::GlobalScopeConflict)
    ));
    assert!(matches!(
        Signer::none(account.clone()).allow_contracts(&[contract]),
        Err(CoreError::NoneScopeConflict)
    ));
    assert!(matches!(
        Signer::with_scopes(
            account,
            &[WitnessScope::Global, WitnessScope::CalledByEntry]
        ),
        Err(CoreError::GlobalScopeConflict)
    ));
}

#[test]
fn depth_bound_at_and_past_the_limit() {
    let nest = |levels: usize| {
        (0..levels).fold(WitnessCondition::CalledByEntry, |inner, _| {
            WitnessCondition::Or {
                conditions: vec![inner],
            }
        })
    };
    let limits = SignerLimits::default();
    let mut signer = Signer::called_by_entry(Account::from_script_hash(Hash160::ZERO));

    signer
        .add_rules(&[WitnessRule::allow(nest(limits.max_nesting_depth))])
        .unwrap();
    assert!(matches!(
        signer.add_rules(&[WitnessRule::allow(nest(limits.max_nesting_depth + 1))]),
        Err(CoreError::NestingDepthExceeded { .. })
    ));
}

#[test]
fn deserialize_rejects_rules_nested_past_the_limit() {
    let mut signer = Signer::called_by_entry(Account::from_script_hash(Hash160::ZERO));
    signer
        .add_rules(&[WitnessRule::deny(WitnessCondition::And {
            conditions: vec![WitnessCondition::not(WitnessCondition::CalledByEntry)],
        })])
        .unwrap();
    let bytes = signer.to_array().unwrap();

    let strict = SignerLimits {
        max_nesting_depth: 1,
        ..SignerLimits::default()
    };
    let mut reader = MemoryReader::new(&bytes);
    assert!(Signer::deserialize_with_limits(&mut reader, &strict).is_err());

    let mut reader = MemoryReader::new(&bytes);
    assert_eq!(
        Signer::deserialize_with_limits(&mut reader, &SignerLimits::default()).unwrap(),
        signer
    );
}
