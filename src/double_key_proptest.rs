#![cfg(test)]

// Property tests for DoubleKeyTable: state-machine equivalence against a
// pair-keyed std HashMap, plus the structural invariants a flat model
// cannot express directly (no empty inner tables, outer len = distinct
// first keys).

use crate::double_key::DoubleKeyTable;
use crate::error::TableError;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, usize, i32),
    Remove(usize, usize),
    Get(usize, usize),
    Contains(usize, usize),
    KeysOf(usize),
    Enumerate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<String>, Vec<OpI>)> {
    (
        proptest::collection::vec("[a-z]{1,3}", 1..=5),
        proptest::collection::vec("[a-z]{1,3}", 1..=5),
    )
        .prop_flat_map(|(pool1, pool2)| {
            let idx1 = proptest::sample::select((0..pool1.len()).collect::<Vec<_>>());
            let idx2 = proptest::sample::select((0..pool2.len()).collect::<Vec<_>>());
            let op = prop_oneof![
                (idx1.clone(), idx2.clone(), any::<i32>())
                    .prop_map(|(i, j, v)| OpI::Insert(i, j, v)),
                (idx1.clone(), idx2.clone()).prop_map(|(i, j)| OpI::Remove(i, j)),
                (idx1.clone(), idx2.clone()).prop_map(|(i, j)| OpI::Get(i, j)),
                (idx1.clone(), idx2.clone()).prop_map(|(i, j)| OpI::Contains(i, j)),
                idx1.clone().prop_map(OpI::KeysOf),
                Just(OpI::Enumerate),
            ];
            proptest::collection::vec(op, 1..60)
                .prop_map(move |ops| (pool1.clone(), pool2.clone(), ops))
        })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool1, pool2, ops) in arb_scenario()) {
        // Tiny ladders so outer and inner growth both happen under test.
        let mut sut: DoubleKeyTable<i32> =
            DoubleKeyTable::with_sizes(Some(vec![3, 7, 17]), Some(vec![3, 7, 17]));
        let mut model: HashMap<(String, String), i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, j, v) => {
                    let (k1, k2) = (pool1[i].clone(), pool2[j].clone());
                    prop_assert_eq!(sut.insert(&k1, &k2, v), Ok(()));
                    model.insert((k1, k2), v);
                }
                OpI::Remove(i, j) => {
                    let pair = (pool1[i].clone(), pool2[j].clone());
                    match model.remove(&pair) {
                        Some(mv) => prop_assert_eq!(sut.remove(&pair.0, &pair.1), Ok(mv)),
                        None => prop_assert_eq!(
                            sut.remove(&pair.0, &pair.1),
                            Err(TableError::KeyNotFound)
                        ),
                    }
                }
                OpI::Get(i, j) => {
                    let pair = (pool1[i].clone(), pool2[j].clone());
                    match model.get(&pair) {
                        Some(mv) => prop_assert_eq!(sut.get(&pair.0, &pair.1), Ok(mv)),
                        None => prop_assert_eq!(
                            sut.get(&pair.0, &pair.1),
                            Err(TableError::KeyNotFound)
                        ),
                    }
                }
                OpI::Contains(i, j) => {
                    let pair = (pool1[i].clone(), pool2[j].clone());
                    prop_assert_eq!(
                        sut.contains(&pair.0, &pair.1),
                        model.contains_key(&pair)
                    );
                }
                OpI::KeysOf(i) => {
                    let k1 = &pool1[i];
                    let expected: BTreeSet<String> = model
                        .keys()
                        .filter(|(m1, _)| m1 == k1)
                        .map(|(_, m2)| m2.clone())
                        .collect();
                    match sut.keys(Some(k1)) {
                        Ok(keys) => {
                            let got: BTreeSet<String> =
                                keys.into_iter().map(str::to_owned).collect();
                            prop_assert!(!got.is_empty(), "no empty inner table may persist");
                            prop_assert_eq!(got, expected);
                        }
                        Err(TableError::KeyNotFound) => prop_assert!(expected.is_empty()),
                        Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                    }
                }
                OpI::Enumerate => {
                    let got: BTreeSet<(String, String, i32)> = sut
                        .iter()
                        .map(|(k1, k2, v)| (k1.to_owned(), k2.to_owned(), *v))
                        .collect();
                    let expected: BTreeSet<(String, String, i32)> = model
                        .iter()
                        .map(|((k1, k2), v)| (k1.clone(), k2.clone(), *v))
                        .collect();
                    prop_assert_eq!(got, expected);
                }
            }

            // Post-conditions after each op
            let model_k1s: BTreeSet<String> =
                model.keys().map(|(k1, _)| k1.clone()).collect();
            prop_assert_eq!(sut.len(), model_k1s.len(), "len counts distinct first keys");
            let sut_k1s: BTreeSet<String> = sut
                .keys(None)
                .unwrap()
                .into_iter()
                .map(str::to_owned)
                .collect();
            prop_assert_eq!(sut_k1s, model_k1s);
        }
    }
}
