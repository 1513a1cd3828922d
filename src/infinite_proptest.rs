#![cfg(test)]

// Property tests for InfiniteHashTable: state-machine equivalence against
// a std HashMap model, plus the ledger invariant (the live-key list always
// equals the set of reachable leaves) and locate/presence parity.

use crate::error::TableError;
use crate::infinite::InfiniteHashTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
    Locate(usize),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    // Short lowercase keys maximise shared prefixes, so splits, terminal
    // slots, and rebuilds are all exercised.
    proptest::collection::vec("[a-d]{0,4}", 1..=8).prop_flat_map(|pool| {
        let idx = proptest::sample::select((0..pool.len()).collect::<Vec<_>>());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Contains),
            idx.clone().prop_map(OpI::Locate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: InfiniteHashTable<i32> = InfiniteHashTable::new();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    sut.insert(&k, v);
                    model.insert(k, v);
                }
                OpI::Remove(i) => {
                    let k = &pool[i];
                    match model.remove(k) {
                        Some(mv) => prop_assert_eq!(sut.remove(k), Ok(mv)),
                        None => prop_assert_eq!(sut.remove(k), Err(TableError::KeyNotFound)),
                    }
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    match model.get(k) {
                        Some(mv) => prop_assert_eq!(sut.get(k), Ok(mv)),
                        None => prop_assert_eq!(sut.get(k), Err(TableError::KeyNotFound)),
                    }
                }
                OpI::Contains(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.contains(k), model.contains_key(k));
                }
                OpI::Locate(i) => {
                    let k = &pool[i];
                    match sut.locate(k) {
                        Ok(path) => {
                            prop_assert!(model.contains_key(k));
                            prop_assert!(!path.is_empty());
                            // The descent visits one slot per consumed
                            // character, plus at most the terminal level.
                            prop_assert!(path.len() <= k.chars().count() + 1);
                        }
                        Err(TableError::KeyNotFound) => prop_assert!(!model.contains_key(k)),
                        Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                    }
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            let ledger: BTreeSet<String> = sut.keys().iter().cloned().collect();
            let m_keys: BTreeSet<String> = model.keys().cloned().collect();
            prop_assert_eq!(&ledger, &m_keys, "ledger must equal the model key set");
            // Every ledger key must resolve through the tree, so the
            // ledger never lists an unreachable leaf.
            for key in &ledger {
                prop_assert!(sut.contains(key));
            }
        }
    }
}
