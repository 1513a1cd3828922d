#![cfg(test)]

// Property tests for LinearProbeTable kept inside the crate so they can
// observe capacities alongside the public surface.

use crate::error::TableError;
use crate::linear_probe::LinearProbeTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(usize),
    Iterate,
}

fn arb_scenario(pool_max: usize) -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=pool_max).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Contains),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Round-trip and overwrite semantics match the model.
// - remove returns the owned value the model held; missing keys error.
// - Iteration yields each live entry exactly once.
// - After every op: len parity, capacity never shrinks, and occupancy
//   stays within half the capacity until the ladder saturates.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(10)) {
        let ladder = vec![5, 13, 29];
        let last_rung = *ladder.last().unwrap();
        let mut sut: LinearProbeTable<i32> = LinearProbeTable::with_sizes(ladder);
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut capacity = sut.table_size();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    // The pool is far below the last rung, so inserts
                    // cannot exhaust the ladder here.
                    prop_assert_eq!(sut.insert(&k, v), Ok(()));
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
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
                }
                OpI::Iterate => {
                    let s_keys: BTreeSet<String> = sut.iter().map(|(k, _)| k.to_owned()).collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                }
            }

            // Post-conditions after each op
            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.table_size() >= capacity, "capacity must never shrink");
            capacity = sut.table_size();
            prop_assert!(
                sut.len() * 2 <= sut.table_size() || sut.table_size() == last_rung,
                "load factor above 0.5 without saturation"
            );
        }
    }
}

// Property: saturation semantics on a single-rung ladder. Growth is a
// silent no-op; inserts succeed until the array is physically full, after
// which a fresh key fails with TableFull while overwrites keep working.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_saturation((pool, ops) in arb_scenario(6)) {
        let mut sut: LinearProbeTable<i32> = LinearProbeTable::with_sizes(vec![3]);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let k = pool[i].clone();
                    if model.contains_key(&k) {
                        prop_assert_eq!(sut.insert(&k, v), Ok(()));
                        model.insert(k, v);
                    } else if model.len() == 3 {
                        prop_assert_eq!(sut.insert(&k, v), Err(TableError::TableFull));
                    } else {
                        prop_assert_eq!(sut.insert(&k, v), Ok(()));
                        model.insert(k, v);
                    }
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
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
                }
                OpI::Iterate => {
                    let s_keys: BTreeSet<String> = sut.iter().map(|(k, _)| k.to_owned()).collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.table_size(), 3);
        }
    }
}
