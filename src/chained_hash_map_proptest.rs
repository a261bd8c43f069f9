#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can check
// chain-level structure as well as the public surface.

use crate::chained_hash_map::ChainedHashMap;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, i32),
    Get(i16),
    Remove(i16),
    Take(i16),
    Mutate(i16, i32),
    Clear,
    Iterate,
}

// Keys come from a narrow signed range so collisions, overwrites and
// negative keys all show up often.
fn arb_op() -> impl Strategy<Value = Op> {
    let key = -64i16..64;
    prop_oneof![
        4 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        2 => key.clone().prop_map(Op::Get),
        2 => key.clone().prop_map(Op::Remove),
        1 => key.clone().prop_map(Op::Take),
        1 => (key, any::<i32>()).prop_map(|(k, d)| Op::Mutate(k, d)),
        1 => Just(Op::Iterate),
        1 => Just(Op::Clear),
    ]
}

fn check_structure(sut: &ChainedHashMap<i16, i32>) -> Result<(), TestCaseError> {
    let chained: usize = (0..sut.capacity())
        .map(|i| sut.bucket_len(i).unwrap_or(0))
        .sum();
    prop_assert_eq!(chained, sut.len(), "every live entry sits on exactly one chain");
    prop_assert!(
        sut.len() * 2 <= sut.capacity(),
        "load factor is at most one half between operations"
    );
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `get` after `insert` returns the last written value; misses are `None`.
// - Overwrites report the previous value and leave `len` unchanged.
// - `remove` reports presence, shrinks `len` by exactly one, and the key
//   is gone afterwards.
// - Capacity never shrinks, and when it changes it changes by doubling.
// - Chains partition the live entries; iteration yields each key once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(
        initial in 1usize..=8,
        ops in proptest::collection::vec(arb_op(), 1..200),
    ) {
        let mut sut: ChainedHashMap<i16, i32> = ChainedHashMap::with_capacity(initial).unwrap();
        let mut model: HashMap<i16, i32> = HashMap::new();

        for op in ops {
            let cap_before = sut.capacity();
            match op {
                Op::Insert(k, v) => {
                    let len_before = sut.len();
                    let prev = sut.insert(k, v);
                    prop_assert_eq!(prev, model.insert(k, v));
                    if prev.is_some() {
                        prop_assert_eq!(sut.len(), len_before);
                        prop_assert_eq!(sut.capacity(), cap_before);
                    } else {
                        prop_assert_eq!(sut.len(), len_before + 1);
                    }
                    prop_assert_eq!(sut.get(k), Some(&v));
                }
                Op::Get(k) => {
                    prop_assert_eq!(sut.get(k), model.get(&k));
                    prop_assert_eq!(sut.get(k), sut.get(k));
                    prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
                }
                Op::Remove(k) => {
                    let len_before = sut.len();
                    let removed = sut.remove(k);
                    prop_assert_eq!(removed, model.remove(&k).is_some());
                    prop_assert_eq!(sut.len(), if removed { len_before - 1 } else { len_before });
                    prop_assert_eq!(sut.get(k), None);
                }
                Op::Take(k) => {
                    prop_assert_eq!(sut.take(k), model.remove(&k));
                }
                Op::Mutate(k, d) => {
                    if let Some(v) = sut.get_mut(k) {
                        *v = v.wrapping_add(d);
                    }
                    if let Some(v) = model.get_mut(&k) {
                        *v = v.wrapping_add(d);
                    }
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                    prop_assert_eq!(sut.capacity(), cap_before);
                }
                Op::Iterate => {
                    let seen: BTreeMap<i16, i32> = sut.iter().map(|(k, v)| (k, *v)).collect();
                    let expected: BTreeMap<i16, i32> = model.iter().map(|(k, v)| (*k, *v)).collect();
                    prop_assert_eq!(seen.len(), sut.len(), "no key yielded twice");
                    prop_assert_eq!(seen, expected);
                }
            }

            let cap_after = sut.capacity();
            prop_assert!(cap_after == cap_before || cap_after == cap_before * 2);
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            check_structure(&sut)?;
        }

        for (k, v) in &model {
            prop_assert_eq!(sut.get(*k), Some(v));
        }
    }
}

// Property: a burst of distinct inserts into a tiny table keeps every value
// reachable through any number of doublings.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_growth_keeps_values(keys in proptest::collection::btree_set(any::<i64>(), 1..300)) {
        let mut sut: ChainedHashMap<i64, i64> = ChainedHashMap::with_capacity(1).unwrap();
        for &k in &keys {
            sut.insert(k, k.wrapping_mul(3));
        }
        prop_assert_eq!(sut.len(), keys.len());
        prop_assert!(sut.capacity().is_power_of_two());
        for &k in &keys {
            prop_assert_eq!(sut.get(k), Some(&k.wrapping_mul(3)));
        }
    }
}
