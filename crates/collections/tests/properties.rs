//! Property tests: random insert/delete sequences checked against
//! `std::collections::HashSet`.

use std::collections::HashSet;

use collections::{DeletePolicy, HashTable, StrSet, TableConfig, fnv1a};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Delete(String),
}

/// Short keys over a small alphabet so sequences revisit the same keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{0,4}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => key_strategy().prop_map(Op::Insert),
        2 => key_strategy().prop_map(Op::Delete),
    ]
}

fn config_strategy() -> impl Strategy<Value = TableConfig> {
    (1usize..24, 0.3f64..0.95, 0.0f64..0.3).prop_map(|(cap, max_load, min_load)| {
        TableConfig::default()
            .with_initial_capacity(cap)
            .with_max_load(max_load)
            .with_min_load(min_load)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: PROPTEST_CASES,
        .. ProptestConfig::default()
    })]

    #[test]
    fn hash_is_deterministic(s in ".*") {
        prop_assert_eq!(fnv1a(s.as_bytes()), fnv1a(s.as_bytes()));
    }

    #[test]
    fn round_trip(keys in prop::collection::vec(".{0,32}", 0..200)) {
        let mut set = StrSet::new();
        for k in &keys {
            set.insert(k);
        }
        for k in &keys {
            prop_assert_eq!(set.get(k), Ok(k.as_str()));
        }
    }

    #[test]
    fn insert_then_delete_misses(key in ".{0,32}", others in prop::collection::vec(".{0,32}", 0..50)) {
        let mut set = StrSet::new();
        for k in &others {
            set.insert(k);
        }
        set.insert(&key);
        set.delete(&key);
        prop_assert!(set.get(&key).is_err());
    }

    #[test]
    fn double_insert_keeps_size(keys in prop::collection::vec(".{0,16}", 1..100)) {
        let mut once = StrSet::new();
        let mut twice = StrSet::new();
        for k in &keys {
            once.insert(k);
            twice.insert(k);
            twice.insert(k);
        }
        prop_assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn matches_std_set(
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..300),
    ) {
        let mut table = HashTable::with_config(config)
            .map_err(|e| TestCaseError::fail(format!("config rejected: {e}")))?;
        let mut model = HashSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    table.insert(&k, ());
                    model.insert(k);
                }
                Op::Delete(k) => {
                    table.delete(&k);
                    model.remove(&k);
                }
            }

            prop_assert_eq!(table.len(), model.len());
            prop_assert!(
                table.load_factor() < config.max_load,
                "load factor {} reached {}", table.load_factor(), config.max_load
            );
            prop_assert!(table.capacity() >= 1);
            prop_assert!(table.capacity() >= table.min_capacity());
        }

        for k in &model {
            prop_assert!(table.contains_key(k), "lost key {:?}", k);
        }
    }

    #[test]
    fn clear_policy_counts_unique_inserts(
        keys in prop::collection::vec(key_strategy(), 1..100),
    ) {
        let cfg = TableConfig::default().with_delete_policy(DeletePolicy::Clear);
        let mut set = StrSet::with_config(cfg)
            .map_err(|e| TestCaseError::fail(format!("config rejected: {e}")))?;
        let unique: HashSet<&String> = keys.iter().collect();

        // inserts only: no gaps, so no duplicates either
        for k in &keys {
            set.insert(k);
        }
        prop_assert_eq!(set.len(), unique.len());
    }
}
