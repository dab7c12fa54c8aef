//! Unit tests for FrozenMap.
//!
//! A frozen map is an immutable view over the entries of an existing map:
//! lookups behave normally, mutation attempts are silent no-ops, and the
//! shared empty instance is one process-lifetime reference.

#![cfg(feature = "collections")]

use duet::collections::FrozenMap;
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Shared Empty Map
// =============================================================================

#[rstest]
fn shared_empty_map_is_empty() {
    assert_eq!(FrozenMap::<i32, i32>::EMPTY.len(), 0);
    assert!(FrozenMap::<i32, i32>::EMPTY.is_empty());
}

#[rstest]
fn shared_empty_map_ignores_insert() {
    let shared = FrozenMap::<i32, i32>::EMPTY;
    shared.insert(1, 1);
    assert_eq!(shared.len(), 0);
}

#[rstest]
fn shared_empty_map_is_the_same_reference_everywhere() {
    fn imported_elsewhere() -> &'static FrozenMap<i32, i32> {
        duet::prelude::FrozenMap::EMPTY
    }

    assert!(std::ptr::eq(FrozenMap::<i32, i32>::EMPTY, imported_elsewhere()));
}

#[rstest]
fn shared_empty_map_is_distinct_from_fresh_empty_maps() {
    let fresh = FrozenMap::<i32, i32>::new();
    assert_eq!(&fresh, FrozenMap::<i32, i32>::EMPTY);
    assert!(!std::ptr::eq(&fresh, FrozenMap::<i32, i32>::EMPTY));
}

// =============================================================================
// Freezing
// =============================================================================

#[rstest]
fn frozen_map_has_the_size_of_its_source() {
    let frozen = FrozenMap::freeze(HashMap::from([("key", "value")]));
    assert_eq!(frozen.len(), 1);
}

#[rstest]
fn frozen_map_ignores_insert() {
    let frozen = FrozenMap::freeze(HashMap::from([("key", "value")]));
    assert_eq!(frozen.insert("other", "entry"), None);
    assert_eq!(frozen.len(), 1);
    assert!(!frozen.contains_key(&"other"));
}

#[rstest]
fn frozen_map_ignores_remove() {
    let frozen = FrozenMap::freeze(HashMap::from([("key", "value")]));
    assert_eq!(frozen.remove(&"key"), None);
    assert_eq!(frozen.len(), 1);
    assert_eq!(frozen.get(&"key"), Some(&"value"));
}

#[rstest]
fn frozen_map_ignores_clear() {
    let frozen = FrozenMap::freeze(HashMap::from([("key", "value")]));
    frozen.clear();
    assert_eq!(frozen.len(), 1);
}

#[rstest]
fn frozen_map_lookups_behave_like_the_source() {
    let source = HashMap::from([("one", 1), ("two", 2)]);
    let frozen = FrozenMap::freeze(source.clone());

    assert_eq!(frozen.len(), source.len());
    for (key, value) in &source {
        assert_eq!(frozen.get(key), Some(value));
    }
    assert_eq!(frozen.get(&"three"), None);
}

#[rstest]
fn freezing_a_btree_map_keeps_ascending_key_order() {
    let frozen = FrozenMap::freeze(BTreeMap::from([(2, "b"), (1, "a")]));
    let keys: Vec<&i32> = frozen.keys().collect();
    assert_eq!(keys, vec![&1, &2]);
}

#[rstest]
fn collecting_keeps_the_last_value_for_a_duplicate_key() {
    let frozen: FrozenMap<&str, i32> = [("key", 1), ("key", 2)].into_iter().collect();
    assert_eq!(frozen.len(), 1);
    assert_eq!(frozen.get(&"key"), Some(&2));
}

// =============================================================================
// Dynamic Freezing
// =============================================================================

#[rstest]
fn freeze_any_accepts_a_hash_map() {
    let frozen =
        FrozenMap::<i32, i32>::freeze_any(Box::new(HashMap::from([(1, 10)]))).unwrap();
    assert_eq!(frozen.get(&1), Some(&10));
}

#[rstest]
fn freeze_any_accepts_a_btree_map() {
    let frozen =
        FrozenMap::<i32, i32>::freeze_any(Box::new(BTreeMap::from([(2, 20)]))).unwrap();
    assert_eq!(frozen.get(&2), Some(&20));
}

#[rstest]
fn freeze_any_rejects_values_that_are_not_maps() {
    let error = FrozenMap::<i32, i32>::freeze_any(Box::new(HashMap::from([("a", 1)]))).unwrap_err();
    assert!(error.expected.contains("HashMap"));
}
