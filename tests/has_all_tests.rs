//! Unit tests for has_all, the membership-subset test.
//!
//! has_all(set, values) returns true iff every element yielded by `values`
//! is a member of `set`; the empty sequence is vacuously contained.

#![cfg(feature = "collections")]

use duet::collections::{FrozenSet, has_all};
use rstest::rstest;
use std::collections::{BTreeSet, HashSet};

// =============================================================================
// Positive Cases
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![])]
#[case(vec![1], vec![1])]
#[case(vec![1], vec![1, 1])]
#[case(vec![1, 2], vec![2, 2])]
#[case(vec![1, 2], vec![2, 1])]
fn has_all_returns_true(#[case] elements: Vec<i32>, #[case] values: Vec<i32>) {
    let set: HashSet<i32> = elements.into_iter().collect();
    assert!(has_all(&set, values));
}

// =============================================================================
// Negative Cases
// =============================================================================

#[rstest]
#[case(vec![], vec![1])]
#[case(vec![1], vec![2])]
#[case(vec![1], vec![1, 2])]
fn has_all_returns_false(#[case] elements: Vec<i32>, #[case] values: Vec<i32>) {
    let set: HashSet<i32> = elements.into_iter().collect();
    assert!(!has_all(&set, values));
}

// =============================================================================
// Other Set-Like Collections
// =============================================================================

#[rstest]
fn has_all_works_over_btree_sets() {
    let set = BTreeSet::from(["a", "b"]);
    assert!(has_all(&set, ["b", "a"]));
    assert!(!has_all(&set, ["b", "c"]));
}

#[rstest]
fn has_all_works_over_frozen_sets() {
    let frozen: FrozenSet<i32> = [1, 2, 3].into_iter().collect();
    assert!(has_all(&frozen, [3, 2, 1]));
    assert!(!has_all(&frozen, [4]));
}

#[rstest]
fn has_all_works_over_the_shared_empty_set() {
    assert!(has_all(FrozenSet::<i32>::EMPTY, Vec::<i32>::new()));
    assert!(!has_all(FrozenSet::<i32>::EMPTY, [1]));
}

// =============================================================================
// Argument Forms
// =============================================================================

#[rstest]
fn has_all_accepts_references_to_values() {
    let set = HashSet::from([1, 2]);
    let values = [1, 2];
    assert!(has_all(&set, &values));
    // The array is still usable; has_all only borrowed it
    assert_eq!(values.len(), 2);
}

#[rstest]
fn has_all_does_not_mutate_the_set() {
    let set = HashSet::from([1]);
    let _ = has_all(&set, [1, 2]);
    assert_eq!(set, HashSet::from([1]));
}
