//! Set-like capability trait and membership-subset testing.
//!
//! This module provides the [`SetLike`] trait, the capability bundle that
//! makes a collection usable as a set of unique elements (membership test
//! and size query), together with [`has_all`], which checks that a set
//! contains every value produced by an iterable.
//!
//! The trait is implemented for the standard library's
//! [`HashSet`](std::collections::HashSet) and
//! [`BTreeSet`](std::collections::BTreeSet) as well as this crate's
//! [`FrozenSet`], so `has_all` works uniformly over mutable and frozen
//! sets.
//!
//! # Examples
//!
//! ```rust
//! use duet::collections::has_all;
//! use std::collections::HashSet;
//!
//! let set = HashSet::from([1, 2, 3]);
//! assert!(has_all(&set, [2, 1]));
//! assert!(!has_all(&set, [2, 4]));
//!
//! // An empty sequence of values is vacuously contained
//! assert!(has_all(&set, Vec::<i32>::new()));
//! ```

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::FrozenSet;

// =============================================================================
// SetLike Trait
// =============================================================================

/// A collection of unique elements supporting membership tests.
///
/// `SetLike<T>` captures the read-only portion of the set contract: a
/// membership test under the collection's own equality rule and a size
/// query. Anything implementing it can be consumed by [`has_all`].
///
/// # Examples
///
/// ```rust
/// use duet::collections::SetLike;
/// use std::collections::BTreeSet;
///
/// let set = BTreeSet::from(["a", "b"]);
/// assert!(SetLike::contains(&set, &"a"));
/// assert_eq!(SetLike::len(&set), 2);
/// ```
pub trait SetLike<T> {
    /// Returns `true` if the set contains the specified element.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Hash + Eq, S: BuildHasher> SetLike<T> for HashSet<T, S> {
    fn contains(&self, element: &T) -> bool {
        // Inherent HashSet::contains, not a recursive trait call
        self.contains(element)
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    fn contains(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> SetLike<T> for FrozenSet<T> {
    fn contains(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// has_all
// =============================================================================

/// Returns `true` if `set` contains all the values provided by `values`.
///
/// An empty `values` sequence is vacuously contained, regardless of the
/// set's contents, and duplicate values do not affect the result. Neither
/// argument is mutated. Membership uses the set's native equality rule.
///
/// `values` may yield owned values or references; anything that borrows as
/// the element type works.
///
/// # Arguments
///
/// * `set` - the set to test
/// * `values` - an iterable collection of values
///
/// # Examples
///
/// ```rust
/// use duet::collections::has_all;
/// use std::collections::HashSet;
///
/// let set = HashSet::from([1, 2]);
///
/// assert!(has_all(&set, [2, 2]));
/// assert!(has_all(&set, [2, 1]));
/// assert!(has_all(&set, &[1, 1]));
/// assert!(!has_all(&set, [1, 3]));
/// ```
///
/// Frozen sets are set-like too:
///
/// ```rust
/// use duet::collections::{FrozenSet, has_all};
///
/// let frozen: FrozenSet<i32> = [1, 2, 3].into_iter().collect();
/// assert!(has_all(&frozen, [3, 1]));
/// ```
#[must_use]
pub fn has_all<T, S, I>(set: &S, values: I) -> bool
where
    S: SetLike<T>,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    values
        .into_iter()
        .all(|value| set.contains(value.borrow()))
}

// =============================================================================
// Tests
// =============================================================================
