//! Frozen collection views and set-membership helpers.
//!
//! This module provides permanently immutable views over set and map
//! collections, plus a membership-subset test:
//!
//! - [`FrozenSet`]: an immutable set whose mutating operations are no-ops
//! - [`FrozenMap`]: an immutable map whose mutating operations are no-ops
//! - [`SetLike`]: the read-only capability bundle of a set, as a trait
//! - [`has_all`]: tests that a set contains every value of an iterable
//! - [`TypeMismatchError`]: the single error kind, raised by the dynamic
//!   freezing entry points
//!
//! # Freezing
//!
//! Freezing consumes an existing mutable collection and returns a view of
//! the same contents that can never change again. The mutating operations
//! remain callable but silently do nothing, so code written against a
//! generic mutable-collection interface keeps running against a frozen
//! one, simply without effect. Attempts to mutate are not errors.
//!
//! ```rust
//! use duet::collections::{FrozenMap, FrozenSet};
//! use std::collections::{HashMap, HashSet};
//!
//! let set = FrozenSet::freeze(HashSet::from([1, 2]));
//! set.insert(3);
//! assert_eq!(set.len(), 2);
//!
//! let map = FrozenMap::freeze(HashMap::from([("one", 1)]));
//! map.remove(&"one");
//! assert_eq!(map.len(), 1);
//! ```
//!
//! # Shared Empty Instances
//!
//! [`FrozenSet::EMPTY`] and [`FrozenMap::EMPTY`] are process-lifetime
//! empty collections shared by reference. They are distinct from the fresh
//! values that [`FrozenSet::new`] and [`FrozenMap::new`] build on each
//! call.
//!
//! # Membership Testing
//!
//! ```rust
//! use duet::collections::has_all;
//! use std::collections::HashSet;
//!
//! let set = HashSet::from([1, 2]);
//! assert!(has_all(&set, [2, 1]));
//! assert!(!has_all(&set, [1, 3]));
//! ```

mod error;
mod frozen_map;
mod frozen_set;
mod set_like;

pub use error::TypeMismatchError;
pub use frozen_map::FrozenMap;
pub use frozen_map::FrozenMapIntoIterator;
pub use frozen_map::FrozenMapIterator;
pub use frozen_map::FrozenMapKeyIterator;
pub use frozen_map::FrozenMapValueIterator;
pub use frozen_set::FrozenSet;
pub use frozen_set::FrozenSetIntoIterator;
pub use frozen_set::FrozenSetIterator;
pub use set_like::SetLike;
pub use set_like::has_all;
