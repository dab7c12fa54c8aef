//! # duet
//!
//! A small library of generic data-structure utilities: an immutable
//! two-element tuple and frozen views over the standard collections.
//!
//! ## Overview
//!
//! This library provides the handful of building blocks that keep showing up
//! in code that passes values around in twos and hands out collections that
//! must never change again:
//!
//! - **`Pair<A, B>`**: an immutable, order-preserving 2-tuple with value
//!   equality, component iteration, and display formatting
//! - **`FrozenSet<T>` / `FrozenMap<K, V>`**: permanently immutable views over
//!   an existing set or map, whose mutating operations are silent no-ops
//! - **`has_all`**: membership-subset testing over any set-like collection
//! - **Shared empty instances**: `FrozenSet::EMPTY` and `FrozenMap::EMPTY`,
//!   process-lifetime empty collections shared by reference
//!
//! ## Feature Flags
//!
//! - `pair`: the [`Pair`](pair::Pair) tuple type
//! - `collections`: frozen collection views and `has_all`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use duet::prelude::*;
//! use std::collections::HashSet;
//!
//! let pair = Pair::of("one", 1);
//! assert_eq!(pair.first(), &"one");
//! assert_eq!(pair.to_string(), "Pair(first=one, second=1)");
//!
//! let frozen = FrozenSet::freeze(HashSet::from([1, 2, 3]));
//! frozen.insert(4); // silently absorbed
//! assert_eq!(frozen.len(), 3);
//! assert!(has_all(&frozen, [2, 1]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use duet::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "pair")]
    pub use crate::pair::Pair;

    #[cfg(feature = "collections")]
    pub use crate::collections::{FrozenMap, FrozenSet, SetLike, TypeMismatchError, has_all};
}

#[cfg(feature = "pair")]
pub mod pair;

#[cfg(feature = "collections")]
pub mod collections;
