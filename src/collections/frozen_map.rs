//! Frozen (permanently immutable) map view.
//!
//! This module provides [`FrozenMap`], the key/value counterpart of
//! [`FrozenSet`](super::FrozenSet). Freezing consumes an existing mutable
//! map and keeps its entries behind an interface whose mutating operations
//! ([`insert`](FrozenMap::insert), [`remove`](FrozenMap::remove),
//! [`clear`](FrozenMap::clear)) are silent no-ops, while every read
//! operation behaves exactly as on an ordinary map with the same entries.
//!
//! # Examples
//!
//! ```rust
//! use duet::collections::FrozenMap;
//! use std::collections::HashMap;
//!
//! let frozen = FrozenMap::freeze(HashMap::from([("one", 1), ("two", 2)]));
//!
//! assert_eq!(frozen.get(&"one"), Some(&1));
//! assert_eq!(frozen.len(), 2);
//!
//! // Mutation attempts are absorbed without error and without effect
//! frozen.insert("three", 3);
//! frozen.remove(&"one");
//! frozen.clear();
//! assert_eq!(frozen.len(), 2);
//! ```

use std::any::Any;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::error::TypeMismatchError;

// =============================================================================
// FrozenMap Definition
// =============================================================================

/// A permanently immutable map of unique keys to values.
///
/// `FrozenMap<K, V>` holds exclusive ownership of the entries of the map it
/// was frozen from. Key lookup is a linear scan under the key type's
/// equality rule, so keys only need `PartialEq`. Iteration order is the
/// insertion order of the frozen entries.
///
/// # Examples
///
/// ```rust
/// use duet::collections::FrozenMap;
///
/// let frozen: FrozenMap<&str, i32> = [("a", 1)].into_iter().collect();
/// assert_eq!(frozen.get(&"a"), Some(&1));
///
/// frozen.insert("b", 2); // no-op
/// assert_eq!(frozen.len(), 1);
/// ```
#[derive(Clone)]
pub struct FrozenMap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> FrozenMap<K, V> {
    /// Creates a new empty frozen map.
    ///
    /// Every call produces a fresh value; use [`FrozenMap::EMPTY`] for the
    /// shared process-lifetime instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let empty: FrozenMap<&str, i32> = FrozenMap::new();
    /// assert!(empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Freezes an existing mutable map, consuming it and returning an
    /// immutable view of its entries.
    ///
    /// Accepts anything convertible into a frozen map: a [`HashMap`], a
    /// [`BTreeMap`], or an already frozen map (freezing is idempotent).
    ///
    /// # Arguments
    ///
    /// * `collection` - the map to make immutable
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    /// use std::collections::HashMap;
    ///
    /// let frozen = FrozenMap::freeze(HashMap::from([("one", 1)]));
    /// assert_eq!(frozen.get(&"one"), Some(&1));
    /// ```
    #[inline]
    #[must_use]
    pub fn freeze(collection: impl Into<Self>) -> Self {
        collection.into()
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the value associated with the given key.
    ///
    /// The key may be any borrowed form of the map's key type, as long as
    /// equality on the borrowed form matches equality on the key type.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<String, i32> = [("one".to_string(), 1)].into_iter().collect();
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(frozen.get("one"), Some(&1));
    /// assert_eq!(frozen.get("two"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate.borrow() == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1)].into_iter().collect();
    /// assert!(frozen.contains_key(&"a"));
    /// assert!(!frozen.contains_key(&"b"));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an iterator over the entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let entries: Vec<(&&str, &i32)> = frozen.iter().collect();
    /// assert_eq!(entries, vec![(&"a", &1), (&"b", &2)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> FrozenMapIterator<'_, K, V> {
        FrozenMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let keys: Vec<&&str> = frozen.keys().collect();
    /// assert_eq!(keys, vec![&"a", &"b"]);
    /// ```
    #[inline]
    pub fn keys(&self) -> FrozenMapKeyIterator<'_, K, V> {
        FrozenMapKeyIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// let values: Vec<&i32> = frozen.values().collect();
    /// assert_eq!(values, vec![&1, &2]);
    /// ```
    #[inline]
    pub fn values(&self) -> FrozenMapValueIterator<'_, K, V> {
        FrozenMapValueIterator {
            inner: self.entries.iter(),
        }
    }

    // =========================================================================
    // No-op Mutations
    // =========================================================================

    /// Does nothing and returns `None`.
    ///
    /// The map is frozen; assignment attempts are silently absorbed rather
    /// than reported as errors. The key and value are dropped.
    ///
    /// Takes `&self`: a frozen map never needs exclusive access, so the
    /// shared [`FrozenMap::EMPTY`] accepts assignment attempts too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1)].into_iter().collect();
    /// assert_eq!(frozen.insert("b", 2), None);
    /// assert_eq!(frozen.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        let _ = (key, value);
        None
    }

    /// Does nothing and returns `None`.
    ///
    /// The map is frozen; removal attempts are silently absorbed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1)].into_iter().collect();
    /// assert_eq!(frozen.remove(&"a"), None);
    /// assert_eq!(frozen.get(&"a"), Some(&1));
    /// ```
    #[inline]
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let _ = key;
        None
    }

    /// Does nothing.
    ///
    /// The map is frozen; clearing attempts are silently absorbed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let frozen: FrozenMap<&str, i32> = [("a", 1)].into_iter().collect();
    /// frozen.clear();
    /// assert_eq!(frozen.len(), 1);
    /// ```
    #[inline]
    pub fn clear(&self) {}
}

impl<K: 'static, V: 'static> FrozenMap<K, V> {
    /// The shared immutable empty map.
    ///
    /// A process-lifetime instance constructed once; all mentions of
    /// `FrozenMap::<K, V>::EMPTY` for the same key and value types denote
    /// the identical shared reference. It reports size zero forever and
    /// absorbs mutation attempts like any other frozen map.
    ///
    /// Note the deliberate asymmetry with [`FrozenMap::new`]: `new` builds
    /// a fresh empty value on every call, while `EMPTY` is the one shared
    /// instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    ///
    /// let shared = FrozenMap::<&str, i32>::EMPTY;
    /// shared.insert("a", 1); // no-op
    /// assert_eq!(shared.len(), 0);
    /// ```
    pub const EMPTY: &'static Self = &Self {
        entries: Vec::new(),
    };

    /// Freezes a dynamically typed collection, checking its runtime type.
    ///
    /// This is the dynamic counterpart of [`FrozenMap::freeze`] for
    /// boundaries where the map arrives type-erased. The boxed value must
    /// be a `HashMap<K, V>`, a `BTreeMap<K, V>`, or an already frozen
    /// `FrozenMap<K, V>`; anything else fails with a [`TypeMismatchError`].
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the value is not a genuine map-like
    /// collection of the requested key and value types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duet::collections::FrozenMap;
    /// use std::collections::HashMap;
    ///
    /// let frozen = FrozenMap::<&str, i32>::freeze_any(Box::new(HashMap::from([("a", 1)]))).unwrap();
    /// assert_eq!(frozen.len(), 1);
    ///
    /// let error = FrozenMap::<&str, i32>::freeze_any(Box::new(vec![1, 2])).unwrap_err();
    /// assert!(error.to_string().starts_with("type mismatch"));
    /// ```
    pub fn freeze_any(value: Box<dyn Any>) -> Result<Self, TypeMismatchError> {
        let value = match value.downcast::<Self>() {
            Ok(frozen) => return Ok(*frozen),
            Err(other) => other,
        };
        let value = match value.downcast::<HashMap<K, V>>() {
            Ok(map) => {
                return Ok(Self {
                    entries: map.into_iter().collect(),
                });
            }
            Err(other) => other,
        };
        match value.downcast::<BTreeMap<K, V>>() {
            Ok(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            Err(_) => Err(TypeMismatchError {
                expected: std::any::type_name::<HashMap<K, V>>(),
            }),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over the entries of a [`FrozenMap`].
pub struct FrozenMapIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for FrozenMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.0, &entry.1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for FrozenMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An iterator over the keys of a [`FrozenMap`].
pub struct FrozenMapKeyIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for FrozenMapKeyIterator<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for FrozenMapKeyIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An iterator over the values of a [`FrozenMap`].
pub struct FrozenMapValueIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for FrozenMapValueIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for FrozenMapValueIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the entries of a [`FrozenMap`].
pub struct FrozenMapIntoIterator<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for FrozenMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for FrozenMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, K, V> IntoIterator for &'a FrozenMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = FrozenMapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for FrozenMap<K, V> {
    type Item = (K, V);
    type IntoIter = FrozenMapIntoIterator<K, V>;

    /// Consumes the frozen map, yielding its entries by value.
    fn into_iter(self) -> Self::IntoIter {
        FrozenMapIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for FrozenMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for FrozenMap<K, V> {
    /// Freezes a [`HashMap`], consuming it.
    fn from(map: HashMap<K, V, S>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl<K, V> From<BTreeMap<K, V>> for FrozenMap<K, V> {
    /// Freezes a [`BTreeMap`], consuming it. Iteration order of the frozen
    /// view is the source's ascending key order.
    fn from(map: BTreeMap<K, V>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for FrozenMap<K, V> {
    /// Collects an iterator of entries into a frozen map with map
    /// semantics: a later entry for an already collected key replaces the
    /// earlier value, matching `HashMap::from_iter`.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut entries: Vec<(K, V)> = Vec::new();
        for (key, value) in iterable {
            if let Some(entry) = entries.iter_mut().find(|entry| entry.0 == key) {
                entry.1 = value;
            } else {
                entries.push((key, value));
            }
        }
        Self { entries }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for FrozenMap<K, V> {
    /// Map equality: same size and same key-to-value associations,
    /// regardless of the iteration order either side was frozen with.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Eq, V: Eq> Eq for FrozenMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for FrozenMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for FrozenMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(FrozenMap<i32, String>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
