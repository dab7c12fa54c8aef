//! Error types for the collections module.
//!
//! This module provides the single error kind the freezing operations can
//! produce when handed a dynamically typed value of the wrong runtime type.

/// Represents a failed runtime type check during a dynamic freeze.
///
/// This error occurs when [`FrozenSet::freeze_any`] or
/// [`FrozenMap::freeze_any`] receive a boxed value that is not a genuine
/// set-like or map-like collection of the requested element type. It is
/// raised synchronously and never recovered internally.
///
/// Mutation attempts on an already frozen collection are *not* errors; they
/// are silently absorbed no-ops.
///
/// [`FrozenSet::freeze_any`]: super::FrozenSet::freeze_any
/// [`FrozenMap::freeze_any`]: super::FrozenMap::freeze_any
///
/// # Examples
///
/// ```rust
/// use duet::collections::TypeMismatchError;
///
/// let error = TypeMismatchError {
///     expected: "std::collections::HashSet<i32>",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "type mismatch: expected a collection such as std::collections::HashSet<i32>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchError {
    /// The name of a collection type the freeze would have accepted.
    pub expected: &'static str,
}

impl std::fmt::Display for TypeMismatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "type mismatch: expected a collection such as {}",
            self.expected
        )
    }
}

impl std::error::Error for TypeMismatchError {}

// =============================================================================
// Tests
// =============================================================================
