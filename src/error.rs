//! Error types for the crate.
//!
//! Only three conditions are errors anywhere in this library: computing a
//! difference with no comparator active, generating a range with a zero
//! step, and requesting values for specific keys without a default when a
//! key is absent. Everything else (out-of-range slice indices, empty
//! inputs, oversized steps, removal of absent keys) resolves to a
//! well-defined non-error result.

use crate::key::Key;

/// Returned when a difference is requested with both the key and the value
/// comparator set to [`Comparator::Ignored`](crate::Comparator::Ignored).
///
/// With both components excluded there is no basis for comparison, which is
/// a caller configuration error rather than a data condition.
///
/// # Examples
///
/// ```rust
/// use seqmap::{Comparator, NoComparatorsError, OrderedMap};
///
/// let left: OrderedMap<i32> = OrderedMap::new();
/// let right: OrderedMap<i32> = OrderedMap::new();
/// let result = left.difference(&right, Comparator::Ignored, Comparator::Ignored);
/// assert_eq!(result, Err(NoComparatorsError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoComparatorsError;

impl std::fmt::Display for NoComparatorsError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("no comparators given to compute map difference")
    }
}

impl std::error::Error for NoComparatorsError {}

/// Returned when a range is requested with a step of zero.
///
/// A zero step can never make progress toward the end bound, so the range
/// would be infinite; the other degenerate step configurations (a step
/// larger than the interval, a step running against the interval's
/// direction) are valid and produce singleton or empty results instead.
///
/// # Examples
///
/// ```rust
/// use seqmap::{ZeroStepError, range_by};
///
/// assert_eq!(range_by(0, 10, 0), Err(ZeroStepError));
/// assert_eq!(range_by(0.0, 1.0, 0.0), Err(ZeroStepError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroStepError;

impl std::fmt::Display for ZeroStepError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("range step must not be zero")
    }
}

impl std::error::Error for ZeroStepError {}

/// Returned when values are requested for specific keys with no default
/// and one of the keys is absent from the map.
///
/// The offending key is carried so callers can report it.
///
/// # Examples
///
/// ```rust
/// use seqmap::{Key, MissingKeyError, OrderedMap};
///
/// let mut map = OrderedMap::new();
/// map.insert("a", 1);
///
/// let keys = [Key::from("a"), Key::from("b")];
/// let error = map.values_at(&keys).unwrap_err();
/// assert_eq!(error, MissingKeyError { key: Key::from("b") });
/// assert_eq!(format!("{error}"), "missing key b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyError {
    /// The key that was requested but absent.
    pub key: Key,
}

impl std::fmt::Display for MissingKeyError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "missing key {}", self.key)
    }
}

impl std::error::Error for MissingKeyError {}

// =============================================================================
// Tests
// =============================================================================
