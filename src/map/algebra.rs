//! Difference and intersection over two ordered maps.
//!
//! Every operation here preserves the pair order and keys of the first
//! map; the second map is only probed for membership, so its order never
//! matters. The general forms ([`difference`](OrderedMap::difference),
//! [`intersection`](OrderedMap::intersection)) take one
//! [`Comparator`] per dimension and honor [`Comparator::Ignored`]; the
//! dedicated families (`key_*`, `value_*`, `pair_*`) fix which dimensions
//! participate and degrade `Ignored` to `Default`.
//!
//! A pair of `self` matches a pair of `other` when both the key and the
//! value comparator accept it; an ignored dimension accepts everything.
//! Difference keeps the pairs with no match, intersection keeps the pairs
//! with one. For the same pair of comparators the two operations
//! partition `self`.
//!
//! All operations are linear scans over the cross product, O(n * m).

use super::OrderedMap;
use crate::compare::Comparator;
use crate::error::NoComparatorsError;
use crate::key::Key;

impl<V: Clone + PartialEq> OrderedMap<V> {
    /// Pairs of `self` with no matching pair in `other`, under the given
    /// key and value comparators.
    ///
    /// Activation rules:
    ///
    /// - only the value comparator active: a pair is excluded when its
    ///   *value* matches the value of any pair of `other`, keys ignored
    ///   on both sides;
    /// - only the key comparator active: a pair is excluded when its
    ///   *key* matches any key of `other`;
    /// - both active: a pair is excluded only when some single pair of
    ///   `other` matches it on both dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`NoComparatorsError`] when both comparators are
    /// [`Comparator::Ignored`]: with both dimensions excluded there is no
    /// basis for comparison.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Comparator, OrderedMap};
    ///
    /// let left = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 3)]);
    /// let right = OrderedMap::from_pairs([(9, 2)]);
    ///
    /// // Value-only difference: key ignored entirely.
    /// let result = left
    ///     .difference(&right, Comparator::Ignored, Comparator::Default)
    ///     .unwrap();
    /// assert_eq!(result, OrderedMap::from_pairs([(0, 1), (2, 3)]));
    /// ```
    pub fn difference(
        &self,
        other: &Self,
        key_comparator: Comparator<'_, Key>,
        value_comparator: Comparator<'_, V>,
    ) -> Result<Self, NoComparatorsError> {
        if !key_comparator.is_active() && !value_comparator.is_active() {
            return Err(NoComparatorsError);
        }
        Ok(self.filter_pairs(|key, value| {
            !other
                .iter()
                .any(|(k, v)| key_comparator.matches(key, k) && value_comparator.matches(value, v))
        }))
    }

    /// Pairs of `self` with a matching pair in `other`, under the given
    /// key and value comparators.
    ///
    /// The structural dual of [`difference`](Self::difference), with the
    /// same activation rules. Unlike `difference`, two ignored
    /// comparators are not an error: both dimensions are then trivially
    /// equal, so every pair matches whenever `other` is non-empty and the
    /// result is a full copy of `self` (and empty when `other` is empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Comparator, OrderedMap};
    ///
    /// let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let right = OrderedMap::from_pairs([("b", 99), ("c", 3)]);
    ///
    /// let result = left.intersection(&right, Comparator::Default, Comparator::Ignored);
    /// assert_eq!(result, OrderedMap::from_pairs([("b", 2)]));
    /// ```
    #[must_use]
    pub fn intersection(
        &self,
        other: &Self,
        key_comparator: Comparator<'_, Key>,
        value_comparator: Comparator<'_, V>,
    ) -> Self {
        self.filter_pairs(|key, value| {
            other
                .iter()
                .any(|(k, v)| key_comparator.matches(key, k) && value_comparator.matches(value, v))
        })
    }

    /// Pairs of `self` whose key matches no key of `other`.
    ///
    /// An `Ignored` comparator degrades to `Default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Comparator, OrderedMap};
    ///
    /// let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let right = OrderedMap::from_pairs([("b", 3), ("c", 4)]);
    /// assert_eq!(
    ///     left.key_difference(&right, Comparator::Default),
    ///     OrderedMap::from_pairs([("a", 1)]),
    /// );
    /// ```
    #[must_use]
    pub fn key_difference(&self, other: &Self, key_comparator: Comparator<'_, Key>) -> Self {
        let key_comparator = key_comparator.activated();
        self.filter_pairs(|key, _| !other.keys().any(|k| key_comparator.matches(key, k)))
    }

    /// Pairs of `self` whose value matches no value of `other`.
    ///
    /// An `Ignored` comparator degrades to `Default`.
    #[must_use]
    pub fn value_difference(&self, other: &Self, value_comparator: Comparator<'_, V>) -> Self {
        let value_comparator = value_comparator.activated();
        self.filter_pairs(|_, value| !other.values().any(|v| value_comparator.matches(value, v)))
    }

    /// Pairs of `self` with no pair of `other` matching on both key and
    /// value.
    ///
    /// `Ignored` comparators degrade to `Default`.
    #[must_use]
    pub fn pair_difference(
        &self,
        other: &Self,
        key_comparator: Comparator<'_, Key>,
        value_comparator: Comparator<'_, V>,
    ) -> Self {
        let key_comparator = key_comparator.activated();
        let value_comparator = value_comparator.activated();
        self.filter_pairs(|key, value| {
            !other
                .iter()
                .any(|(k, v)| key_comparator.matches(key, k) && value_comparator.matches(value, v))
        })
    }

    /// Pairs of `self` whose key matches some key of `other`.
    ///
    /// An `Ignored` comparator degrades to `Default`.
    #[must_use]
    pub fn key_intersection(&self, other: &Self, key_comparator: Comparator<'_, Key>) -> Self {
        let key_comparator = key_comparator.activated();
        self.filter_pairs(|key, _| other.keys().any(|k| key_comparator.matches(key, k)))
    }

    /// Pairs of `self` whose value matches some value of `other`.
    ///
    /// An `Ignored` comparator degrades to `Default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Comparator, OrderedMap};
    ///
    /// let left = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 3)]);
    /// let right = OrderedMap::from_pairs([(0, 2), (1, 3), (2, 4)]);
    /// assert_eq!(
    ///     left.value_intersection(&right, Comparator::Default),
    ///     OrderedMap::from_pairs([(1, 2), (2, 3)]),
    /// );
    /// ```
    #[must_use]
    pub fn value_intersection(&self, other: &Self, value_comparator: Comparator<'_, V>) -> Self {
        let value_comparator = value_comparator.activated();
        self.filter_pairs(|_, value| other.values().any(|v| value_comparator.matches(value, v)))
    }

    /// Pairs of `self` matched by some pair of `other` on both key and
    /// value.
    ///
    /// `Ignored` comparators degrade to `Default`.
    #[must_use]
    pub fn pair_intersection(
        &self,
        other: &Self,
        key_comparator: Comparator<'_, Key>,
        value_comparator: Comparator<'_, V>,
    ) -> Self {
        let key_comparator = key_comparator.activated();
        let value_comparator = value_comparator.activated();
        self.filter_pairs(|key, value| {
            other
                .iter()
                .any(|(k, v)| key_comparator.matches(key, k) && value_comparator.matches(value, v))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
