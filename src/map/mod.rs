//! An insertion-ordered key-value map over the normalized key domain.
//!
//! This module provides [`OrderedMap`], an associative collection that
//! records both a mapping from [`Key`]s to values and the order in which
//! the pairs were inserted. Order is a first-class property: iteration,
//! positional indexing ([`at`](OrderedMap::at), [`pair_at`](OrderedMap::pair_at),
//! [`key_at`](OrderedMap::key_at)) and slicing all follow insertion order,
//! never key order.
//!
//! # Invariants
//!
//! - Keys are unique under normalized equality: inserting `"123"` and
//!   `123` addresses the same entry.
//! - Re-inserting an existing key overwrites the value but keeps the
//!   entry's original position. A key moves to the end only if it is
//!   removed first.
//! - Every mutating operation either fully succeeds or leaves the map
//!   unchanged.
//!
//! # Complexity
//!
//! The map stores its pairs in insertion order and probes keys by linear
//! scan, so key lookup is O(n) and positional access is O(1). Lookup of a
//! key by value is likewise a linear scan.
//!
//! # Examples
//!
//! ```rust
//! use seqmap::{Key, OrderedMap};
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! map.insert("b", 20); // overwrite: value changes, position does not
//!
//! let pairs: Vec<(&Key, &i32)> = map.iter().collect();
//! assert_eq!(pairs, vec![(&Key::from("b"), &20), (&Key::from("a"), &1)]);
//! ```

mod algebra;
mod membership;

pub use membership::KeyReport;

use crate::error::MissingKeyError;
use crate::index::{SliceRange, bounds_to_indexes, convert_slice_indexes};
use crate::key::Key;
use std::ops::RangeBounds;

/// An insertion-ordered associative sequence of key-value pairs.
///
/// See the [module documentation](self) for the order and uniqueness
/// invariants. Equality between maps is order-sensitive: two maps with
/// the same pairs in different orders are not equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedMap<V> {
    pairs: Vec<(Key, V)>,
}

impl<V> OrderedMap<V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let map: OrderedMap<i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Builds a map from a sequence of key-value pairs.
    ///
    /// Pairs are inserted in order with the usual overwrite semantics:
    /// a duplicate key keeps its first position and takes its last value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("a"), Some(&3));
    /// assert_eq!(map.key_at(0), Some(&Key::from("a")));
    /// ```
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }

    /// Builds a map from separate sequences of keys and values.
    ///
    /// The sequences are zipped; if their lengths differ, the surplus of
    /// the longer one is dropped. Duplicate keys follow the usual
    /// overwrite semantics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let map = OrderedMap::from_lists(["a", "b"], [1, 2, 3]);
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("b"), Some(&2));
    /// ```
    pub fn from_lists<K, I, J>(keys: I, values: J) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = K>,
        J: IntoIterator<Item = V>,
    {
        Self::from_pairs(keys.into_iter().zip(values))
    }

    /// Returns the number of key-value pairs in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the map contains no pairs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Position of a key in insertion order, by normalized equality.
    pub(crate) fn position(&self, key: &Key) -> Option<usize> {
        self.pairs.iter().position(|(candidate, _)| candidate == key)
    }

    /// Inserts a pair, returning the previous value for the key if any.
    ///
    /// The key is normalized on the way in, so `map.insert("123", v)` and
    /// `map.insert(123, v)` address the same entry. Overwriting keeps the
    /// entry's original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert("123", "a"), None);
    /// assert_eq!(map.insert(123, "b"), Some("a"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.pairs[index].1, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Removes a key, returning its value.
    ///
    /// Removing an absent key is not an error; it returns `None` and
    /// leaves the map unchanged. Later pairs shift down one position.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<V> {
        let key = key.into();
        self.position(&key)
            .map(|index| self.pairs.remove(index).1)
    }

    /// Returns a reference to the value stored under a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        let key = key.into();
        self.position(&key).map(|index| &self.pairs[index].1)
    }

    /// Returns the value stored under a key, or `default` if absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: impl Into<Key>, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the map contains the key.
    ///
    /// Presence is a property of the entry, never of the value: a stored
    /// value that itself encodes "nothing" (say `V = Option<T>` holding
    /// `None`) still reports the key as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert("a", None::<i32>);
    /// assert!(map.contains_key("a"));
    /// assert_eq!(map.get("a"), Some(&None));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        let key = key.into();
        self.position(&key).is_some()
    }

    /// An iterator over the pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> OrderedMapIterator<'_, V> {
        OrderedMapIterator {
            inner: self.pairs.iter(),
        }
    }

    /// An iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> OrderedMapKeys<'_, V> {
        OrderedMapKeys { inner: self.iter() }
    }

    /// An iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> OrderedMapValues<'_, V> {
        OrderedMapValues { inner: self.iter() }
    }

    /// The pair at a signed position, by insertion order.
    ///
    /// A negative index counts from the end; an index whose magnitude
    /// exceeds the length clamps (toward the start for negative indices)
    /// or falls out of range (`None`) for positive ones. This mirrors the
    /// slicing rules: `pair_at(i)` is the first pair of `slice(i..)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    /// assert_eq!(map.pair_at(1), Some((&Key::from("b"), &2)));
    /// assert_eq!(map.pair_at(-1), Some((&Key::from("c"), &3)));
    /// assert_eq!(map.pair_at(3), None);
    /// ```
    #[must_use]
    pub fn pair_at(&self, index: i64) -> Option<(&Key, &V)> {
        let range = convert_slice_indexes(Some(index), None, self.len());
        if range.length == 0 {
            return None;
        }
        let (key, value) = &self.pairs[range.offset];
        Some((key, value))
    }

    /// The value at a signed position, by insertion order.
    #[must_use]
    pub fn at(&self, index: i64) -> Option<&V> {
        self.pair_at(index).map(|(_, value)| value)
    }

    /// The key at a signed position, by insertion order.
    #[must_use]
    pub fn key_at(&self, index: i64) -> Option<&Key> {
        self.pair_at(index).map(|(key, _)| key)
    }

    /// The values stored under each of `keys`, in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`MissingKeyError`] carrying the first absent key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let keys = [Key::from("b"), Key::from("a")];
    /// assert_eq!(map.values_at(&keys).unwrap(), vec![&2, &1]);
    /// ```
    pub fn values_at(&self, keys: &[Key]) -> Result<Vec<&V>, MissingKeyError> {
        keys.iter()
            .map(|key| {
                self.position(key)
                    .map(|index| &self.pairs[index].1)
                    .ok_or_else(|| MissingKeyError { key: key.clone() })
            })
            .collect()
    }

    /// The values stored under each of `keys`, substituting `default`
    /// for absent keys.
    #[must_use]
    pub fn values_at_or<'a>(&'a self, keys: &[Key], default: &'a V) -> Vec<&'a V> {
        keys.iter()
            .map(|key| {
                self.position(key)
                    .map_or(default, |index| &self.pairs[index].1)
            })
            .collect()
    }

    /// Sorts the pairs in place by key, in the key domain's natural
    /// order (integers before text, integers numerically, text
    /// lexicographically). The sort is stable.
    pub fn sort_keys(&mut self) {
        self.pairs.sort_by(|(left, _), (right, _)| left.cmp(right));
    }

    /// Sorts the pairs in place by key with a caller-supplied ordering.
    pub fn sort_keys_by(&mut self, mut compare: impl FnMut(&Key, &Key) -> std::cmp::Ordering) {
        self.pairs.sort_by(|(left, _), (right, _)| compare(left, right));
    }

    /// Sorts the pairs in place by value with a caller-supplied ordering.
    ///
    /// Keys travel with their values, so the key-value association is
    /// preserved; only the order changes.
    pub fn sort_values_by(&mut self, mut compare: impl FnMut(&V, &V) -> std::cmp::Ordering) {
        self.pairs.sort_by(|(_, left), (_, right)| compare(left, right));
    }

    /// Maps every value through `transform`, preserving keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let doubled = map.map_values(|value| value * 2);
    /// assert_eq!(doubled.get("b"), Some(&4));
    /// ```
    pub fn map_values<W>(&self, mut transform: impl FnMut(&V) -> W) -> OrderedMap<W> {
        OrderedMap {
            pairs: self
                .pairs
                .iter()
                .map(|(key, value)| (key.clone(), transform(value)))
                .collect(),
        }
    }
}

impl<V: PartialEq> OrderedMap<V> {
    /// Returns `true` if any pair holds `value`. Linear scan.
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool {
        self.pairs.iter().any(|(_, candidate)| candidate == value)
    }

    /// The first key whose value equals `value`, by insertion order.
    /// Linear scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 1)]);
    /// assert_eq!(map.key_of(&1), Some(&Key::from("a")));
    /// assert_eq!(map.key_of(&9), None);
    /// ```
    #[must_use]
    pub fn key_of(&self, value: &V) -> Option<&Key> {
        self.pairs
            .iter()
            .find(|(_, candidate)| candidate == value)
            .map(|(key, _)| key)
    }

    /// All keys whose values equal `value`, by insertion order. Linear
    /// scan.
    #[must_use]
    pub fn keys_of(&self, value: &V) -> Vec<&Key> {
        self.pairs
            .iter()
            .filter(|(_, candidate)| candidate == value)
            .map(|(key, _)| key)
            .collect()
    }
}

impl<V: Clone> OrderedMap<V> {
    /// Keeps the pairs for which `keep` returns `true`, preserving order.
    pub fn filter_pairs(&self, mut keep: impl FnMut(&Key, &V) -> bool) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(key, value)| keep(key, value))
                .cloned()
                .collect(),
        }
    }

    /// A sub-map addressed by signed positional indices.
    ///
    /// Accepts any `i64` range: `1..3`, `2..`, `..-2`, `-4..-2`, `..`.
    /// Negative endpoints count from the end; out-of-range endpoints
    /// clamp; an inverted or empty range yields an empty map. Keys are
    /// preserved. Never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')]);
    /// assert_eq!(map.slice(1..3), OrderedMap::from_pairs([(2, 'b'), (3, 'c')]));
    /// assert_eq!(map.slice(-2..), OrderedMap::from_pairs([(3, 'c'), (4, 'd')]));
    /// assert_eq!(map.slice(2..1000).len(), 2);
    /// assert!(map.slice(3..2).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, range: impl RangeBounds<i64>) -> Self {
        let slice_range = self.resolve(&range);
        Self {
            pairs: self.pairs[slice_range.as_range()].to_vec(),
        }
    }

    /// Replaces a positional slice with `replacement` pairs, returning
    /// the removed slice.
    ///
    /// The range follows the [`slice`](Self::slice) rules. Replacement
    /// pairs whose keys survive elsewhere in the map overwrite those
    /// entries in place instead of occupying a new position; fresh keys
    /// are spliced in at the removed range's offset, in replacement
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let mut map = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    /// let removed = map.assign_slice(1..2, [("x", 9)]);
    /// assert_eq!(removed, OrderedMap::from_pairs([("b", 2)]));
    /// assert_eq!(
    ///     map.keys().collect::<Vec<_>>(),
    ///     vec![&Key::from("a"), &Key::from("x"), &Key::from("c")],
    /// );
    /// ```
    pub fn assign_slice<K, I>(&mut self, range: impl RangeBounds<i64>, replacement: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let slice_range = self.resolve(&range);
        let removed: Vec<(Key, V)> = self.pairs.drain(slice_range.as_range()).collect();
        let mut splice_at = slice_range.offset;
        for (key, value) in replacement {
            let key = key.into();
            if let Some(index) = self.position(&key) {
                self.pairs[index].1 = value;
            } else {
                self.pairs.insert(splice_at, (key, value));
                splice_at += 1;
            }
        }
        Self { pairs: removed }
    }

    /// Removes a positional slice, returning it.
    ///
    /// Equivalent to [`assign_slice`](Self::assign_slice) with an empty
    /// replacement.
    pub fn remove_slice(&mut self, range: impl RangeBounds<i64>) -> Self {
        self.assign_slice(range, std::iter::empty::<(Key, V)>())
    }

    /// A copy with the pair order reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            pairs: self.pairs.iter().rev().cloned().collect(),
        }
    }

    /// Combines the pairs of two maps into a new one.
    ///
    /// `other`'s values take precedence. Keys already present keep their
    /// position in `self`; keys only in `other` are appended in `other`'s
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let right = OrderedMap::from_pairs([("b", 20), ("c", 30)]);
    /// let merged = left.merged(&right);
    /// assert_eq!(merged.get("b"), Some(&20));
    /// assert_eq!(merged.key_at(1), Some(&Key::from("b")));
    /// assert_eq!(merged.key_at(2), Some(&Key::from("c")));
    /// ```
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (key, value) in &other.pairs {
            result.insert(key.clone(), value.clone());
        }
        result
    }

    /// Selects a sub-map by a list of keys, ordered as listed.
    ///
    /// Missing keys are skipped. Duplicate listed keys collapse onto one
    /// entry at the first occurrence's position.
    #[must_use]
    pub fn pick(&self, keys: &[Key]) -> Self {
        let mut result = Self::new();
        for key in keys {
            if let Some(index) = self.position(key) {
                result.insert(key.clone(), self.pairs[index].1.clone());
            }
        }
        result
    }

    /// Selects a sub-map by a list of keys, substituting `default` for
    /// missing ones.
    #[must_use]
    pub fn pick_or(&self, keys: &[Key], default: &V) -> Self {
        let mut result = Self::new();
        for key in keys {
            let value = self
                .position(key)
                .map_or_else(|| default.clone(), |index| self.pairs[index].1.clone());
            result.insert(key.clone(), value);
        }
        result
    }

    fn resolve(&self, range: &impl RangeBounds<i64>) -> SliceRange {
        let (start, end) = bounds_to_indexes(range);
        convert_slice_indexes(start, end, self.len())
    }
}

impl<V: Clone + PartialEq> OrderedMap<V> {
    /// Drops pairs whose value equals an earlier pair's value.
    ///
    /// Comparison is strict (`PartialEq`); the surviving pairs keep their
    /// keys and order. A closed generic value domain has no cross-type
    /// coercion, so strict equality is the whole rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::OrderedMap;
    ///
    /// let map = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 1), (3, 3)]);
    /// let unique = map.unique_values();
    /// assert_eq!(unique, OrderedMap::from_pairs([(0, 1), (1, 2), (3, 3)]));
    /// ```
    #[must_use]
    pub fn unique_values(&self) -> Self {
        let mut seen: Vec<&V> = Vec::new();
        let mut pairs = Vec::new();
        for (key, value) in &self.pairs {
            if !seen.contains(&value) {
                seen.push(value);
                pairs.push((key.clone(), value.clone()));
            }
        }
        Self { pairs }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the pairs of an [`OrderedMap`], in insertion
/// order.
pub struct OrderedMapIterator<'a, V> {
    inner: std::slice::Iter<'a, (Key, V)>,
}

impl<'a, V> Iterator for OrderedMapIterator<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for OrderedMapIterator<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<V> ExactSizeIterator for OrderedMapIterator<'_, V> {}

/// Owning iterator over the pairs of an [`OrderedMap`], in insertion
/// order.
pub struct OrderedMapIntoIterator<V> {
    inner: std::vec::IntoIter<(Key, V)>,
}

impl<V> Iterator for OrderedMapIntoIterator<V> {
    type Item = (Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for OrderedMapIntoIterator<V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for OrderedMapIntoIterator<V> {}

/// Iterator over the keys of an [`OrderedMap`], in insertion order.
pub struct OrderedMapKeys<'a, V> {
    inner: OrderedMapIterator<'a, V>,
}

impl<'a, V> Iterator for OrderedMapKeys<'a, V> {
    type Item = &'a Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for OrderedMapKeys<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<V> ExactSizeIterator for OrderedMapKeys<'_, V> {}

/// Iterator over the values of an [`OrderedMap`], in insertion order.
pub struct OrderedMapValues<'a, V> {
    inner: OrderedMapIterator<'a, V>,
}

impl<'a, V> Iterator for OrderedMapValues<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for OrderedMapValues<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<V> ExactSizeIterator for OrderedMapValues<'_, V> {}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (Key, V);
    type IntoIter = OrderedMapIntoIterator<V>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIterator {
            inner: self.pairs.into_iter(),
        }
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = OrderedMapIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for OrderedMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<V: std::fmt::Display> std::fmt::Display for OrderedMap<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("{")?;
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str("}")
    }
}

static_assertions::assert_impl_all!(OrderedMap<i32>: Send, Sync, Clone);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for OrderedMap<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        // A sequence of pairs rather than a map: formats like JSON would
        // otherwise stringify integer keys and lose the key's type.
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for pair in &self.pairs {
            sequence.serialize_element(pair)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<V> {
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<'de, V> serde::de::Visitor<'de> for OrderedMapVisitor<V>
where
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of key-value pairs")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_element::<(Key, V)>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for OrderedMap<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedMapVisitor {
            value_marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
