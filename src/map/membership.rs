//! Key-set membership predicates.
//!
//! Three questions about a map's key set against a list of keys: does the
//! map contain *only* listed keys, does it contain *all* listed keys, and
//! does it contain *exactly* the listed keys. Each question comes in a
//! short-circuiting boolean form (`has_*`) and a reporting form
//! (`check_*`) that always completes the scan and collects the offending
//! keys, so a caller asking for detail gets the complete picture in one
//! call.
//!
//! Probing is backed by a key set with two representations: inline
//! storage for small key lists and a hash set beyond that, so the common
//! "a handful of expected keys" case allocates nothing on the probe side.

use super::OrderedMap;
use crate::key::Key;
use smallvec::SmallVec;
use std::collections::HashSet;

/// Key lists up to this size are probed inline by linear scan.
const PROBE_THRESHOLD: usize = 8;

/// A deduplicated set of borrowed keys with inline and hashed states.
enum KeyProbe<'a> {
    Inline(SmallVec<[&'a Key; PROBE_THRESHOLD]>),
    Hashed(HashSet<&'a Key>),
}

impl<'a> KeyProbe<'a> {
    fn new(keys: &'a [Key]) -> Self {
        if keys.len() <= PROBE_THRESHOLD {
            let mut inline: SmallVec<[&'a Key; PROBE_THRESHOLD]> = SmallVec::new();
            for key in keys {
                if !inline.contains(&key) {
                    inline.push(key);
                }
            }
            Self::Inline(inline)
        } else {
            Self::Hashed(keys.iter().collect())
        }
    }

    fn contains(&self, key: &Key) -> bool {
        match self {
            Self::Inline(keys) => keys.iter().any(|candidate| *candidate == key),
            Self::Hashed(keys) => keys.contains(key),
        }
    }

    /// Removes the key if present, reporting whether it was.
    fn remove(&mut self, key: &Key) -> bool {
        match self {
            Self::Inline(keys) => keys
                .iter()
                .position(|candidate| *candidate == key)
                .is_some_and(|index| {
                    keys.swap_remove(index);
                    true
                }),
            Self::Hashed(keys) => keys.remove(key),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Inline(keys) => keys.is_empty(),
            Self::Hashed(keys) => keys.is_empty(),
        }
    }
}

/// The outcome of a reporting membership check.
///
/// `unexpected` holds keys present in the map but not allowed/expected,
/// in the map's insertion order; `missing` holds keys required/expected
/// but absent from the map, in the order they were listed. A check that
/// does not look for one of the two leaves it empty.
///
/// # Examples
///
/// ```rust
/// use seqmap::{Key, OrderedMap};
///
/// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
/// let report = map.check_exact_keys(&[Key::from("a"), Key::from("c")]);
/// assert!(!report.is_match());
/// assert_eq!(report.unexpected, vec![Key::from("b")]);
/// assert_eq!(report.missing, vec![Key::from("c")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyReport {
    /// Keys found in the map but not in the given list.
    pub unexpected: Vec<Key>,
    /// Keys in the given list but absent from the map.
    pub missing: Vec<Key>,
}

impl KeyReport {
    /// `true` when the check found nothing unexpected and nothing
    /// missing.
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.unexpected.is_empty() && self.missing.is_empty()
    }
}

impl<V> OrderedMap<V> {
    /// Returns `true` if every key of the map is in `allowed`.
    ///
    /// `allowed` may contain keys the map lacks; only surplus map keys
    /// fail the check. Short-circuits on the first unexpected key; use
    /// [`check_only_keys`](Self::check_only_keys) to collect them all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// let allowed = [Key::from("a"), Key::from("b"), Key::from("c")];
    /// assert!(map.has_only_keys(&allowed));
    /// assert!(!map.has_only_keys(&allowed[..1]));
    /// ```
    #[must_use]
    pub fn has_only_keys(&self, allowed: &[Key]) -> bool {
        let probe = KeyProbe::new(allowed);
        self.keys().all(|key| probe.contains(key))
    }

    /// Scans the whole map and reports every key not in `allowed`.
    ///
    /// Unlike [`has_only_keys`](Self::has_only_keys) this never
    /// short-circuits: the report's `unexpected` list is complete, in the
    /// map's insertion order. `missing` is always empty for this check.
    #[must_use]
    pub fn check_only_keys(&self, allowed: &[Key]) -> KeyReport {
        let probe = KeyProbe::new(allowed);
        KeyReport {
            unexpected: self
                .keys()
                .filter(|key| !probe.contains(key))
                .cloned()
                .collect(),
            missing: Vec::new(),
        }
    }

    /// Returns `true` if every key in `required` exists in the map.
    ///
    /// Short-circuits on the first missing key; use
    /// [`check_keys`](Self::check_keys) to collect them all.
    #[must_use]
    pub fn has_keys(&self, required: &[Key]) -> bool {
        required.iter().all(|key| self.position(key).is_some())
    }

    /// Scans all of `required` and reports every key absent from the
    /// map, in `required`'s order. `unexpected` is always empty for this
    /// check.
    #[must_use]
    pub fn check_keys(&self, required: &[Key]) -> KeyReport {
        KeyReport {
            unexpected: Vec::new(),
            missing: required
                .iter()
                .filter(|key| self.position(key).is_none())
                .cloned()
                .collect(),
        }
    }

    /// Returns `true` if the map's key set is exactly `expected`.
    ///
    /// Duplicates in `expected` count once. Short-circuits on the first
    /// surplus map key; use [`check_exact_keys`](Self::check_exact_keys)
    /// for the full symmetric-difference detail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqmap::{Key, OrderedMap};
    ///
    /// let map = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    /// assert!(map.has_exact_keys(&[Key::from("a"), Key::from("b")]));
    /// assert!(!map.has_exact_keys(&[Key::from("a")]));
    /// assert!(!map.has_exact_keys(&[Key::from("a"), Key::from("b"), Key::from("c")]));
    /// ```
    #[must_use]
    pub fn has_exact_keys(&self, expected: &[Key]) -> bool {
        let mut probe = KeyProbe::new(expected);
        for key in self.keys() {
            if !probe.remove(key) {
                return false;
            }
        }
        probe.is_empty()
    }

    /// Computes the full symmetric difference between the map's key set
    /// and `expected`.
    ///
    /// One pass over the map's keys collects `unexpected` (map order) and
    /// consumes matched entries of `expected`; a residual pass over
    /// `expected` collects `missing` (list order, deduplicated).
    #[must_use]
    pub fn check_exact_keys(&self, expected: &[Key]) -> KeyReport {
        let mut probe = KeyProbe::new(expected);
        let mut unexpected = Vec::new();
        for key in self.keys() {
            if !probe.remove(key) {
                unexpected.push(key.clone());
            }
        }
        let missing = expected
            .iter()
            .filter(|key| probe.remove(key))
            .cloned()
            .collect();
        KeyReport {
            unexpected,
            missing,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
