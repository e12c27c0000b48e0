//! Comparator variants for set-algebra operations.
//!
//! The difference and intersection operations on
//! [`OrderedMap`](crate::OrderedMap) are parameterized independently over a
//! key comparator and a value comparator. [`Comparator`] is the closed
//! tri-state variant governing how one of those dimensions participates:
//! excluded entirely, compared with the domain's strict structural
//! equality, or compared with a caller-supplied ordering function.
//!
//! Representing the three states as an enum (rather than an overloaded
//! nullable parameter) makes illegal states unrepresentable and forces the
//! set-algebra engine to handle every activation combination exhaustively.

use std::cmp::Ordering;

/// Governs how one dimension (key or value) participates in a comparison.
///
/// # Examples
///
/// ```rust
/// use seqmap::{Comparator, Key};
/// use std::cmp::Ordering;
///
/// // Strict structural equality.
/// assert!(Comparator::Default.matches(&Key::from(1), &Key::from("1")));
/// assert!(!Comparator::Default.matches(&Key::from(1), &Key::from("01")));
///
/// // The dimension is excluded: everything matches.
/// assert!(Comparator::Ignored.matches(&1, &2));
///
/// // Caller-supplied ordering; zero means equal.
/// let case_insensitive = |a: &&str, b: &&str| -> Ordering {
///     a.to_lowercase().cmp(&b.to_lowercase())
/// };
/// let comparator = Comparator::Custom(&case_insensitive);
/// assert!(comparator.matches(&"Beta", &"beta"));
/// ```
pub enum Comparator<'a, T: ?Sized> {
    /// The dimension is excluded from the comparison entirely; any pair of
    /// operands counts as matching.
    Ignored,
    /// The dimension is compared with the domain's strict structural
    /// equality (`PartialEq`).
    Default,
    /// The dimension is compared with a caller-supplied total or partial
    /// order oracle returning negative/zero/positive; zero means equal.
    Custom(&'a dyn Fn(&T, &T) -> Ordering),
}

impl<T: ?Sized> Comparator<'_, T> {
    /// Returns `true` unless this comparator is [`Comparator::Ignored`].
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Returns whether `left` and `right` match under this comparator.
    ///
    /// [`Comparator::Ignored`] matches everything: an excluded dimension
    /// places no constraint on the comparison.
    #[inline]
    #[must_use]
    pub fn matches(&self, left: &T, right: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Ignored => true,
            Self::Default => left == right,
            Self::Custom(compare) => compare(left, right) == Ordering::Equal,
        }
    }

    /// Degrades [`Comparator::Ignored`] to [`Comparator::Default`].
    ///
    /// The dedicated difference/intersection families (`key_difference`,
    /// `pair_intersection`, ...) fix which dimensions participate, so an
    /// `Ignored` argument to them falls back to the default equality.
    #[inline]
    #[must_use]
    pub const fn activated(self) -> Self {
        match self {
            Self::Ignored | Self::Default => Self::Default,
            Self::Custom(compare) => Self::Custom(compare),
        }
    }
}

impl<T: ?Sized> Clone for Comparator<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Comparator<'_, T> {}

impl<T: ?Sized> std::fmt::Debug for Comparator<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ignored => formatter.write_str("Ignored"),
            Self::Default => formatter.write_str("Default"),
            Self::Custom(_) => formatter.write_str("Custom(..)"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
