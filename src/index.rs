//! Slice-index arithmetic.
//!
//! Converts signed, possibly out-of-range logical indices into absolute
//! in-bounds ranges over a sequence of known length. Negative indices
//! count from the end; out-of-range indices clamp; an inverted or empty
//! logical range yields a zero-length result. No input is ever an error.
//!
//! Every slicing, splicing, and range-removal operation on
//! [`OrderedMap`](crate::OrderedMap) goes through [`convert_slice_indexes`].

use std::ops::{Bound, RangeBounds};

/// An absolute, validated subrange of a sequence.
///
/// Invariants: `offset <= length_of_sequence` and
/// `offset + length <= length_of_sequence` for the length the range was
/// computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SliceRange {
    pub(crate) offset: usize,
    pub(crate) length: usize,
}

impl SliceRange {
    /// The half-open index range `offset..offset + length`.
    pub(crate) const fn as_range(self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// Normalizes one signed index against a sequence length.
///
/// `None` means the index was absent and `default` applies. A negative
/// index counts back from `length`, clamping at zero; a non-negative index
/// clamps at `length`.
pub(crate) fn normalize_slice_index(index: Option<i64>, length: usize, default: usize) -> usize {
    let Some(index) = index else {
        return default;
    };
    if index < 0 {
        let from_end = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
        length.saturating_sub(from_end)
    } else {
        usize::try_from(index).map_or(length, |index| index.min(length))
    }
}

/// Converts a `(start, end)` pair of signed logical indices into an
/// absolute [`SliceRange`] over a sequence of `length` elements.
///
/// An absent start defaults to `0`, an absent end to `length`. The result
/// always satisfies `offset <= length` and `offset + length <= length`;
/// a start at or beyond the end yields a zero-length range.
pub(crate) fn convert_slice_indexes(
    start: Option<i64>,
    end: Option<i64>,
    length: usize,
) -> SliceRange {
    let start = normalize_slice_index(start, length, 0);
    let end = normalize_slice_index(end, length, length);
    SliceRange {
        offset: start.min(length),
        length: end.saturating_sub(start),
    }
}

/// Converts a `RangeBounds<i64>` endpoint pair into the optional signed
/// indices consumed by [`convert_slice_indexes`].
///
/// `Included` end bounds become their exclusive equivalents; an inclusive
/// end of `-1` means "through the last element" and so becomes unbounded.
/// Symmetrically, an excluded start of `-1` means "strictly after the last
/// element": incrementing it would wrap to `0` and flip the bound from
/// end-relative to start-relative, so it maps to a past-the-end index
/// instead.
pub(crate) fn bounds_to_indexes(bounds: &impl RangeBounds<i64>) -> (Option<i64>, Option<i64>) {
    let start = match bounds.start_bound() {
        Bound::Unbounded => None,
        Bound::Included(&index) => Some(index),
        Bound::Excluded(&-1) => Some(i64::MAX),
        Bound::Excluded(&index) => Some(index.saturating_add(1)),
    };
    let end = match bounds.end_bound() {
        Bound::Unbounded => None,
        Bound::Excluded(&index) => Some(index),
        Bound::Included(&-1) => None,
        Bound::Included(&index) => Some(index.saturating_add(1)),
    };
    (start, end)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 10, 3, 3)]
    #[case(Some(0), 10, 0, 0)]
    #[case(Some(4), 10, 0, 4)]
    #[case(Some(10), 10, 0, 10)]
    #[case(Some(1000), 10, 0, 10)]
    #[case(Some(-1), 10, 0, 9)]
    #[case(Some(-10), 10, 0, 0)]
    #[case(Some(-1000), 10, 0, 0)]
    fn test_normalize_slice_index(
        #[case] index: Option<i64>,
        #[case] length: usize,
        #[case] default: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(normalize_slice_index(index, length, default), expected);
    }

    #[rstest]
    #[case(Some(1), Some(3), 6, 1, 2)]
    #[case(Some(3), Some(3), 6, 3, 0)]
    #[case(Some(3), Some(2), 6, 3, 0)]
    #[case(Some(2), None, 6, 2, 4)]
    #[case(Some(2), Some(1000), 6, 2, 4)]
    #[case(Some(1000), None, 6, 6, 0)]
    #[case(Some(1000), Some(2000), 6, 6, 0)]
    #[case(Some(0), Some(-2), 6, 0, 4)]
    #[case(Some(-4), Some(-2), 6, 2, 2)]
    #[case(Some(-1000), None, 6, 0, 6)]
    #[case(Some(-1000), Some(-100), 6, 0, 0)]
    #[case(Some(3), Some(5), 0, 0, 0)]
    #[case(None, None, 6, 0, 6)]
    fn test_convert_slice_indexes(
        #[case] start: Option<i64>,
        #[case] end: Option<i64>,
        #[case] length: usize,
        #[case] expected_offset: usize,
        #[case] expected_length: usize,
    ) {
        let range = convert_slice_indexes(start, end, length);
        assert_eq!(range.offset, expected_offset);
        assert_eq!(range.length, expected_length);
    }

    #[rstest]
    fn test_bounds_full_range() {
        assert_eq!(bounds_to_indexes(&(..)), (None, None));
    }

    #[rstest]
    fn test_bounds_exclusive_end() {
        assert_eq!(bounds_to_indexes(&(1..3)), (Some(1), Some(3)));
    }

    #[rstest]
    fn test_bounds_inclusive_end() {
        assert_eq!(bounds_to_indexes(&(1..=3)), (Some(1), Some(4)));
    }

    #[rstest]
    fn test_bounds_inclusive_negative_one_is_unbounded() {
        assert_eq!(bounds_to_indexes(&(1..=-1)), (Some(1), None));
    }

    #[rstest]
    fn test_bounds_inclusive_negative_end() {
        assert_eq!(bounds_to_indexes(&(0..=-2)), (Some(0), Some(-1)));
    }

    #[rstest]
    fn test_bounds_negative_start() {
        assert_eq!(bounds_to_indexes(&(-4..-2)), (Some(-4), Some(-2)));
    }

    #[rstest]
    fn test_bounds_excluded_start() {
        use std::ops::Bound;
        assert_eq!(
            bounds_to_indexes(&(Bound::Excluded(1i64), Bound::Unbounded)),
            (Some(2), None),
        );
    }

    #[rstest]
    fn test_bounds_excluded_negative_one_start_is_past_the_end() {
        use std::ops::Bound;
        // "After the last element" must not wrap around to the start.
        let (start, end) = bounds_to_indexes(&(Bound::Excluded(-1i64), Bound::Unbounded));
        assert_eq!(end, None);
        assert_eq!(convert_slice_indexes(start, end, 5).length, 0);

        // One further back reaches exactly the last element.
        let (start, end) = bounds_to_indexes(&(Bound::Excluded(-2i64), Bound::Unbounded));
        let range = convert_slice_indexes(start, end, 5);
        assert_eq!(range.offset, 4);
        assert_eq!(range.length, 1);
    }

    #[rstest]
    fn test_as_range() {
        let range = SliceRange {
            offset: 2,
            length: 3,
        };
        assert_eq!(range.as_range(), 2..5);
    }
}
