//! Tests for the difference/intersection engine under every comparator
//! activation combination.

use seqmap::{Comparator, Key, NoComparatorsError, OrderedMap};
use rstest::rstest;
use std::cmp::Ordering;

fn case_insensitive_key(left: &Key, right: &Key) -> Ordering {
    match (left, right) {
        (Key::Text(left), Key::Text(right)) => {
            left.to_lowercase().cmp(&right.to_lowercase())
        }
        _ => left.cmp(right),
    }
}

fn case_insensitive_value(left: &&str, right: &&str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

// =============================================================================
// difference
// =============================================================================

#[rstest]
fn test_difference_value_only() {
    let left = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 3)]);
    let right = OrderedMap::from_pairs([(0, 2)]);
    let result = left
        .difference(&right, Comparator::Ignored, Comparator::Default)
        .unwrap();
    assert_eq!(result, OrderedMap::from_pairs([(0, 1), (2, 3)]));
}

#[rstest]
fn test_difference_value_only_subset_leaves_nothing() {
    let left = OrderedMap::from_pairs([(0, 1), (1, 2)]);
    let right = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 3)]);
    let result = left
        .difference(&right, Comparator::Ignored, Comparator::Default)
        .unwrap();
    assert!(result.is_empty());
}

#[rstest]
fn test_difference_key_only() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    let right = OrderedMap::from_pairs([("b", 3), ("c", 4)]);
    let result = left
        .difference(&right, Comparator::Default, Comparator::Ignored)
        .unwrap();
    assert_eq!(result, OrderedMap::from_pairs([("a", 1)]));
}

#[rstest]
fn test_difference_both_dimensions() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    let right = OrderedMap::from_pairs([("b", 4), ("c", 3)]);
    let result = left
        .difference(&right, Comparator::Default, Comparator::Default)
        .unwrap();
    // ("c", 3) matches on both dimensions; ("b", 2) matches on key only
    // and so survives.
    assert_eq!(result, OrderedMap::from_pairs([("a", 1), ("b", 2)]));
}

#[rstest]
fn test_difference_custom_key_comparator() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    let right = OrderedMap::from_pairs([("B", 4), ("C", 5), ("D", 6)]);
    let result = left
        .difference(
            &right,
            Comparator::Custom(&case_insensitive_key),
            Comparator::Ignored,
        )
        .unwrap();
    assert_eq!(result, OrderedMap::from_pairs([("a", 1)]));
}

#[rstest]
fn test_difference_custom_both_comparators() {
    let left = OrderedMap::from_pairs([
        ("a", "alpha"),
        ("b", "beta"),
        ("g", "gamma"),
        ("d", "delta"),
    ]);
    let right = OrderedMap::from_pairs([("B", "beta"), ("g", "Gamma"), ("d", "foo")]);
    let result = left
        .difference(
            &right,
            Comparator::Custom(&case_insensitive_key),
            Comparator::Custom(&case_insensitive_value),
        )
        .unwrap();
    assert_eq!(result, OrderedMap::from_pairs([("a", "alpha"), ("d", "delta")]));
}

#[rstest]
fn test_difference_default_value_comparison_is_strict() {
    // Values of a different spelling do not match: no loose equality.
    let left = OrderedMap::from_pairs([(0, "2"), (1, "3")]);
    let right = OrderedMap::from_pairs([(0, "2")]);
    let result = left
        .difference(&right, Comparator::Ignored, Comparator::Default)
        .unwrap();
    assert_eq!(result, OrderedMap::from_pairs([(1, "3")]));
}

#[rstest]
fn test_difference_no_comparators_fails() {
    let left = OrderedMap::from_pairs([(0, 1)]);
    let right = OrderedMap::from_pairs([(0, 1)]);
    assert_eq!(
        left.difference(&right, Comparator::Ignored, Comparator::Ignored),
        Err(NoComparatorsError),
    );
}

#[rstest]
fn test_difference_against_empty_is_identity() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    let empty = OrderedMap::new();
    let result = left
        .difference(&empty, Comparator::Ignored, Comparator::Default)
        .unwrap();
    assert_eq!(result, left);
}

// =============================================================================
// intersection
// =============================================================================

#[rstest]
fn test_intersection_both_dimensions() {
    let left = OrderedMap::from_pairs([("a", "alpha"), ("b", "beta"), ("g", "gamma")]);
    let right = OrderedMap::from_pairs([("b", "beta"), ("g", "gamma"), ("d", "delta")]);
    let result = left.intersection(&right, Comparator::Default, Comparator::Default);
    assert_eq!(
        result,
        OrderedMap::from_pairs([("b", "beta"), ("g", "gamma")]),
    );
}

#[rstest]
fn test_intersection_custom_key_strict_value() {
    let left = OrderedMap::from_pairs([("a", "alpha"), ("b", "BETA"), ("g", "gamma")]);
    let right = OrderedMap::from_pairs([("b", "beta"), ("G", "gamma"), ("d", "delta")]);
    let result = left.intersection(
        &right,
        Comparator::Custom(&case_insensitive_key),
        Comparator::Default,
    );
    // "b" matches by key but "BETA" != "beta" strictly.
    assert_eq!(result, OrderedMap::from_pairs([("g", "gamma")]));
}

#[rstest]
fn test_intersection_custom_both() {
    let left = OrderedMap::from_pairs([("a", "alpha"), ("b", "BETA"), ("g", "gamma")]);
    let right = OrderedMap::from_pairs([("b", "beta"), ("G", "gamma"), ("d", "delta")]);
    let result = left.intersection(
        &right,
        Comparator::Custom(&case_insensitive_key),
        Comparator::Custom(&case_insensitive_value),
    );
    assert_eq!(result, OrderedMap::from_pairs([("b", "BETA"), ("g", "gamma")]));
}

#[rstest]
fn test_intersection_value_only() {
    let left = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 3)]);
    let right = OrderedMap::from_pairs([(0, 2), (1, 3), (2, 4)]);
    let result = left.intersection(&right, Comparator::Ignored, Comparator::Default);
    assert_eq!(result, OrderedMap::from_pairs([(1, 2), (2, 3)]));
}

#[rstest]
fn test_intersection_both_ignored_documented_default() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    let non_empty = OrderedMap::from_pairs([("x", 0)]);
    let empty: OrderedMap<i32> = OrderedMap::new();
    assert_eq!(
        left.intersection(&non_empty, Comparator::Ignored, Comparator::Ignored),
        left,
    );
    assert!(
        left.intersection(&empty, Comparator::Ignored, Comparator::Ignored)
            .is_empty(),
    );
}

// =============================================================================
// dedicated families
// =============================================================================

#[rstest]
fn test_key_difference_and_intersection() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2)]);
    let right = OrderedMap::from_pairs([("b", 3), ("c", 4)]);
    assert_eq!(
        left.key_difference(&right, Comparator::Ignored),
        OrderedMap::from_pairs([("a", 1)]),
    );
    assert_eq!(
        left.key_intersection(&right, Comparator::Ignored),
        OrderedMap::from_pairs([("b", 2)]),
    );
}

#[rstest]
fn test_key_intersection_custom_keeps_self_spelling() {
    let left = OrderedMap::from_pairs([("a", 1), ("B", 2)]);
    let right = OrderedMap::from_pairs([("b", 3), ("c", 4)]);
    let result = left.key_intersection(&right, Comparator::Custom(&case_insensitive_key));
    assert_eq!(result, OrderedMap::from_pairs([("B", 2)]));
}

#[rstest]
fn test_value_difference_and_intersection() {
    let left = OrderedMap::from_pairs([(0, 1), (1, 2), (2, 3)]);
    let right = OrderedMap::from_pairs([(0, 2), (1, 3), (2, 4)]);
    assert_eq!(
        left.value_difference(&right, Comparator::Ignored),
        OrderedMap::from_pairs([(0, 1)]),
    );
    assert_eq!(
        left.value_intersection(&right, Comparator::Ignored),
        OrderedMap::from_pairs([(1, 2), (2, 3)]),
    );
}

#[rstest]
fn test_value_intersection_custom() {
    let left = OrderedMap::from_pairs([(0, "a"), (1, "B"), (2, "c")]);
    let right = OrderedMap::from_pairs([(0, "b"), (1, "C"), (2, "d")]);
    let result = left.value_intersection(&right, Comparator::Custom(&case_insensitive_value));
    assert_eq!(result, OrderedMap::from_pairs([(1, "B"), (2, "c")]));
}

#[rstest]
fn test_pair_difference_matches_general_form() {
    let left = OrderedMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    let right = OrderedMap::from_pairs([("b", 4), ("c", 3)]);
    let general = left
        .difference(&right, Comparator::Default, Comparator::Default)
        .unwrap();
    let dedicated = left.pair_difference(&right, Comparator::Ignored, Comparator::Ignored);
    assert_eq!(general, dedicated);
}

#[rstest]
fn test_pair_intersection_custom_key() {
    let left = OrderedMap::from_pairs([("a", "alpha"), ("b", "BETA"), ("g", "gamma")]);
    let right = OrderedMap::from_pairs([("B", "beta"), ("g", "gamma"), ("d", "delta")]);
    let result = left.pair_intersection(
        &right,
        Comparator::Custom(&case_insensitive_key),
        Comparator::Ignored,
    );
    // "b"/"B" match by key but "BETA" != "beta" under the default strict
    // value comparison the Ignored argument degrades to.
    assert_eq!(result, OrderedMap::from_pairs([("g", "gamma")]));
}

#[rstest]
fn test_results_preserve_self_order() {
    let left = OrderedMap::from_pairs([("z", 1), ("m", 2), ("a", 3)]);
    let right = OrderedMap::from_pairs([("a", 3), ("z", 1)]);
    let result = left.intersection(&right, Comparator::Default, Comparator::Default);
    let keys: Vec<&Key> = result.keys().collect();
    assert_eq!(keys, vec![&Key::from("z"), &Key::from("a")]);
}
