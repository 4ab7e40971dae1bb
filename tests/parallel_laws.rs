//! Property-based tests for parallel evaluation.
//!
//! Parallel results must equal sequential results for every input, whatever
//! way rayon splits the slice.
//!
//! Requires the `rayon` feature to be enabled.

#![cfg(feature = "rayon")]

use proptest::prelude::*;
use rstest::rstest;
use second_largest::prelude::*;

proptest! {
    /// Parallel Option contract equals the sequential one
    #[test]
    fn prop_parallel_matches_sequential(values in prop::collection::vec(-50..50_i32, 0..2_000)) {
        prop_assert_eq!(
            par_second_largest_distinct(&values),
            second_largest_distinct(values.iter().copied())
        );
    }

    /// Parallel sentinel contract equals the sequential one
    #[test]
    fn prop_parallel_sentinel_matches_sequential(values in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(
            par_second_largest_unique(Some(&values)),
            find_second_largest_unique(Some(&values))
        );
    }
}

#[rstest]
fn test_parallel_absent_input() {
    assert_eq!(par_second_largest_unique(None), SENTINEL);
}

#[rstest]
fn test_parallel_on_wide_range() {
    let values: Vec<i32> = (-500_000..500_000).collect();
    assert_eq!(par_second_largest_distinct(&values), Some(499_998));
}

#[rstest]
fn test_parallel_is_repeatable() {
    let values: Vec<i32> = (0..200_000).map(|n| n % 40_000).collect();
    let first = par_second_largest_distinct(&values);
    let second = par_second_largest_distinct(&values);
    assert_eq!(first, Some(39_998));
    assert_eq!(first, second);
}
