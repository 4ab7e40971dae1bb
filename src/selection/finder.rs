//! Second-largest distinct value lookups.
//!
//! Two contracts are offered over the same single-pass scan:
//!
//! | Function                        | Input               | "No answer" result |
//! |---------------------------------|---------------------|--------------------|
//! | [`find_second_largest_unique`]  | `Option<&[i32]>`    | [`SENTINEL`]       |
//! | [`second_largest_unique`]       | `&[i32]`            | [`SENTINEL`]       |
//! | [`second_largest_distinct`]     | `IntoIterator<i32>` | `None`             |
//!
//! The sentinel contract cannot tell "no second-largest value" apart from a
//! second-largest value that happens to be `-1`. Callers whose data may
//! contain `-1` should use [`second_largest_distinct`].
//!
//! All functions are O(n) time and O(1) extra space, never panic, and never
//! modify their input.

use super::top_two::DistinctTopTwo;

/// Result of the sentinel contract when no second-largest distinct value
/// exists.
pub const SENTINEL: i32 = -1;

/// Returns the second-largest distinct value of `sequence`, or [`SENTINEL`].
///
/// `None`, sequences with fewer than two elements, and sequences whose
/// elements are all equal have no second-largest distinct value.
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::{SENTINEL, find_second_largest_unique};
///
/// assert_eq!(find_second_largest_unique(Some(&[3, 5, 2, 5, 6, 6, 1])), 5);
/// assert_eq!(find_second_largest_unique(Some(&[7, 7, 7])), SENTINEL);
/// assert_eq!(find_second_largest_unique(Some(&[])), SENTINEL);
/// assert_eq!(find_second_largest_unique(None), SENTINEL);
/// ```
pub fn find_second_largest_unique(sequence: Option<&[i32]>) -> i32 {
    match sequence {
        Some(values) if values.len() >= 2 => second_largest_unique(values),
        _ => SENTINEL,
    }
}

/// Returns the second-largest distinct value of `values`, or [`SENTINEL`].
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::second_largest_unique;
///
/// assert_eq!(second_largest_unique(&[9, 9, 8]), 8);
/// assert_eq!(second_largest_unique(&[-1, -2, -3]), -2);
/// assert_eq!(second_largest_unique(&[1]), -1);
/// ```
pub fn second_largest_unique(values: &[i32]) -> i32 {
    second_largest_distinct(values.iter().copied()).unwrap_or(SENTINEL)
}

/// Returns the second-largest distinct value of `values`, or `None` if there
/// are fewer than two distinct values.
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::second_largest_distinct;
///
/// assert_eq!(second_largest_distinct([0, -1, 0]), Some(-1));
/// assert_eq!(second_largest_distinct(vec![7, 7]), None);
/// assert_eq!(second_largest_distinct(std::iter::empty()), None);
/// ```
pub fn second_largest_distinct<I>(values: I) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    values
        .into_iter()
        .collect::<DistinctTopTwo<i32>>()
        .into_second_largest()
}

/// Extension methods for running the scan directly on an iterator of `i32`.
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::DistinctTopTwoExt;
///
/// let values = [5, 2, 5, 4];
/// assert_eq!(values.iter().copied().second_largest_distinct(), Some(4));
///
/// let state = [3, 1, 3].into_iter().distinct_top_two();
/// assert_eq!(state.into_pair(), (Some(3), Some(1)));
/// ```
pub trait DistinctTopTwoExt: Iterator<Item = i32> + Sized {
    /// Consumes the iterator and returns the final scan state.
    fn distinct_top_two(self) -> DistinctTopTwo<i32> {
        self.collect()
    }

    /// Consumes the iterator and returns its second-largest distinct value.
    fn second_largest_distinct(self) -> Option<i32> {
        self.distinct_top_two().into_second_largest()
    }
}

impl<I: Iterator<Item = i32>> DistinctTopTwoExt for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[3, 5, 2, 5, 6, 6, 1], 5)]
    #[case(&[7, 7, 7], SENTINEL)]
    #[case(&[], SENTINEL)]
    #[case(&[1], SENTINEL)]
    #[case(&[9, 9, 8], 8)]
    #[case(&[-1, -2, -3], -2)]
    fn test_find_second_largest_unique(#[case] input: &[i32], #[case] expected: i32) {
        assert_eq!(find_second_largest_unique(Some(input)), expected);
    }

    #[rstest]
    fn test_absent_sequence_yields_sentinel() {
        assert_eq!(find_second_largest_unique(None), SENTINEL);
    }

    #[rstest]
    fn test_input_is_not_modified() {
        let values = vec![4, 1, 4, 3];
        let _ = second_largest_unique(&values);
        assert_eq!(values, vec![4, 1, 4, 3]);
    }

    #[rstest]
    fn test_sentinel_is_ambiguous_with_legitimate_minus_one() {
        assert_eq!(second_largest_unique(&[0, -1]), SENTINEL);
        assert_eq!(second_largest_distinct([0, -1]), Some(-1));
        assert_eq!(second_largest_distinct([0, 0]), None);
    }

    #[rstest]
    fn test_extension_trait_on_copied_items() {
        let values = [2, 8, 8, 5];
        assert_eq!(values.iter().copied().second_largest_distinct(), Some(5));
    }
}
