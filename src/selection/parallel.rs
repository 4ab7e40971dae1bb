//! Parallel evaluation with rayon.
//!
//! Each rayon split folds its elements into its own [`DistinctTopTwo`], and
//! the partial states are merged with [`Semigroup::combine`]. Since `combine`
//! is associative and commutative, the result does not depend on how rayon
//! splits the slice and always equals the sequential answer.
//!
//! Parallel evaluation only pays off on large slices; the per-element work is
//! a couple of comparisons.

use rayon::prelude::*;

use super::finder::SENTINEL;
use super::top_two::DistinctTopTwo;
use crate::typeclass::{Monoid, Semigroup};

/// Parallel counterpart of
/// [`second_largest_distinct`](super::second_largest_distinct) for slices.
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::par_second_largest_distinct;
///
/// let values: Vec<i32> = (0..10_000).map(|n| n % 977).collect();
/// assert_eq!(par_second_largest_distinct(&values), Some(975));
/// ```
pub fn par_second_largest_distinct(values: &[i32]) -> Option<i32> {
    values
        .par_iter()
        .copied()
        .fold(DistinctTopTwo::empty, DistinctTopTwo::observe)
        .reduce(DistinctTopTwo::empty, DistinctTopTwo::combine)
        .into_second_largest()
}

/// Parallel counterpart of
/// [`find_second_largest_unique`](super::find_second_largest_unique).
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::{SENTINEL, par_second_largest_unique};
///
/// assert_eq!(par_second_largest_unique(Some(&[3, 5, 2, 5, 6, 6, 1])), 5);
/// assert_eq!(par_second_largest_unique(Some(&[7, 7, 7])), SENTINEL);
/// assert_eq!(par_second_largest_unique(None), SENTINEL);
/// ```
pub fn par_second_largest_unique(sequence: Option<&[i32]>) -> i32 {
    match sequence {
        Some(values) if values.len() >= 2 => {
            par_second_largest_distinct(values).unwrap_or(SENTINEL)
        }
        _ => SENTINEL,
    }
}
