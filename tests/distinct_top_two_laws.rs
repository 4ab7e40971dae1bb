//! Property-based tests for the `DistinctTopTwo` monoid.
//!
//! - **Associativity**: `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
//! - **Identity**: `empty().combine(a) == a == a.combine(empty())`
//! - **Commutativity**: `a.combine(b) == b.combine(a)`
//! - **Homomorphism**: collecting `xs ++ ys` equals combining the collections
//!   of `xs` and `ys`

#![cfg(feature = "selection")]

use proptest::prelude::*;
use second_largest::selection::DistinctTopTwo;
use second_largest::typeclass::{Monoid, Semigroup};

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-6..6_i32, 0..12)
}

fn state_strategy() -> impl Strategy<Value = DistinctTopTwo<i32>> {
    small_values().prop_map(|values| values.into_iter().collect())
}

proptest! {
    /// Associativity Law
    #[test]
    fn prop_associativity(a in state_strategy(), b in state_strategy(), c in state_strategy()) {
        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    /// Left Identity Law
    #[test]
    fn prop_left_identity(a in state_strategy()) {
        prop_assert_eq!(DistinctTopTwo::empty().combine(a), a);
    }

    /// Right Identity Law
    #[test]
    fn prop_right_identity(a in state_strategy()) {
        prop_assert_eq!(a.combine(DistinctTopTwo::empty()), a);
    }

    /// Combination order does not matter
    #[test]
    fn prop_commutativity(a in state_strategy(), b in state_strategy()) {
        prop_assert_eq!(a.combine(b), b.combine(a));
    }

    /// Scanning a concatenation equals combining the scans of its parts
    #[test]
    fn prop_concatenation_homomorphism(left in small_values(), right in small_values()) {
        let whole: DistinctTopTwo<i32> = left.iter().chain(&right).copied().collect();
        let parts = left
            .into_iter()
            .collect::<DistinctTopTwo<i32>>()
            .combine(right.into_iter().collect());
        prop_assert_eq!(whole, parts);
    }

    /// combine_all over arbitrary chunking equals a single scan
    #[test]
    fn prop_combine_all_over_chunks(values in small_values(), chunk_size in 1..5_usize) {
        let whole: DistinctTopTwo<i32> = values.iter().copied().collect();
        let chunked = DistinctTopTwo::combine_all(
            values
                .chunks(chunk_size)
                .map(|chunk| chunk.iter().copied().collect::<DistinctTopTwo<i32>>()),
        );
        prop_assert_eq!(whole, chunked);
    }

    /// Slots stay distinct and ordered
    #[test]
    fn prop_slots_are_strictly_ordered(a in state_strategy()) {
        if let (Some(largest), Some(second)) = a.into_pair() {
            prop_assert!(largest > second);
        }
        prop_assert!(a.distinct_count() <= 2);
    }
}
