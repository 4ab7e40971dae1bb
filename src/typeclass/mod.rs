//! Type class traits for combining partial results.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! The selection state [`DistinctTopTwo`](crate::selection::DistinctTopTwo)
//! is a monoid, so scans over separate chunks of a sequence can be merged in
//! any grouping and still agree with a single scan over the whole.
//!
//! # Examples
//!
//! ```rust
//! use second_largest::typeclass::{Monoid, Semigroup};
//! use second_largest::selection::DistinctTopTwo;
//!
//! let left: DistinctTopTwo<i32> = [3, 5, 2].into_iter().collect();
//! let right: DistinctTopTwo<i32> = [5, 6, 6, 1].into_iter().collect();
//!
//! assert_eq!(left.combine(right).second_largest(), Some(&5));
//! assert_eq!(DistinctTopTwo::<i32>::empty().combine(left), left);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
