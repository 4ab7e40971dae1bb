//! Second-largest distinct value selection.
//!
//! This module provides:
//!
//! - [`DistinctTopTwo`]: the running (largest, second-largest) state of a scan
//! - [`find_second_largest_unique`] / [`second_largest_unique`]: the `i32`
//!   contract returning [`SENTINEL`] when no answer exists
//! - [`second_largest_distinct`]: the same selection returning `Option<i32>`
//! - [`DistinctTopTwoExt`]: iterator extension methods
//! - [`parse_sequence`]: textual integer sequences
//! - `par_second_largest_distinct` / `par_second_largest_unique`: parallel
//!   evaluation (requires the `rayon` feature)
//!
//! # Duplicates
//!
//! Repeated values count once. `[9, 9, 8]` has the distinct values `{8, 9}`
//! and its answer is `8`; `[7, 7, 7]` has only one distinct value and has no
//! answer.
//!
//! # Examples
//!
//! ```rust
//! use second_largest::selection::{
//!     DistinctTopTwoExt, SENTINEL, find_second_largest_unique, second_largest_distinct,
//! };
//!
//! assert_eq!(find_second_largest_unique(Some(&[9, 9, 8])), 8);
//! assert_eq!(find_second_largest_unique(Some(&[1])), SENTINEL);
//!
//! assert_eq!(second_largest_distinct([0, -1, 0]), Some(-1));
//! assert_eq!([4, 4].into_iter().second_largest_distinct(), None);
//! ```

mod finder;
#[cfg(feature = "rayon")]
mod parallel;
mod parse;
mod top_two;

pub use finder::DistinctTopTwoExt;
pub use finder::SENTINEL;
pub use finder::find_second_largest_unique;
pub use finder::second_largest_distinct;
pub use finder::second_largest_unique;
pub use parse::SequenceParseError;
pub use parse::parse_sequence;
pub use top_two::DistinctTopTwo;

#[cfg(feature = "rayon")]
pub use parallel::par_second_largest_distinct;
#[cfg(feature = "rayon")]
pub use parallel::par_second_largest_unique;
