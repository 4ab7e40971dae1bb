//! # second-largest
//!
//! Selection of the second-largest *distinct* value in a sequence of
//! integers, where repeated values count once.
//!
//! ## Overview
//!
//! The crate is built around a single linear scan that tracks two slots, the
//! running maximum and the running second-distinct-maximum. That running
//! state is exposed as a first-class value, [`DistinctTopTwo`](selection::DistinctTopTwo),
//! which forms a monoid: two partial scans can be merged as if their inputs
//! had been concatenated. This is what makes the parallel evaluation behind
//! the `rayon` feature give exactly the sequential answer.
//!
//! - **Sentinel contract**: [`find_second_largest_unique`](selection::find_second_largest_unique)
//!   returns `-1` when no second-largest distinct value exists
//! - **Option contract**: [`second_largest_distinct`](selection::second_largest_distinct)
//!   returns `None` instead, so a legitimate `-1` answer stays visible
//! - **Type Classes**: [`Semigroup`](typeclass::Semigroup) and [`Monoid`](typeclass::Monoid)
//! - **Parsing**: [`parse_sequence`](selection::parse_sequence) for textual input
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Semigroup` and `Monoid`
//! - `selection`: the finder, `DistinctTopTwo` and parsing
//! - `rayon`: parallel evaluation over slices
//! - `cli`: dependencies of the `second-largest` binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use second_largest::prelude::*;
//!
//! assert_eq!(find_second_largest_unique(Some(&[3, 5, 2, 5, 6, 6, 1])), 5);
//! assert_eq!(find_second_largest_unique(Some(&[7, 7, 7])), SENTINEL);
//! assert_eq!(find_second_largest_unique(None), SENTINEL);
//!
//! // The sentinel is ambiguous when -1 is a legitimate answer.
//! assert_eq!(second_largest_unique(&[0, -1]), -1);
//! assert_eq!(second_largest_distinct([0, -1]), Some(-1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use second_largest::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "selection")]
    pub use crate::selection::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "selection")]
pub mod selection;
