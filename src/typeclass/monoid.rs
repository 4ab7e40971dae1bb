//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ```text
/// Self::empty().combine(a) == a
/// a.combine(Self::empty()) == a
/// ```
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::DistinctTopTwo;
/// use second_largest::typeclass::{Monoid, Semigroup};
///
/// let state: DistinctTopTwo<i32> = [9, 9, 8].into_iter().collect();
/// assert_eq!(DistinctTopTwo::empty().combine(state), state);
/// assert_eq!(state.combine(DistinctTopTwo::empty()), state);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use second_largest::selection::DistinctTopTwo;
    /// use second_largest::typeclass::Monoid;
    ///
    /// let chunks = vec![
    ///     [3, 5, 2].into_iter().collect::<DistinctTopTwo<i32>>(),
    ///     [5, 6, 6, 1].into_iter().collect(),
    /// ];
    /// assert_eq!(DistinctTopTwo::combine_all(chunks).second_largest(), Some(&5));
    ///
    /// let empty: Vec<DistinctTopTwo<i32>> = vec![];
    /// assert_eq!(DistinctTopTwo::combine_all(empty), DistinctTopTwo::empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}
