//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use second_largest::selection::DistinctTopTwo;
/// use second_largest::typeclass::Semigroup;
///
/// let a = DistinctTopTwo::new().observe(4);
/// let b = DistinctTopTwo::new().observe(9);
/// assert_eq!(a.combine(b).into_pair(), (Some(9), Some(4)));
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use second_largest::selection::DistinctTopTwo;
    /// use second_largest::typeclass::Semigroup;
    ///
    /// let parts = vec![
    ///     DistinctTopTwo::new().observe(1),
    ///     DistinctTopTwo::new().observe(3),
    ///     DistinctTopTwo::new().observe(2),
    /// ];
    /// let merged = DistinctTopTwo::reduce_all(parts).map(|state| state.into_pair());
    /// assert_eq!(merged, Some((Some(3), Some(2))));
    ///
    /// let none: Vec<DistinctTopTwo<i32>> = vec![];
    /// assert_eq!(DistinctTopTwo::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
