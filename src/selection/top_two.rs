//! Running state of a second-largest distinct scan.
//!
//! This module provides [`DistinctTopTwo`], the two-slot state that a single
//! pass over a sequence updates once per element.
//!
//! The lookups in [`selection`](super) scan `i32` only. The state is
//! parameterised over its slot type so the scan step and the monoid instance
//! are written once against `Ord`.
//!
//! # Invariants
//!
//! - If `second_largest` is set, `largest` is set.
//! - When both are set, `largest > second_largest` (so they are distinct).
//!
//! # State Transitions
//!
//! ```text
//!              observe(v)                observe(v), v != largest
//!     Empty ──────────────► One(largest) ─────────────────────────► Two(largest, second)
//!                             │    ▲                                  │    ▲
//!                             └────┘ observe(largest)                 └────┘ observe(v)
//! ```
//!
//! # Monoid
//!
//! `combine` replays the other state's slots into `self`. Because the slots of
//! a state are exactly the top two distinct values of the input that built it,
//! merging two states yields the top two distinct values of the concatenated
//! inputs. The operation is associative and commutative, and the empty state
//! is its identity.
//!
//! # Examples
//!
//! ```rust
//! use second_largest::selection::DistinctTopTwo;
//!
//! let state = DistinctTopTwo::new().observe(3).observe(6).observe(6).observe(5);
//! assert_eq!(state.largest(), Some(&6));
//! assert_eq!(state.second_largest(), Some(&5));
//! assert_eq!(state.distinct_count(), 2);
//! ```

use crate::typeclass::{Monoid, Semigroup};

/// The two largest distinct values observed so far.
///
/// All operations take `self` by value and return the next state, so a scan
/// is a plain fold:
///
/// ```rust
/// use second_largest::selection::DistinctTopTwo;
///
/// let state = [3, 5, 2, 5, 6, 6, 1]
///     .into_iter()
///     .fold(DistinctTopTwo::new(), DistinctTopTwo::observe);
/// assert_eq!(state.into_pair(), (Some(6), Some(5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DistinctTopTwo<T> {
    largest: Option<T>,
    second: Option<T>,
}

impl<T> DistinctTopTwo<T> {
    /// Creates a state that has observed nothing.
    #[inline]
    pub const fn new() -> Self {
        Self {
            largest: None,
            second: None,
        }
    }

    /// Returns the largest value observed, if any.
    #[inline]
    pub const fn largest(&self) -> Option<&T> {
        self.largest.as_ref()
    }

    /// Returns the largest observed value that is strictly smaller than
    /// [`largest`](Self::largest), if any.
    #[inline]
    pub const fn second_largest(&self) -> Option<&T> {
        self.second.as_ref()
    }

    /// Consumes the state and returns the second-largest distinct value.
    #[inline]
    pub fn into_second_largest(self) -> Option<T> {
        self.second
    }

    /// Consumes the state and returns `(largest, second_largest)`.
    #[inline]
    pub fn into_pair(self) -> (Option<T>, Option<T>) {
        (self.largest, self.second)
    }

    /// Returns how many distinct values the state holds (0, 1 or 2).
    ///
    /// The count saturates at 2: a scan over `[1, 2, 3]` and one over
    /// `[2, 3]` both report 2.
    #[inline]
    pub fn distinct_count(&self) -> usize {
        usize::from(self.largest.is_some()) + usize::from(self.second.is_some())
    }
}

impl<T: Ord> DistinctTopTwo<T> {
    /// Feeds one value into the scan and returns the next state.
    ///
    /// - A value above `largest` becomes the new `largest` and the old
    ///   `largest` moves down to `second_largest`.
    /// - A value equal to `largest` is a duplicate and is ignored.
    /// - Any other value replaces `second_largest` if it is greater.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use second_largest::selection::DistinctTopTwo;
    ///
    /// let state = DistinctTopTwo::new().observe(7).observe(7).observe(7);
    /// assert_eq!(state.into_pair(), (Some(7), None));
    ///
    /// let state = DistinctTopTwo::new().observe(8).observe(9).observe(9);
    /// assert_eq!(state.into_pair(), (Some(9), Some(8)));
    /// ```
    #[must_use]
    pub fn observe(self, value: T) -> Self {
        let Self { largest, second } = self;
        let next = match largest {
            None => Self {
                largest: Some(value),
                second,
            },
            Some(current) if value > current => Self {
                largest: Some(value),
                second: Some(current),
            },
            Some(current) if value == current => Self {
                largest: Some(current),
                second,
            },
            Some(current) => Self {
                largest: Some(current),
                second: match second {
                    Some(runner_up) if runner_up >= value => Some(runner_up),
                    _ => Some(value),
                },
            },
        };
        debug_assert!(next.holds_invariant(), "largest must exceed second_largest");
        next
    }

    fn holds_invariant(&self) -> bool {
        match (&self.largest, &self.second) {
            (_, None) => true,
            (Some(largest), Some(second)) => largest > second,
            (None, Some(_)) => false,
        }
    }
}

impl<T> Default for DistinctTopTwo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for DistinctTopTwo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        iterator.into_iter().fold(Self::new(), Self::observe)
    }
}

impl<T: Ord> Extend<T> for DistinctTopTwo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        let state = std::mem::take(self);
        *self = iterator.into_iter().fold(state, Self::observe);
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T: Ord> Semigroup for DistinctTopTwo<T> {
    fn combine(self, other: Self) -> Self {
        let (largest, second) = other.into_pair();
        largest.into_iter().chain(second).fold(self, Self::observe)
    }
}

impl<T: Ord> Monoid for DistinctTopTwo<T> {
    fn empty() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(DistinctTopTwo<i32>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(DistinctTopTwo<String>: Clone, Send, Sync);

// =============================================================================
// Tests
// =============================================================================
