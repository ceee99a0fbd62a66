//! The iterate sequence of a successor function.
//!
//! This module provides [`Unfold`], an iterator over `z, f(z), f(f(z)), ...`,
//! and [`Orbit`], which owns `f` and `z` so the sequence can be restarted.
//!
//! # Laziness
//!
//! Each element is computed only when requested. Producing `n` elements calls
//! the successor function exactly `n - 1` times: the seed is yielded as-is and
//! every later element is computed from the one yielded before it.
//!
//! # Examples
//!
//! ```rust
//! use cyclefind::sequence::unfold;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let mut sequence = unfold(
//!     |x: &u64| {
//!         calls.set(calls.get() + 1);
//!         x + 3
//!     },
//!     0,
//! );
//!
//! assert_eq!(sequence.next(), Some(0));
//! assert_eq!(calls.get(), 0); // the seed needs no call
//!
//! assert_eq!(sequence.next(), Some(3));
//! assert_eq!(calls.get(), 1);
//! ```

use std::fmt;
use std::iter::FusedIterator;

// =============================================================================
// Unfold Definition
// =============================================================================

/// An unbounded iterator over the iterates of a successor function.
///
/// Created by [`unfold`]. The iterator never returns `None`; consumers bound
/// it with adapters such as `take`, `take_while` or the helpers in
/// [`list`](super::list).
///
/// `Unfold` is [`Clone`] whenever the element and function types are, and a
/// clone continues from the same position independently of the original.
///
/// # Examples
///
/// ```rust
/// use cyclefind::sequence::unfold;
///
/// let sequence = unfold(|x: &i32| (x + 1) % 5, 3);
/// let first: Vec<i32> = sequence.take(7).collect();
/// assert_eq!(first, vec![3, 4, 0, 1, 2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct Unfold<T, F> {
    step: F,
    current: T,
    started: bool,
}

/// Creates the sequence `seed, step(&seed), step(&step(&seed)), ...`.
///
/// The successor function must be deterministic for the sequence to be
/// reproducible; it is never called for the seed itself.
///
/// # Arguments
///
/// * `step` - The successor function
/// * `seed` - The first element of the sequence
///
/// # Examples
///
/// ```rust
/// use cyclefind::sequence::unfold;
///
/// let powers: Vec<u32> = unfold(|x: &u32| x * 10, 1).take(4).collect();
/// assert_eq!(powers, vec![1, 10, 100, 1000]);
/// ```
#[inline]
pub const fn unfold<T, F>(step: F, seed: T) -> Unfold<T, F>
where
    F: Fn(&T) -> T,
{
    Unfold {
        step,
        current: seed,
        started: false,
    }
}

impl<T, F> Unfold<T, F> {
    /// Returns the element most recently yielded, or the seed if nothing has
    /// been yielded yet.
    #[inline]
    pub const fn current(&self) -> &T {
        &self.current
    }
}

impl<T: Clone, F: Fn(&T) -> T> Iterator for Unfold<T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.started {
            self.current = (self.step)(&self.current);
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Clone, F: Fn(&T) -> T> FusedIterator for Unfold<T, F> {}

impl<T: fmt::Debug, F> fmt::Debug for Unfold<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unfold")
            .field("current", &self.current)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Orbit Definition
// =============================================================================

/// A restartable iterate sequence.
///
/// `Orbit` owns a successor function and a seed. Every call to
/// [`iter`](Orbit::iter) starts a fresh [`Unfold`] from the seed, borrowing
/// the function, so the function itself need not be `Clone`.
///
/// # Examples
///
/// ```rust
/// use cyclefind::sequence::Orbit;
///
/// let orbit = Orbit::new(|x: &u8| x.wrapping_mul(3), 1);
///
/// let first: Vec<u8> = orbit.iter().take(3).collect();
/// let second: Vec<u8> = orbit.iter().take(3).collect();
/// assert_eq!(first, vec![1, 3, 9]);
/// assert_eq!(first, second);
/// ```
#[derive(Clone)]
pub struct Orbit<T, F> {
    step: F,
    seed: T,
}

impl<T, F> Orbit<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    /// Creates a new orbit from a successor function and a seed.
    #[inline]
    pub const fn new(step: F, seed: T) -> Self {
        Self { step, seed }
    }

    /// Returns the seed the sequence starts from.
    #[inline]
    pub const fn seed(&self) -> &T {
        &self.seed
    }

    /// Returns the successor function.
    #[inline]
    pub const fn step(&self) -> &F {
        &self.step
    }

    /// Starts the sequence over from the seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::sequence::Orbit;
    ///
    /// let orbit = Orbit::new(|x: &i64| x - 2, 10);
    /// assert_eq!(orbit.iter().nth(3), Some(4));
    /// assert_eq!(orbit.iter().next(), Some(10));
    /// ```
    #[inline]
    pub fn iter(&self) -> Unfold<T, &F> {
        unfold(&self.step, self.seed.clone())
    }

    /// Consumes the orbit, returning the successor function and the seed.
    #[inline]
    pub fn into_parts(self) -> (F, T) {
        (self.step, self.seed)
    }
}

impl<'a, T, F> IntoIterator for &'a Orbit<T, F>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    type Item = T;
    type IntoIter = Unfold<T, &'a F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Orbit<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Orbit")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
