//! Rho decomposition of an iterate sequence.
//!
//! Drawn on paper, an eventually periodic sequence looks like the letter ρ:
//! a tail of `μ` elements leading into a loop of `λ` elements. [`Rho`] holds
//! both parts, with the loop rotated so that it starts at the element the
//! tail leads into. With that alignment every position of the infinite
//! sequence can be answered without calling the successor function again.
//!
//! # Examples
//!
//! ```rust
//! use cyclefind::cycle::decompose;
//!
//! // 879, 470, 540, 200, | 960, 240, 320, 80, 800, 720, | 960, ...
//! let rho = decompose(|x: &u32| x % 104 * 10, 879);
//! assert_eq!(rho.tail_length(), 4);
//! assert_eq!(rho.cycle_length(), 6);
//! assert_eq!(*rho.nth(1_000_000), 960);
//! ```

use std::fmt;
use std::hash::Hash;

use super::detect::cycle_members;
use super::value::Cycle;
use super::visited::{HashedVisited, VisitedSet};
use crate::sequence::{split_before, unfold};

/// The tail and loop of an eventually periodic sequence.
///
/// The loop held by a `Rho` always starts at its entry point: the first
/// element of the sequence that lies on the loop. This differs from
/// [`find`](super::find), whose starting element is left as detected.
///
/// Two `Rho` values are equal only when their tails match and their loops
/// match element for element from the entry point, so equal values agree on
/// every [`nth`](Rho::nth).
#[derive(Clone)]
pub struct Rho<T> {
    tail: Vec<T>,
    cycle: Cycle<T>,
}

/// Splits the sequence `seed, step(&seed), ...` into its tail and loop,
/// using hashed membership sets.
///
/// The call does not return if the sequence never cycles.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::decompose;
///
/// let rho = decompose(|x: &u32| x * x % 7, 3);
/// assert_eq!(rho.tail(), &[3]);
/// assert_eq!(rho.cycle().as_slice(), &[2, 4]);
/// ```
pub fn decompose<T, F>(step: F, seed: T) -> Rho<T>
where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> T,
{
    decompose_with::<HashedVisited<T>, T, F>(step, seed)
}

/// Splits the sequence into its tail and loop, using the membership set `S`.
pub fn decompose_with<S, T, F>(step: F, seed: T) -> Rho<T>
where
    S: VisitedSet<T> + Default,
    T: Clone + Eq,
    F: Fn(&T) -> T,
{
    let members = cycle_members::<S, T, F>(&step, seed.clone());
    let (tail, entry) = split_before(unfold(&step, seed), |element| members.contains(element));

    let mut cycle = Vec::with_capacity(members.len());
    if let Some(entry) = entry {
        cycle.push(entry);
        // the walk from the entry point visits each loop element exactly once
        for element in unfold(&step, cycle[0].clone()).skip(1) {
            if element == cycle[0] {
                break;
            }
            cycle.push(element);
        }
    }

    tracing::debug!(
        tail_length = tail.len(),
        cycle_length = cycle.len(),
        "sequence decomposed"
    );
    Rho {
        tail,
        cycle: Cycle::from_detected(cycle),
    }
}

impl<T> Rho<T> {
    /// Returns the elements preceding the loop.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Returns the loop, starting at its entry point.
    #[inline]
    pub const fn cycle(&self) -> &Cycle<T> {
        &self.cycle
    }

    /// Returns `μ`, the number of elements before the loop.
    #[inline]
    pub const fn tail_length(&self) -> usize {
        self.tail.len()
    }

    /// Returns `λ`, the number of elements in the loop.
    #[inline]
    pub const fn cycle_length(&self) -> usize {
        self.cycle.len()
    }

    /// Returns the element at position `index` of the infinite sequence.
    ///
    /// Position `0` is the seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::decompose;
    ///
    /// let rho = decompose(|x: &u32| (x + 1) % 5, 0);
    /// assert_eq!(*rho.nth(0), 0);
    /// assert_eq!(*rho.nth(12), 2);
    /// ```
    pub fn nth(&self, index: usize) -> &T {
        if index < self.tail.len() {
            &self.tail[index]
        } else {
            let offset = (index - self.tail.len()) % self.cycle.len();
            &self.cycle.as_slice()[offset]
        }
    }

    /// Returns an iterator that replays the whole infinite sequence: the tail
    /// once, then the loop forever.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::decompose;
    ///
    /// let rho = decompose(|x: &u32| x % 3, 10);
    /// let replayed: Vec<u32> = rho.iter().take(4).copied().collect();
    /// assert_eq!(replayed, vec![10, 1, 1, 1]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &T> + Clone + '_ {
        self.tail.iter().chain(self.cycle.repeat())
    }

    /// Consumes the decomposition, returning the tail and the loop.
    #[inline]
    pub fn into_parts(self) -> (Vec<T>, Cycle<T>) {
        (self.tail, self.cycle)
    }
}

impl<T: PartialEq> PartialEq for Rho<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tail == other.tail && self.cycle.as_slice() == other.cycle.as_slice()
    }
}

impl<T: Eq> Eq for Rho<T> {}

impl<T: fmt::Debug> fmt::Debug for Rho<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Rho")
            .field("tail", &self.tail)
            .field("cycle", &self.cycle)
            .finish()
    }
}
