//! The loop of an eventually periodic sequence.
//!
//! This module provides [`Cycle`], an immutable, non-empty list of the
//! elements making up one traversal of a loop.
//!
//! # Rotation-Invariant Equality
//!
//! A loop has no natural first element, so two cycles compare equal when one
//! is a rotation of the other:
//!
//! ```rust
//! use cyclefind::cycle::Cycle;
//!
//! let cycle = Cycle::try_from(vec![1, 2, 3]).unwrap();
//! let rotated = Cycle::try_from(vec![3, 1, 2]).unwrap();
//! let reversed = Cycle::try_from(vec![3, 2, 1]).unwrap();
//!
//! assert_eq!(cycle, rotated);
//! assert_ne!(cycle, reversed); // order matters, only the offset is free
//! ```
//!
//! # Listing
//!
//! - [`Cycle::iter`] walks the loop once
//! - [`Cycle::repeat`] walks it forever

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::EmptyCycleError;
use super::repeat::Repeat;

// =============================================================================
// Cycle Definition
// =============================================================================

/// The ordered elements of one traversal of a loop.
///
/// A `Cycle` always holds at least one element. Cycles returned by the
/// detector start at whichever element the detection happened to close on;
/// callers should not rely on any particular starting element. Use
/// [`canonical`](Cycle::canonical) or [`rotated_to`](Cycle::rotated_to) when
/// a fixed starting point matters.
///
/// # Time Complexity
///
/// | Operation         | Complexity |
/// |-------------------|------------|
/// | `len`             | O(1)       |
/// | `iter`            | O(1)       |
/// | `contains`        | O(n)       |
/// | `eq`              | O(n²)      |
/// | `rotation_offset` | O(n²)      |
/// | `canonical`       | O(n²)      |
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::find;
///
/// let cycle = find(|x: &u32| x * x % 7, 2);
/// assert_eq!(cycle.len(), 2);
/// assert!(cycle.contains(&2));
/// assert!(cycle.contains(&4));
/// ```
#[derive(Clone)]
pub struct Cycle<T> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(Cycle<i32>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Cycle<std::rc::Rc<i32>>: Send, Sync);

// a cycle is never empty, so there is no `is_empty`
#[allow(clippy::len_without_is_empty)]
impl<T> Cycle<T> {
    /// Wraps elements gathered by the detector, which are never empty.
    pub(crate) const fn from_detected(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Creates a cycle of length one, i.e. a fixed point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::{Cycle, find};
    ///
    /// assert_eq!(find(|_: &i32| 1, 5), Cycle::singleton(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: vec![element],
        }
    }

    /// Returns the number of elements in one traversal of the loop.
    ///
    /// This is never zero.
    #[inline]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the element the cycle starts from.
    #[inline]
    pub fn first(&self) -> &T {
        &self.elements[0]
    }

    /// Returns the elements of one traversal as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over one traversal of the loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec!['a', 'b', 'c']).unwrap();
    /// let once: String = cycle.iter().collect();
    /// assert_eq!(once, "abc");
    /// ```
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an unbounded iterator that walks the loop forever.
    ///
    /// The iterator is [`Clone`]; a clone restarts from the position it was
    /// taken at.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec![1, 2, 3]).unwrap();
    /// let walked: Vec<i32> = cycle.repeat().take(7).copied().collect();
    /// assert_eq!(walked, vec![1, 2, 3, 1, 2, 3, 1]);
    /// ```
    #[inline]
    pub fn repeat(&self) -> Repeat<'_, T> {
        Repeat::new(&self.elements, 0)
    }

    /// Returns an unbounded iterator that walks the loop forever, starting
    /// `offset` positions into it.
    ///
    /// The offset is taken modulo the cycle length, which lets a caller line
    /// up the loop's phase with another sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec![1, 2, 3]).unwrap();
    /// let walked: Vec<i32> = cycle.repeat_from(5).take(4).copied().collect();
    /// assert_eq!(walked, vec![3, 1, 2, 3]);
    /// ```
    #[inline]
    pub fn repeat_from(&self, offset: usize) -> Repeat<'_, T> {
        Repeat::new(&self.elements, offset % self.len())
    }

    /// Consumes the cycle, returning its elements in traversal order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> Cycle<T> {
    /// Returns one traversal of the loop as a new vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns the same loop started `offset` positions later.
    ///
    /// The offset is taken modulo the cycle length. The result is equal to
    /// `self` under rotation-invariant equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec![1, 2, 3, 4]).unwrap();
    /// let rotated = cycle.rotate_left(1);
    /// assert_eq!(rotated.as_slice(), &[2, 3, 4, 1]);
    /// assert_eq!(rotated, cycle);
    /// ```
    #[must_use]
    pub fn rotate_left(&self, offset: usize) -> Self {
        let mut elements = self.elements.clone();
        elements.rotate_left(offset % self.len());
        Self { elements }
    }
}

impl<T: PartialEq> Cycle<T> {
    /// Returns `true` if `element` lies on the loop.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Finds how far `other` must be rotated to line up with `self`.
    ///
    /// Returns the smallest `k` such that `other[(i + k) % n] == self[i]` for
    /// every position `i`, or `None` if the two cycles differ in length or no
    /// rotation matches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec![0, 1, 2, 3, 4]).unwrap();
    /// let other = Cycle::try_from(vec![3, 4, 0, 1, 2]).unwrap();
    /// assert_eq!(cycle.rotation_offset(&other), Some(2));
    /// assert_eq!(other.rotate_left(2).as_slice(), cycle.as_slice());
    /// ```
    pub fn rotation_offset(&self, other: &Self) -> Option<usize> {
        let length = self.len();
        if length != other.len() {
            return None;
        }
        (0..length).find(|&offset| {
            self.elements
                .iter()
                .zip(other.elements[offset..].iter().chain(&other.elements[..offset]))
                .all(|(left, right)| left == right)
        })
    }
}

impl<T: Clone + PartialEq> Cycle<T> {
    /// Returns the same loop started at `element`, or `None` if `element` is
    /// not on the loop.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec![7, 8, 9]).unwrap();
    /// let aligned = cycle.rotated_to(&9).unwrap();
    /// assert_eq!(aligned.as_slice(), &[9, 7, 8]);
    /// assert!(cycle.rotated_to(&6).is_none());
    /// ```
    pub fn rotated_to(&self, element: &T) -> Option<Self> {
        self.elements
            .iter()
            .position(|candidate| candidate == element)
            .map(|offset| self.rotate_left(offset))
    }
}

impl<T: Ord> Cycle<T> {
    fn rotation_start(&self) -> usize {
        let length = self.len();
        let rotation = |offset: usize| {
            self.elements[offset..]
                .iter()
                .chain(&self.elements[..offset])
        };
        (1..length).fold(0, |best, offset| {
            if rotation(offset).cmp(rotation(best)) == Ordering::Less {
                offset
            } else {
                best
            }
        })
    }
}

impl<T: Clone + Ord> Cycle<T> {
    /// Returns the lexicographically smallest rotation of the loop.
    ///
    /// Two cycles are equal exactly when their canonical forms have identical
    /// element lists, which makes this the representative to store or print
    /// when the starting element must not depend on how the loop was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cyclefind::cycle::Cycle;
    ///
    /// let cycle = Cycle::try_from(vec![4, 0, 3, 1]).unwrap();
    /// assert_eq!(cycle.canonical().as_slice(), &[0, 3, 1, 4]);
    /// ```
    #[must_use]
    pub fn canonical(&self) -> Self {
        self.rotate_left(self.rotation_start())
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> TryFrom<Vec<T>> for Cycle<T> {
    type Error = EmptyCycleError;

    /// Builds a cycle from one traversal of a loop, in order.
    ///
    /// # Errors
    ///
    /// Returns `Err(EmptyCycleError)` if `elements` is empty.
    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        if elements.is_empty() {
            Err(EmptyCycleError)
        } else {
            Ok(Self { elements })
        }
    }
}

impl<T> From<Cycle<T>> for Vec<T> {
    #[inline]
    fn from(cycle: Cycle<T>) -> Self {
        cycle.elements
    }
}

impl<T> AsRef<[T]> for Cycle<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> IntoIterator for Cycle<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Cycle<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

impl<T: PartialEq> PartialEq for Cycle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rotation_offset(other).is_some()
    }
}

impl<T: Eq> Eq for Cycle<T> {}

/// Hashes the canonical rotation, so that cycles equal up to rotation hash
/// identically.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::Cycle;
/// use std::collections::HashSet;
///
/// let mut seen = HashSet::new();
/// seen.insert(Cycle::try_from(vec![1, 2, 3]).unwrap());
/// assert!(seen.contains(&Cycle::try_from(vec![2, 3, 1]).unwrap()));
/// ```
impl<T: Hash + Ord> Hash for Cycle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let start = self.rotation_start();
        self.len().hash(state);
        for element in self.elements[start..].iter().chain(&self.elements[..start]) {
            element.hash(state);
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Cycle<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Cycle").field(&self.elements).finish()
    }
}

/// Formats the cycle in cycle notation, e.g. `(1 2 3)`.
impl<T: fmt::Display> fmt::Display for Cycle<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, " ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;

    fn cycle(elements: Vec<i32>) -> Cycle<i32> {
        Cycle::try_from(elements).unwrap()
    }

    fn hash_of(cycle: &Cycle<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        cycle.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    #[case(vec![1], vec![1], Some(0))]
    #[case(vec![1, 2, 3], vec![1, 2, 3], Some(0))]
    #[case(vec![1, 2, 3], vec![3, 1, 2], Some(1))]
    #[case(vec![1, 2, 3], vec![2, 3, 1], Some(2))]
    #[case(vec![1, 2, 3], vec![1, 3, 2], None)]
    #[case(vec![1, 2], vec![1, 2, 1], None)]
    #[case(vec![1, 1, 2], vec![1, 2, 2], None)]
    fn test_rotation_offset(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(cycle(left).rotation_offset(&cycle(right)), expected);
    }

    #[rstest]
    fn test_rotation_offset_returns_smallest_for_periodic_content() {
        let left = cycle(vec![1, 2, 1, 2]);
        let right = cycle(vec![2, 1, 2, 1]);
        assert_eq!(left.rotation_offset(&right), Some(1));
    }

    #[rstest]
    fn test_try_from_empty_fails() {
        assert_eq!(Cycle::<i32>::try_from(vec![]), Err(EmptyCycleError));
    }

    #[rstest]
    fn test_rotate_left_wraps_offset() {
        let original = cycle(vec![1, 2, 3]);
        assert_eq!(original.rotate_left(4).as_slice(), &[2, 3, 1]);
        assert_eq!(original.rotate_left(3).as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    #[case(vec![3, 1, 2], vec![1, 2, 3])]
    #[case(vec![2, 1, 2, 1], vec![1, 2, 1, 2])]
    #[case(vec![5], vec![5])]
    #[case(vec![2, 0, 2, 0, 1], vec![0, 1, 2, 0, 2])]
    fn test_canonical(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(cycle(input).canonical().as_slice(), expected.as_slice());
    }

    #[rstest]
    fn test_equal_cycles_hash_equally() {
        let left = cycle(vec![4, 9, 1, 7]);
        let right = cycle(vec![1, 7, 4, 9]);
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[rstest]
    fn test_display_uses_cycle_notation() {
        assert_eq!(cycle(vec![1, 2, 3]).to_string(), "(1 2 3)");
        assert_eq!(Cycle::singleton("x").to_string(), "(x)");
    }

    #[rstest]
    fn test_debug_shows_elements() {
        assert_eq!(format!("{:?}", cycle(vec![1, 2])), "Cycle([1, 2])");
    }

    #[rstest]
    fn test_into_vec_and_into_iter_preserve_order() {
        let original = cycle(vec![3, 1, 2]);
        assert_eq!(original.clone().into_vec(), vec![3, 1, 2]);
        assert_eq!(original.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_first_is_starting_element() {
        assert_eq!(*cycle(vec![8, 6, 7]).first(), 8);
    }
}
