//! Unbounded traversal of a cycle.

use std::iter::FusedIterator;

/// An iterator that walks the elements of a [`Cycle`](super::Cycle) forever.
///
/// Created by [`Cycle::repeat`](super::Cycle::repeat) and
/// [`Cycle::repeat_from`](super::Cycle::repeat_from). Cloning the iterator
/// restarts the walk from the clone's current position.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::Cycle;
///
/// let cycle = Cycle::try_from(vec!["red", "green", "blue"]).unwrap();
/// let mut lights = cycle.repeat();
///
/// assert_eq!(lights.position_in_cycle(), 0);
/// assert_eq!(lights.next(), Some(&"red"));
/// assert_eq!(lights.nth(3), Some(&"green"));
/// assert_eq!(lights.position_in_cycle(), 2);
/// ```
#[derive(Debug)]
pub struct Repeat<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> Repeat<'a, T> {
    /// `elements` is non-empty and `position < elements.len()`.
    pub(crate) const fn new(elements: &'a [T], position: usize) -> Self {
        Self { elements, position }
    }

    /// Returns the index within the cycle of the next element to be yielded.
    #[inline]
    pub const fn position_in_cycle(&self) -> usize {
        self.position
    }
}

impl<'a, T> Iterator for Repeat<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let element = &self.elements[self.position];
        self.position = (self.position + 1) % self.elements.len();
        Some(element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, skip: usize) -> Option<&'a T> {
        self.position = (self.position + skip % self.elements.len()) % self.elements.len();
        self.next()
    }
}

impl<T> Clone for Repeat<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
        }
    }
}

impl<T> FusedIterator for Repeat<'_, T> {}
