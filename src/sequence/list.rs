//! Helpers for consuming finite prefixes of possibly infinite sequences.
//!
//! Every helper stops as soon as it has its answer, so all of them are safe
//! to call on an unbounded [`Unfold`](super::Unfold) provided the stopping
//! condition is eventually met.

use std::hash::Hash;

use crate::cycle::HashedVisited;

/// Splits a sequence before the first element satisfying `predicate`.
///
/// Returns the elements preceding the match and the match itself. The
/// matching element is `None` only if the iterator ends without a match.
///
/// # Examples
///
/// ```rust
/// use cyclefind::sequence::{split_before, unfold};
///
/// let (before, found) = split_before(unfold(|x: &u32| x + 1, 0), |x| *x >= 3);
/// assert_eq!(before, vec![0, 1, 2]);
/// assert_eq!(found, Some(3));
///
/// let (before, found) = split_before([1, 2], |x| *x > 5);
/// assert_eq!(before, vec![1, 2]);
/// assert_eq!(found, None);
/// ```
pub fn split_before<I, P>(iterable: I, mut predicate: P) -> (Vec<I::Item>, Option<I::Item>)
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut before = Vec::new();
    for element in iterable {
        if predicate(&element) {
            return (before, Some(element));
        }
        before.push(element);
    }
    (before, None)
}

/// Collects the elements preceding the first one that satisfies `predicate`.
///
/// # Examples
///
/// ```rust
/// use cyclefind::sequence::{take_before, unfold};
///
/// let taken = take_before(unfold(|x: &i32| x * 2, 1), |x| *x > 20);
/// assert_eq!(taken, vec![1, 2, 4, 8, 16]);
/// ```
pub fn take_before<I, P>(iterable: I, predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    split_before(iterable, predicate).0
}

/// Collects the distinct elements of a sequence up to its first repetition.
///
/// The repeated element is not appended again. For an iterate sequence this
/// is exactly the set of values on its prefix and its cycle. Membership uses
/// [`HashedVisited`], so the hasher follows the crate's feature flags.
///
/// # Examples
///
/// ```rust
/// use cyclefind::sequence::{distinct_until_repeat, unfold};
///
/// let walked = distinct_until_repeat(unfold(|x: &u32| x * x % 7, 3));
/// assert_eq!(walked, vec![3, 2, 4]);
/// ```
pub fn distinct_until_repeat<I>(iterable: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Clone + Eq + Hash,
{
    let mut seen: HashedVisited<I::Item> = HashedVisited::default();
    take_before(iterable, |element| !seen.insert(element.clone()))
}
