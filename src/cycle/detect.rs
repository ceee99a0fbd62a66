//! Cycle detection and prefix extraction.
//!
//! # Algorithm
//!
//! The detector walks the sequence once, sorting every element into one of
//! two membership sets:
//!
//! 1. an element seen for the first time goes into `seen_once`;
//! 2. an element already in `seen_once` is seen for the second time: it goes
//!    into `seen_twice` and is appended to the output;
//! 3. an element already in `seen_twice` ends the walk.
//!
//! Prefix elements are never seen twice, so the output holds exactly the
//! loop's elements, in the order they were revisited. The walk costs O(n)
//! time and O(n) space for n = prefix length + cycle length, and needs
//! nothing from the element type besides equality and set membership.
//!
//! # Termination
//!
//! Every function here returns only once the sequence has started repeating.
//! If the orbit of the seed never cycles, the call does not return.
//!
//! # Examples
//!
//! ```rust
//! use cyclefind::cycle::{Cycle, find, prefix};
//!
//! let step = |x: &u32| x % 3;
//! assert_eq!(find(step, 10), Cycle::singleton(1));
//! assert_eq!(prefix(step, 10), vec![10]);
//! ```

use std::collections::BTreeSet;
use std::hash::Hash;

use super::value::Cycle;
use super::visited::{HashedVisited, VisitedSet};
use crate::sequence::{take_before, unfold};

/// Finds the loop of the sequence `seed, step(&seed), ...` using hashed
/// membership sets.
///
/// The returned cycle starts at the first element observed twice. Compare
/// it with other cycles through rotation-invariant equality rather than by
/// its starting element.
///
/// The call does not return if the sequence never cycles.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::{Cycle, find};
///
/// let cycle = find(|x: &u32| (x + 1) % 5, 0);
/// assert_eq!(cycle.len(), 5);
/// assert_eq!(cycle, Cycle::try_from(vec![0, 1, 2, 3, 4]).unwrap());
/// ```
pub fn find<T, F>(step: F, seed: T) -> Cycle<T>
where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> T,
{
    find_with::<HashedVisited<T>, T, F>(step, seed)
}

/// Finds the loop of the sequence using ordered membership sets.
///
/// Equivalent to [`find`] for element types that are [`Ord`] but not
/// [`Hash`].
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::{Cycle, find_ordered};
///
/// let cycle = find_ordered(|x: &u32| x * x % 7, 2);
/// assert_eq!(cycle, Cycle::try_from(vec![4, 2]).unwrap());
/// ```
pub fn find_ordered<T, F>(step: F, seed: T) -> Cycle<T>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    find_with::<BTreeSet<T>, T, F>(step, seed)
}

/// Finds the loop of the sequence using the membership set `S`.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::find_with;
/// use std::collections::HashSet;
///
/// let cycle = find_with::<HashSet<i8>, _, _>(|x: &i8| -x, 3);
/// assert_eq!(cycle.len(), 2);
/// ```
pub fn find_with<S, T, F>(step: F, seed: T) -> Cycle<T>
where
    S: VisitedSet<T> + Default,
    T: Clone + Eq,
    F: Fn(&T) -> T,
{
    let _span = tracing::trace_span!("find_cycle").entered();

    let mut seen_once = S::default();
    let mut seen_twice = S::default();
    let mut elements = Vec::new();

    for element in unfold(step, seed) {
        if seen_twice.contains(&element) {
            // every loop element has now been revisited
            break;
        }
        if seen_once.contains(&element) {
            seen_twice.insert(element.clone());
            elements.push(element);
        } else {
            seen_once.insert(element);
        }
    }

    tracing::debug!(
        visited = seen_once.len(),
        cycle_length = elements.len(),
        "cycle closed"
    );
    Cycle::from_detected(elements)
}

/// Returns the elements of the sequence that precede its loop, using hashed
/// membership sets.
///
/// The result is empty when the seed itself lies on the loop. Runs the
/// detector, then walks the sequence again from the seed until it reaches
/// the first loop element.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::prefix;
///
/// assert_eq!(prefix(|_: &i32| 1, 5), vec![5]);
/// assert!(prefix(|x: &u32| (x + 1) % 5, 0).is_empty());
/// ```
pub fn prefix<T, F>(step: F, seed: T) -> Vec<T>
where
    T: Clone + Eq + Hash,
    F: Fn(&T) -> T,
{
    prefix_with::<HashedVisited<T>, T, F>(step, seed)
}

/// Returns the elements preceding the loop, using ordered membership sets.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::prefix_ordered;
///
/// let tail = prefix_ordered(|x: &u64| if *x > 1 { x / 2 } else { 1 }, 40);
/// assert_eq!(tail, vec![40, 20, 10, 5, 2]);
/// ```
pub fn prefix_ordered<T, F>(step: F, seed: T) -> Vec<T>
where
    T: Clone + Ord,
    F: Fn(&T) -> T,
{
    prefix_with::<BTreeSet<T>, T, F>(step, seed)
}

/// Returns the elements preceding the loop, using the membership set `S`.
pub fn prefix_with<S, T, F>(step: F, seed: T) -> Vec<T>
where
    S: VisitedSet<T> + Default,
    T: Clone + Eq,
    F: Fn(&T) -> T,
{
    let members = cycle_members::<S, T, F>(&step, seed.clone());
    take_before(unfold(step, seed), |element| members.contains(element))
}

/// Detects the loop and collects its elements into a membership set.
pub(super) fn cycle_members<S, T, F>(step: &F, seed: T) -> S
where
    S: VisitedSet<T> + Default,
    T: Clone + Eq,
    F: Fn(&T) -> T,
{
    let mut members = S::default();
    for element in find_with::<S, T, &F>(step, seed) {
        members.insert(element);
    }
    members
}
