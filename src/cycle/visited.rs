//! Membership sets used while walking a sequence.
//!
//! The detector only needs to ask "have I seen this element before?" and to
//! record new elements. [`VisitedSet`] captures exactly that, so the same
//! algorithm runs over hashed elements ([`HashedVisited`]) and ordered
//! elements ([`BTreeSet`]).
//!
//! # Hashing
//!
//! The hasher used by [`HashedVisited`] is chosen at compile time:
//!
//! | Feature  | Hasher                                 |
//! |----------|----------------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`            |
//! | `ahash`  | `ahash::RandomState`                   |
//! | neither  | `std::collections::hash_map::RandomState` |
//!
//! `fxhash` takes precedence when both features are enabled.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// The hasher behind [`HashedVisited`].
#[cfg(feature = "fxhash")]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The hasher behind [`HashedVisited`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultBuildHasher = ahash::RandomState;

/// The hasher behind [`HashedVisited`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// The hash set used by [`find`](super::find) and [`prefix`](super::prefix).
pub type HashedVisited<T> = HashSet<T, DefaultBuildHasher>;

/// A collection that records which elements have been observed.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::VisitedSet;
/// use std::collections::BTreeSet;
///
/// let mut visited = BTreeSet::new();
/// assert!(VisitedSet::insert(&mut visited, 'a'));
/// assert!(!VisitedSet::insert(&mut visited, 'a'));
/// assert!(VisitedSet::contains(&visited, &'a'));
/// assert_eq!(VisitedSet::len(&visited), 1);
/// ```
pub trait VisitedSet<T> {
    /// Returns `true` if `element` has been recorded.
    fn contains(&self, element: &T) -> bool;

    /// Records `element`, returning `true` if it was not already present.
    fn insert(&mut self, element: T) -> bool;

    /// Returns the number of distinct elements recorded.
    fn len(&self) -> usize;

    /// Returns `true` if nothing has been recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Eq + Hash, S: BuildHasher> VisitedSet<T> for HashSet<T, S> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

impl<T: Ord> VisitedSet<T> for BTreeSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    #[inline]
    fn insert(&mut self, element: T) -> bool {
        Self::insert(self, element)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}
