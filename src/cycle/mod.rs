//! Cycle detection for iterate sequences.
//!
//! This module finds the loop that the sequence `z, f(z), f(f(z)), ...`
//! settles into:
//!
//! - [`find`]: the loop as a [`Cycle`]
//! - [`prefix`]: the elements visited before the loop
//! - [`decompose`]: both at once, as a [`Rho`]
//!
//! Each operation has an `_ordered` or `_with` variant for element types
//! that are [`Ord`] rather than [`Hash`](std::hash::Hash), or for a custom
//! [`VisitedSet`].
//!
//! # Examples
//!
//! ## Finding a Loop
//!
//! ```rust
//! use cyclefind::cycle::{Cycle, find, prefix};
//!
//! let step = |x: &u32| x * x % 7;
//!
//! let cycle = find(step, 2);
//! assert_eq!(cycle.len(), 2);
//! assert_eq!(cycle, Cycle::try_from(vec![2, 4]).unwrap());
//! assert!(prefix(step, 2).is_empty());
//! ```
//!
//! ## Walking a Loop
//!
//! ```rust
//! use cyclefind::cycle::find;
//!
//! let cycle = find(|x: &u32| (x + 1) % 3, 0);
//!
//! let once: Vec<u32> = cycle.iter().copied().collect();
//! let twice: Vec<u32> = cycle.repeat().take(6).copied().collect();
//! assert_eq!(twice, [once.clone(), once].concat());
//! ```

mod detect;
mod error;
mod repeat;
mod rho;
mod value;
mod visited;

pub use detect::{find, find_ordered, find_with, prefix, prefix_ordered, prefix_with};
pub use error::EmptyCycleError;
pub use repeat::Repeat;
pub use rho::{Rho, decompose, decompose_with};
pub use value::Cycle;
pub use visited::{DefaultBuildHasher, HashedVisited, VisitedSet};
