//! # cyclefind
//!
//! Cycle detection for sequences produced by iterating a function.
//!
//! ## Overview
//!
//! Given a successor function `f` and a seed `z`, the sequence
//! `z, f(z), f(f(z)), ...` eventually enters a loop whenever the values
//! reachable from `z` are finitely many. This library finds:
//!
//! - **Cycle**: the elements of the loop, compared up to rotation
//! - **Prefix**: the elements visited before the loop is entered
//! - **Rho**: both at once, with the loop aligned to its entry point
//!
//! ## Modules
//!
//! - [`sequence`]: lazy, restartable iterate sequences and list helpers
//! - [`cycle`]: the [`Cycle`](cycle::Cycle) type and the detector
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc_hash::FxBuildHasher` for hashed visited sets
//! - `ahash`: use `ahash::RandomState` for hashed visited sets
//!
//! ## Example
//!
//! ```rust
//! use cyclefind::prelude::*;
//!
//! let cycle = find(|x: &u32| (x + 1) % 5, 0);
//! assert_eq!(cycle.len(), 5);
//! assert_eq!(cycle, Cycle::try_from(vec![2, 3, 4, 0, 1]).unwrap());
//!
//! let tail = prefix(|x: &u32| x % 3, 10);
//! assert_eq!(tail, vec![10]);
//! ```
//!
//! ## Termination
//!
//! Detection only returns once the sequence has repeated. A function whose
//! orbit never cycles makes [`find`](cycle::find) and friends loop forever.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use cyclefind::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cycle::*;
    pub use crate::sequence::*;
}

pub mod cycle;
pub mod sequence;
