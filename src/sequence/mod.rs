//! Lazy iterate sequences.
//!
//! This module provides the producer side of cycle detection:
//!
//! - [`unfold`] / [`Unfold`]: the unbounded sequence `z, f(z), f(f(z)), ...`
//! - [`Orbit`]: an owned `(f, z)` pair that restarts the sequence on demand
//! - [`list`]: helpers for consuming prefixes of such sequences
//!
//! # Examples
//!
//! ```rust
//! use cyclefind::sequence::{Orbit, unfold};
//!
//! let first: Vec<u32> = unfold(|x: &u32| x * 2, 1).take(5).collect();
//! assert_eq!(first, vec![1, 2, 4, 8, 16]);
//!
//! // The same sequence, restarted as many times as needed
//! let orbit = Orbit::new(|x: &u32| x * x % 7, 2);
//! let once: Vec<u32> = orbit.iter().take(4).collect();
//! let again: Vec<u32> = orbit.iter().take(4).collect();
//! assert_eq!(once, vec![2, 4, 2, 4]);
//! assert_eq!(once, again);
//! ```

pub mod list;
mod unfold;

pub use list::{distinct_until_repeat, split_before, take_before};
pub use unfold::{Orbit, Unfold, unfold};
