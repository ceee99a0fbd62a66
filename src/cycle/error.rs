//! Error types for cycle construction.

/// Represents an attempt to build a [`Cycle`](super::Cycle) with no elements.
///
/// Every loop of an iterate sequence contains at least one element (a
/// fixed point `f(x) == x` forms a loop of length one), so an empty element
/// list cannot describe a cycle.
///
/// # Examples
///
/// ```rust
/// use cyclefind::cycle::{Cycle, EmptyCycleError};
///
/// let result = Cycle::<i32>::try_from(Vec::new());
/// assert_eq!(result, Err(EmptyCycleError));
/// assert_eq!(
///     EmptyCycleError.to_string(),
///     "a cycle must contain at least one element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyCycleError;

impl std::fmt::Display for EmptyCycleError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "a cycle must contain at least one element")
    }
}

impl std::error::Error for EmptyCycleError {}
