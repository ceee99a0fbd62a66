//! Property-based tests for cycle detection.
//!
//! Every generated case is a random function on the finite domain
//! `0..size`, given as a lookup table. Iterating such a function from any
//! seed is guaranteed to cycle, so detection always terminates.
//!
//! This module verifies:
//!
//! - **Disjointness**: prefix and cycle share no element
//! - **Coverage**: prefix and cycle together hold every value walked
//! - **Closure**: the step function maps the cycle onto itself, in order
//! - **Rotation Equality**: cycles equal their rotations and nothing else
//! - **Repetition**: the repeating listing is the one-pass listing, repeated

use cyclefind::cycle::{Cycle, decompose, find, find_ordered, prefix, prefix_ordered};
use cyclefind::sequence::{distinct_until_repeat, unfold};
use proptest::prelude::*;
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

// =============================================================================
// Strategies
// =============================================================================

/// Generates a lookup table for a function on `0..size` and a seed in range.
fn table_and_seed() -> impl Strategy<Value = (Vec<usize>, usize)> {
    (1usize..64).prop_flat_map(|size| (prop::collection::vec(0..size, size), 0..size))
}

/// Generates a non-empty cycle of small integers.
fn small_cycle() -> impl Strategy<Value = Cycle<u8>> {
    prop::collection::vec(0u8..4, 1..12).prop_map(|elements| Cycle::try_from(elements).unwrap())
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Prefix and Cycle Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_prefix_and_cycle_are_disjoint((table, seed) in table_and_seed()) {
        let step = |x: &usize| table[*x];

        let tail: HashSet<usize> = prefix(step, seed).into_iter().collect();
        let cycle = find(step, seed);

        prop_assert!(cycle.iter().all(|element| !tail.contains(element)));
    }

    #[test]
    fn prop_prefix_and_cycle_cover_the_walk((table, seed) in table_and_seed()) {
        let step = |x: &usize| table[*x];

        let mut union: HashSet<usize> = prefix(step, seed).into_iter().collect();
        union.extend(find(step, seed));
        let walked: HashSet<usize> = distinct_until_repeat(unfold(step, seed)).into_iter().collect();

        prop_assert_eq!(union, walked);
    }

    #[test]
    fn prop_length_matches_one_pass_listing((table, seed) in table_and_seed()) {
        let cycle = find(|x: &usize| table[*x], seed);

        prop_assert!(cycle.len() >= 1);
        prop_assert_eq!(cycle.len(), cycle.to_vec().len());
    }

    #[test]
    fn prop_cycle_is_closed_under_step((table, seed) in table_and_seed()) {
        let cycle = find(|x: &usize| table[*x], seed);
        let elements = cycle.as_slice();

        for (index, element) in elements.iter().enumerate() {
            prop_assert_eq!(table[*element], elements[(index + 1) % elements.len()]);
        }
        let distinct: HashSet<&usize> = elements.iter().collect();
        prop_assert_eq!(distinct.len(), elements.len());
    }

    #[test]
    fn prop_prefix_is_the_walk_up_to_the_cycle((table, seed) in table_and_seed()) {
        let step = |x: &usize| table[*x];

        let tail = prefix(step, seed);
        let cycle = find(step, seed);
        let walked: Vec<usize> = unfold(step, seed).take(tail.len() + 1).collect();

        prop_assert_eq!(&walked[..tail.len()], tail.as_slice());
        prop_assert!(cycle.contains(&walked[tail.len()]));
    }

    #[test]
    fn prop_ordered_detection_matches_hashed((table, seed) in table_and_seed()) {
        let step = |x: &usize| table[*x];

        let hashed = find(step, seed);
        let ordered = find_ordered(step, seed);

        prop_assert_eq!(hashed.as_slice(), ordered.as_slice());
        prop_assert_eq!(prefix(step, seed), prefix_ordered(step, seed));
    }

    #[test]
    fn prop_decompose_agrees_with_find_and_prefix((table, seed) in table_and_seed()) {
        let step = |x: &usize| table[*x];

        let rho = decompose(step, seed);
        let tail = prefix(step, seed);
        let cycle = find(step, seed);

        prop_assert_eq!(rho.tail(), tail.as_slice());
        prop_assert_eq!(rho.cycle(), &cycle);
        for (index, expected) in unfold(step, seed).take(3 * table.len()).enumerate() {
            prop_assert_eq!(*rho.nth(index), expected);
        }
    }
}

// =============================================================================
// Rotation Equality Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_is_reflexive(cycle in small_cycle()) {
        prop_assert_eq!(&cycle, &cycle);
    }

    #[test]
    fn prop_rotations_are_equal(cycle in small_cycle(), offset in 0usize..32) {
        let rotated = cycle.rotate_left(offset);

        prop_assert_eq!(&cycle, &rotated);
        prop_assert_eq!(&rotated, &cycle);
        prop_assert_eq!(hash_of(&cycle), hash_of(&rotated));
        prop_assert_eq!(cycle.canonical().into_vec(), rotated.canonical().into_vec());
    }

    #[test]
    fn prop_rotation_offset_lines_up(cycle in small_cycle(), offset in 0usize..32) {
        let rotated = cycle.rotate_left(offset);
        let found = cycle.rotation_offset(&rotated);

        prop_assert!(found.is_some());
        let aligned = rotated.rotate_left(found.unwrap_or_default());
        prop_assert_eq!(aligned.as_slice(), cycle.as_slice());
    }

    #[test]
    fn prop_different_lengths_are_unequal(left in small_cycle(), right in small_cycle()) {
        prop_assume!(left.len() != right.len());
        prop_assert_ne!(left, right);
    }

    #[test]
    fn prop_equality_matches_canonical_forms(left in small_cycle(), right in small_cycle()) {
        prop_assert_eq!(
            left == right,
            left.canonical().as_slice() == right.canonical().as_slice()
        );
    }

    #[test]
    fn prop_repeat_yields_whole_copies(cycle in small_cycle(), copies in 1usize..5) {
        let once = cycle.to_vec();
        let walked: Vec<u8> = cycle.repeat().take(copies * cycle.len()).copied().collect();

        for chunk in walked.chunks(cycle.len()) {
            prop_assert_eq!(chunk, once.as_slice());
        }
    }

    #[test]
    fn prop_repeat_from_is_a_consistent_rotation(
        cycle in small_cycle(),
        offset in 0usize..32,
        copies in 1usize..5,
    ) {
        let rotation = cycle.rotate_left(offset).to_vec();
        let walked: Vec<u8> = cycle
            .repeat_from(offset)
            .take(copies * cycle.len())
            .copied()
            .collect();

        for chunk in walked.chunks(cycle.len()) {
            prop_assert_eq!(chunk, rotation.as_slice());
        }
    }
}
