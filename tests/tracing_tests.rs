//! Tests that detection runs unchanged under an installed `tracing`
//! subscriber.
//!
//! The library only emits events; these tests install a test-writer
//! subscriber at `TRACE` level so that span and event construction is
//! exercised alongside the detector.

use cyclefind::cycle::{Cycle, decompose, find, prefix};
use rstest::{fixture, rstest};
use tracing_subscriber::EnvFilter;

#[fixture]
fn subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("cyclefind=trace"))
        .with_test_writer()
        .try_init();
}

#[rstest]
fn test_find_with_subscriber(#[from(subscriber)] _subscriber: ()) {
    let cycle = find(|x: &u32| (x + 1) % 5, 0);
    assert_eq!(cycle, Cycle::try_from(vec![0, 1, 2, 3, 4]).unwrap());
}

#[rstest]
fn test_prefix_and_decompose_with_subscriber(#[from(subscriber)] _subscriber: ()) {
    let step = |_: &u32| 1;
    assert_eq!(prefix(step, 5), vec![5]);

    let rho = decompose(step, 5);
    assert_eq!(rho.tail_length(), 1);
    assert_eq!(rho.cycle_length(), 1);
}
