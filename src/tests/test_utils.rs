//! Shared test utilities for Uid tests

use std::collections::HashSet;

use crate::Uid;

/// Clock pinned to `DEFAULT_EPOCH + 100`
pub fn fixed_clock() -> i64 {
    crate::DEFAULT_EPOCH + 100
}

/// Assert that all Uids in the collection are unique
pub fn assert_unique_ids(ids: &[Uid], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that counters are strictly increasing by one when sorted
pub fn assert_consecutive_sorted(counters: &mut [u32]) {
    counters.sort_unstable();
    for i in 1..counters.len() {
        assert_eq!(
            counters[i],
            counters[i - 1] + 1,
            "Counter at position {} ({}) does not follow previous counter ({})",
            i,
            counters[i],
            counters[i - 1]
        );
    }
}
