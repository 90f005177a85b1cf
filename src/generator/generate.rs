//! Uid generation logic

use std::sync::atomic::Ordering;

use rand::RngCore;

use super::time::elapsed_since;
use super::UidGenerator;
use crate::base32::DECODED_LEN;
use crate::uid::Uid;

impl UidGenerator {
    /// Generate a new Uid
    ///
    /// Never fails. The counter wraps silently at the width of its field.
    #[inline]
    pub fn next_id(&self) -> Uid {
        let elapsed = elapsed_since(self.epoch, self.now_secs());
        let counter = self.next_counter();

        let mut bytes = [0u8; DECODED_LEN];
        self.layout.write(&mut bytes, elapsed, counter);
        rand::rng().fill_bytes(&mut bytes[self.layout.random_range()]);

        Uid::from_bytes(bytes)
    }

    /// Generate `n` Uids in a row
    pub fn take(&self, n: usize) -> Vec<Uid> {
        (0..n).map(|_| self.next_id()).collect()
    }

    /// Post-increment value of the shared counter
    #[inline(always)]
    pub(crate) fn next_counter(&self) -> u32 {
        self.counter.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }
}
