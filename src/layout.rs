//! Field layout of the 10 Uid bytes
//!
//! ```text
//! Standard   | timestamp (4) | counter (4) | random (2) |
//! Tagged     | tag (1) | timestamp (4) | counter (2) | random (3) |
//! ```
//!
//! Multi-byte fields are big-endian.

use std::ops::Range;

use crate::base32::DECODED_LEN;

/// Width of the timestamp field in bytes
pub const TIMESTAMP_LEN: usize = 4;

/// Selects how the 10 bytes of a Uid are split into fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// 4 byte timestamp, 4 byte counter, 2 random bytes
    #[default]
    Standard,
    /// 1 byte tag, 4 byte timestamp, 2 byte counter, 3 random bytes
    Tagged { tag: u8 },
}

impl Layout {
    /// The static tag written into every Uid, if any
    #[inline(always)]
    pub const fn tag(&self) -> Option<u8> {
        match self {
            Layout::Standard => None,
            Layout::Tagged { tag } => Some(*tag),
        }
    }

    #[inline(always)]
    const fn tag_len(&self) -> usize {
        match self {
            Layout::Standard => 0,
            Layout::Tagged { .. } => 1,
        }
    }

    /// Width of the counter field in bytes
    #[inline(always)]
    pub const fn counter_len(&self) -> usize {
        match self {
            Layout::Standard => 4,
            Layout::Tagged { .. } => 2,
        }
    }

    /// Number of random bytes at the end of the Uid
    #[inline(always)]
    pub const fn random_len(&self) -> usize {
        DECODED_LEN - self.tag_len() - TIMESTAMP_LEN - self.counter_len()
    }

    /// Largest counter value before it wraps
    #[inline(always)]
    pub const fn max_counter(&self) -> u32 {
        match self {
            Layout::Standard => u32::MAX,
            Layout::Tagged { .. } => u16::MAX as u32,
        }
    }

    #[inline(always)]
    pub(crate) const fn timestamp_range(&self) -> Range<usize> {
        let start = self.tag_len();
        start..start + TIMESTAMP_LEN
    }

    #[inline(always)]
    pub(crate) const fn counter_range(&self) -> Range<usize> {
        let start = self.tag_len() + TIMESTAMP_LEN;
        start..start + self.counter_len()
    }

    #[inline(always)]
    pub(crate) const fn random_range(&self) -> Range<usize> {
        let start = self.tag_len() + TIMESTAMP_LEN + self.counter_len();
        start..DECODED_LEN
    }

    /// Write tag, timestamp and counter. The counter is truncated to the
    /// field width; random bytes are left as they are.
    #[inline]
    pub(crate) fn write(&self, dst: &mut [u8; DECODED_LEN], elapsed: u32, counter: u32) {
        if let Some(tag) = self.tag() {
            dst[0] = tag;
        }
        dst[self.timestamp_range()].copy_from_slice(&elapsed.to_be_bytes());
        let counter = counter.to_be_bytes();
        dst[self.counter_range()].copy_from_slice(&counter[4 - self.counter_len()..]);
    }

    /// Read a big-endian field of at most 4 bytes
    #[inline]
    pub(crate) fn read(src: &[u8; DECODED_LEN], range: Range<usize>) -> u32 {
        src[range]
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_total_ten_bytes() {
        for layout in [Layout::Standard, Layout::Tagged { tag: 3 }] {
            assert_eq!(
                layout.tag_len() + TIMESTAMP_LEN + layout.counter_len() + layout.random_len(),
                DECODED_LEN
            );
            assert_eq!(layout.random_range().end, DECODED_LEN);
            assert_eq!(layout.timestamp_range().end, layout.counter_range().start);
            assert_eq!(layout.counter_range().end, layout.random_range().start);
        }
    }

    #[test]
    fn test_standard_offsets() {
        let layout = Layout::Standard;
        assert_eq!(layout.tag(), None);
        assert_eq!(layout.timestamp_range(), 0..4);
        assert_eq!(layout.counter_range(), 4..8);
        assert_eq!(layout.random_range(), 8..10);
        assert_eq!(layout.max_counter(), u32::MAX);
    }

    #[test]
    fn test_tagged_offsets() {
        let layout = Layout::Tagged { tag: 0xAB };
        assert_eq!(layout.tag(), Some(0xAB));
        assert_eq!(layout.timestamp_range(), 1..5);
        assert_eq!(layout.counter_range(), 5..7);
        assert_eq!(layout.random_range(), 7..10);
        assert_eq!(layout.max_counter(), 0xFFFF);
    }

    #[test]
    fn test_write_standard() {
        let mut bytes = [0xEE; 10];
        Layout::Standard.write(&mut bytes, 0x0102_0304, 0x0506_0708);
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8, 0xEE, 0xEE]);
    }

    #[test]
    fn test_write_tagged_truncates_counter() {
        let mut bytes = [0xEE; 10];
        Layout::Tagged { tag: 9 }.write(&mut bytes, 0x0102_0304, 0x0506_0708);
        assert_eq!(bytes, [9, 1, 2, 3, 4, 7, 8, 0xEE, 0xEE, 0xEE]);
    }

    #[test]
    fn test_read() {
        let bytes = [9, 1, 2, 3, 4, 7, 8, 0xAA, 0xBB, 0xCC];
        let layout = Layout::Tagged { tag: 9 };
        assert_eq!(Layout::read(&bytes, layout.timestamp_range()), 0x0102_0304);
        assert_eq!(Layout::read(&bytes, layout.counter_range()), 0x0708);
        assert_eq!(Layout::read(&bytes, layout.random_range()), 0xAABBCC);
    }
}
