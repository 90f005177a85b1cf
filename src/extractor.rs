use chrono::{DateTime, Utc};

use crate::config::UidConfig;
use crate::layout::Layout;
use crate::uid::Uid;

/// Fields unpacked from a Uid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    /// Static tag, present only for the tagged layout
    pub tag: Option<u8>,
    /// Raw timestamp field: seconds since the epoch
    pub elapsed: u32,
    /// Unix seconds, `epoch + elapsed`
    pub timestamp: i64,
    pub counter: u32,
    /// Random tail read as a big-endian integer
    pub random: u32,
    pub layout: Layout,
}

impl Components {
    /// Timestamp as a UTC date, `None` if it is outside chrono's range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.timestamp, 0)
    }

    /// Random tail as lower-case hex, two digits per byte
    pub fn random_hex(&self) -> String {
        format!(
            "{:0width$x}",
            self.random,
            width = self.layout.random_len() * 2
        )
    }
}

/// Uid component extractor
#[derive(Debug, Copy, Clone)]
pub struct UidExtractor {
    epoch: i64,
    layout: Layout,
}

impl UidExtractor {
    /// Create a new Uid extractor with the given configuration
    pub(crate) fn new(config: UidConfig) -> Self {
        Self {
            epoch: config.epoch(),
            layout: config.layout(),
        }
    }

    /// Extract the tag byte, if this layout has one
    #[inline(always)]
    pub fn tag(&self, uid: &Uid) -> Option<u8> {
        self.layout.tag().map(|_| uid.as_bytes()[0])
    }

    /// Extract the raw timestamp field (seconds since the epoch)
    #[inline(always)]
    pub fn elapsed(&self, uid: &Uid) -> u32 {
        Layout::read(uid.as_bytes(), self.layout.timestamp_range())
    }

    /// Extract the timestamp as Unix seconds
    #[inline(always)]
    pub fn timestamp(&self, uid: &Uid) -> i64 {
        self.epoch.wrapping_add(i64::from(self.elapsed(uid)))
    }

    /// Extract the counter component
    #[inline(always)]
    pub fn counter(&self, uid: &Uid) -> u32 {
        Layout::read(uid.as_bytes(), self.layout.counter_range())
    }

    /// Extract the random tail as a big-endian integer
    #[inline(always)]
    pub fn random(&self, uid: &Uid) -> u32 {
        Layout::read(uid.as_bytes(), self.layout.random_range())
    }

    /// Decompose a Uid into all of its components
    #[inline]
    pub fn decompose(&self, uid: &Uid) -> Components {
        let elapsed = self.elapsed(uid);
        Components {
            tag: self.tag(uid),
            elapsed,
            timestamp: self.epoch.wrapping_add(i64::from(elapsed)),
            counter: self.counter(uid),
            random: self.random(uid),
            layout: self.layout,
        }
    }
}
