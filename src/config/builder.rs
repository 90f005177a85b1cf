//! UidConfig builder for constructing configuration

use super::UidConfig;
use crate::generator::time::unix_time_secs;
use crate::layout::Layout;

/// Default configuration values
pub const DEFAULT_EPOCH: i64 = 1288834974; // Nov 04 2010 01:42:54 UTC
pub(super) const DEFAULT_COUNTER: u32 = 0;

/// Builder for UidConfig
#[derive(Debug)]
pub struct UidConfigBuilder {
    pub(super) epoch: i64,
    pub(super) counter: u32,
    pub(super) layout: Layout,
    pub(super) clock: fn() -> i64,
}

impl UidConfigBuilder {
    /// Create a new UidConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            counter: DEFAULT_COUNTER,
            layout: Layout::Standard,
            clock: unix_time_secs,
        }
    }

    /// Set a custom epoch in Unix seconds
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the counter starting point. The first Uid carries `counter + 1`.
    pub const fn counter(mut self, counter: u32) -> Self {
        self.counter = counter;
        self
    }

    /// Switch to the tagged layout with the given static tag byte
    pub const fn tag(mut self, tag: u8) -> Self {
        self.layout = Layout::Tagged { tag };
        self
    }

    /// Set the field layout directly
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the clock returning the current Unix time in seconds
    pub const fn clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Build the final UidConfig
    pub fn build(self) -> UidConfig {
        UidConfig::from_builder(self)
    }
}

impl Default for UidConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
