//! Configuration for Uid generator

mod builder;

pub use builder::{UidConfigBuilder, DEFAULT_EPOCH};

use crate::layout::Layout;

/// Configuration for Uid generator
#[derive(Debug, Clone, Copy)]
pub struct UidConfig {
    epoch: i64,
    counter: u32,
    layout: Layout,
    clock: fn() -> i64,
}

impl UidConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: UidConfigBuilder) -> Self {
        Self {
            epoch: b.epoch,
            counter: b.counter,
            layout: b.layout,
            clock: b.clock,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> UidConfigBuilder {
        UidConfigBuilder::new()
    }

    /// Epoch in Unix seconds subtracted from the clock before storing a timestamp
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Counter starting point
    #[inline(always)]
    pub const fn counter(&self) -> u32 {
        self.counter
    }

    #[inline(always)]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[inline(always)]
    pub const fn tag(&self) -> Option<u8> {
        self.layout.tag()
    }

    #[inline(always)]
    pub(crate) const fn clock(&self) -> fn() -> i64 {
        self.clock
    }
}

impl Default for UidConfig {
    fn default() -> Self {
        UidConfigBuilder::new().build()
    }
}
