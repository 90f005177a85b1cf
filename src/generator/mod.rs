//! Core Uid generator implementation
//!
//! Split into modules for testability:
//! - `time` - Wall-clock time utilities
//! - `generate` - Uid generation logic

mod generate;
pub(crate) mod time;

use std::sync::atomic::AtomicU32;

use crate::config::UidConfig;
use crate::extractor::{Components, UidExtractor};
use crate::layout::Layout;
use crate::uid::Uid;

/// Uid generator with cache-line alignment.
///
/// There is no `Default`: the only way to get a generator is through one of
/// the constructors. Share one instance between threads (e.g. behind an
/// `Arc`) rather than creating one per thread; the atomic counter is what
/// keeps Uids from the same second apart.
#[derive(Debug)]
#[repr(align(64))]
pub struct UidGenerator {
    // === Hot path fields ===
    pub(crate) counter: AtomicU32,
    epoch: i64,
    layout: Layout,
    clock: fn() -> i64,

    // === Cold path fields ===
    pub config: UidConfig,
    pub extract: UidExtractor,
}

impl UidGenerator {
    /// Create with the standard layout
    ///
    /// # Arguments
    ///
    /// * `epoch` - Epoch in Unix seconds
    /// * `counter` - Counter starting point; the first Uid carries `counter + 1`
    pub fn new(epoch: i64, counter: u32) -> Self {
        Self::with_config(UidConfig::builder().epoch(epoch).counter(counter).build())
    }

    /// Create with the tagged layout, writing `tag` into every Uid
    pub fn tagged(epoch: i64, counter: u32, tag: u8) -> Self {
        Self::with_config(
            UidConfig::builder()
                .epoch(epoch)
                .counter(counter)
                .tag(tag)
                .build(),
        )
    }

    /// Create with custom configuration
    pub fn with_config(config: UidConfig) -> Self {
        tracing::debug!(
            epoch = config.epoch(),
            counter = config.counter(),
            layout = ?config.layout(),
            "created uid generator"
        );
        Self {
            counter: AtomicU32::new(config.counter()),
            epoch: config.epoch(),
            layout: config.layout(),
            clock: config.clock(),
            config,
            extract: UidExtractor::new(config),
        }
    }

    /// Structural un-pack of `uid` using this generator's epoch and layout.
    /// Provenance is not checked; any 10 bytes are reinterpreted as given.
    #[inline]
    pub fn extract(&self, uid: &Uid) -> Components {
        self.extract.decompose(uid)
    }

    #[inline(always)]
    pub(crate) fn now_secs(&self) -> i64 {
        (self.clock)()
    }
}
