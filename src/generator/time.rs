//! Time utilities for Uid generation
//!
//! Provides wall-clock time in seconds since a custom epoch

use chrono::Utc;

/// Get current wall-clock time in seconds since Unix epoch
#[inline(always)]
pub fn unix_time_secs() -> i64 {
    Utc::now().timestamp()
}

/// Seconds elapsed since `epoch`, truncated to the 32-bit timestamp field
#[inline(always)]
pub fn elapsed_since(epoch: i64, now: i64) -> u32 {
    now.wrapping_sub(epoch) as u32
}
