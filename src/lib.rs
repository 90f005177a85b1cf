//! # SnowUid
//!
//! Compact, Snowflake-style unique identifiers with a fixed-width text form.
//!
//! A Uid is exactly 10 bytes:
//! - 📦 Fixed binary size, copied by value
//! - 📈 Roughly time-sorted (second resolution, custom epoch)
//! - 🔒 Thread-safe generation through an atomic counter
//! - 🔤 16 character base32 text form, safe in URLs and file names
//!
//! ```rust
//! use snowuid::{Uid, UidGenerator, DEFAULT_EPOCH};
//!
//! let generator = UidGenerator::new(DEFAULT_EPOCH, 0);
//! let uid = generator.next_id();
//!
//! let text = uid.to_string();
//! assert_eq!(text.len(), 16);
//! assert_eq!(Uid::parse(&text)?, uid);
//!
//! let parts = generator.extract(&uid);
//! assert_eq!(parts.counter, 1);
//! # Ok::<(), snowuid::UidError>(())
//! ```

#![forbid(unsafe_code)]

pub mod base32;
mod config;
mod error;
mod extractor;
mod generator;
mod layout;
pub mod sql;
mod uid;

#[cfg(feature = "serde")]
mod serde_support;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{UidConfig, UidConfigBuilder, DEFAULT_EPOCH};
pub use error::UidError;
pub use extractor::{Components, UidExtractor};
pub use generator::UidGenerator;
pub use layout::Layout;
pub use uid::Uid;
