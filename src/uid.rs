//! The 10-byte identifier and its text and binary conversions

use std::fmt;
use std::str;

use crate::base32::{self, DECODED_LEN, ENCODED_LEN};
use crate::error::UidError;

/// A 10-byte identifier, big-endian fields as laid out by [`Layout`](crate::Layout).
///
/// The text form is always 16 characters of the base32 alphabet.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uid([u8; DECODED_LEN]);

impl Uid {
    /// Size of the binary form in bytes
    pub const LEN: usize = DECODED_LEN;

    /// Size of the text form in characters
    pub const ENCODED_LEN: usize = ENCODED_LEN;

    /// The all-zero Uid, used as a "no identifier" sentinel
    pub const EMPTY: Self = Self([0; DECODED_LEN]);

    /// Creates a Uid from its raw bytes
    pub const fn from_bytes(bytes: [u8; DECODED_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array
    pub const fn as_bytes(&self) -> &[u8; DECODED_LEN] {
        &self.0
    }

    /// Returns true for [`Uid::EMPTY`]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Creates a Uid from a byte slice by direct copy
    ///
    /// # Returns
    /// * `Result<Uid, UidError>` - `InvalidLength` unless `bytes` is exactly 10 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UidError> {
        <[u8; DECODED_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| UidError::InvalidLength {
                len: bytes.len(),
                expected: DECODED_LEN,
            })
    }

    /// Parses the 16 character text form (case-insensitive)
    pub fn parse(src: &str) -> Result<Self, UidError> {
        base32::decode(src).map(Self)
    }

    /// Returns the canonical 16 character text form
    pub fn encode(&self) -> String {
        base32::encode(&self.0)
    }

    /// Returns the text form as ASCII bytes without allocating
    pub fn encode_array(&self) -> [u8; ENCODED_LEN] {
        base32::encode_array(&self.0)
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.encode_array();
        f.pad(str::from_utf8(&text).map_err(|_| fmt::Error)?)
    }
}

impl str::FromStr for Uid {
    type Err = UidError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse(src)
    }
}

impl TryFrom<&str> for Uid {
    type Error = UidError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse(src)
    }
}

impl TryFrom<String> for Uid {
    type Error = UidError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse(&src)
    }
}

impl From<Uid> for String {
    fn from(src: Uid) -> Self {
        src.encode()
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = UidError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl From<[u8; DECODED_LEN]> for Uid {
    fn from(src: [u8; DECODED_LEN]) -> Self {
        Self(src)
    }
}

impl From<Uid> for [u8; DECODED_LEN] {
    fn from(src: Uid) -> Self {
        src.0
    }
}

impl From<Uid> for Vec<u8> {
    fn from(src: Uid) -> Self {
        src.0.to_vec()
    }
}

impl AsRef<[u8]> for Uid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let uid: Uid = "2X35DGR00019Q470".parse().unwrap();
        assert_eq!(uid.to_string(), "2X35DGR00019Q470");
        assert_eq!(uid.encode(), "2X35DGR00019Q470");
        assert_eq!(&uid.encode_array(), b"2X35DGR00019Q470");
    }

    #[test]
    fn test_parse_lowercase_displays_canonical() {
        let uid = Uid::parse("2x35dgr00019q470").unwrap();
        assert_eq!(uid.to_string(), "2X35DGR00019Q470");
    }

    #[test]
    fn test_parse_short() {
        assert_eq!(
            Uid::parse("SHORT"),
            Err(UidError::InvalidLength {
                len: 5,
                expected: 16
            })
        );
    }

    #[test]
    fn test_empty() {
        assert!(Uid::EMPTY.is_empty());
        assert!(Uid::default().is_empty());
        assert_eq!(Uid::EMPTY.to_string(), "0000000000000000");
        assert!(!Uid::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 1]).is_empty());
    }

    #[test]
    fn test_from_slice_copies_raw_bytes() {
        // bytes that are not alphabet characters must still be accepted
        let raw = [0xFF, 0x00, b'!', b'O', 0x80, 1, 2, 3, 4, 5];
        let uid = Uid::from_slice(&raw).unwrap();
        assert_eq!(uid.as_bytes(), &raw);
        assert_eq!(Vec::from(uid), raw.to_vec());
    }

    #[test]
    fn test_from_slice_length() {
        assert_eq!(
            Uid::from_slice(&[0; 9]),
            Err(UidError::InvalidLength {
                len: 9,
                expected: 10
            })
        );
        assert_eq!(
            Uid::try_from(&[0u8; 16][..]),
            Err(UidError::InvalidLength {
                len: 16,
                expected: 10
            })
        );
    }

    #[test]
    fn test_conversions() {
        let bytes = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        let uid = Uid::from(bytes);
        assert_eq!(<[u8; 10]>::from(uid), bytes);
        assert_eq!(uid.as_ref(), &bytes[..]);

        let text = String::from(uid);
        assert_eq!(Uid::try_from(text.as_str()).unwrap(), uid);
        assert_eq!(Uid::try_from(text).unwrap(), uid);
    }

    #[test]
    fn test_ordering_follows_bytes() {
        let a = Uid::from_bytes([0, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
        let b = Uid::from_bytes([0, 0, 0, 2, 0, 0, 0, 0, 0, 0]);
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_display_honours_width_and_alignment() {
        let uid = Uid::parse("2X35DGR00019Q470").unwrap();
        assert_eq!(format!("{uid:>20}"), "    2X35DGR00019Q470");
        assert_eq!(format!("{uid:<20}|"), "2X35DGR00019Q470    |");
        assert_eq!(format!("{uid:*^20}"), "**2X35DGR00019Q470**");
        assert_eq!(format!("{uid:4}"), "2X35DGR00019Q470");
    }
}
