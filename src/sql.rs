//! Store and retrieve a Uid through database drivers that only deal in
//! opaque text or byte values.
//!
//! Uids are always stored as their 16 character text form. On retrieval a
//! driver may hand back either a string or the same characters as bytes; both
//! go through the text decoder.

use crate::base32;
use crate::error::UidError;
use crate::uid::Uid;

/// A column value handed back by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for ScanSource<'a> {
    fn from(src: &'a str) -> Self {
        ScanSource::Text(src)
    }
}

impl<'a> From<&'a String> for ScanSource<'a> {
    fn from(src: &'a String) -> Self {
        ScanSource::Text(src)
    }
}

impl<'a> From<&'a [u8]> for ScanSource<'a> {
    fn from(src: &'a [u8]) -> Self {
        ScanSource::Bytes(src)
    }
}

impl<'a> From<&'a Vec<u8>> for ScanSource<'a> {
    fn from(src: &'a Vec<u8>) -> Self {
        ScanSource::Bytes(src)
    }
}

impl Uid {
    /// Value to hand to a driver when storing
    pub fn to_value(&self) -> String {
        self.encode()
    }

    /// Read a Uid back from a driver value
    pub fn scan<'a>(src: impl Into<ScanSource<'a>>) -> Result<Self, UidError> {
        let bytes = match src.into() {
            ScanSource::Text(text) => text.as_bytes(),
            ScanSource::Bytes(bytes) => bytes,
        };
        base32::decode(bytes).map(Uid::from_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_then_scan() {
        let uid = Uid::from_bytes([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let value = uid.to_value();
        assert_eq!(value.len(), 16);

        assert_eq!(Uid::scan(&value).unwrap(), uid);
        assert_eq!(Uid::scan(value.as_str()).unwrap(), uid);
        assert_eq!(Uid::scan(value.as_bytes()).unwrap(), uid);
        assert_eq!(Uid::scan(&value.clone().into_bytes()).unwrap(), uid);
    }

    #[test]
    fn test_scan_bytes_are_text_not_raw() {
        let raw = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        assert_eq!(
            Uid::scan(&raw[..]),
            Err(UidError::InvalidLength {
                len: 10,
                expected: 16
            })
        );
    }

    #[test]
    fn test_scan_errors() {
        assert!(matches!(
            Uid::scan("SHORT"),
            Err(UidError::InvalidLength { len: 5, .. })
        ));
        assert!(matches!(
            Uid::scan(&b"00000000000000$0"[..]),
            Err(UidError::InvalidCharacter {
                byte: b'$',
                index: 14
            })
        ));
    }
}
