use thiserror::Error;

/// Represents errors that can occur when decoding a Uid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UidError {
    /// Input text is not 16 characters, or input bytes are not 10 bytes
    #[error("Invalid length {len}. Expected exactly {expected}")]
    InvalidLength { len: usize, expected: usize },
    /// Input text contains a byte outside the alphabet
    #[error("Invalid character {:?} at index {index}", char::from(*byte))]
    InvalidCharacter { byte: u8, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let invalid_length = UidError::InvalidLength {
            len: 5,
            expected: 16,
        };
        assert_eq!(
            invalid_length.to_string(),
            "Invalid length 5. Expected exactly 16"
        );

        let invalid_char = UidError::InvalidCharacter {
            byte: b'O',
            index: 3,
        };
        assert_eq!(
            invalid_char.to_string(),
            "Invalid character 'O' at index 3"
        );
    }

    #[test]
    fn test_error_debug() {
        let invalid_length = UidError::InvalidLength {
            len: 11,
            expected: 10,
        };
        assert!(format!("{:?}", invalid_length).contains("InvalidLength"));
    }

    #[test]
    fn test_error_clone() {
        let original = UidError::InvalidCharacter {
            byte: b'!',
            index: 0,
        };
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
