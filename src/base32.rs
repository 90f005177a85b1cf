/// Fixed-width base32 encoding and decoding for Uid
///
/// Ten raw bytes (80 bits) map onto exactly sixteen 5-bit symbols, so no
/// padding is ever needed. Encoding always emits the canonical upper-case
/// form; decoding is case-insensitive.
use once_cell::sync::Lazy;

use crate::error::UidError;

/// Character set for encoding. B, I, O and S are left out because they read
/// like 8, 1, 0 and 5.
pub const ALPHABET: &[u8; 32] = b"0123456789ACDEFGHJKLMNPQRTUVWXYZ";

/// Length of the encoded text form
pub const ENCODED_LEN: usize = 16;

/// Length of the raw binary form
pub const DECODED_LEN: usize = 10;

/// Marks bytes outside the alphabet in the decode table
const NO_VALUE: u8 = 0xFF;

/// Lookup table for decoding characters to their 5-bit values.
/// Upper and lower case of each letter decode to the same value.
static DECODE_MAP: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut map = [NO_VALUE; 256];
    for (i, &c) in ALPHABET.iter().enumerate() {
        map[c as usize] = i as u8;
        map[c.to_ascii_lowercase() as usize] = i as u8;
    }
    map
});

/// Encode 10 bytes into the 16 ASCII symbols of the text form (zero-allocation)
#[inline]
pub fn encode_array(src: &[u8; DECODED_LEN]) -> [u8; ENCODED_LEN] {
    let b = src;
    let sym = |v: u8| ALPHABET[(v & 0x1F) as usize];

    [
        sym(b[0] >> 3),
        sym((b[0] << 2) | (b[1] >> 6)),
        sym(b[1] >> 1),
        sym((b[1] << 4) | (b[2] >> 4)),
        sym((b[2] << 1) | (b[3] >> 7)),
        sym(b[3] >> 2),
        sym((b[3] << 3) | (b[4] >> 5)),
        sym(b[4]),
        sym(b[5] >> 3),
        sym((b[5] << 2) | (b[6] >> 6)),
        sym(b[6] >> 1),
        sym((b[6] << 4) | (b[7] >> 4)),
        sym((b[7] << 1) | (b[8] >> 7)),
        sym(b[8] >> 2),
        sym((b[8] << 3) | (b[9] >> 5)),
        sym(b[9]),
    ]
}

/// Encode 10 bytes into a 16 character string
pub fn encode(src: &[u8; DECODED_LEN]) -> String {
    encode_array(src).iter().map(|&c| char::from(c)).collect()
}

/// Decode a 16 character string into 10 bytes
///
/// # Returns
/// * `Result<[u8; 10], UidError>` - The decoded bytes, or the first problem
///   found in the input. Length is checked before characters.
pub fn decode(src: impl AsRef<[u8]>) -> Result<[u8; DECODED_LEN], UidError> {
    let mut dst = [0u8; DECODED_LEN];
    decode_into(&mut dst, src.as_ref())?;
    Ok(dst)
}

/// Decode into a caller-provided buffer. `dst` is left untouched on error.
pub fn decode_into(dst: &mut [u8; DECODED_LEN], src: &[u8]) -> Result<(), UidError> {
    let v = validate(src)?;

    dst[0] = (v[0] << 3) | (v[1] >> 2);
    dst[1] = (v[1] << 6) | (v[2] << 1) | (v[3] >> 4);
    dst[2] = (v[3] << 4) | (v[4] >> 1);
    dst[3] = (v[4] << 7) | (v[5] << 2) | (v[6] >> 3);
    dst[4] = (v[6] << 5) | v[7];
    dst[5] = (v[8] << 3) | (v[9] >> 2);
    dst[6] = (v[9] << 6) | (v[10] << 1) | (v[11] >> 4);
    dst[7] = (v[11] << 4) | (v[12] >> 1);
    dst[8] = (v[12] << 7) | (v[13] << 2) | (v[14] >> 3);
    dst[9] = (v[14] << 5) | v[15];

    Ok(())
}

/// Check the length, then translate all sixteen symbols and check them
/// with a single OR over the results.
#[inline]
fn validate(src: &[u8]) -> Result<[u8; ENCODED_LEN], UidError> {
    let src: &[u8; ENCODED_LEN] = src.try_into().map_err(|_| {
        tracing::trace!(len = src.len(), "rejected input with invalid length");
        UidError::InvalidLength {
            len: src.len(),
            expected: ENCODED_LEN,
        }
    })?;

    let values = (*src).map(|c| DECODE_MAP[c as usize]);
    if values.iter().fold(0, |acc, &v| acc | v) == NO_VALUE {
        return Err(invalid_character(src));
    }

    Ok(values)
}

#[cold]
#[inline(never)]
fn invalid_character(src: &[u8; ENCODED_LEN]) -> UidError {
    let (index, byte) = src
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, c)| DECODE_MAP[c as usize] == NO_VALUE)
        .unwrap_or((0, src[0]));

    tracing::trace!(index, byte, "rejected input with invalid character");
    UidError::InvalidCharacter { byte, index }
}
