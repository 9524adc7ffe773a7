//! Lossless conversions between characters, integers and binary digit
//! sequences.
//!
//! A bit sequence is a `Vec<u8>` holding only `0` and `1` values. It is not
//! required to be byte aligned; only [`bits_to_text`] cares about byte
//! boundaries and drops a trailing fragment shorter than 8 digits.

use crate::error::StegoError;
use crate::result::Result;

/// End-of-message sentinel appended to every text payload.
///
/// The payload is not escaped, so a message whose own bit stream contains
/// this exact run is truncated early on extraction.
pub const DELIMITER: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0];

/// Encodes every character of `text` as 8 zero-padded binary digits,
/// concatenated in order.
///
/// Characters above code point 255 cannot be framed in 8 bits and are
/// rejected with [`StegoError::UnsupportedCharacter`].
pub fn text_to_bits(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len() * 8);
    for ch in text.chars() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(StegoError::UnsupportedCharacter(ch));
        }
        bits.extend(int_to_bits(code, 8));
    }
    Ok(bits)
}

/// Decodes consecutive 8 digit groups back into characters, dropping any
/// trailing group shorter than 8 digits.
pub fn bits_to_text(bits: &[u8]) -> String {
    bits.chunks_exact(8)
        .map(|group| char::from(bits_to_int(group) as u8))
        .collect()
}

/// Zero-padded binary representation of `value`, exactly `width` digits,
/// most significant digit first. `value` must fit into `width` bits.
pub fn int_to_bits(value: u32, width: usize) -> Vec<u8> {
    (0..width).rev().map(|i| ((value >> i) & 1) as u8).collect()
}

/// Unsigned base-2 parse of the full digit sequence.
pub fn bits_to_int(bits: &[u8]) -> u32 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}
