//! 16-bit word views over byte sequences.
//!
//! Bytes are paired in native-endian order. Nothing is byte-swapped: the
//! result is what a `u16` view over the same memory would read.

use crate::error::CodecError;

/// Input to [`decode_from_binary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryInput<'a> {
    /// Raw bytes.
    Bytes(&'a [u8]),
    /// A string holding one byte per character (U+0000 to U+00FF).
    BinaryString(&'a str),
}

impl<'a> From<&'a [u8]> for BinaryInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        BinaryInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for BinaryInput<'a> {
    fn from(s: &'a str) -> Self {
        BinaryInput::BinaryString(s)
    }
}

/// Reads `input` as a sequence of native-endian 16-bit words.
///
/// # Errors
///
/// - [`CodecError::OddLength`] if the byte length is odd
/// - [`CodecError::NotBinary`] if a binary string holds a character
///   above U+00FF
///
/// # Example
///
/// ```
/// use bufcodec::{decode_from_binary, BinaryInput};
///
/// let from_bytes = decode_from_binary(BinaryInput::Bytes(&[0x41, 0x42]))?;
/// let from_text = decode_from_binary(BinaryInput::BinaryString("AB"))?;
/// assert_eq!(from_bytes, from_text);
/// # Ok::<(), bufcodec::CodecError>(())
/// ```
pub fn decode_from_binary(input: BinaryInput<'_>) -> Result<Vec<u16>, CodecError> {
    match input {
        BinaryInput::Bytes(bytes) => bytes_to_words(bytes),
        BinaryInput::BinaryString(s) => bytes_to_words(&binary_string_to_bytes(s)?),
    }
}

/// Reads raw bytes as native-endian 16-bit words.
pub fn decode_from_binary_array(bytes: &[u8]) -> Result<Vec<u16>, CodecError> {
    decode_from_binary(BinaryInput::Bytes(bytes))
}

/// Converts a one-byte-per-character string into bytes.
pub fn binary_string_to_bytes(s: &str) -> Result<Vec<u8>, CodecError> {
    s.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(ch).map_err(|_| CodecError::NotBinary { index, ch }))
        .collect()
}

pub(crate) fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u16>, CodecError> {
    if bytes.len() % 2 != 0 {
        return Err(CodecError::OddLength { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
        .collect())
}
