//! Error types for bufcodec.

use thiserror::Error;

/// Errors returned by the decode and fixed-width encode helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The input was not valid base64 (after URL-safe normalization).
    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Percent-decoding the input produced bytes that are not UTF-8.
    #[error("uri decode error: {0}")]
    Uri(#[from] std::str::Utf8Error),

    /// The value needs more bytes than the requested width.
    #[error("cannot encode {value} in {len} len byte array")]
    Range {
        /// The value that was attempted.
        value: u64,
        /// The requested width in bytes.
        len: usize,
    },

    /// A 16-bit view was requested over an odd number of bytes.
    #[error("cannot view {len} bytes as 16-bit words: length is odd")]
    OddLength {
        /// The byte length of the input.
        len: usize,
    },

    /// A binary string held a character that does not fit in one byte.
    #[error("character {ch:?} at index {index} is not a single byte")]
    NotBinary {
        /// Character index in the input string.
        index: usize,
        /// The offending character.
        ch: char,
    },
}
