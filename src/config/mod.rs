//! Configuration for the base64 decode pipeline.
//!
//! # Example
//!
//! ```
//! use bufcodec::{base64_to_uint8_with, DecodeConfig};
//!
//! // Reject percent-escapes and whitespace
//! let config = DecodeConfig::strict();
//! assert!(base64_to_uint8_with(&config, Some("AQ%2DB")).is_err());
//!
//! // Defaults accept them
//! let config = DecodeConfig::default();
//! assert_eq!(base64_to_uint8_with(&config, Some("AQ%3D%3D"))?, vec![1]);
//! # Ok::<(), bufcodec::CodecError>(())
//! ```

/// Knobs for decoding base64url text into bytes.
///
/// The default matches URI-carried base64url: percent-escapes are decoded
/// first and ASCII whitespace is skipped. Padding is always optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeConfig {
    /// Percent-decode the input before base64 decoding.
    uri_decode: bool,

    /// Skip ASCII whitespace anywhere in the input.
    ignore_whitespace: bool,
}

impl DecodeConfig {
    /// Creates a configuration with explicit settings.
    pub const fn new(uri_decode: bool, ignore_whitespace: bool) -> Self {
        Self {
            uri_decode,
            ignore_whitespace,
        }
    }

    /// A configuration that takes the input as bare base64 text.
    pub const fn strict() -> Self {
        Self::new(false, false)
    }

    /// Sets whether percent-escapes are decoded.
    pub fn with_uri_decode(mut self, uri_decode: bool) -> Self {
        self.uri_decode = uri_decode;
        self
    }

    /// Sets whether ASCII whitespace is skipped.
    pub fn with_ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    /// Returns whether percent-escapes are decoded.
    pub fn uri_decode(&self) -> bool {
        self.uri_decode
    }

    /// Returns whether ASCII whitespace is skipped.
    pub fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}
