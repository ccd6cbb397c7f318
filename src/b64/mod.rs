//! Base64url encoding and the forgiving base64 decode pipeline.
//!
//! Encoding always produces the URL-safe alphabet without padding.
//! Decoding accepts base64url or standard base64, optionally
//! percent-escaped, with or without padding.

use std::borrow::Cow;

use base64::Engine;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{self, GeneralPurpose, GeneralPurposeConfig};
use bytes::Bytes;
use log::debug;
use percent_encoding::percent_decode_str;

use crate::config::DecodeConfig;
use crate::error::CodecError;
use crate::words::bytes_to_words;

/// URL-safe, unpadded engine used for every encode.
const URL_SAFE: GeneralPurpose = general_purpose::URL_SAFE_NO_PAD;

/// Standard-alphabet engine for input that carries `=`: padding must be
/// canonical.
const PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Standard-alphabet engine for input without any `=`.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes bytes as base64url without padding.
///
/// # Example
///
/// ```
/// use bufcodec::bytes_to_base64_url;
///
/// assert_eq!(bytes_to_base64_url([0xfb, 0xff]), "-_8");
/// assert_eq!(bytes_to_base64_url(b""), "");
/// ```
pub fn bytes_to_base64_url(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE.encode(bytes)
}

/// Decodes base64url text into a native buffer.
///
/// `None` is treated as empty input.
pub fn base64_to_bytes(b64url: Option<&str>) -> Result<Bytes, CodecError> {
    base64_to_uint8(b64url).map(Bytes::from)
}

/// Decodes base64url text into an owned byte vector.
///
/// `None` is treated as empty input.
///
/// # Example
///
/// ```
/// use bufcodec::base64_to_uint8;
///
/// assert_eq!(base64_to_uint8(Some("-_8"))?, vec![0xfb, 0xff]);
/// assert!(base64_to_uint8(None)?.is_empty());
/// # Ok::<(), bufcodec::CodecError>(())
/// ```
pub fn base64_to_uint8(b64url: Option<&str>) -> Result<Vec<u8>, CodecError> {
    base64_to_uint8_with(&DecodeConfig::default(), b64url)
}

/// Decodes base64url text into native-endian 16-bit words.
///
/// The decoded byte length must be even.
pub fn base64_to_uint16(b64uri: Option<&str>) -> Result<Vec<u16>, CodecError> {
    let bytes = base64_to_uint8(b64uri)?;
    bytes_to_words(&bytes)
}

/// Runs the decode pipeline with an explicit [`DecodeConfig`].
pub fn base64_to_uint8_with(
    config: &DecodeConfig,
    b64url: Option<&str>,
) -> Result<Vec<u8>, CodecError> {
    let input = b64url.unwrap_or_default();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let unescaped = if config.uri_decode() {
        percent_decode_str(input).decode_utf8().map_err(|e| {
            debug!("rejecting base64 input: {}", e);
            CodecError::Uri(e)
        })?
    } else {
        Cow::Borrowed(input)
    };

    let regular = regular_base64(&unescaped);
    let cleaned = if config.ignore_whitespace() {
        strip_ascii_whitespace(&regular)
    } else {
        Cow::Borrowed(&*regular)
    };

    // Padding is optional, but when present it must be complete
    let engine = if cleaned.contains('=') {
        &PADDED
    } else {
        &UNPADDED
    };
    engine.decode(cleaned.as_bytes()).map_err(|e| {
        debug!("rejecting base64 input of {} chars: {}", cleaned.len(), e);
        CodecError::Decode(e)
    })
}

/// Maps the URL-safe alphabet back to the standard one (`_` to `/`,
/// `-` to `+`).
///
/// Borrows the input when there is nothing to replace.
pub fn regular_base64(b64url: &str) -> Cow<'_, str> {
    if !b64url.contains(['-', '_']) {
        return Cow::Borrowed(b64url);
    }

    Cow::Owned(
        b64url
            .chars()
            .map(|c| match c {
                '_' => '/',
                '-' => '+',
                c => c,
            })
            .collect(),
    )
}

fn strip_ascii_whitespace(s: &str) -> Cow<'_, str> {
    if !s.contains(|c: char| c.is_ascii_whitespace()) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !c.is_ascii_whitespace()).collect())
}
