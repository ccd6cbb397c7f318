//! bufcodec
//!
//! Small binary helpers for wire-format plumbing.
//!
//! - base64url encode / forgiving decode (`-`, `_`, no padding)
//! - 16-bit word views over decoded bytes
//! - fixed-width big-endian integer encoding
//! - buffer helpers: detached copies, wiping, allocation, concatenation
//!
//! Every function is a single-shot transformation. Nothing is retained
//! between calls.
//!
//! # Example
//!
//! ```
//! use bufcodec::{base64_to_uint8, bytes_to_base64_url, concat, encode_uint8_array_be};
//!
//! fn main() -> Result<(), bufcodec::CodecError> {
//!     let query = b"\x12\x34\x01\x00";
//!
//!     // Two byte length prefix, then the message
//!     let prefix = encode_uint8_array_be(query.len() as u64, 2)?;
//!     let framed = concat(&[&prefix[..], &query[..]]);
//!
//!     let b64 = bytes_to_base64_url(&framed);
//!     assert_eq!(base64_to_uint8(Some(b64.as_str()))?, framed);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod b64;
mod buffer;
mod config;
mod endian;
mod error;
mod words;

//
// Public surface (intentionally flat)
//

pub use b64::{
    base64_to_bytes, base64_to_uint8, base64_to_uint8_with, base64_to_uint16, bytes_to_base64_url,
    regular_base64,
};
pub use buffer::{
    array_buffer_of, buffer_of, concat, concat_buf, create_buffer, empty_buf, recycle_buffer,
};
pub use config::DecodeConfig;
pub use endian::encode_uint8_array_be;
pub use error::CodecError;
pub use words::{BinaryInput, binary_string_to_bytes, decode_from_binary, decode_from_binary_array};
