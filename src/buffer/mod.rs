//! Buffer helpers: emptiness checks, detached copies, native buffer
//! wrapping, wiping, allocation and concatenation.
//!
//! The native buffer type is [`bytes::Bytes`] (shared, immutable) and
//! [`bytes::BytesMut`] (unique, writable).

mod alloc;
mod concat;
mod view;

pub use alloc::{create_buffer, recycle_buffer};
pub use concat::{concat, concat_buf};
pub use view::{array_buffer_of, buffer_of, empty_buf};
