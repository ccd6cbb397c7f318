//! Allocation and wiping.

use bytes::BytesMut;
use zeroize::Zeroize;

/// Zeroes every byte of `buf` in place and returns `0`.
///
/// The return value lets callers reset a companion length in the same
/// expression:
///
/// ```
/// use bufcodec::recycle_buffer;
///
/// let mut buf = vec![0xAAu8; 16];
/// let mut len = buf.len();
/// len = recycle_buffer(&mut buf);
///
/// assert_eq!(len, 0);
/// assert!(buf.iter().all(|&b| b == 0));
/// ```
pub fn recycle_buffer(buf: &mut [u8]) -> usize {
    // zeroize writes are not elided even if buf is never read again
    buf.zeroize();
    0
}

/// Allocates a writable buffer of exactly `size` bytes.
///
/// Callers must not rely on the initial contents; write before reading.
pub fn create_buffer(size: usize) -> BytesMut {
    BytesMut::zeroed(size)
}
