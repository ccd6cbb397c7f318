//! Concatenation of byte sequences.

use bytes::{BufMut, Bytes, BytesMut};

/// Concatenates `parts` in order into one exactly-sized vector.
///
/// # Example
///
/// ```
/// use bufcodec::concat;
///
/// let parts: [&[u8]; 3] = [&[1, 2], &[3], &[4, 5]];
/// assert_eq!(concat(&parts), vec![1, 2, 3, 4, 5]);
/// ```
pub fn concat<T: AsRef<[u8]>>(parts: &[T]) -> Vec<u8> {
    let size = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut out = Vec::with_capacity(size);
    for part in parts {
        out.extend_from_slice(part.as_ref());
    }
    out
}

/// Concatenates native buffers in order.
///
/// A single part is returned as a shared handle without copying.
pub fn concat_buf(parts: &[Bytes]) -> Bytes {
    match parts {
        [] => Bytes::new(),
        [only] => only.clone(),
        _ => {
            let size = parts.iter().map(Bytes::len).sum();
            let mut out = BytesMut::with_capacity(size);
            for part in parts {
                out.put_slice(part);
            }
            out.freeze()
        }
    }
}
