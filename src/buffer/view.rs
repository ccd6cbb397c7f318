//! Views, detached copies and native buffer wrapping.

use bytes::Bytes;

/// Returns true if `b` is absent or holds no bytes.
///
/// # Example
///
/// ```
/// use bufcodec::empty_buf;
///
/// assert!(empty_buf(None::<&[u8]>));
/// assert!(empty_buf(Some(Vec::<u8>::new())));
/// assert!(!empty_buf(Some([1u8])));
/// ```
pub fn empty_buf<B: AsRef<[u8]>>(b: Option<B>) -> bool {
    b.is_none_or(|b| b.as_ref().is_empty())
}

/// Copies exactly the bytes of `view` into a standalone vector.
///
/// The result shares nothing with the buffer the view was taken from.
/// Returns `None` for absent or empty input.
pub fn array_buffer_of<B: AsRef<[u8]>>(view: Option<B>) -> Option<Vec<u8>> {
    let view = view?;
    let bytes = view.as_ref();
    if bytes.is_empty() {
        return None;
    }
    Some(bytes.to_vec())
}

/// Wraps `bytes` as a [`Bytes`] buffer.
///
/// Owned storage (`Vec<u8>`, `Box<[u8]>`, `String`) is moved, not copied.
/// Returns `None` for absent or empty input.
pub fn buffer_of<B: Into<Bytes>>(bytes: Option<B>) -> Option<Bytes> {
    let buf = bytes?.into();
    (!buf.is_empty()).then_some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buf() {
        assert!(empty_buf(None::<Vec<u8>>));
        assert!(empty_buf(Some(&[] as &[u8])));
        assert!(empty_buf(Some(Bytes::new())));
        assert!(!empty_buf(Some(vec![1u8])));
    }

    #[test]
    fn test_array_buffer_of_sub_view() {
        let parent = vec![9u8, 9, 1, 2, 3, 9, 9];
        let copy = array_buffer_of(Some(&parent[2..5])).unwrap();
        assert_eq!(copy, vec![1, 2, 3]);

        // Detached from the parent
        drop(parent);
        assert_eq!(copy.len(), 3);
    }

    #[test]
    fn test_array_buffer_of_empty() {
        assert!(array_buffer_of(None::<&[u8]>).is_none());
        assert!(array_buffer_of(Some(&[] as &[u8])).is_none());
    }

    #[test]
    fn test_buffer_of_moves_vec() {
        let data = vec![1u8, 2, 3];
        let ptr = data.as_ptr();
        let buf = buffer_of(Some(data)).unwrap();
        assert_eq!(&buf[..], &[1, 2, 3]);
        assert_eq!(buf.as_ptr(), ptr);
    }

    #[test]
    fn test_buffer_of_empty() {
        assert!(buffer_of(None::<Vec<u8>>).is_none());
        assert!(buffer_of(Some(Vec::<u8>::new())).is_none());
        assert!(buffer_of(Some(&b""[..])).is_none());
    }
}
