//! Fixed-width big-endian integer encoding.

use log::debug;

use crate::error::CodecError;

/// Encodes `n` as exactly `len` big-endian bytes, zero-padded on the left.
///
/// # Errors
///
/// Returns [`CodecError::Range`] if `n` needs more than `len` bytes.
///
/// # Example
///
/// ```
/// use bufcodec::encode_uint8_array_be;
///
/// assert_eq!(encode_uint8_array_be(256, 2)?, vec![1, 0]);
/// assert_eq!(encode_uint8_array_be(0, 4)?, vec![0, 0, 0, 0]);
/// assert!(encode_uint8_array_be(256, 1).is_err());
/// # Ok::<(), bufcodec::CodecError>(())
/// ```
pub fn encode_uint8_array_be(n: u64, len: usize) -> Result<Vec<u8>, CodecError> {
    if n == 0 {
        return Ok(vec![0u8; len]);
    }

    let be = n.to_be_bytes();
    let significant = &be[(n.leading_zeros() / 8) as usize..];
    if significant.len() > len {
        debug!("cannot encode {} in {} bytes", n, len);
        return Err(CodecError::Range { value: n, len });
    }

    let mut out = vec![0u8; len];
    out[len - significant.len()..].copy_from_slice(significant);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_fills_width() {
        assert_eq!(encode_uint8_array_be(0, 4).unwrap(), vec![0; 4]);
        assert!(encode_uint8_array_be(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_exact_width() {
        assert_eq!(encode_uint8_array_be(255, 1).unwrap(), vec![0xff]);
        assert_eq!(encode_uint8_array_be(256, 2).unwrap(), vec![1, 0]);
        assert_eq!(
            encode_uint8_array_be(0x0102_0304, 4).unwrap(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_left_padding() {
        // DNS-over-TCP style two byte length prefix
        assert_eq!(encode_uint8_array_be(512, 2).unwrap(), vec![0x02, 0x00]);
        assert_eq!(encode_uint8_array_be(1, 3).unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_full_u64() {
        assert_eq!(encode_uint8_array_be(u64::MAX, 8).unwrap(), vec![0xff; 8]);
        assert_eq!(
            encode_uint8_array_be(u64::MAX, 10).unwrap(),
            [vec![0, 0], vec![0xff; 8]].concat()
        );
    }

    #[test]
    fn test_too_narrow() {
        assert_eq!(
            encode_uint8_array_be(256, 1),
            Err(CodecError::Range { value: 256, len: 1 })
        );
        assert!(encode_uint8_array_be(1, 0).is_err());
        assert!(encode_uint8_array_be(1 << 32, 4).is_err());
    }
}
