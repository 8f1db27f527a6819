//! BER definite length octets
//!
//! Short form:
//! ```text
//! Byte: 0 L L L L L L L          (length 0-127)
//! ```
//!
//! Long form:
//! ```text
//! First byte:  1 N N N N N N N   (N = number of length bytes, at most 4)
//! Following:   L L L L L L L L   (big-endian length value)
//! ```
//!
//! Indefinite length (`0x80` followed by end-of-contents) is not supported;
//! `0x80` is read as a long form with zero length bytes, i.e. length 0.

use bytes::BufMut;
use tlv_core::{TlvError, TlvResult};

/// Largest length that fits the short form
pub const MAX_SHORT_LENGTH: usize = 0x7F;

/// Maximum number of length bytes following a long form prefix
pub const MAX_LENGTH_OCTETS: usize = 4;

const LONG_FORM: u8 = 0x80;

/// Decode length octets from the start of `data`
///
/// # Returns
/// Returns `Ok((length, bytes_consumed))` if successful
///
/// # Error Handling
/// - `UnexpectedEnd` if `data` ends inside the length octets
/// - `BadLength` if the long form announces more than 4 length bytes
pub fn decode_length(data: &[u8]) -> TlvResult<(usize, usize)> {
    let Some(&first) = data.first() else {
        return Err(TlvError::unexpected_end(0, "no length octet left"));
    };

    if first & LONG_FORM == 0 {
        return Ok((usize::from(first), 1));
    }

    let num_bytes = usize::from(first & !LONG_FORM);
    if num_bytes > MAX_LENGTH_OCTETS {
        return Err(TlvError::bad_length(
            1,
            format!("{} length bytes announced (max {})", num_bytes, MAX_LENGTH_OCTETS),
        ));
    }

    let Some(bytes) = data.get(1..1 + num_bytes) else {
        return Err(TlvError::unexpected_end(
            1,
            format!(
                "need {} length bytes, have {}",
                num_bytes,
                data.len() - 1
            ),
        ));
    };

    let length = bytes
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
    Ok((length, 1 + num_bytes))
}

/// Number of octets `encode_length` writes for `length`
pub fn encoded_length_size(length: usize) -> usize {
    if length <= MAX_SHORT_LENGTH {
        1
    } else {
        1 + significant_bytes(length.min(MAX_LENGTH))
    }
}

/// Largest length the long form can carry in 4 octets
pub const MAX_LENGTH: usize = u32::MAX as usize;

/// Write the minimal definite length encoding of `length`
///
/// # Limits
/// Lengths above [`MAX_LENGTH`] need more than 4 length octets, which
/// [`decode_length`] rejects. They are written as [`MAX_LENGTH`] and
/// logged at `warn`; the element header then no longer matches its value.
pub fn encode_length<B: BufMut>(length: usize, out: &mut B) {
    if length <= MAX_SHORT_LENGTH {
        out.put_u8(length as u8);
        return;
    }

    let length = if length > MAX_LENGTH {
        log::warn!("length {} exceeds {}, clamped", length, MAX_LENGTH);
        MAX_LENGTH
    } else {
        length
    };
    let num_bytes = significant_bytes(length);
    out.put_u8(LONG_FORM | num_bytes as u8);
    out.put_uint(length as u64, num_bytes);
}

fn significant_bytes(value: usize) -> usize {
    let bits = usize::BITS - value.leading_zeros();
    (bits as usize).div_ceil(8).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tlv_core::StatusKind;

    fn encode(length: usize) -> Vec<u8> {
        let mut out = Vec::new();
        encode_length(length, &mut out);
        out
    }

    #[test]
    fn test_length_short() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(100), vec![100]);
        assert_eq!(encode(127), vec![0x7F]);
        assert_eq!(encoded_length_size(127), 1);
    }

    #[test]
    fn test_length_long() {
        assert_eq!(encode(128), vec![0x81, 0x80]);
        assert_eq!(encode(255), vec![0x81, 0xFF]);
        assert_eq!(encode(256), vec![0x82, 0x01, 0x00]);
        assert_eq!(encode(257), vec![0x82, 0x01, 0x01]);
        assert_eq!(encode(0x01_0000), vec![0x83, 0x01, 0x00, 0x00]);
        assert_eq!(encode(0xFFFF_FFFF), vec![0x84, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encoded_length_size(128), 2);
        assert_eq!(encoded_length_size(256), 3);
    }

    #[test]
    fn test_length_upper_limit() {
        assert_eq!(encode(MAX_LENGTH), vec![0x84, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encoded_length_size(MAX_LENGTH), 5);
        assert_eq!(decode_length(&encode(MAX_LENGTH)).unwrap(), (MAX_LENGTH, 5));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_length_over_limit_clamped() {
        let over = MAX_LENGTH + 1;
        let out = encode(over);
        assert_eq!(out, vec![0x84, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(encoded_length_size(over), 5);
        assert!(decode_length(&out).is_ok());
    }

    #[test]
    fn test_length_decode() {
        assert_eq!(decode_length(&[100]).unwrap(), (100, 1));
        assert_eq!(decode_length(&[0x81, 0xFF]).unwrap(), (255, 2));
        assert_eq!(decode_length(&[0x82, 0x01, 0x01, 0xAA]).unwrap(), (257, 3));
        assert_eq!(decode_length(&[0x80]).unwrap(), (0, 1));
    }

    #[test]
    fn test_length_decode_too_many_octets() {
        let err = decode_length(&[0x85, 0, 0, 0, 0, 1]).unwrap_err();
        assert_eq!(err.kind(), StatusKind::BadLength);
    }

    #[test]
    fn test_length_decode_truncated() {
        let err = decode_length(&[]).unwrap_err();
        assert_eq!(err.kind(), StatusKind::UnexpectedEnd);

        let err = decode_length(&[0x82, 0x01]).unwrap_err();
        assert_eq!(err.kind(), StatusKind::UnexpectedEnd);
        assert_eq!(err.consumed(), 1);
    }
}
