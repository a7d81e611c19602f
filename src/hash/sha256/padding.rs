//! SHA-256 message padding
//!
//! A message of `n` bytes is extended to a whole number of 64-byte chunks:
//! the message itself, a single `0x80` separator, zero fill, and finally the
//! message length in bits as a big-endian `u64` occupying the last 8 bytes.
//!
//! The separator and the length field always fit, so the padded length is
//! `64 * ceil((n + 9) / 64)`.

use tracing::{debug, warn};

use super::CHUNK_LEN;
use super::error::Sha256Error;

/// Separator byte appended directly after the message.
const SEPARATOR: u8 = 0x80;

/// Width of the trailing length field in bytes.
const LENGTH_FIELD: usize = 8;

/// Returns the number of 64-byte chunks needed to pad a message of `len`
/// bytes, or `None` if the padded size does not fit in `usize`.
pub fn chunk_count(len: usize) -> Option<usize> {
    let chunks = len.checked_add(1 + LENGTH_FIELD)?.div_ceil(CHUNK_LEN);
    chunks.checked_mul(CHUNK_LEN)?;

    Some(chunks)
}

/// Message length in bits, if it can be encoded in the 64-bit length field.
fn bit_length(len: usize) -> Option<u64> {
    u64::try_from(len).ok()?.checked_mul(8)
}

/// Pads `input` into an owned buffer of whole chunks.
///
/// # Errors
/// - [`Sha256Error::UnsupportedLength`] when the message is 2^61 bytes or
///   longer, since its bit length would wrap the length field.
/// - [`Sha256Error::AllocationFailed`] when the padded buffer cannot be
///   reserved.
pub fn pad(input: &[u8]) -> Result<Vec<u8>, Sha256Error> {
    let len = input.len();

    let (Some(bits), Some(chunks)) = (bit_length(len), chunk_count(len)) else {
        warn!(len, "rejecting message too long for the SHA-256 length field");
        return Err(Sha256Error::UnsupportedLength { len });
    };

    let total = chunks * CHUNK_LEN;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(total)
        .map_err(|_| Sha256Error::AllocationFailed { requested: total })?;

    buffer.extend_from_slice(input);
    buffer.push(SEPARATOR);
    buffer.resize(total - LENGTH_FIELD, 0);
    buffer.extend_from_slice(&bits.to_be_bytes());

    debug!(len, chunks, "padded message");

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_one_chunk() {
        let padded = pad(&[]).unwrap();

        let mut expected = [0u8; 64];
        expected[0] = 0x80;

        assert_eq!(padded, expected);
    }

    #[test]
    fn short_message_layout() {
        let padded = pad(b"ABC").unwrap();

        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..4], &[b'A', b'B', b'C', 0x80]);
        assert!(padded[4..63].iter().all(|&b| b == 0));
        assert_eq!(padded[63], 24);
    }

    #[test]
    fn boundary_lengths() {
        // (message length, expected chunk count)
        for (len, chunks) in [(55, 1), (56, 2), (63, 2), (64, 2), (65, 2), (119, 2), (120, 3)] {
            let msg = vec![0x61u8; len];
            let padded = pad(&msg).unwrap();

            assert_eq!(chunk_count(len), Some(chunks), "len {len}");
            assert_eq!(padded.len(), chunks * 64, "len {len}");
            assert_eq!(&padded[..len], &msg[..]);
            assert_eq!(padded[len], 0x80, "len {len}");

            let tail: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
            assert_eq!(u64::from_be_bytes(tail), (len as u64) * 8);
        }
    }

    #[test]
    fn separator_directly_before_length_at_55() {
        let padded = pad(&[0xFF; 55]).unwrap();

        assert_eq!(padded.len(), 64);
        assert_eq!(padded[55], 0x80);
        assert_eq!(&padded[56..], &440u64.to_be_bytes());
    }

    #[test]
    fn chunk_count_overflow() {
        assert_eq!(chunk_count(usize::MAX), None);
        assert_eq!(chunk_count(usize::MAX - 8), None);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn bit_length_limit() {
        assert_eq!(bit_length((1usize << 61) - 1), Some(u64::MAX - 7));
        assert_eq!(bit_length(1usize << 61), None);
    }
}
