//! Errors reported by the SHA-256 pipeline.
//!
//! The hash itself is total over every message whose bit length fits in 64
//! bits. What remains are resource and range failures on the way in, and
//! malformed text when a digest is parsed back from hex.

/// Errors that can occur while hashing or parsing a digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Sha256Error {
    /// The padded message buffer could not be allocated.
    #[error("failed to allocate {requested} bytes for the padded message")]
    AllocationFailed {
        /// Size of the buffer that was requested, in bytes.
        requested: usize,
    },

    /// The message is too long to pad: either its bit length does not fit
    /// the 64-bit length field, or the padded size overflows `usize`.
    #[error("message of {len} bytes is too long to pad (bit length or padded size out of range)")]
    UnsupportedLength {
        /// Length of the rejected message, in bytes.
        len: usize,
    },

    /// A digest string was not exactly 64 hexadecimal characters.
    #[error("invalid digest hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for Sha256Error {
    fn from(err: hex::FromHexError) -> Self {
        Sha256Error::InvalidHex(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_length_message_covers_both_limits() {
        let msg = Sha256Error::UnsupportedLength { len: usize::MAX }.to_string();

        assert!(msg.contains(&usize::MAX.to_string()));
        assert!(msg.contains("bit length"));
        assert!(msg.contains("padded size"));
    }

    #[test]
    fn hex_errors_convert() {
        let err: Sha256Error = hex::FromHexError::OddLength.into();
        assert!(matches!(err, Sha256Error::InvalidHex(_)));
    }
}
