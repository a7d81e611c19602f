//! SHA-256 digest value
//!
//! A [`Digest`] is the serialized final hash state: eight 32-bit words
//! written out big-endian, 32 bytes in total. Its canonical text form is
//! 64 lowercase hexadecimal characters.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

use super::error::Sha256Error;
use super::{DIGEST_LEN, HashState};

/// A 256-bit SHA-256 digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Borrows the 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hexadecimal form, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Uppercase hexadecimal form, 64 characters.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Number of bits that differ between two digests.
    pub fn hamming_distance(&self, other: &Digest) -> u32 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}

/// Serializes a hash state word by word, each word big-endian.
impl From<HashState> for Digest {
    fn from(state: HashState) -> Self {
        let mut out = [0u8; DIGEST_LEN];

        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest(out)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_upper())
    }
}

/// Parses 64 hexadecimal characters, either case.
impl FromStr for Digest {
    type Err = Sha256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s.trim(), &mut out)?;

        Ok(Digest(out))
    }
}
