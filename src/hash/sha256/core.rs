//! SHA-256 core hashing functions
//!
//! This module implements the core logic of the SHA-256 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on one 64-word message schedule
//! - the digest assembler serializing the final hash state
//! - a complete SHA-256 hashing function for arbitrary-length input
//!
//! Chunks are processed strictly in order: the hash state produced by one
//! chunk seeds the next, so a single message cannot be split across threads.
//! Independent messages share nothing but the constant tables.

use tracing::trace;

#[cfg(feature = "speed")]
use super::computations::all_rounds;
use super::computations::{fold, round};
use super::digest::Digest;
use super::error::Sha256Error;
use super::padding::pad;
#[cfg(not(feature = "speed"))]
use super::schedule::expand;
use super::{CHUNK_LEN, H256_INIT, HashState, K256, MessageSchedule};

/// Runs the 64 compression rounds of one chunk.
///
/// The working variables are seeded from `state`, mixed with the round
/// constants and the chunk's message schedule, then added back into the
/// state word by word.
///
/// # Parameters
/// - `words`: The chunk's expanded message schedule
/// - `state`: The hash state before this chunk
///
/// # Returns
/// - The hash state after this chunk
pub fn compress(words: &MessageSchedule, state: HashState) -> HashState {
    let mut v = state;

    for (&k, &w) in K256.iter().zip(words.iter()) {
        round(&mut v, k, w);
    }

    let mut out = state;
    fold(&mut out, &v);

    out
}

/// Serializes the final hash state into a digest.
///
/// Each word is written big-endian, in order `h0..h7`.
pub fn finalize(state: &HashState) -> Digest {
    Digest::from(*state)
}

#[cfg(not(feature = "speed"))]
#[inline(always)]
fn process_chunk(chunk: &[u8; CHUNK_LEN], state: &mut HashState) {
    *state = compress(&expand(chunk), *state);
}

#[cfg(feature = "speed")]
#[inline(always)]
fn process_chunk(chunk: &[u8; CHUNK_LEN], state: &mut HashState) {
    let mut w = [0u32; 16];

    for (slot, bytes) in w.iter_mut().zip(chunk.chunks_exact(4)) {
        *slot = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    all_rounds(state, w);
}

/// Computes the SHA-256 hash of the given input.
///
/// The input is padded once, then every 64-byte chunk is expanded and
/// compressed in order, threading the hash state from [`H256_INIT`].
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Errors
/// Fails only if the padded buffer cannot be built; see [`pad`].
pub fn sha256(input: &[u8]) -> Result<Digest, Sha256Error> {
    let padded = pad(input)?;
    let mut state = H256_INIT;

    // `pad` always yields whole chunks, so the remainder is empty.
    let (chunks, _) = padded.as_chunks::<CHUNK_LEN>();

    for (index, chunk) in chunks.iter().enumerate() {
        trace!(index, "compressing chunk");
        process_chunk(chunk, &mut state);
    }

    Ok(finalize(&state))
}

/// Computes the SHA-256 hash of the given input as 64 lowercase hex
/// characters.
pub fn sha256_hex(input: &[u8]) -> Result<String, Sha256Error> {
    sha256(input).map(|digest| digest.to_hex())
}
