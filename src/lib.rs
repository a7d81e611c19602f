//! Pure-Rust SHA-256
//!
//! This crate computes SHA-256 digests as defined in FIPS 180-4.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! hashing pipeline is split into its three stages so each can be inspected
//! and tested on its own:
//!
//! - padding: the message becomes a whole number of 64-byte chunks
//! - schedule: each chunk expands into 64 big-endian words
//! - compression: 64 rounds fold each schedule into the hash state
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 pipeline, the [`hash::Digest`] value type, and the
//!   convenience entry points [`hash::sha256()`] and [`hash::sha256_hex()`].
//!
//! - `diagnostics`
//!   Binary dumps of the padded message and message schedules.
//!
//! - `cli`
//!   Input assembly for the `cryptal` command-line front end.
//!
//! # Example
//!
//! ```
//! let digest = cryptal::hash::sha256(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! Hashing is one-shot: the whole message must be in memory. There is no
//! incremental API and no HMAC.

pub mod cli;
pub mod diagnostics;
pub mod hash;
