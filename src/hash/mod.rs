//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation.

pub mod sha256;

/// Re-export of the SHA-256 convenience functions and digest type.
pub use sha256::{Digest, Sha256Error, sha256, sha256_hex};
