//! Bit-level dumps of the SHA-256 pipeline.
//!
//! These helpers render the padded message and the per-chunk message
//! schedules as binary text. They only format; the stages they call are the
//! same ones [`crate::hash::sha256()`] runs.

use crate::hash::sha256::{CHUNK_LEN, Sha256Error, expand, pad};

/// Renders a byte as 8 binary digits, most significant bit first.
pub fn format_bits(byte: u8) -> String {
    format!("{byte:08b}")
}

/// Renders a 32-bit word as 32 binary digits, most significant bit first.
pub fn format_word_bits(word: u32) -> String {
    format!("{word:032b}")
}

/// Renders a padded buffer with 8 bytes per line, tab separated.
pub fn format_padded(buffer: &[u8]) -> String {
    buffer
        .chunks(8)
        .map(|row| {
            row.iter()
                .map(|&b| format_bits(b))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders schedule words two per line, tab separated.
pub fn format_words(words: &[u32]) -> String {
    words
        .chunks(2)
        .map(|row| {
            row.iter()
                .map(|&w| format_word_bits(w))
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds a full report for `input`: chunk count, padded buffer, and the
/// message schedule of every chunk.
pub fn dump(input: &[u8]) -> Result<String, Sha256Error> {
    let padded = pad(input)?;
    let chunks = padded.len() / CHUNK_LEN;

    let mut out = format!(
        "Chunks: {chunks}\n\nPadded message:\n{}\n",
        format_padded(&padded)
    );

    let (blocks, _) = padded.as_chunks::<CHUNK_LEN>();
    for (index, chunk) in blocks.iter().enumerate() {
        out.push_str(&format!(
            "\nChunk {index} schedule:\n{}\n",
            format_words(&expand(chunk))
        ));
    }

    Ok(out)
}
