use crate::cipher::{Cipher, CipherMode};
use rayon::prelude::*;
use tracing::debug;

/// Split text into at most `count` contiguous chunks of `ceil(len / count)`
/// bytes. Trailing chunks may be shorter, or absent when the text is short.
/// A count above the text length yields one-byte chunks.
///
/// Boundaries are nudged forward to the next char boundary so non-ASCII text
/// never splits a code point.
pub fn split_chunks(text: &str, count: usize) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let count = count.clamp(1, text.len());
    let chunk_size = text.len().div_ceil(count);

    let mut chunks = Vec::with_capacity(count);
    let mut start = 0;
    while start < text.len() {
        let mut end = (start + chunk_size).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&text[start..end]);
        start = end;
    }
    chunks
}

/// Reassemble chunk results in their original order
pub fn join_chunks(chunks: &[String]) -> String {
    let mut text = String::with_capacity(chunks.iter().map(|c| c.len()).sum());
    for chunk in chunks {
        text.push_str(chunk);
    }
    text
}

/// Apply a cipher to `count` chunks of `text` in parallel on `pool`.
///
/// Only valid for ciphers with no dependency between characters (Caesar).
/// Each worker reads its own slice and returns its own output; the results
/// come back in chunk order.
pub fn apply_chunked(
    cipher: &dyn Cipher,
    text: &str,
    mode: CipherMode,
    pool: &rayon::ThreadPool,
    count: usize,
) -> String {
    let chunks = split_chunks(text, count);
    debug!(
        "Applying {} cipher across {} chunks ({} bytes)",
        cipher.cipher_type(),
        chunks.len(),
        text.len()
    );

    let outputs: Vec<String> = pool.install(|| {
        chunks
            .par_iter()
            .enumerate()
            .map(|(i, chunk)| {
                debug!("Chunk {} started ({} bytes)", i, chunk.len());
                cipher.apply_cipher(chunk, mode)
            })
            .collect()
    });

    join_chunks(&outputs)
}
