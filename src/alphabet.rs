//! The fixed 26-letter index space used by every cipher.

/// Uppercase Latin alphabet in order
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet
pub const SIZE: usize = ALPHABET.len();

/// Zero-based position of an uppercase letter, `None` for anything else
pub fn index_of(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Letter at a position, wrapping modulo the alphabet size
pub fn letter_at(index: usize) -> u8 {
    ALPHABET[index % SIZE]
}
