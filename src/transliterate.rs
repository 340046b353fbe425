//! Pre-pass that reduces arbitrary text to the uppercase letters the ciphers
//! operate on.
//!
//! - ASCII letters are uppercased
//! - Digits are spelled out in English, e.g. `'7'` becomes `"SEVEN"`
//! - Everything else (whitespace, punctuation, non-ASCII) is dropped

const DIGIT_WORDS: [&str; 10] = [
    "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
];

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Transliterate a single character; dropped characters give `""`
pub fn transform_char(c: char) -> &'static str {
    if c.is_ascii_alphabetic() {
        LETTERS[(c.to_ascii_uppercase() as u8 - b'A') as usize]
    } else if let Some(digit) = c.to_digit(10) {
        DIGIT_WORDS[digit as usize]
    } else {
        ""
    }
}

/// Transliterate a whole buffer
pub fn transliterate(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        output.push_str(transform_char(c));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_uppercased() {
        let upper = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let lower = "abcdefghijklmnopqrstuvwxyz";
        for (u, l) in upper.chars().zip(lower.chars()) {
            assert_eq!(transform_char(l), u.to_string());
            assert_eq!(transform_char(u), u.to_string());
        }
    }

    #[test]
    fn test_digits_are_spelled_out() {
        let expected = [
            "ZERO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE",
        ];
        for (d, word) in ('0'..='9').zip(expected) {
            assert_eq!(transform_char(d), word);
        }
    }

    #[test]
    fn test_special_characters_removed() {
        for c in "!@£$%^&*()-=][;'/.,<>?:|}{+_ \t\né٣".chars() {
            assert_eq!(transform_char(c), "", "char {:?}", c);
        }
    }

    #[test]
    fn test_transliterate_buffer() {
        assert_eq!(
            transliterate("Bob is some sort of junior complex xenophone 1 0 thing!\n"),
            "BOBISSOMESORTOFJUNIORCOMPLEXXENOPHONEONEZEROTHING"
        );
        assert_eq!(transliterate(""), "");
    }

    #[test]
    fn test_buffer_matches_per_char() {
        let text = "Hello, World 2024?";
        let per_char: String = text.chars().map(transform_char).collect();
        assert_eq!(transliterate(text), per_char);
    }
}
