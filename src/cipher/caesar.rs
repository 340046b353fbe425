use crate::alphabet::{self, SIZE};
use crate::cipher::{Cipher, CipherMode, CipherType};
use crate::error::{CipherError, Result};

/// Fixed-shift substitution over the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    shift: usize,
}

impl CaesarCipher {
    /// Create a cipher with the given shift, reduced modulo 26
    pub fn new(shift: u64) -> Self {
        Self {
            shift: (shift % SIZE as u64) as usize,
        }
    }

    /// Parse a key string into a shift.
    ///
    /// The empty string is the null key (shift 0). Anything other than an
    /// unsigned decimal integer that fits in a `u64` is rejected.
    pub fn from_key(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Ok(Self::new(0));
        }
        if key.starts_with('-') {
            return Err(CipherError::invalid_key(
                CipherType::Caesar,
                key,
                "must not be negative",
            ));
        }
        if !key.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CipherError::invalid_key(
                CipherType::Caesar,
                key,
                "must be an unsigned integer",
            ));
        }
        let shift: u64 = key.parse().map_err(|_| {
            CipherError::invalid_key(CipherType::Caesar, key, "is out of range")
        })?;
        Ok(Self::new(shift))
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Shift a single letter. Bytes outside the alphabet come back unchanged.
    pub fn apply_char(&self, letter: u8, mode: CipherMode) -> u8 {
        let Some(index) = alphabet::index_of(letter) else {
            return letter;
        };
        match mode {
            CipherMode::Encrypt => alphabet::letter_at(index + self.shift),
            CipherMode::Decrypt => alphabet::letter_at(index + SIZE - self.shift),
        }
    }
}

impl Cipher for CaesarCipher {
    fn apply_cipher(&self, input: &str, mode: CipherMode) -> String {
        input
            .chars()
            .map(|c| {
                if c.is_ascii() {
                    self.apply_char(c as u8, mode) as char
                } else {
                    c
                }
            })
            .collect()
    }

    fn cipher_type(&self) -> CipherType {
        CipherType::Caesar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_vector() {
        let cipher = CaesarCipher::new(10);
        assert_eq!(cipher.apply_cipher("HELLOWORLD", CipherMode::Encrypt), "ROVVYGYBVN");
        assert_eq!(cipher.apply_cipher("ROVVYGYBVN", CipherMode::Decrypt), "HELLOWORLD");
    }

    #[test]
    fn test_shift_wraps_modulo_alphabet() {
        assert_eq!(CaesarCipher::new(36).shift(), 10);
        assert_eq!(CaesarCipher::new(26).shift(), 0);
        assert_eq!(CaesarCipher::from_key("62").unwrap().shift(), 10);
    }

    #[test]
    fn test_wraparound_at_alphabet_end() {
        let cipher = CaesarCipher::new(3);
        assert_eq!(cipher.apply_cipher("XYZ", CipherMode::Encrypt), "ABC");
        assert_eq!(cipher.apply_cipher("ABC", CipherMode::Decrypt), "XYZ");
    }

    #[test]
    fn test_empty_key_is_null_shift() {
        let cipher = CaesarCipher::from_key("").unwrap();
        assert_eq!(cipher.shift(), 0);
        assert_eq!(cipher.apply_cipher("UNCHANGED", CipherMode::Encrypt), "UNCHANGED");
    }

    #[test]
    fn test_empty_input() {
        let cipher = CaesarCipher::new(5);
        assert_eq!(cipher.apply_cipher("", CipherMode::Encrypt), "");
        assert_eq!(cipher.apply_cipher("", CipherMode::Decrypt), "");
    }

    #[test]
    fn test_invalid_keys_rejected() {
        for key in ["-1", "hello", "12a", "+3", " 4", "99999999999999999999999"] {
            assert!(
                matches!(
                    CaesarCipher::from_key(key),
                    Err(CipherError::InvalidKey { cipher: CipherType::Caesar, .. })
                ),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_max_u64_key_accepted() {
        let cipher = CaesarCipher::from_key(&u64::MAX.to_string()).unwrap();
        assert_eq!(cipher.shift(), (u64::MAX % 26) as usize);
    }

    #[test]
    fn test_single_char_operation() {
        let cipher = CaesarCipher::new(1);
        assert_eq!(cipher.apply_char(b'A', CipherMode::Encrypt), b'B');
        assert_eq!(cipher.apply_char(b'A', CipherMode::Decrypt), b'Z');
    }

    proptest! {
        #[test]
        fn prop_decrypt_inverts_encrypt(shift in 0u64..26, text in "[A-Z]{0,200}") {
            let cipher = CaesarCipher::new(shift);
            let encrypted = cipher.apply_cipher(&text, CipherMode::Encrypt);
            prop_assert_eq!(encrypted.len(), text.len());
            prop_assert_eq!(cipher.apply_cipher(&encrypted, CipherMode::Decrypt), text);
        }
    }
}
