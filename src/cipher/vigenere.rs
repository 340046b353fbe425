use crate::alphabet;
use crate::cipher::{CaesarCipher, Cipher, CipherMode, CipherType};
use crate::error::{CipherError, Result};
use std::collections::HashMap;

/// Repeating-keyword cipher built from one Caesar cipher per key letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    key: String,
    table: HashMap<u8, CaesarCipher>,
}

impl VigenereCipher {
    pub fn new(key: &str) -> Result<Self> {
        let (key, table) = build_table(key)?;
        Ok(Self { key, table })
    }

    /// Re-key the cipher. On error the current key is kept.
    pub fn set_key(&mut self, key: &str) -> Result<()> {
        let (key, table) = build_table(key)?;
        self.key = key;
        self.table = table;
        Ok(())
    }

    /// The cleaned key: uppercase letters only
    pub fn key(&self) -> &str {
        &self.key
    }
}

fn build_table(raw: &str) -> Result<(String, HashMap<u8, CaesarCipher>)> {
    let key: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if key.is_empty() {
        return Err(CipherError::invalid_key(
            CipherType::Vigenere,
            raw,
            "must contain at least one letter",
        ));
    }

    let mut table = HashMap::new();
    for letter in key.bytes() {
        if let Some(index) = alphabet::index_of(letter) {
            table
                .entry(letter)
                .or_insert_with(|| CaesarCipher::new(index as u64));
        }
    }
    Ok((key, table))
}

impl Cipher for VigenereCipher {
    fn apply_cipher(&self, input: &str, mode: CipherMode) -> String {
        input
            .chars()
            .zip(self.key.as_bytes().iter().cycle())
            .map(|(c, key_letter)| {
                if c.is_ascii() {
                    self.table[key_letter].apply_char(c as u8, mode) as char
                } else {
                    c
                }
            })
            .collect()
    }

    fn cipher_type(&self) -> CipherType {
        CipherType::Vigenere
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PLAIN: &str = "THISISQUITEALONGMESSAGESOTHEKEYWILLNEEDTOREPEATAFEWTIMES";
    const CIPHER: &str = "ALTDWZUFTHLEWZBNQPDGHKPDCALPVSFATWZUIPOHVVPASHXLQSDXTXSZ";

    #[test]
    fn test_known_vector() {
        let cipher = VigenereCipher::new("hello").unwrap();
        assert_eq!(cipher.apply_cipher(PLAIN, CipherMode::Encrypt), CIPHER);
        assert_eq!(cipher.apply_cipher(CIPHER, CipherMode::Decrypt), PLAIN);
    }

    #[test]
    fn test_key_is_cleaned() {
        let cipher = VigenereCipher::new("He11o, World!").unwrap();
        assert_eq!(cipher.key(), "HEOWORLD");
    }

    #[test]
    fn test_table_has_one_entry_per_distinct_letter() {
        let cipher = VigenereCipher::new("hello").unwrap();
        assert_eq!(cipher.table.len(), 4);
        assert_eq!(cipher.table[&b'H'].shift(), 7);
        assert_eq!(cipher.table[&b'L'].shift(), 11);
    }

    #[test]
    fn test_invalid_keys_rejected() {
        for key in ["", "!", "1", "  42 "] {
            assert!(
                matches!(
                    VigenereCipher::new(key),
                    Err(CipherError::InvalidKey { cipher: CipherType::Vigenere, .. })
                ),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_failed_set_key_keeps_previous_key() {
        let mut cipher = VigenereCipher::new("lemon").unwrap();
        assert!(cipher.set_key("123").is_err());
        assert_eq!(cipher.key(), "LEMON");
        cipher.set_key("key").unwrap();
        assert_eq!(cipher.key(), "KEY");
        assert_eq!(cipher.table.len(), 3);
    }

    #[test]
    fn test_length_is_preserved() {
        let cipher = VigenereCipher::new("lemon").unwrap();
        assert_eq!(cipher.apply_cipher("ATTACKATDAWN", CipherMode::Encrypt), "LXFOPVEFRNHR");
        assert_eq!(cipher.apply_cipher("", CipherMode::Encrypt), "");
        assert_eq!(cipher.apply_cipher("A", CipherMode::Encrypt), "L");
    }

    proptest! {
        #[test]
        fn prop_decrypt_inverts_encrypt(key in "[a-zA-Z]{1,12}", text in "[A-Z]{0,200}") {
            let cipher = VigenereCipher::new(&key).unwrap();
            let encrypted = cipher.apply_cipher(&text, CipherMode::Encrypt);
            prop_assert_eq!(encrypted.len(), text.len());
            prop_assert_eq!(cipher.apply_cipher(&encrypted, CipherMode::Decrypt), text);
        }
    }
}
