use crate::cipher::{CaesarCipher, Cipher, CipherType, PlayfairCipher, VigenereCipher};
use crate::error::Result;

/// Construct a cipher of the requested type from a raw key string.
///
/// Key validation failures from the concrete constructor are returned as-is.
pub fn make_cipher(cipher_type: CipherType, key: &str) -> Result<Box<dyn Cipher>> {
    let cipher: Box<dyn Cipher> = match cipher_type {
        CipherType::Caesar => Box::new(CaesarCipher::from_key(key)?),
        CipherType::Playfair => Box::new(PlayfairCipher::new(key)),
        CipherType::Vigenere => Box::new(VigenereCipher::new(key)?),
    };
    Ok(cipher)
}
