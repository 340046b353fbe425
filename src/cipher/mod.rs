pub mod caesar;
pub mod factory;
pub mod playfair;
pub mod vigenere;

pub use caesar::*;
pub use factory::*;
pub use playfair::*;
pub use vigenere::*;

use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which a cipher is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherMode {
    #[default]
    Encrypt,
    Decrypt,
}

impl std::str::FromStr for CipherMode {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "encrypt" => Ok(Self::Encrypt),
            "decrypt" => Ok(Self::Decrypt),
            _ => Err(CipherError::UnsupportedMode(s.to_string())),
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Available cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CipherType {
    #[default]
    Caesar,
    Playfair,
    Vigenere,
}

impl std::str::FromStr for CipherType {
    type Err = CipherError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "playfair" => Ok(Self::Playfair),
            "vigenere" => Ok(Self::Vigenere),
            _ => Err(CipherError::UnsupportedCipher(s.to_string())),
        }
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caesar => write!(f, "caesar"),
            Self::Playfair => write!(f, "playfair"),
            Self::Vigenere => write!(f, "vigenere"),
        }
    }
}

/// Common interface of every cipher.
///
/// Implementations are immutable once keyed, so a single instance can be
/// shared across the chunk workers of the pipeline.
pub trait Cipher: Send + Sync {
    /// Encrypt or decrypt `input`.
    ///
    /// Input is expected to be uppercase letters only; empty input yields
    /// empty output.
    fn apply_cipher(&self, input: &str, mode: CipherMode) -> String;

    /// Which algorithm this cipher implements
    fn cipher_type(&self) -> CipherType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_type_parsing() {
        assert_eq!("caesar".parse::<CipherType>().unwrap(), CipherType::Caesar);
        assert_eq!("Playfair".parse::<CipherType>().unwrap(), CipherType::Playfair);
        assert_eq!("VIGENERE".parse::<CipherType>().unwrap(), CipherType::Vigenere);
        assert!(matches!(
            "enigma".parse::<CipherType>(),
            Err(CipherError::UnsupportedCipher(_))
        ));
    }

    #[test]
    fn test_cipher_mode_parsing() {
        assert_eq!("encrypt".parse::<CipherMode>().unwrap(), CipherMode::Encrypt);
        assert_eq!("Decrypt".parse::<CipherMode>().unwrap(), CipherMode::Decrypt);
        assert!("sideways".parse::<CipherMode>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for ty in [CipherType::Caesar, CipherType::Playfair, CipherType::Vigenere] {
            assert_eq!(ty.to_string().parse::<CipherType>().unwrap(), ty);
        }
        for mode in [CipherMode::Encrypt, CipherMode::Decrypt] {
            assert_eq!(mode.to_string().parse::<CipherMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_serde_lowercase_tags() {
        let json = serde_json::to_string(&CipherType::Vigenere).unwrap();
        assert_eq!(json, "\"vigenere\"");
        let mode: CipherMode = serde_json::from_str("\"decrypt\"").unwrap();
        assert_eq!(mode, CipherMode::Decrypt);
    }
}
