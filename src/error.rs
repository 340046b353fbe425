use crate::cipher::CipherType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key for {cipher} cipher: the supplied key ({key:?}) {reason}")]
    InvalidKey {
        cipher: CipherType,
        key: String,
        reason: String,
    },

    #[error("Unsupported cipher: {0}. Must be caesar, playfair or vigenere")]
    UnsupportedCipher(String),

    #[error("Unsupported mode: {0}. Must be encrypt or decrypt")]
    UnsupportedMode(String),

    #[error("Inconsistent arguments: received {types} cipher types and {keys} keys")]
    InconsistentArguments { types: usize, keys: usize },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

impl CipherError {
    pub(crate) fn invalid_key(cipher: CipherType, key: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            cipher,
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
