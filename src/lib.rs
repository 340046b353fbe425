//! Cipherchain - classical cipher pipeline
//!
//! Transliterates arbitrary text to uppercase letters and runs it through a
//! chain of classical substitution ciphers.
//!
//! ## Ciphers
//!
//! - **Caesar**: fixed shift, key is an unsigned integer (reduced mod 26)
//! - **Playfair**: 5x5 digraph grid from a keyword, J folded into I
//! - **Vigenere**: repeating keyword, one Caesar shift per key letter
//!
//! ## Pipeline
//!
//! ```text
//! Input → Transliterate → Cipher 1 → Cipher 2 → ... → Output
//! ```
//!
//! Decryption applies the same ciphers in reverse order. Caesar stages are
//! split into chunks and processed on a worker pool; the other ciphers carry
//! positional state and run over the whole buffer.
//!
//! ## Example
//!
//! ```
//! use cipherchain::cipher::{make_cipher, CipherMode, CipherType};
//!
//! let cipher = make_cipher(CipherType::Caesar, "10").unwrap();
//! assert_eq!(cipher.apply_cipher("HELLOWORLD", CipherMode::Encrypt), "ROVVYGYBVN");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transliterate;

pub use cipher::{make_cipher, Cipher, CipherMode, CipherType};
pub use config::{PipelineConfig, StageConfig};
pub use error::{CipherError, Result};
pub use pipeline::{run_pipeline, Pipeline};
