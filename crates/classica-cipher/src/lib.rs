//! Classical substitution ciphers over the 26-letter Latin alphabet
//!
//! This crate provides the cipher engine: text normalization, keys, three
//! single-stage ciphers and the two-stage pipeline built from them.
//!
//! # Components
//!
//! - **Normalization**: [`normalize`] strips everything but A-Z and uppercases
//! - **Stages**: [`CaesarCipher`], [`VigenereCipher`] (polyalphabetic) and
//!   [`PlayfairCipher`] (digraph substitution over a 5x5 matrix)
//! - **Pipeline**: [`Pipeline`] runs Vigenere then Playfair with one key
//!
//! # Lossy round trip
//!
//! The Playfair stage merges `J` into `I` and inserts filler letters between
//! doubled letters and after an odd tail. Neither is undone on decryption, so
//! `decrypt(encrypt(p))` returns the canonical form of `p`, not `p` itself.
//! [`Pipeline::canonical_form`] computes that form directly.
//!
//! # Examples
//!
//! ```
//! use classica_cipher::Pipeline;
//!
//! let pipeline = Pipeline::new("MYSECRETKEYWITHATLEASTTENCHARS")?;
//! let ciphertext = pipeline.encrypt("Attack at dawn");
//! let recovered = pipeline.decrypt(&ciphertext)?;
//! assert_eq!(recovered, pipeline.canonical_form("Attack at dawn"));
//! # Ok::<(), classica_cipher::CipherError>(())
//! ```
//!
//! ## Single stages
//!
//! ```
//! use classica_cipher::{CaesarCipher, VigenereCipher};
//!
//! let caesar = CaesarCipher::new(3)?;
//! assert_eq!(caesar.encrypt("abc xyz"), "DEFABC");
//!
//! let vigenere = VigenereCipher::new("LEMON")?;
//! assert_eq!(vigenere.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");
//! # Ok::<(), classica_cipher::CipherError>(())
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod caesar;
pub mod error;
pub mod key;
pub mod pipeline;
pub mod playfair;
pub mod vigenere;

pub use error::CipherError;

// Re-export commonly used types
pub use alphabet::{ALPHABET_LEN, NormalizedText, normalize};
pub use caesar::CaesarCipher;
pub use key::Key;
pub use pipeline::{MIN_KEY_LEN, Pipeline};
pub use playfair::{Digraph, PlayfairCipher, PlayfairMatrix, strip_fillers};
pub use vigenere::VigenereCipher;

/// Result type for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;
