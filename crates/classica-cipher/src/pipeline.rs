//! Two-stage Vigenere + Playfair pipeline.
//!
//! Encryption runs Vigenere then Playfair with the same key; decryption runs
//! them in reverse. The two stages hold independent copies of the key.
//!
//! ## Known limitation
//!
//! Playfair padding happens after the Vigenere stage, so whether a filler is
//! inserted depends on the Vigenere output, not on the plaintext. Decryption
//! returns [`Pipeline::canonical_form`] of the plaintext: it equals the
//! plaintext only when the normalized plaintext has even length, contains no
//! doubled letters in a digraph position after the Vigenere stage, and no
//! Vigenere output letter is `J`.

use tracing::debug;

use crate::alphabet::normalize;
use crate::error::CipherError;
use crate::key::Key;
use crate::playfair::{PlayfairCipher, strip_fillers};
use crate::vigenere::VigenereCipher;

/// Minimum number of key letters the pipeline accepts.
pub const MIN_KEY_LEN: usize = 10;

/// Vigenere followed by Playfair under one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    key: Key,
    vigenere: VigenereCipher,
    playfair: PlayfairCipher,
}

impl Pipeline {
    /// Build a pipeline from a raw key string.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key keeps fewer than
    /// [`MIN_KEY_LEN`] letters after normalization.
    ///
    /// # Examples
    ///
    /// ```
    /// use classica_cipher::{CipherError, Pipeline};
    ///
    /// assert!(Pipeline::new("TENCHARACTERSKEY").is_ok());
    /// assert!(matches!(
    ///     Pipeline::new("SHORTKEY"),
    ///     Err(CipherError::InvalidKey { min_len: 10, actual: 8 })
    /// ));
    /// ```
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let key = Key::with_min_len(key, MIN_KEY_LEN)?;
        debug!(key_len = key.len(), "building cipher pipeline");
        Ok(Self {
            vigenere: VigenereCipher::from_key(key.clone()),
            playfair: PlayfairCipher::from_key(&key),
            key,
        })
    }

    /// The normalized key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The Vigenere stage.
    pub fn vigenere(&self) -> &VigenereCipher {
        &self.vigenere
    }

    /// The Playfair stage.
    pub fn playfair(&self) -> &PlayfairCipher {
        &self.playfair
    }

    /// Encrypt raw plaintext. Empty input gives empty output.
    pub fn encrypt(&self, plaintext: &str) -> String {
        let text = normalize(plaintext);
        let stage1 = self.vigenere.encrypt_normalized(&text);
        self.playfair.encrypt_normalized(&stage1).into_string()
    }

    /// Decrypt raw ciphertext, best effort (see the module docs).
    ///
    /// # Errors
    ///
    /// Returns `CipherError::OddLength` if the normalized ciphertext has an
    /// odd number of letters; such text cannot come from [`Pipeline::encrypt`].
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let text = normalize(ciphertext);
        let stage1 = self.playfair.decrypt_normalized(&text)?;
        Ok(self.vigenere.decrypt_normalized(&stage1).into_string())
    }

    /// Decrypt, dropping likely Playfair fillers before the Vigenere stage.
    ///
    /// Removing the fillers keeps the Vigenere key aligned, so the result is
    /// usually the plaintext up to merged `J`s. See [`strip_fillers`] for
    /// where the heuristic fails.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::OddLength` for odd-length ciphertext.
    pub fn decrypt_stripped(&self, ciphertext: &str) -> Result<String, CipherError> {
        let text = normalize(ciphertext);
        let stage1 = strip_fillers(&self.playfair.decrypt_normalized(&text)?);
        Ok(self.vigenere.decrypt_normalized(&stage1).into_string())
    }

    /// What `decrypt(encrypt(plaintext))` returns for this key.
    pub fn canonical_form(&self, plaintext: &str) -> String {
        let stage1 = self.vigenere.encrypt_normalized(&normalize(plaintext));
        let padded = PlayfairCipher::prepare(&stage1);
        self.vigenere.decrypt_normalized(&padded).into_string()
    }
}
