//! Vigenere (repeating-key polyalphabetic) cipher.
//!
//! Letter `i` of the text is shifted by key letter `i mod len(key)`:
//! `c = (p + k) mod 26` to encrypt and `p = (c - k + 26) mod 26` to decrypt.
//! Unlike the Playfair stage this round-trips exactly.
//!
//! The free functions [`encrypt_with_shifts`] and [`decrypt_with_shifts`] take
//! raw shift values so that cryptanalysis code can apply candidate keys
//! without building a [`Key`] first.

use crate::alphabet::{NormalizedText, normalize, shift_backward, shift_forward};
use crate::error::CipherError;
use crate::key::Key;

/// Vigenere cipher bound to one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    key: Key,
    shifts: Vec<u8>,
}

impl VigenereCipher {
    /// Create a cipher from a raw key string.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` if the key has no letters.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self::from_key(Key::new(key)?))
    }

    /// Create a cipher from a parsed key.
    pub fn from_key(key: Key) -> Self {
        let shifts = key.shifts();
        Self { key, shifts }
    }

    /// The key in use.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Normalize and encrypt raw text.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.encrypt_normalized(&normalize(plaintext)).into_string()
    }

    /// Normalize and decrypt raw text.
    pub fn decrypt(&self, ciphertext: &str) -> String {
        self.decrypt_normalized(&normalize(ciphertext)).into_string()
    }

    /// Encrypt already-normalized text.
    pub fn encrypt_normalized(&self, text: &NormalizedText) -> NormalizedText {
        encrypt_with_shifts(text, &self.shifts)
    }

    /// Decrypt already-normalized text.
    pub fn decrypt_normalized(&self, text: &NormalizedText) -> NormalizedText {
        decrypt_with_shifts(text, &self.shifts)
    }
}

/// Encrypt with a repeating sequence of shifts.
///
/// An empty shift sequence leaves the text unchanged.
pub fn encrypt_with_shifts(text: &NormalizedText, shifts: &[u8]) -> NormalizedText {
    if shifts.is_empty() {
        return text.clone();
    }
    NormalizedText::from_letters(
        text.as_bytes()
            .iter()
            .zip(shifts.iter().cycle())
            .map(|(&b, &k)| shift_forward(b, k)),
    )
}

/// Decrypt with a repeating sequence of shifts.
///
/// An empty shift sequence leaves the text unchanged.
pub fn decrypt_with_shifts(text: &NormalizedText, shifts: &[u8]) -> NormalizedText {
    if shifts.is_empty() {
        return text.clone();
    }
    NormalizedText::from_letters(
        text.as_bytes()
            .iter()
            .zip(shifts.iter().cycle())
            .map(|(&b, &k)| shift_backward(b, k)),
    )
}
