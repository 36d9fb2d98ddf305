//! Caesar (single shift) cipher.
//!
//! Every letter moves the same number of places along the alphabet. The
//! Vigenere stage is this cipher with a different shift per position.
//!
//! ```rust
//! use classica_cipher::CaesarCipher;
//!
//! let cipher = CaesarCipher::new(13)?;
//! let ciphertext = cipher.encrypt("Hello");
//! assert_eq!(ciphertext, "URYYB");
//! assert_eq!(cipher.decrypt(&ciphertext), "HELLO");
//! # Ok::<(), classica_cipher::CipherError>(())
//! ```

use crate::alphabet::{ALPHABET_LEN, NormalizedText, normalize, shift_backward, shift_forward};
use crate::error::CipherError;

/// Caesar cipher with a fixed shift in 0-25
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarCipher {
    shift: u8,
}

impl CaesarCipher {
    /// Create a cipher shifting by `shift` places.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidShift` if `shift` is 26 or more.
    pub fn new(shift: u8) -> Result<Self, CipherError> {
        if shift >= ALPHABET_LEN {
            return Err(CipherError::InvalidShift(shift));
        }
        Ok(Self { shift })
    }

    /// The configured shift.
    pub fn shift(&self) -> u8 {
        self.shift
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
        NormalizedText::from_letters(text.as_bytes().iter().map(|&b| shift_forward(b, self.shift)))
    }

    /// Decrypt already-normalized text.
    pub fn decrypt_normalized(&self, text: &NormalizedText) -> NormalizedText {
        NormalizedText::from_letters(
            text.as_bytes()
                .iter()
                .map(|&b| shift_backward(b, self.shift)),
        )
    }
}
