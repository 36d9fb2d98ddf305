//! Cipher keys
//!
//! A key is a non-empty run of letters. Raw key strings are normalized the
//! same way as text, so `"my secret"` and `"MYSECRET"` are the same key.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{NormalizedText, normalize};
use crate::error::CipherError;

/// A normalized, non-empty alphabetic key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(NormalizedText);

impl Key {
    /// Parse a key that must keep at least one letter after normalization.
    pub fn new(raw: &str) -> Result<Self, CipherError> {
        Self::with_min_len(raw, 1)
    }

    /// Parse a key that must keep at least `min_len` letters.
    ///
    /// A `min_len` of zero is treated as one; keys are never empty.
    pub fn with_min_len(raw: &str, min_len: usize) -> Result<Self, CipherError> {
        let min_len = min_len.max(1);
        let letters = normalize(raw);
        if letters.len() < min_len {
            return Err(CipherError::InvalidKey {
                min_len,
                actual: letters.len(),
            });
        }
        Ok(Self(letters))
    }

    /// Build a key from shift values (each reduced mod 26).
    pub fn from_shifts(shifts: &[u8]) -> Result<Self, CipherError> {
        if shifts.is_empty() {
            return Err(CipherError::InvalidKey {
                min_len: 1,
                actual: 0,
            });
        }
        Ok(Self(NormalizedText::from_residues(shifts.iter().copied())))
    }

    /// Key letters.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Key as normalized text.
    pub fn letters(&self) -> &NormalizedText {
        &self.0
    }

    /// Number of letters in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shift values (residues) of the key letters.
    pub fn shifts(&self) -> Vec<u8> {
        self.0.residues().collect()
    }

    /// Shift applied at text position `index` (the key repeats).
    pub fn shift_at(&self, index: usize) -> u8 {
        let bytes = self.0.as_bytes();
        crate::alphabet::residue(bytes[index % bytes.len()])
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
