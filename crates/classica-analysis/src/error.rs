//! Error types for analysis operations.
//!
//! Weak statistics are never an error; these cover malformed input only.

use classica_cipher::CipherError;
use thiserror::Error;

/// Errors that can occur during analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Known plaintext and ciphertext differ in length
    #[error("Length mismatch: plaintext has {plaintext} letters, ciphertext has {ciphertext}")]
    LengthMismatch {
        /// Letters in the normalized plaintext
        plaintext: usize,
        /// Letters in the normalized ciphertext
        ciphertext: usize,
    },

    /// No letters to work with
    #[error("Empty input: no alphabetic characters")]
    EmptyInput,

    /// Too little text for the requested attack
    #[error("Insufficient data: need at least {required} letters, got {actual}")]
    InsufficientData {
        /// Minimum letters the attack needs
        required: usize,
        /// Letters supplied
        actual: usize,
    },

    /// Error from the cipher engine
    #[error("Cipher error: {0}")]
    Cipher(#[from] CipherError),
}
