//! Error types for cipher operations

use thiserror::Error;

/// Errors that can occur while building or running a cipher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key has too few alphabetic characters after normalization
    #[error("Invalid key: expected at least {min_len} alphabetic characters, got {actual}")]
    InvalidKey {
        /// Minimum number of letters required
        min_len: usize,
        /// Number of letters left after normalization
        actual: usize,
    },

    /// Caesar shift outside 0-25
    #[error("Invalid shift: {0} (must be 0-25)")]
    InvalidShift(u8),

    /// Digraph decryption needs an even number of letters
    #[error("Odd-length digraph input: {0} letters")]
    OddLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CipherError::InvalidKey {
            min_len: 10,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "Invalid key: expected at least 10 alphabetic characters, got 8"
        );

        assert_eq!(
            CipherError::InvalidShift(30).to_string(),
            "Invalid shift: 30 (must be 0-25)"
        );
        assert_eq!(
            CipherError::OddLength(7).to_string(),
            "Odd-length digraph input: 7 letters"
        );
    }
}
