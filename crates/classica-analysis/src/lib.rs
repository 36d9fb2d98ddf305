//! Cryptanalysis for the ciphers in `classica-cipher`
//!
//! The attacks here recover Vigenere keys from ciphertext alone or from a
//! known plaintext/ciphertext pair, and search candidate keys against the
//! full Vigenere + Playfair pipeline.
//!
//! # Components
//!
//! - **Frequency model**: English letter frequencies, index of coincidence,
//!   chi-squared scoring ([`frequency`])
//! - **Key length**: average-IoC estimator ([`key_length`]) and Kasiski
//!   examination ([`kasiski`])
//! - **Key recovery**: per-column chi-squared attack ([`vigenere`]),
//!   known-plaintext recovery ([`known_plaintext`]) and the Caesar special
//!   case ([`caesar`])
//! - **Pipeline attacks**: dictionary search over common key words
//!   ([`dictionary`])
//!
//! Statistical attacks never fail on weak evidence; they return their best
//! guess together with the scores that produced it.
//!
//! # Examples
//!
//! ```
//! use classica_analysis::break_vigenere;
//! use classica_cipher::VigenereCipher;
//!
//! let cipher = VigenereCipher::new("SECRETKEY")?;
//! let ciphertext = cipher.encrypt("HELLOWORLD");
//! let key = break_vigenere("HELLOWORLD", &ciphertext)?;
//! assert_eq!(VigenereCipher::new(&key)?.encrypt("HELLOWORLD"), ciphertext);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod caesar;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod kasiski;
pub mod key_length;
pub mod known_plaintext;
pub mod vigenere;

pub use error::AnalysisError;

// Re-export commonly used types
pub use caesar::{CaesarAttack, break_caesar};
pub use dictionary::{DictionaryAttack, KeyCandidates, PipelineRecovery};
pub use frequency::{
    ENGLISH, FrequencyTable, chi_squared, english_score, index_of_coincidence, letter_counts,
    reference_frequency,
};
pub use kasiski::KasiskiExamination;
pub use key_length::{KeyLengthEstimate, KeyLengthEstimator, KeyLengthScore, estimate_key_length};
pub use known_plaintext::{break_vigenere, minimal_period};
pub use vigenere::{FrequencyAttack, ShiftScore, VigenereBreaker, break_with_frequency};

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
