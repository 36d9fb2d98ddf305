//! Ciphertext-only attack on the Vigenere stage.
//!
//! Once the key length `L` is known, column `p` (positions `≡ p mod L`) is a
//! Caesar cipher under key letter `p`. Each of the 26 shifts is tried and the
//! one whose decryption best fits English (lowest chi-squared) becomes the
//! key letter.
//!
//! ```rust
//! use classica_analysis::VigenereBreaker;
//!
//! let breaker = VigenereBreaker::default();
//! let attack = breaker.break_with_key_length("LXFOPVEFRNHR", 5);
//! assert_eq!(attack.key.len(), 5);
//! assert_eq!(attack.column_scores.len(), 5);
//! ```

use classica_cipher::alphabet::{ALPHABET_LEN, letter};
use classica_cipher::vigenere::decrypt_with_shifts;
use classica_cipher::{NormalizedText, normalize};
use tracing::{debug, trace};

use crate::frequency::{ENGLISH, FrequencyTable, chi_squared, letter_counts};
use crate::key_length::{
    KeyLengthEstimate, KeyLengthEstimator, KeyLengthScore, average_column_ioc, columns,
};

/// Best shift for one column
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShiftScore {
    /// Shift (0-25), i.e. the key letter's residue
    pub shift: u8,
    /// Chi-squared of the column decrypted with `shift`
    pub chi_squared: f64,
}

/// Result of a frequency attack
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FrequencyAttack {
    /// Recovered key
    pub key: String,
    /// Ciphertext decrypted with `key`
    pub plaintext: String,
    /// Key-length evidence the attack used
    pub key_length: KeyLengthEstimate,
    /// Winning shift per key position
    pub column_scores: Vec<ShiftScore>,
}

impl FrequencyAttack {
    /// Mean chi-squared over the key positions; lower means more confident.
    pub fn mean_chi_squared(&self) -> f64 {
        if self.column_scores.is_empty() {
            return f64::INFINITY;
        }
        self.column_scores.iter().map(|s| s.chi_squared).sum::<f64>()
            / self.column_scores.len() as f64
    }
}

/// Shift whose decryption of `column` fits `reference` best.
///
/// Ties go to the smaller shift. An empty column yields shift 0 with an
/// infinite score.
pub fn best_shift(column: &[u8], reference: &FrequencyTable) -> ShiftScore {
    let counts = letter_counts(column);
    let n: usize = counts.iter().sum();

    let mut best = ShiftScore {
        shift: 0,
        chi_squared: f64::INFINITY,
    };
    for shift in 0..ALPHABET_LEN {
        // Ciphertext letter c decrypts to c - shift
        let mut shifted = [0usize; ALPHABET_LEN as usize];
        for (cipher_residue, &count) in counts.iter().enumerate() {
            let plain = (cipher_residue + (ALPHABET_LEN - shift) as usize) % ALPHABET_LEN as usize;
            shifted[plain] += count;
        }
        let score = chi_squared(&shifted, reference, n);
        if score < best.chi_squared {
            best = ShiftScore {
                shift,
                chi_squared: score,
            };
        }
    }
    best
}

/// Frequency attack with a configurable estimator and reference table
#[derive(Debug, Clone, Copy)]
pub struct VigenereBreaker {
    estimator: KeyLengthEstimator,
    reference: &'static FrequencyTable,
}

impl Default for VigenereBreaker {
    fn default() -> Self {
        Self {
            estimator: KeyLengthEstimator::default(),
            reference: &ENGLISH,
        }
    }
}

impl VigenereBreaker {
    /// Breaker using a specific key-length estimator.
    pub fn new(estimator: KeyLengthEstimator) -> Self {
        Self {
            estimator,
            ..Self::default()
        }
    }

    /// Score against a different language table.
    #[must_use]
    pub fn with_reference(mut self, reference: &'static FrequencyTable) -> Self {
        self.reference = reference;
        self
    }

    /// The key-length estimator in use.
    pub fn estimator(&self) -> &KeyLengthEstimator {
        &self.estimator
    }

    /// Estimate the key length, then recover the key column by column.
    ///
    /// Always returns a best guess, however weak the statistics.
    pub fn break_with_frequency(&self, ciphertext: &str) -> FrequencyAttack {
        let text = normalize(ciphertext);
        let estimate = self.estimator.estimate(text.as_bytes());
        self.recover(&text, estimate)
    }

    /// Recover a key of a known length.
    ///
    /// The length is clamped to `1..=letters`: columns past the end of the
    /// text would carry no evidence.
    pub fn break_with_key_length(&self, ciphertext: &str, key_length: usize) -> FrequencyAttack {
        let text = normalize(ciphertext);
        let key_length = key_length.clamp(1, text.len().max(1));
        let average_ioc = average_column_ioc(text.as_bytes(), key_length);
        let estimate = KeyLengthEstimate {
            length: key_length,
            crossed_threshold: average_ioc > self.estimator.threshold(),
            scores: vec![KeyLengthScore {
                length: key_length,
                average_ioc,
            }],
        };
        self.recover(&text, estimate)
    }

    fn recover(&self, text: &NormalizedText, estimate: KeyLengthEstimate) -> FrequencyAttack {
        let column_scores: Vec<ShiftScore> = columns(text.as_bytes(), estimate.length)
            .iter()
            .enumerate()
            .map(|(position, column)| {
                let score = best_shift(column, self.reference);
                trace!(
                    position,
                    shift = score.shift,
                    chi_squared = score.chi_squared,
                    "column solved"
                );
                score
            })
            .collect();

        let shifts: Vec<u8> = column_scores.iter().map(|s| s.shift).collect();
        let key: String = shifts.iter().map(|&s| char::from(letter(s))).collect();
        let plaintext = decrypt_with_shifts(text, &shifts).into_string();

        debug!(%key, key_length = estimate.length, "recovered vigenere key");
        FrequencyAttack {
            key,
            plaintext,
            key_length: estimate,
            column_scores,
        }
    }
}

/// Recover `(key, plaintext)` from Vigenere ciphertext with default settings.
pub fn break_with_frequency(ciphertext: &str) -> (String, String) {
    let attack = VigenereBreaker::default().break_with_frequency(ciphertext);
    (attack.key, attack.plaintext)
}
