//! Caesar breaker: a Vigenere attack with a key length of one.

use classica_cipher::normalize;
use classica_cipher::vigenere::decrypt_with_shifts;
use tracing::debug;

use crate::frequency::ENGLISH;
use crate::vigenere::best_shift;

/// Result of breaking a Caesar cipher
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaesarAttack {
    /// Recovered shift (0-25)
    pub shift: u8,
    /// Ciphertext decrypted with `shift`
    pub plaintext: String,
    /// Chi-squared of `plaintext` against English
    pub chi_squared: f64,
}

/// Recover the shift of a Caesar ciphertext by chi-squared over the whole text.
///
/// Text without letters yields shift 0 and an empty plaintext.
///
/// ```rust
/// use classica_analysis::break_caesar;
///
/// let attack = break_caesar("WKH TXLFN EURZQ IRA MXPSV RYHU WKH ODCB GRJ");
/// assert_eq!(attack.shift, 3);
/// assert_eq!(attack.plaintext, "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG");
/// ```
pub fn break_caesar(ciphertext: &str) -> CaesarAttack {
    let text = normalize(ciphertext);
    let score = best_shift(text.as_bytes(), &ENGLISH);
    let plaintext = decrypt_with_shifts(&text, &[score.shift]);

    debug!(shift = score.shift, chi_squared = score.chi_squared, "recovered caesar shift");
    CaesarAttack {
        shift: score.shift,
        plaintext: plaintext.into_string(),
        chi_squared: score.chi_squared,
    }
}
