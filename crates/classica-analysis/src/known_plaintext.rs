//! Known-plaintext key recovery for the Vigenere stage.
//!
//! With plaintext and ciphertext aligned, each position gives its key letter
//! directly: `shift[i] = (c[i] - p[i]) mod 26`. The key is the shortest
//! prefix of the shift sequence that repeats across all of it.

use classica_cipher::alphabet::{ALPHABET_LEN, letter, residue};
use classica_cipher::normalize;
use tracing::debug;

use crate::{AnalysisError, Result};

/// Per-position shifts from aligned plaintext and ciphertext letters.
///
/// Both inputs must be ASCII letters; case is ignored. Stops at the shorter
/// of the two.
pub fn shift_sequence(plaintext: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    plaintext
        .iter()
        .zip(ciphertext)
        .map(|(&p, &c)| {
            let p = residue(p.to_ascii_uppercase());
            let c = residue(c.to_ascii_uppercase());
            (c + ALPHABET_LEN - p) % ALPHABET_LEN
        })
        .collect()
}

/// Smallest `L` such that `shifts[i] == shifts[i % L]` for every `i`.
///
/// A sequence without a shorter period returns its own length; an empty one
/// returns 0.
pub fn minimal_period(shifts: &[u8]) -> usize {
    (1..=shifts.len())
        .find(|&period| {
            shifts
                .iter()
                .enumerate()
                .all(|(i, &shift)| shift == shifts[i % period])
        })
        .unwrap_or(0)
}

/// Recover the Vigenere key from a matched plaintext/ciphertext pair.
///
/// Both sides are normalized first.
///
/// # Errors
///
/// Returns [`AnalysisError::LengthMismatch`] when the normalized lengths
/// differ and [`AnalysisError::EmptyInput`] when there are no letters.
pub fn break_vigenere(known_plaintext: &str, known_ciphertext: &str) -> Result<String> {
    let plaintext = normalize(known_plaintext);
    let ciphertext = normalize(known_ciphertext);

    if plaintext.len() != ciphertext.len() {
        return Err(AnalysisError::LengthMismatch {
            plaintext: plaintext.len(),
            ciphertext: ciphertext.len(),
        });
    }
    if plaintext.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let shifts = shift_sequence(plaintext.as_bytes(), ciphertext.as_bytes());
    let period = minimal_period(&shifts);
    let key: String = shifts[..period]
        .iter()
        .map(|&s| char::from(letter(s)))
        .collect();

    debug!(%key, period, letters = shifts.len(), "recovered key from known plaintext");
    Ok(key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use classica_cipher::VigenereCipher;

    #[test]
    fn test_shift_sequence() {
        assert_eq!(shift_sequence(b"AAZ", b"BZA"), vec![1, 25, 1]);
        // Lowercase bytes count as their uppercase letters
        assert_eq!(shift_sequence(b"aaz", b"BzA"), vec![1, 25, 1]);
        assert_eq!(shift_sequence(b"zz", b"a"), vec![1]);
    }

    #[test]
    fn test_minimal_period() {
        assert_eq!(minimal_period(&[1, 2, 3, 1, 2, 3, 1]), 3);
        assert_eq!(minimal_period(&[4, 4, 4]), 1);
        assert_eq!(minimal_period(&[1, 2, 1, 3]), 4);
        assert_eq!(minimal_period(&[7]), 1);
        assert_eq!(minimal_period(&[]), 0);
    }

    #[test]
    fn test_recovers_full_key_when_text_is_long_enough() {
        let ciphertext = VigenereCipher::new("LEMON").unwrap().encrypt("ATTACKATDAWN");
        assert_eq!(break_vigenere("ATTACKATDAWN", &ciphertext).unwrap(), "LEMON");
    }

    #[test]
    fn test_short_text_returns_shift_prefix() {
        // Only nine plaintext letters: no repetition to detect
        let ciphertext = VigenereCipher::new("SECRETKEYWORD").unwrap().encrypt("HELLOTHER");
        assert_eq!(break_vigenere("HELLOTHER", &ciphertext).unwrap(), "SECRETKEY");
    }

    #[test]
    fn test_normalizes_inputs() {
        let key = break_vigenere("attack at dawn", "LXFO PVEF RNHR").unwrap();
        assert_eq!(key, "LEMON");
    }

    #[test]
    fn test_length_mismatch() {
        let err = break_vigenere("HELLO", "ABC").unwrap_err();
        assert_eq!(
            err,
            AnalysisError::LengthMismatch {
                plaintext: 5,
                ciphertext: 3
            }
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(break_vigenere("", "  ").unwrap_err(), AnalysisError::EmptyInput);
    }
}
