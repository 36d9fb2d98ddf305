//! The 26-letter alphabet and text normalization
//!
//! Every stage works on [`NormalizedText`]: uppercase ASCII letters only, in
//! the order they appeared in the raw input. Letters map to residues 0-25
//! (`A` = 0, `Z` = 25).

use std::fmt;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Residue (0-25) of an uppercase letter.
///
/// The caller must pass an uppercase ASCII letter.
#[inline]
pub fn residue(letter: u8) -> u8 {
    letter - b'A'
}

/// Uppercase letter for a residue, reduced mod 26.
#[inline]
pub fn letter(residue: u8) -> u8 {
    b'A' + residue % ALPHABET_LEN
}

/// Shift a letter forward by `by` positions, wrapping Z to A.
#[inline]
pub fn shift_forward(letter_byte: u8, by: u8) -> u8 {
    letter((residue(letter_byte) + by % ALPHABET_LEN) % ALPHABET_LEN)
}

/// Shift a letter backward by `by` positions, wrapping A to Z.
#[inline]
pub fn shift_backward(letter_byte: u8, by: u8) -> u8 {
    letter((residue(letter_byte) + ALPHABET_LEN - by % ALPHABET_LEN) % ALPHABET_LEN)
}

/// Strip every non-letter and uppercase the rest.
///
/// Only ASCII `A-Z`/`a-z` survive; accented letters and other scripts are
/// dropped like punctuation.
///
/// # Examples
///
/// ```
/// use classica_cipher::normalize;
///
/// assert_eq!(normalize("Hello, World! 42").as_str(), "HELLOWORLD");
/// assert!(normalize("123 !?").is_empty());
/// ```
pub fn normalize(text: &str) -> NormalizedText {
    NormalizedText(
        text.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect(),
    )
}

/// Text reduced to uppercase A-Z letters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Normalize raw text.
    pub fn new(text: &str) -> Self {
        normalize(text)
    }

    /// Build from bytes already known to be uppercase letters.
    pub(crate) fn from_letters(letters: impl IntoIterator<Item = u8>) -> Self {
        Self(letters.into_iter().map(char::from).collect())
    }

    /// Build from residues (each reduced mod 26).
    pub fn from_residues(residues: impl IntoIterator<Item = u8>) -> Self {
        Self::from_letters(residues.into_iter().map(letter))
    }

    /// Text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text as uppercase ASCII bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Letter residues in order.
    pub fn residues(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_bytes().iter().map(|&b| residue(b))
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no letters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for NormalizedText {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for NormalizedText {
    fn from(text: &str) -> Self {
        normalize(text)
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}
