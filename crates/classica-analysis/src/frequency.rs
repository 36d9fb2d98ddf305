//! English letter frequencies and scoring statistics.
//!
//! The reference table is a process-wide constant ([`ENGLISH`]); scoring
//! functions take it by reference so other languages can be plugged in with
//! their own [`FrequencyTable`].

use classica_cipher::alphabet::ALPHABET_LEN;

/// Expected relative frequency of each letter, indexed by residue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyTable {
    frequencies: [f64; ALPHABET_LEN as usize],
}

/// Standard English unigram frequencies (sum to 1.0 within rounding).
pub static ENGLISH: FrequencyTable = FrequencyTable::new([
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, // A-H
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, // I-P
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150, // Q-X
    0.01974, 0.00074, // Y-Z
]);

impl FrequencyTable {
    /// Create a table from per-letter frequencies, `A` first.
    pub const fn new(frequencies: [f64; ALPHABET_LEN as usize]) -> Self {
        Self { frequencies }
    }

    /// Frequency of a letter (either case). Non-letters get 0.0.
    pub fn frequency(&self, letter: u8) -> f64 {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.frequencies[(upper - b'A') as usize]
        } else {
            0.0
        }
    }

    /// Frequency by residue (0-25).
    pub fn expected(&self, residue: usize) -> f64 {
        self.frequencies[residue % ALPHABET_LEN as usize]
    }

    /// All frequencies, `A` first.
    pub fn as_slice(&self) -> &[f64] {
        &self.frequencies
    }

    /// Sum of squared frequencies: the IoC of text drawn from this table.
    pub fn expected_ioc(&self) -> f64 {
        self.frequencies.iter().map(|f| f * f).sum()
    }
}

/// Reference English frequency of a letter.
pub fn reference_frequency(letter: u8) -> f64 {
    ENGLISH.frequency(letter)
}

/// Count letters by residue. Lowercase counts as uppercase; other bytes are
/// ignored.
pub fn letter_counts(text: impl AsRef<[u8]>) -> [usize; ALPHABET_LEN as usize] {
    let mut counts = [0usize; ALPHABET_LEN as usize];
    for &b in text.as_ref() {
        let upper = b.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            counts[(upper - b'A') as usize] += 1;
        }
    }
    counts
}

/// Index of coincidence: `sum n_i (n_i - 1) / (N (N - 1))`.
///
/// Only letters count towards `N`. Returns 0.0 when there are fewer than two.
/// Uniformly random text scores about 0.038, English about 0.066.
pub fn index_of_coincidence(text: impl AsRef<[u8]>) -> f64 {
    let counts = letter_counts(text);
    let n: usize = counts.iter().sum();
    if n < 2 {
        return 0.0;
    }
    let coincidences: usize = counts.iter().map(|&c| c * c.saturating_sub(1)).sum();
    coincidences as f64 / (n * (n - 1)) as f64
}

/// Chi-squared statistic of observed counts against a reference table.
///
/// `sum (observed - n * expected)^2 / (n * expected)` over all letters with a
/// non-zero expectation. Lower is a better fit. Returns `f64::INFINITY` when
/// `n` is zero.
pub fn chi_squared(
    observed: &[usize; ALPHABET_LEN as usize],
    reference: &FrequencyTable,
    n: usize,
) -> f64 {
    if n == 0 {
        return f64::INFINITY;
    }
    let n = n as f64;
    observed
        .iter()
        .enumerate()
        .filter_map(|(residue, &count)| {
            let expected = reference.expected(residue) * n;
            (expected > 0.0).then(|| {
                let diff = count as f64 - expected;
                diff * diff / expected
            })
        })
        .sum()
}

/// English fit on a percentage scale: `sum (obs% - exp%)^2 / exp%`.
///
/// Equivalent to `chi_squared * 100 / n`, so scores are comparable across
/// text lengths. Returns `f64::INFINITY` for text without letters.
pub fn english_score(text: impl AsRef<[u8]>) -> f64 {
    let counts = letter_counts(text);
    let n: usize = counts.iter().sum();
    if n == 0 {
        return f64::INFINITY;
    }
    chi_squared(&counts, &ENGLISH, n) * 100.0 / n as f64
}
