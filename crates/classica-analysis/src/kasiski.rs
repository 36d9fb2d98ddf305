//! Kasiski examination.
//!
//! Repeated n-grams in Vigenere ciphertext are often the same plaintext
//! enciphered under the same key alignment, so the distances between them
//! tend to be multiples of the key length. Counting the small factors of all
//! such distances gives a second, independent view of the key length next to
//! the IoC estimator.

use std::collections::BTreeMap;

/// Shortest n-gram tracked by default.
pub const DEFAULT_MIN_NGRAM: usize = 3;

/// Longest n-gram tracked by default.
pub const DEFAULT_MAX_NGRAM: usize = 6;

/// Largest factor counted.
pub const MAX_FACTOR: usize = 60;

/// Repeats, distances and factor counts found in a ciphertext
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KasiskiExamination {
    /// Each repeated n-gram with every start position
    pub repeats: BTreeMap<String, Vec<usize>>,
    /// Distances between consecutive occurrences of the same n-gram, sorted
    pub distances: Vec<usize>,
    /// How many distances each factor in `2..=MAX_FACTOR` divides
    pub factor_counts: BTreeMap<usize, usize>,
}

impl KasiskiExamination {
    /// Factors ranked by count (ties go to the smaller factor).
    pub fn candidate_lengths(&self, limit: usize) -> Vec<usize> {
        let mut ranked: Vec<(usize, usize)> = self
            .factor_counts
            .iter()
            .map(|(&factor, &count)| (factor, count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.into_iter().take(limit).map(|(f, _)| f).collect()
    }
}

/// Examine normalized ciphertext for repeated n-grams of `min_ngram..=max_ngram`
/// letters.
///
/// Only consecutive occurrences are measured, so the distance list stays
/// linear in the text length even for highly repetitive input.
pub fn examine(ciphertext: &[u8], min_ngram: usize, max_ngram: usize) -> KasiskiExamination {
    let min_ngram = min_ngram.max(1);
    let mut positions: BTreeMap<&[u8], Vec<usize>> = BTreeMap::new();
    for n in min_ngram..=max_ngram {
        if n > ciphertext.len() {
            break;
        }
        for (start, window) in ciphertext.windows(n).enumerate() {
            positions.entry(window).or_default().push(start);
        }
    }

    let repeats: BTreeMap<String, Vec<usize>> = positions
        .into_iter()
        .filter(|(_, starts)| starts.len() > 1)
        .map(|(ngram, starts)| (String::from_utf8_lossy(ngram).into_owned(), starts))
        .collect();

    let mut distances: Vec<usize> = repeats
        .values()
        .flat_map(|starts| starts.windows(2).map(|pair| pair[1] - pair[0]))
        .collect();
    distances.sort_unstable();

    let mut factor_counts = BTreeMap::new();
    for &distance in &distances {
        for factor in 2..=MAX_FACTOR {
            if distance % factor == 0 {
                *factor_counts.entry(factor).or_insert(0) += 1;
            }
        }
    }

    KasiskiExamination {
        repeats,
        distances,
        factor_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examine_finds_repeats_and_distances() {
        let exam = examine(b"ABCXXABCYYABC", 3, 3);
        assert_eq!(exam.repeats.get("ABC"), Some(&vec![0, 5, 10]));
        assert_eq!(exam.distances, vec![5, 5]);
        assert_eq!(exam.factor_counts.get(&5), Some(&2));
        assert_eq!(exam.factor_counts.get(&2), None);
        assert_eq!(exam.candidate_lengths(1), vec![5]);
    }

    #[test]
    fn test_periodic_text_keeps_distances_linear() {
        let text = "AB".repeat(10_000);
        let exam = examine(text.as_bytes(), DEFAULT_MIN_NGRAM, DEFAULT_MAX_NGRAM);
        // Two n-grams per size, each seen at every other position
        assert_eq!(exam.repeats.len(), 8);
        assert!(exam.distances.len() < text.len() * 4);
        assert!(exam.distances.iter().all(|&d| d == 2));
        assert_eq!(exam.candidate_lengths(3), vec![2]);
    }

    #[test]
    fn test_examine_without_repeats() {
        let exam = examine(b"ABCDEFGHIJ", DEFAULT_MIN_NGRAM, DEFAULT_MAX_NGRAM);
        assert!(exam.repeats.is_empty());
        assert!(exam.distances.is_empty());
        assert!(exam.candidate_lengths(5).is_empty());
    }

    #[test]
    fn test_examine_short_text() {
        let exam = examine(b"AB", 3, 6);
        assert_eq!(exam, KasiskiExamination::default());
    }

    #[test]
    fn test_candidate_lengths_tie_break() {
        let exam = KasiskiExamination {
            factor_counts: BTreeMap::from([(2, 4), (3, 4), (6, 1)]),
            ..KasiskiExamination::default()
        };
        assert_eq!(exam.candidate_lengths(3), vec![2, 3, 6]);
    }
}
