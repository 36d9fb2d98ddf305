//! Repeating-key length estimation from index-of-coincidence statistics.
//!
//! Letters enciphered with the same key letter form a Caesar-shifted English
//! sample whose IoC stays near 0.066; letters mixed across key positions drift
//! towards the 0.038 of random text. For each candidate length `L` the
//! ciphertext is split into `L` columns by position mod `L` and the column IoCs
//! are averaged. The first `L` whose average crosses the threshold wins; if
//! none does, the `L` with the highest average is returned.
//!
//! Ciphertext shorter than about twice the maximum length gives unreliable
//! estimates. That is not an error; inspect [`KeyLengthEstimate::scores`].

use tracing::{debug, trace};

use crate::frequency::index_of_coincidence;

/// Longest key length tried by default.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Average column IoC that counts as English-like.
pub const ENGLISH_IOC_THRESHOLD: f64 = 0.060;

/// Average IoC for one candidate key length
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyLengthScore {
    /// Candidate key length
    pub length: usize,
    /// Mean IoC over the `length` columns
    pub average_ioc: f64,
}

/// Outcome of key-length estimation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyLengthEstimate {
    /// Chosen key length (at least 1)
    pub length: usize,
    /// Whether the chosen length crossed the threshold, rather than being the
    /// best of a weak field
    pub crossed_threshold: bool,
    /// Scores for every candidate tried, shortest first
    pub scores: Vec<KeyLengthScore>,
}

impl KeyLengthEstimate {
    /// Score of the chosen length.
    pub fn best_score(&self) -> Option<&KeyLengthScore> {
        self.scores.iter().find(|s| s.length == self.length)
    }
}

/// Configurable key-length estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLengthEstimator {
    max_length: usize,
    threshold: f64,
}

impl Default for KeyLengthEstimator {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_KEY_LENGTH,
            threshold: ENGLISH_IOC_THRESHOLD,
        }
    }
}

impl KeyLengthEstimator {
    /// Estimator trying lengths `1..=max_length` (zero is treated as one).
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length: max_length.max(1),
            ..Self::default()
        }
    }

    /// Override the IoC threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Longest length tried.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// IoC threshold in use.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Estimate the key length of normalized ciphertext.
    ///
    /// Candidates never exceed the text length, so very short text is
    /// scored on fewer lengths.
    pub fn estimate(&self, ciphertext: &[u8]) -> KeyLengthEstimate {
        let upper = self.max_length.min(ciphertext.len()).max(1);

        let scores: Vec<KeyLengthScore> = (1..=upper)
            .map(|length| {
                let average_ioc = average_column_ioc(ciphertext, length);
                trace!(length, average_ioc, "key length candidate");
                KeyLengthScore {
                    length,
                    average_ioc,
                }
            })
            .collect();

        let estimate = if let Some(hit) = scores.iter().find(|s| s.average_ioc > self.threshold) {
            KeyLengthEstimate {
                length: hit.length,
                crossed_threshold: true,
                scores,
            }
        } else {
            let best = scores.iter().fold(scores[0], |best, s| {
                if s.average_ioc > best.average_ioc { *s } else { best }
            });
            KeyLengthEstimate {
                length: best.length,
                crossed_threshold: false,
                scores,
            }
        };

        debug!(
            length = estimate.length,
            crossed_threshold = estimate.crossed_threshold,
            "estimated key length"
        );
        estimate
    }
}

/// Split text into `period` columns by position mod `period`.
///
/// The period is clamped to `1..=text.len()`, so only empty text yields an
/// empty column.
pub fn columns(text: &[u8], period: usize) -> Vec<Vec<u8>> {
    let period = period.clamp(1, text.len().max(1));
    let mut columns = vec![Vec::with_capacity(text.len() / period + 1); period];
    for (i, &b) in text.iter().enumerate() {
        columns[i % period].push(b);
    }
    columns
}

/// Mean IoC of the columns for one period.
pub fn average_column_ioc(text: &[u8], period: usize) -> f64 {
    let columns = columns(text, period);
    let total: f64 = columns.iter().map(index_of_coincidence).sum();
    total / columns.len() as f64
}

/// Most probable key length of raw ciphertext, trying `1..=max_length`.
pub fn estimate_key_length(ciphertext: &str, max_length: usize) -> usize {
    let text = classica_cipher::normalize(ciphertext);
    KeyLengthEstimator::new(max_length)
        .estimate(text.as_bytes())
        .length
}
