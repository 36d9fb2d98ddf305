//! Dictionary attacks on the full Vigenere + Playfair pipeline.
//!
//! Playfair substitution hides the Vigenere column statistics, so the
//! composed cipher is attacked by trying keys built from common key words.
//! Two variants exist:
//!
//! - **Ciphertext only**: decrypt with every candidate and keep the one whose
//!   output scores closest to English.
//! - **Known plaintext**: encrypt the known plaintext with every candidate and
//!   keep the one whose output matches the ciphertext best.
//!
//! ```rust
//! use classica_analysis::DictionaryAttack;
//! use classica_cipher::Pipeline;
//!
//! let ciphertext = Pipeline::new("SECRETKEYWORD")?.encrypt("THEQUICKBROWNFOX");
//! let recovery = DictionaryAttack::default()
//!     .break_known_plaintext("THEQUICKBROWNFOX", &ciphertext)?
//!     .expect("key is in the word list");
//! assert_eq!(recovery.key, "SECRETKEYWORD");
//! assert!(recovery.exact);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashSet;

use classica_cipher::{CipherError, MIN_KEY_LEN, Pipeline, normalize};
use tracing::{debug, trace};

use crate::frequency::english_score;
use crate::{AnalysisError, Result};

/// Words commonly found in human-chosen keys.
pub const COMMON_KEY_WORDS: &[&str] = &[
    "SECRET", "KEY", "WORD", "PASSWORD", "PASS", "CODE", "CIPHER", "ENCRYPT", "DECRYPT",
    "SECURE", "HIDDEN", "LOCK", "PRIVATE", "MESSAGE", "TEXT", "CRYPTO", "SECURITY", "ACCESS",
    "LOGIN", "ADMIN", "MASTER", "MYSECRET", "ATLEAST", "TENCHARS", "CHARACTERS", "SECRETKEY",
    "KEYWARD", "CIPHERKEY", "PASSKEY", "SECRETWORD", "KEYTEXT", "CODEWORD", "MASTERKEY",
];

/// Candidates tried by the ciphertext-only attack.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 100;

/// Longest key the ciphertext-only attack builds by default.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// English score below which a ciphertext-only result is reported.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 500.0;

/// Match ratio at or above which a known-plaintext result is reported.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

/// Ciphertext letters the ciphertext-only attack needs.
pub const MIN_CIPHERTEXT_LETTERS: usize = 100;

/// Longest key length tried by the known-plaintext attack.
const KNOWN_PLAINTEXT_MAX_KEY_LENGTH: usize = 24;

/// Suffix appended to word pairs.
const KEY_SUFFIX: &str = "KEY";

/// Candidate key generator over a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCandidates {
    words: Vec<String>,
}

impl Default for KeyCandidates {
    fn default() -> Self {
        Self::common()
    }
}

impl KeyCandidates {
    /// Generator over custom words. Words are normalized; empty ones are
    /// dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalize(w.as_ref()).into_string())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Generator over [`COMMON_KEY_WORDS`].
    pub fn common() -> Self {
        Self::new(COMMON_KEY_WORDS)
    }

    /// The word list.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word pairs, word pairs plus `KEY`, and words repeated two to four
    /// times, keeping those of `min_len..=max_len` letters. At most `limit`
    /// distinct keys are returned, in generation order.
    pub fn combinations(&self, min_len: usize, max_len: usize, limit: usize) -> Vec<String> {
        let in_range = |key: &String| (min_len..=max_len).contains(&key.len());

        let pairs = self.words.iter().flat_map(|first| {
            self.words.iter().flat_map(move |second| {
                let pair = format!("{first}{second}");
                let suffixed = format!("{pair}{KEY_SUFFIX}");
                [pair, suffixed]
            })
        });
        let repeats = self
            .words
            .iter()
            .flat_map(|word| (2..=4).map(move |times| word.repeat(times)));

        dedup(pairs.chain(repeats).filter(in_range))
            .into_iter()
            .take(limit)
            .collect()
    }

    /// Keys of exactly `len` letters: each word truncated or repeated to
    /// length, then every word pair long enough, truncated. Distinct, in
    /// generation order.
    pub fn for_length(&self, len: usize) -> Vec<String> {
        if len == 0 {
            return Vec::new();
        }
        let singles = self
            .words
            .iter()
            .map(|word| word.chars().cycle().take(len).collect::<String>());
        let pairs = self.words.iter().flat_map(|first| {
            self.words.iter().filter_map(move |second| {
                (first.len() + second.len() >= len)
                    .then(|| format!("{first}{second}").chars().take(len).collect::<String>())
            })
        });
        dedup(singles.chain(pairs))
    }
}

fn dedup(keys: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.filter(|key| seen.insert(key.clone())).collect()
}

/// Key recovered by a dictionary attack
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PipelineRecovery {
    /// Recovered key
    pub key: String,
    /// Plaintext under `key`
    pub plaintext: String,
    /// English score (ciphertext only, lower is better) or match ratio
    /// (known plaintext, higher is better)
    pub score: f64,
    /// Whether re-encrypting reproduces the ciphertext exactly
    pub exact: bool,
}

/// Dictionary attack settings
#[derive(Debug, Clone)]
pub struct DictionaryAttack {
    candidates: KeyCandidates,
    min_key_length: usize,
    max_key_length: usize,
    candidate_limit: usize,
    score_threshold: f64,
    match_threshold: f64,
}

impl Default for DictionaryAttack {
    fn default() -> Self {
        Self {
            candidates: KeyCandidates::common(),
            min_key_length: MIN_KEY_LEN,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl DictionaryAttack {
    /// Use a different word list.
    #[must_use]
    pub fn with_candidates(mut self, candidates: KeyCandidates) -> Self {
        self.candidates = candidates;
        self
    }

    /// Key lengths to build (the minimum is at least one).
    #[must_use]
    pub fn with_key_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_key_length = min.max(1);
        self.max_key_length = max;
        self
    }

    /// Cap on ciphertext-only candidates.
    #[must_use]
    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = limit;
        self
    }

    /// English score a ciphertext-only result must beat.
    #[must_use]
    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Match ratio a known-plaintext result must reach.
    #[must_use]
    pub fn with_match_threshold(mut self, threshold: f64) -> Self {
        self.match_threshold = threshold;
        self
    }

    /// The candidate generator.
    pub fn candidates(&self) -> &KeyCandidates {
        &self.candidates
    }

    /// Ciphertext-only attack.
    ///
    /// Every candidate decrypts the ciphertext with fillers stripped (see
    /// [`Pipeline::decrypt_stripped`]); the lowest [`english_score`] wins.
    /// Returns `None` when even the best score is not below the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientData`] for fewer than
    /// [`MIN_CIPHERTEXT_LETTERS`] letters and [`AnalysisError::Cipher`] for
    /// odd-length ciphertext.
    pub fn break_with_frequency(&self, ciphertext: &str) -> Result<Option<PipelineRecovery>> {
        let text = normalize(ciphertext);
        if text.len() < MIN_CIPHERTEXT_LETTERS {
            return Err(AnalysisError::InsufficientData {
                required: MIN_CIPHERTEXT_LETTERS,
                actual: text.len(),
            });
        }
        if text.len() % 2 != 0 {
            return Err(CipherError::OddLength(text.len()).into());
        }

        let keys = self.candidates.combinations(
            self.min_key_length,
            self.max_key_length,
            self.candidate_limit,
        );
        debug!(candidates = keys.len(), letters = text.len(), "dictionary frequency attack");

        let mut best: Option<PipelineRecovery> = None;
        for key in keys {
            let Ok(pipeline) = Pipeline::new(&key) else {
                trace!(%key, "skipping candidate below minimum key length");
                continue;
            };
            let plaintext = pipeline.decrypt_stripped(text.as_str())?;
            let score = english_score(&plaintext);
            trace!(%key, score, "scored candidate");
            if best.as_ref().is_none_or(|b| score < b.score) {
                best = Some(PipelineRecovery {
                    key,
                    plaintext,
                    score,
                    exact: false,
                });
            }
        }

        let best = best.filter(|b| b.score < self.score_threshold);
        match &best {
            Some(found) => debug!(key = %found.key, score = found.score, "candidate accepted"),
            None => debug!("no candidate scored below threshold"),
        }
        Ok(best)
    }

    /// Known-plaintext attack.
    ///
    /// Tries key lengths `min..=min(max, 24)`, encrypting the plaintext with
    /// every candidate. An exact match returns immediately; otherwise the best
    /// positional match ratio wins if it reaches the threshold.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientData`] when the plaintext has
    /// fewer letters than the minimum key length.
    pub fn break_known_plaintext(
        &self,
        plaintext: &str,
        ciphertext: &str,
    ) -> Result<Option<PipelineRecovery>> {
        let plaintext = normalize(plaintext);
        let ciphertext = normalize(ciphertext);
        if plaintext.len() < self.min_key_length {
            return Err(AnalysisError::InsufficientData {
                required: self.min_key_length,
                actual: plaintext.len(),
            });
        }

        let max_length = self.max_key_length.min(KNOWN_PLAINTEXT_MAX_KEY_LENGTH);
        let mut best: Option<(String, f64)> = None;
        let mut tested = 0usize;

        for length in self.min_key_length..=max_length {
            let keys = self.candidates.for_length(length);
            trace!(length, candidates = keys.len(), "trying key length");
            for key in keys {
                let Ok(pipeline) = Pipeline::new(&key) else {
                    continue;
                };
                tested += 1;
                let encrypted = pipeline.encrypt(plaintext.as_str());
                if encrypted == ciphertext.as_str() {
                    debug!(%key, tested, "exact key found");
                    return Ok(Some(PipelineRecovery {
                        key,
                        plaintext: plaintext.into_string(),
                        score: 1.0,
                        exact: true,
                    }));
                }
                let ratio = match_ratio(encrypted.as_bytes(), ciphertext.as_bytes());
                if best.as_ref().is_none_or(|(_, r)| ratio > *r) {
                    best = Some((key, ratio));
                }
            }
        }

        debug!(tested, best_ratio = best.as_ref().map(|(_, r)| *r), "no exact key found");
        Ok(best
            .filter(|(_, ratio)| *ratio >= self.match_threshold)
            .map(|(key, ratio)| PipelineRecovery {
                key,
                plaintext: plaintext.into_string(),
                score: ratio,
                exact: false,
            }))
    }
}

/// Fraction of positions where both texts agree, over the longer length.
fn match_ratio(a: &[u8], b: &[u8]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    let matches = a.iter().zip(b).filter(|(x, y)| x == y).count();
    matches as f64 / longest as f64
}
