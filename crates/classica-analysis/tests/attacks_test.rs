//! Attacks against ciphertext made from natural English prose.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use classica_analysis::kasiski::{self, DEFAULT_MAX_NGRAM, DEFAULT_MIN_NGRAM};
use classica_analysis::{
    AnalysisError, DictionaryAttack, KeyLengthEstimator, VigenereBreaker, break_caesar,
    break_vigenere, break_with_frequency, estimate_key_length,
};
use classica_cipher::{CaesarCipher, Pipeline, VigenereCipher, normalize};
use pretty_assertions::assert_eq;

const ENGLISH: &str = include_str!("fixtures/english.txt");

fn english_letters(count: usize) -> String {
    normalize(ENGLISH).as_str()[..count].to_string()
}

#[test]
fn test_frequency_attack_recovers_long_key() {
    let plaintext = english_letters(2000);
    let ciphertext = VigenereCipher::new("CRYPTANALYSIS").unwrap().encrypt(&plaintext);

    let attack = VigenereBreaker::default().break_with_frequency(&ciphertext);
    assert_eq!(attack.key, "CRYPTANALYSIS");
    assert_eq!(attack.plaintext, plaintext);
    assert!(attack.key_length.crossed_threshold);
    assert_eq!(attack.column_scores.len(), 13);
}

#[test]
fn test_break_with_frequency_tuple() {
    let plaintext = english_letters(1000);
    let ciphertext = VigenereCipher::new("LEMONADE").unwrap().encrypt(&plaintext);
    let (key, recovered) = break_with_frequency(&ciphertext);
    assert_eq!(key, "LEMONADE");
    assert_eq!(recovered, plaintext);
    assert_eq!(estimate_key_length(&ciphertext, 20), 8);
}

#[test]
fn test_estimator_scores_every_candidate_up_to_hit() {
    let plaintext = english_letters(1000);
    let ciphertext = VigenereCipher::new("LEMONADE").unwrap().encrypt(&plaintext);
    let estimate = KeyLengthEstimator::default().estimate(ciphertext.as_bytes());
    assert_eq!(estimate.length, 8);
    assert_eq!(estimate.scores.len(), 20);
    assert!(estimate.scores[..7].iter().all(|s| s.average_ioc < 0.06));
}

#[test]
fn test_kasiski_agrees_with_key_length() {
    let plaintext = english_letters(1000);
    let ciphertext = VigenereCipher::new("LEMONADE").unwrap().encrypt(&plaintext);
    let exam = kasiski::examine(ciphertext.as_bytes(), DEFAULT_MIN_NGRAM, DEFAULT_MAX_NGRAM);

    assert!(!exam.repeats.is_empty());
    assert!(exam.candidate_lengths(3).contains(&8));
    let multiples = exam.distances.iter().filter(|d| *d % 8 == 0).count();
    assert!(multiples * 10 >= exam.distances.len() * 9);
}

#[test]
fn test_break_caesar_on_prose() {
    let plaintext = english_letters(300);
    let ciphertext = CaesarCipher::new(11).unwrap().encrypt(&plaintext);
    let attack = break_caesar(&ciphertext);
    assert_eq!(attack.shift, 11);
    assert_eq!(attack.plaintext, plaintext);
}

#[test]
fn test_known_plaintext_hello_world() {
    let ciphertext = VigenereCipher::new("SECRETKEY").unwrap().encrypt("HELLOWORLD");
    let key = break_vigenere("HELLOWORLD", &ciphertext).unwrap();
    assert_eq!(key, "SECRETKEY");

    let plaintext = english_letters(500);
    assert_eq!(
        VigenereCipher::new(&key).unwrap().encrypt(&plaintext),
        VigenereCipher::new("SECRETKEY").unwrap().encrypt(&plaintext)
    );
}

#[test]
fn test_known_plaintext_length_mismatch() {
    assert_eq!(
        break_vigenere("HELLO WORLD", "ABCDE").unwrap_err(),
        AnalysisError::LengthMismatch {
            plaintext: 10,
            ciphertext: 5
        }
    );
}

#[test]
fn test_dictionary_attack_on_pipeline() {
    let plaintext = english_letters(400);
    let pipeline = Pipeline::new("SECRETCIPHERKEY").unwrap();
    let ciphertext = pipeline.encrypt(&plaintext);

    let recovery = DictionaryAttack::default()
        .break_with_frequency(&ciphertext)
        .unwrap()
        .expect("key is a listed word combination");
    assert_eq!(recovery.key, "SECRETCIPHERKEY");
    assert_eq!(recovery.plaintext, pipeline.decrypt_stripped(&ciphertext).unwrap());

    let known = DictionaryAttack::default()
        .break_known_plaintext(&plaintext, &ciphertext)
        .unwrap()
        .expect("key is a listed word combination");
    assert_eq!(known.key, "SECRETCIPHERKEY");
    assert!(known.exact);
}
