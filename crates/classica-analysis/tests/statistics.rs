//! Statistical behavior over seeded random trials.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use classica_analysis::{VigenereBreaker, english_score, index_of_coincidence};
use classica_cipher::{VigenereCipher, normalize};

const ENGLISH: &str = include_str!("fixtures/english.txt");

fn random_letters(rng: &mut fastrand::Rng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.u8(b'A'..=b'Z'))).collect()
}

#[test]
fn test_ioc_of_random_text() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let text = random_letters(&mut rng, 10_000);
    let ioc = index_of_coincidence(&text);
    assert!((0.034..0.043).contains(&ioc), "random IoC {ioc}");
}

#[test]
fn test_ioc_of_english_text() {
    let letters = normalize(ENGLISH);
    assert!(letters.len() >= 10_000, "fixture has {} letters", letters.len());
    let ioc = index_of_coincidence(&letters.as_str()[..10_000]);
    assert!((0.055..0.075).contains(&ioc), "English IoC {ioc}");
}

#[test]
fn test_english_scores_below_random() {
    let mut rng = fastrand::Rng::with_seed(7);
    let english = english_score(normalize(ENGLISH).as_str());
    let random = english_score(random_letters(&mut rng, 5_000));
    assert!(english < 20.0, "English score {english}");
    assert!(random > 50.0, "random score {random}");
}

#[test]
fn test_frequency_attack_success_rate() {
    const TRIALS: usize = 20;
    const TEXT_LEN: usize = 1_000;

    let letters = normalize(ENGLISH).into_string();
    let mut rng = fastrand::Rng::with_seed(2024);
    let breaker = VigenereBreaker::default();

    let mut successes = 0;
    for _ in 0..TRIALS {
        let start = rng.usize(..letters.len() - TEXT_LEN);
        let plaintext = &letters[start..start + TEXT_LEN];
        let key_len = rng.usize(1..=10);
        let key = random_letters(&mut rng, key_len);

        let ciphertext = VigenereCipher::new(&key).unwrap().encrypt(plaintext);
        let attack = breaker.break_with_frequency(&ciphertext);
        // A key with a shorter internal period decrypts just as well
        if attack.plaintext == plaintext {
            successes += 1;
        }
    }

    assert!(
        successes * 10 >= TRIALS * 7,
        "recovered {successes} of {TRIALS} keys"
    );
}
