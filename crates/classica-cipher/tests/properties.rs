//! Property tests for the cipher stages and the pipeline.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use classica_cipher::{
    CaesarCipher, Key, NormalizedText, Pipeline, PlayfairCipher, PlayfairMatrix, VigenereCipher,
    normalize,
};
use proptest::prelude::*;
use std::collections::HashSet;

const MATRIX_ALPHABET: &[u8; 25] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";

fn letters(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(b'A'..=b'Z', min..max)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

/// Even-length text without `J` where no digraph holds two equal letters.
fn digraph_clean_text() -> impl Strategy<Value = String> {
    prop::collection::vec((0usize..25, 1usize..25), 0..60).prop_map(|pairs| {
        pairs
            .into_iter()
            .flat_map(|(first, offset)| {
                [
                    char::from(MATRIX_ALPHABET[first]),
                    char::from(MATRIX_ALPHABET[(first + offset) % 25]),
                ]
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn vigenere_round_trips(text in letters(1, 300), key in letters(1, 40)) {
        let cipher = VigenereCipher::new(&key).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&text)), text);
    }

    #[test]
    fn caesar_round_trips(text in letters(0, 200), shift in 0u8..26) {
        let cipher = CaesarCipher::new(shift).unwrap();
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&text)), text);
    }

    #[test]
    fn matrix_holds_25_distinct_letters(key in "[A-Za-z ]{1,40}") {
        prop_assume!(!normalize(&key).is_empty());
        let matrix = PlayfairMatrix::new(&Key::new(&key).unwrap());

        let cells: Vec<u8> = matrix.rows().iter().flatten().copied().collect();
        let distinct: HashSet<u8> = cells.iter().copied().collect();
        prop_assert_eq!(cells.len(), 25);
        prop_assert_eq!(distinct.len(), 25);
        prop_assert!(!distinct.contains(&b'J'));

        for (row, row_cells) in matrix.rows().iter().enumerate() {
            for (col, &letter) in row_cells.iter().enumerate() {
                prop_assert_eq!(matrix.position(letter), (row, col));
            }
        }
    }

    #[test]
    fn playfair_round_trips_clean_text(text in digraph_clean_text(), key in letters(1, 30)) {
        let cipher = PlayfairCipher::new(&key).unwrap();
        let ciphertext = cipher.encrypt(&text);
        prop_assert_eq!(ciphertext.len(), text.len());
        prop_assert_eq!(cipher.decrypt(&ciphertext).unwrap(), text);
    }

    #[test]
    fn playfair_output_is_even(text in letters(0, 200), key in letters(1, 30)) {
        let cipher = PlayfairCipher::new(&key).unwrap();
        let ciphertext = cipher.encrypt(&text);
        prop_assert_eq!(ciphertext.len() % 2, 0);
        prop_assert!(!ciphertext.contains('J'));
        prop_assert_eq!(
            cipher.decrypt(&ciphertext).unwrap(),
            PlayfairCipher::prepare(&NormalizedText::new(&text)).into_string()
        );
    }

    #[test]
    fn pipeline_recovers_canonical_form(text in "[A-Za-z ,.]{0,200}", key in letters(10, 40)) {
        let pipeline = Pipeline::new(&key).unwrap();
        let ciphertext = pipeline.encrypt(&text);
        prop_assert_eq!(pipeline.decrypt(&ciphertext).unwrap(), pipeline.canonical_form(&text));
    }

    #[test]
    fn pipeline_rejects_short_keys(key in letters(0, 10)) {
        prop_assert!(Pipeline::new(&key).is_err());
    }
}
