//! Property-based tests for the codec, the encoder and the canonicalizers:
//!
//! 1. **Round trip**: joint(separate(w)) = w
//! 2. **Bijection**: decode(encode(w, mode)) = w for both modes, marks in canonical order
//! 3. **Idempotence**: reduce, autocorrect and normalize_hamza are fixed points after one pass
//! 4. **Symmetry**: shaddalike and vocalized_similarity ignore argument order

use proptest::prelude::*;
use tashkeel_core::*;

const LETTERS: [char; 10] = ['ب', 'ت', 'ا', 'و', 'ي', 'ل', 'أ', 'إ', 'ئ', 'ء'];
const MARKS: [char; 8] = [
    '\u{064B}', '\u{064C}', '\u{064D}', '\u{064E}', '\u{064F}', '\u{0650}', '\u{0651}', '\u{0652}',
];

/// Letters with shadda and haraka written in either order.
fn arb_letter() -> impl Strategy<Value = VocalizedLetter> {
    (
        prop::sample::select(LETTERS.to_vec()),
        any::<bool>(),
        prop::sample::select(HarakaClass::ALL.to_vec()),
        any::<bool>(),
    )
        .prop_map(|(letter, shadda, haraka, shadda_first)| VocalizedLetter {
            shadda_first,
            ..VocalizedLetter::new(letter, shadda, haraka)
        })
}

/// Vocalized words with any mark order on each letter.
fn arb_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_letter(), 0..15)
        .prop_map(|letters| VocalizedWord::new(letters).to_string())
}

/// Vocalized words whose marks are in Unicode canonical order.
fn arb_canonical_word() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_letter(), 0..15).prop_map(|letters| {
        letters
            .into_iter()
            .map(|l| VocalizedLetter::new(l.letter, l.shadda, l.haraka))
            .collect::<VocalizedWord>()
            .to_string()
    })
}

/// Arbitrary text over letters, marks and spaces, including malformed mark runs.
fn arb_text() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = LETTERS.iter().chain(MARKS.iter()).copied().chain([' ']).collect();
    prop::collection::vec(prop::sample::select(alphabet), 0..30)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn joint_inverts_separate(word in arb_word()) {
        let (letters, marks) = separate(&word).unwrap();
        prop_assert_eq!(joint(&letters, &marks).unwrap(), word);
    }

    #[test]
    fn separate_inverts_joint(word in arb_word()) {
        let (letters, marks) = separate(&word).unwrap();
        let joined = joint(&letters, &marks).unwrap();
        prop_assert_eq!(separate(&joined).unwrap(), (letters, marks));
    }

    #[test]
    fn character_codes_round_trip(word in arb_canonical_word()) {
        let (letters, codes) = encode_tashkeel(&word, EncodingMode::Character).unwrap();
        prop_assert_eq!(letters.chars().count(), codes.to_string().chars().count());
        prop_assert_eq!(decode_tashkeel(&letters, &codes).unwrap(), word);
    }

    #[test]
    fn decimal_codes_round_trip(word in arb_canonical_word()) {
        let (letters, codes) = encode_tashkeel(&word, EncodingMode::Decimal).unwrap();
        prop_assert_eq!(decode_tashkeel(&letters, &codes).unwrap(), word);
    }

    #[test]
    fn codes_ignore_mark_order(word in arb_word()) {
        for mode in [EncodingMode::Character, EncodingMode::Decimal] {
            let (letters, codes) = encode_tashkeel(&word, mode).unwrap();
            let decoded = decode_tashkeel(&letters, &codes).unwrap();
            prop_assert_eq!(encode_tashkeel(&decoded, mode).unwrap(), (letters, codes));
        }
    }

    #[test]
    fn reduce_is_idempotent(text in arb_text()) {
        let once = reduce_tashkeel(&text);
        prop_assert_eq!(reduce_tashkeel(&once), once);
    }

    #[test]
    fn autocorrect_is_idempotent(text in arb_text()) {
        let once = autocorrect(&text);
        prop_assert_eq!(autocorrect(&once), once);
    }

    #[test]
    fn normalize_hamza_is_idempotent(text in arb_text()) {
        let once = normalize_hamza(&text);
        prop_assert_eq!(normalize_hamza(&once), once);
    }

    #[test]
    fn comparisons_are_symmetric(a in arb_text(), b in arb_text()) {
        prop_assert_eq!(shaddalike(&a, &b), shaddalike(&b, &a));
        prop_assert_eq!(vocalized_similarity(&a, &b), vocalized_similarity(&b, &a));
    }

    #[test]
    fn word_is_alike_to_itself(word in arb_word()) {
        prop_assert!(vocalizedlike(&word, &word));
        prop_assert!(shaddalike(&word, &word));
    }

    #[test]
    fn stripped_word_keeps_its_skeleton(word in arb_word()) {
        let bare = strip_tashkeel(&word);
        prop_assert!(vocalized_similarity(&bare, &word) >= 0);
        prop_assert_eq!(strip_tashkeel(&strip_harakat(&word)), bare);
    }
}
