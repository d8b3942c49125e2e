// File: src/core/codec.rs
use crate::core::marks::{is_mark, NOT_DEF_HARAKA, SHADDA};
use crate::core::types::{HarakaClass, VocalizedLetter, VocalizedWord};
use crate::error::{Result, TashkeelError};
use log::{debug, trace};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

impl VocalizedWord {
    /// Scans a vocalized word once, attaching every mark to the letter before it.
    /// Shadda and haraka may come in either order and the order is kept; a
    /// second shadda, a second haraka, or a mark with no letter before it is an
    /// error.
    pub fn parse(word: &str) -> Result<Self> {
        let mut letters: Vec<VocalizedLetter> = Vec::with_capacity(word.len() / 2);

        for (position, c) in word.chars().enumerate() {
            if !is_mark(c) {
                letters.push(VocalizedLetter::bare(c));
                continue;
            }
            match letters.last_mut() {
                Some(letter) => attach(letter, c, position)?,
                None => {
                    debug!("orphan mark {:?} at the start of {:?}", c, word);
                    return Err(TashkeelError::malformed(position, c, "mark without a bearing letter"));
                }
            }
        }

        Ok(Self::new(letters))
    }

    /// Like `parse`, but never fails: orphan marks are skipped, and on a letter
    /// the first haraka wins over any later one.
    pub fn parse_lenient(word: &str) -> Self {
        let mut letters: Vec<VocalizedLetter> = Vec::with_capacity(word.len() / 2);

        for c in word.chars() {
            if !is_mark(c) {
                letters.push(VocalizedLetter::bare(c));
            } else if let Some(letter) = letters.last_mut() {
                if c == SHADDA {
                    letter.shadda = true;
                } else if !letter.haraka.is_present() {
                    letter.haraka = HarakaClass::from_mark(c).unwrap_or_default();
                    letter.shadda_first = letter.shadda;
                }
            }
        }

        Self::new(letters)
    }
}

fn attach(letter: &mut VocalizedLetter, mark: char, position: usize) -> Result<()> {
    if mark == SHADDA {
        if letter.shadda {
            return Err(TashkeelError::malformed(position, mark, "repeated shadda on one letter"));
        }
        letter.shadda = true;
        letter.shadda_first = false;
        return Ok(());
    }

    if letter.haraka.is_present() {
        return Err(TashkeelError::malformed(position, mark, "second haraka on one letter"));
    }
    letter.haraka = HarakaClass::from_mark(mark).unwrap_or_default();
    letter.shadda_first = letter.shadda;
    Ok(())
}

/// Splits a vocalized word into its bare letters and its marks.
///
/// Every letter writes one group, opening with a haraka slot: the haraka
/// itself, or `NOT_DEF_HARAKA` (`_`) when the slot is empty. With `H` a haraka
/// and `S` shadda:
///
/// | letter marks     | group   |
/// |------------------|---------|
/// | none             | `_`     |
/// | haraka           | `H`     |
/// | haraka, shadda   | `H S`   |
/// | shadda           | `_ S _` |
/// | shadda, haraka   | `_ S H` |
///
/// Marks keep the order they were written in. Trailing bare groups are
/// trimmed, so a word with no marks gives an empty mark string.
/// O(n) in the word length.
pub fn separate(word: &str) -> Result<(String, String)> {
    let parsed = VocalizedWord::parse(word)?;
    let letters = parsed.skeleton();
    let mut marks = String::with_capacity(word.len());
    let mut kept = 0;

    for letter in &parsed {
        write_group(letter, &mut marks);
        if !letter.is_bare() {
            kept = marks.len();
        }
    }
    marks.truncate(kept);

    trace!("separate {:?} -> ({:?}, {:?})", word, letters, marks);
    Ok((letters, marks))
}

fn write_group(letter: &VocalizedLetter, marks: &mut String) {
    let haraka = letter.haraka.mark();
    match (letter.shadda, haraka) {
        (false, _) => marks.push(haraka.unwrap_or(NOT_DEF_HARAKA)),
        (true, Some(mark)) if !letter.shadda_first => {
            marks.push(mark);
            marks.push(SHADDA);
        }
        (true, _) => {
            marks.push(NOT_DEF_HARAKA);
            marks.push(SHADDA);
            marks.push(haraka.unwrap_or(NOT_DEF_HARAKA));
        }
    }
}

type PendingMarks<'a> = Peekable<Enumerate<Chars<'a>>>;

/// Rebuilds the vocalized word from `separate`'s output.
///
/// Each letter consumes one group. Once the marks run out the remaining
/// letters stay bare.
pub fn joint(letters: &str, marks: &str) -> Result<String> {
    let mut pending: PendingMarks<'_> = marks.chars().enumerate().peekable();
    let mut word = Vec::with_capacity(letters.len() / 2);

    for (position, letter) in letters.chars().enumerate() {
        if is_mark(letter) {
            return Err(TashkeelError::malformed(position, letter, "letters must not carry marks"));
        }
        word.push(read_group(letter, &mut pending)?);
    }

    if let Some((position, mark)) = pending.next() {
        debug!("{} letters cannot carry marks {:?}", letters.chars().count(), marks);
        return Err(TashkeelError::malformed(position, mark, "more marks than letters"));
    }

    Ok(VocalizedWord::new(word).to_string())
}

fn read_group(letter: char, pending: &mut PendingMarks<'_>) -> Result<VocalizedLetter> {
    let mut vocalized = VocalizedLetter::bare(letter);
    let (position, opening) = match pending.next() {
        Some(next) => next,
        None => return Ok(vocalized),
    };

    if opening == NOT_DEF_HARAKA {
        if let Some(&(shadda_at, SHADDA)) = pending.peek() {
            pending.next();
            vocalized.shadda = true;
            match pending.next() {
                Some((_, NOT_DEF_HARAKA)) => {}
                Some((at, mark)) => {
                    vocalized.haraka = haraka_slot(at, mark)?;
                    vocalized.shadda_first = true;
                }
                None => {
                    return Err(TashkeelError::malformed(
                        shadda_at,
                        SHADDA,
                        "shadda must be followed by a haraka or placeholder",
                    ))
                }
            }
        }
        return Ok(vocalized);
    }

    vocalized.haraka = haraka_slot(position, opening)?;
    if let Some(&(_, SHADDA)) = pending.peek() {
        pending.next();
        vocalized.shadda = true;
    }
    Ok(vocalized)
}

fn haraka_slot(position: usize, mark: char) -> Result<HarakaClass> {
    match HarakaClass::from_mark(mark) {
        Some(haraka) => Ok(haraka),
        None if mark == SHADDA => Err(TashkeelError::malformed(
            position,
            mark,
            "shadda must follow a haraka or placeholder",
        )),
        None => Err(TashkeelError::malformed(position, mark, "not a mark")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::marks::{DAMMA, FATHA, SUKUN};

    const LETTERS: &str = "العربية";
    const MARKS: &str = "\u{064e}\u{0652}\u{064e}\u{064e}\u{064e}\u{064e}\u{064f}";
    const WORD: &str = "اَلْعَرَبَيَةُ";

    #[test]
    fn joint_interleaves_one_mark_per_letter() {
        assert_eq!(joint(LETTERS, MARKS).unwrap(), WORD);
    }

    #[test]
    fn separate_inverts_joint() {
        assert_eq!(separate(WORD).unwrap(), (LETTERS.to_string(), MARKS.to_string()));
        let (letters, marks) = separate(WORD).unwrap();
        assert_eq!(joint(&letters, &marks).unwrap(), WORD);
    }

    #[test]
    fn bare_word_has_empty_marks() {
        assert_eq!(separate("كتاب").unwrap(), ("كتاب".to_string(), String::new()));
        assert_eq!(joint("كتاب", "").unwrap(), "كتاب");
        assert_eq!(separate("").unwrap(), (String::new(), String::new()));
        assert_eq!(joint("", "").unwrap(), "");
    }

    #[test]
    fn interior_bare_letters_get_a_placeholder() {
        let (letters, marks) = separate("ردّ").unwrap();
        assert_eq!(letters, "رد");
        assert_eq!(marks, format!("{0}{0}{1}{0}", NOT_DEF_HARAKA, SHADDA));
        assert_eq!(joint(&letters, &marks).unwrap(), "ردّ");
    }

    #[test]
    fn haraka_then_shadda_keeps_its_order() {
        // yeh + fatha + shadda, as stored in "الْعَرَبِيَّةُ"
        let word = "\u{0627}\u{0644}\u{0652}\u{0639}\u{064E}\u{0631}\u{064E}\u{0628}\u{0650}\u{064A}\u{064E}\u{0651}\u{0629}\u{064F}";
        let (letters, marks) = separate(word).unwrap();
        assert_eq!(letters, "العربية");
        assert_eq!(
            marks,
            "\u{0640}\u{0652}\u{064E}\u{064E}\u{0650}\u{064E}\u{0651}\u{064F}"
        );
        assert_eq!(joint(&letters, &marks).unwrap(), word);
        assert_eq!(separate(&joint(&letters, &marks).unwrap()).unwrap(), (letters, marks));
    }

    #[test]
    fn shadda_then_haraka_stays_on_one_letter() {
        let word = "\u{0645}\u{064F}\u{0639}\u{064E}\u{0644}\u{0651}\u{0650}\u{0645}\u{0652}";
        let (letters, marks) = separate(word).unwrap();
        assert_eq!(joint(&letters, &marks).unwrap(), word);
    }

    #[test]
    fn both_mark_orders_survive_the_round_trip() {
        for word in ["\u{0631}\u{062F}\u{064E}\u{0651}", "\u{0631}\u{062F}\u{0651}\u{064E}"] {
            let (letters, marks) = separate(word).unwrap();
            assert_eq!(joint(&letters, &marks).unwrap(), word);
        }
    }

    #[test]
    fn neighbouring_shaddas_stay_on_their_letters() {
        // fatha+shadda on the first letter, then shadda+fatha on the second
        let word = format!("ب{0}{1}ت{1}{0}", FATHA, SHADDA);
        let (letters, marks) = separate(&word).unwrap();
        assert_eq!(joint(&letters, &marks).unwrap(), word);

        // fatha, then shadda+fatha
        let word = format!("ب{0}ت{1}{0}", FATHA, SHADDA);
        let (letters, marks) = separate(&word).unwrap();
        assert_eq!(joint(&letters, &marks).unwrap(), word);
    }

    #[test]
    fn shadda_with_sukun_is_kept() {
        let word = format!("م{}{}", SHADDA, SUKUN);
        let parsed = VocalizedWord::parse(&word).unwrap();
        assert!(parsed.letters()[0].is_inconsistent());
        let (letters, marks) = separate(&word).unwrap();
        assert_eq!(joint(&letters, &marks).unwrap(), word);
    }

    #[test]
    fn surplus_marks_are_rejected() {
        let marks = format!("{}{}{}", FATHA, FATHA, FATHA);
        let err = joint("كت", &marks).unwrap_err();
        assert!(matches!(err, TashkeelError::MalformedMarkSequence { position: 2, .. }));
    }

    #[test]
    fn non_marks_are_rejected() {
        assert!(matches!(
            joint("كت", "x").unwrap_err(),
            TashkeelError::MalformedMarkSequence { mark: 'x', .. }
        ));
        let doubled = format!("{}{}", SHADDA, SHADDA);
        assert!(joint("كت", &doubled).is_err());
    }

    #[test]
    fn orphan_and_duplicate_marks_fail_to_parse() {
        assert!(separate("\u{064E}كتب").is_err());
        assert!(separate(&format!("ك{}{}", DAMMA, DAMMA)).is_err());
        assert!(separate(&format!("ك{}{}", SHADDA, SHADDA)).is_err());
    }

    #[test]
    fn lenient_parse_keeps_first_haraka() {
        let parsed = VocalizedWord::parse_lenient(&format!("{}ك{}{}", FATHA, DAMMA, FATHA));
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.letters()[0].haraka, HarakaClass::Damma);
    }
}
