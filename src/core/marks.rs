// File: src/core/marks.rs

pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';

/// Kashida. Doubles as the "no haraka" placeholder in codec mark strings.
pub const TATWEEL: char = '\u{0640}';
pub const NOT_DEF_HARAKA: char = TATWEEL;

pub const HAMZA: char = '\u{0621}';
pub const ALEF_MADDA: char = '\u{0622}';
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';
pub const WAW_HAMZA: char = '\u{0624}';
pub const ALEF_HAMZA_BELOW: char = '\u{0625}';
pub const YEH_HAMZA: char = '\u{0626}';
pub const ALEF: char = '\u{0627}';
pub const WAW: char = '\u{0648}';
pub const YEH: char = '\u{064A}';
pub const LAM: char = '\u{0644}';
pub const FEH: char = '\u{0641}';
pub const AIN: char = '\u{0639}';
pub const HAMZA_ABOVE: char = '\u{0654}';
pub const HAMZA_BELOW: char = '\u{0655}';

/// Every diacritic the mark model recognizes, in codepoint order.
pub const TASHKEEL: [char; 8] = [FATHATAN, DAMMATAN, KASRATAN, FATHA, DAMMA, KASRA, SHADDA, SUKUN];
/// Short vowels and sukun. Shadda and tanwin are not part of this set.
pub const HARAKAT: [char; 4] = [FATHA, DAMMA, KASRA, SUKUN];
pub const TANWIN: [char; 3] = [FATHATAN, DAMMATAN, KASRATAN];

#[inline]
pub fn is_mark(c: char) -> bool {
    matches!(c, FATHATAN..=SUKUN)
}

#[inline]
pub fn is_haraka(c: char) -> bool {
    matches!(c, FATHA | DAMMA | KASRA | SUKUN)
}

#[inline]
pub fn is_tanwin(c: char) -> bool {
    matches!(c, FATHATAN | DAMMATAN | KASRATAN)
}

#[inline]
pub fn is_shadda(c: char) -> bool {
    c == SHADDA
}

/// Any mark that fills the haraka slot of a letter, i.e. every mark but shadda.
#[inline]
pub fn is_vowel_mark(c: char) -> bool {
    is_mark(c) && c != SHADDA
}

/// Removes every tashkeel mark. Base letters, spacing and order are untouched.
/// O(n) in the input length.
pub fn strip_tashkeel(text: &str) -> String {
    text.chars().filter(|&c| !is_mark(c)).collect()
}

/// Removes fatha, damma, kasra and sukun, keeping shadda and tanwin.
pub fn strip_harakat(text: &str) -> String {
    text.chars().filter(|&c| !is_haraka(c)).collect()
}

pub fn strip_shadda(text: &str) -> String {
    text.chars().filter(|&c| c != SHADDA).collect()
}

pub fn strip_tatweel(text: &str) -> String {
    text.chars().filter(|&c| c != TATWEEL).collect()
}

/// Drops the vowel marks written on the last letter of a word (the case ending).
/// A final shadda is kept.
pub fn strip_last_haraka(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let run_start = chars
        .iter()
        .rposition(|&c| !is_mark(c))
        .map_or(0, |index| index + 1);

    let mut result: String = chars[..run_start].iter().collect();
    result.extend(chars[run_start..].iter().filter(|&&c| c == SHADDA));
    result
}

/// True if the word carries at least one tashkeel mark.
pub fn is_vocalized(word: &str) -> bool {
    word.chars().any(is_mark)
}
