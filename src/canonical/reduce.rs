// File: src/canonical/reduce.rs
use crate::canonical::{apply_rules, collapse_repeated_marks, Rule};
use crate::core::marks::{ALEF, ALEF_HAMZA_BELOW, DAMMA, FATHA, KASRA, SUKUN, WAW, YEH};
use log::trace;

/// Applied in this order; each rule sees the output of the one before.
const REDUCTION_RULES: [Rule; 7] = [
    collapse_repeated_marks,
    drop_fatha_and_sukun,
    drop_damma_before_waw,
    drop_kasra_before_yeh,
    drop_fatha_before_alef,
    drop_fatha_on_initial_waw_yeh,
    drop_kasra_after_hamza_below,
];

/// Removes marks a reader can restore from the letters around them, leaving
/// the minimal vocalization. Idempotent.
pub fn reduce_tashkeel(word: &str) -> String {
    let reduced = apply_rules(word, &REDUCTION_RULES);
    trace!("reduce {:?} -> {:?}", word, reduced);
    reduced
}

fn keep_where(chars: &[char], drop: impl Fn(usize, char) -> bool) -> Vec<char> {
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| !drop(i, c))
        .map(|(_, &c)| c)
        .collect()
}

fn prev(chars: &[char], i: usize) -> Option<char> {
    i.checked_sub(1).map(|j| chars[j])
}

fn next(chars: &[char], i: usize) -> Option<char> {
    chars.get(i + 1).copied()
}

/// Fatha and sukun go unless they sit directly on waw or yeh, where they tell
/// the consonant apart from the long vowel.
fn drop_fatha_and_sukun(chars: &[char]) -> Vec<char> {
    keep_where(chars, |i, c| {
        (c == FATHA || c == SUKUN) && !matches!(prev(chars, i), Some(WAW) | Some(YEH))
    })
}

fn drop_damma_before_waw(chars: &[char]) -> Vec<char> {
    keep_where(chars, |i, c| c == DAMMA && next(chars, i) == Some(WAW))
}

fn drop_kasra_before_yeh(chars: &[char]) -> Vec<char> {
    keep_where(chars, |i, c| c == KASRA && next(chars, i) == Some(YEH))
}

fn drop_fatha_before_alef(chars: &[char]) -> Vec<char> {
    keep_where(chars, |i, c| c == FATHA && next(chars, i) == Some(ALEF))
}

/// Word-initial means after whitespace or at the start of the text, so a
/// single word reduces the same way alone as inside a sentence.
fn drop_fatha_on_initial_waw_yeh(chars: &[char]) -> Vec<char> {
    keep_where(chars, |i, c| {
        c == FATHA
            && matches!(prev(chars, i), Some(WAW) | Some(YEH))
            && i.checked_sub(2).map_or(true, |j| chars[j].is_whitespace())
    })
}

fn drop_kasra_after_hamza_below(chars: &[char]) -> Vec<char> {
    keep_where(chars, |i, c| c == KASRA && prev(chars, i) == Some(ALEF_HAMZA_BELOW))
}
