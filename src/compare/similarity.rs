// File: src/compare/similarity.rs
use crate::compare::compare_marks;
use crate::core::marks::strip_shadda;
use crate::core::types::VocalizedWord;
use log::trace;

/// The two words do not share a consonantal skeleton.
pub const SKELETON_MISMATCH: i32 = -2;
/// Same skeleton, but some letter carries two different harakat.
pub const CONTRADICTORY_MARKS: i32 = -1;
/// Lowest similarity at which two words count as the same vocalized word.
pub const VOCALIZED_LIKE_THRESHOLD: i32 = 0;

/// Scores how well the marks of two words agree.
///
/// Returns `SKELETON_MISMATCH` when the bare letters differ, `CONTRADICTORY_MARKS`
/// when a position holds two different harakat, and otherwise the number of
/// marks both words share. A mark present on one side only is not penalized.
/// O(n) in the word length; symmetric in its arguments.
pub fn vocalized_similarity(first: &str, second: &str) -> i32 {
    let a = VocalizedWord::parse_lenient(first);
    let b = VocalizedWord::parse_lenient(second);
    let score = score_words(&a, &b);
    trace!("vocalized_similarity({:?}, {:?}) = {}", first, second, score);
    score
}

fn score_words(a: &VocalizedWord, b: &VocalizedWord) -> i32 {
    if !a.same_skeleton(b) {
        return SKELETON_MISMATCH;
    }

    let last = a.len().saturating_sub(1);
    let mut matches: i32 = 0;
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let agreement = compare_marks(x, y, i == last);
        if agreement.contradicts {
            return CONTRADICTORY_MARKS;
        }
        matches = matches.saturating_add(agreement.matches as i32);
    }
    matches
}

/// Same skeleton and no contradicting harakat.
pub fn vocalizedlike(first: &str, second: &str) -> bool {
    vocalized_similarity(first, second) >= VOCALIZED_LIKE_THRESHOLD
}

/// True if the words differ at most in shadda: with shadda removed from both,
/// they share a skeleton and no haraka contradicts.
pub fn shaddalike(first: &str, second: &str) -> bool {
    vocalizedlike(&strip_shadda(first), &strip_shadda(second))
}
