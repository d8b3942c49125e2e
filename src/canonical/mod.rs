// File: src/canonical/mod.rs
pub mod autocorrect;
pub mod hamza;
pub mod ligature;
pub mod reduce;

use crate::core::marks::is_mark;
use crate::core::types::VocalizedWord;
use log::warn;
use serde::{Deserialize, Serialize};

/// One pass of a canonicalization pipeline. Rules run in a fixed order.
pub(crate) type Rule = fn(&[char]) -> Vec<char>;

pub(crate) fn apply_rules(text: &str, rules: &[Rule]) -> String {
    let chars: Vec<char> = text.chars().collect();
    rules
        .iter()
        .fold(chars, |chars, rule| rule(&chars))
        .into_iter()
        .collect()
}

/// A base character and the marks written right after it. Only the first
/// run of a text can lack a base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkRun {
    pub base: Option<char>,
    pub marks: Vec<char>,
}

pub(crate) fn split_runs(chars: &[char]) -> Vec<MarkRun> {
    let mut runs: Vec<MarkRun> = Vec::with_capacity(chars.len());
    for &c in chars {
        match runs.last_mut() {
            Some(run) if is_mark(c) => run.marks.push(c),
            None if is_mark(c) => runs.push(MarkRun { base: None, marks: vec![c] }),
            _ => runs.push(MarkRun { base: Some(c), marks: Vec::new() }),
        }
    }
    runs
}

pub(crate) fn flatten_runs(runs: Vec<MarkRun>) -> Vec<char> {
    let mut chars = Vec::with_capacity(runs.len() * 2);
    for run in runs {
        chars.extend(run.base);
        chars.extend(run.marks);
    }
    chars
}

/// Keeps the first occurrence of each mark within a letter's marks.
pub(crate) fn collapse_repeated_marks(chars: &[char]) -> Vec<char> {
    let mut runs = split_runs(chars);
    for run in &mut runs {
        let mut seen: Vec<char> = Vec::with_capacity(run.marks.len());
        run.marks.retain(|&mark| {
            if seen.contains(&mark) {
                false
            } else {
                seen.push(mark);
                true
            }
        });
    }
    flatten_runs(runs)
}

/// A letter whose marks contradict each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inconsistency {
    /// Letter index in the word, marks not counted.
    pub position: usize,
    pub letter: char,
}

/// Reports every letter carrying shadda together with sukun.
pub fn inconsistencies(word: &str) -> Vec<Inconsistency> {
    let found: Vec<Inconsistency> = VocalizedWord::parse_lenient(word)
        .iter()
        .enumerate()
        .filter(|(_, letter)| letter.is_inconsistent())
        .map(|(position, letter)| Inconsistency { position, letter: letter.letter })
        .collect();

    for inconsistency in &found {
        warn!(
            "shadda with sukun on {:?} at letter {} of {:?}",
            inconsistency.letter, inconsistency.position, word
        );
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::marks::{DAMMA, FATHA, SHADDA, SUKUN};

    #[test]
    fn runs_keep_a_leading_orphan() {
        let chars: Vec<char> = format!("{}كت{}", FATHA, DAMMA).chars().collect();
        let runs = split_runs(&chars);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], MarkRun { base: None, marks: vec![FATHA] });
        assert_eq!(runs[2], MarkRun { base: Some('ت'), marks: vec![DAMMA] });
        assert_eq!(flatten_runs(runs), chars);
    }

    #[test]
    fn repeated_marks_collapse_per_letter() {
        let chars: Vec<char> = format!("م{}{}{}ض{}", DAMMA, SHADDA, DAMMA, DAMMA).chars().collect();
        let collapsed: String = collapse_repeated_marks(&chars).into_iter().collect();
        assert_eq!(collapsed, format!("م{}{}ض{}", DAMMA, SHADDA, DAMMA));
    }

    #[test]
    fn shadda_with_sukun_is_reported() {
        let word = format!("ك{}ل{}{}م", FATHA, SHADDA, SUKUN);
        assert_eq!(inconsistencies(&word), vec![Inconsistency { position: 1, letter: 'ل' }]);
        assert!(inconsistencies("كتب").is_empty());
    }
}
