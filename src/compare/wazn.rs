// File: src/compare/wazn.rs
use crate::compare::compare_marks;
use crate::core::marks::{AIN, FEH, LAM};
use crate::core::types::VocalizedWord;
use log::trace;

/// The radical slots of the classical pattern notation: فعل.
pub const DEFAULT_PLACEHOLDERS: [char; 3] = [FEH, AIN, LAM];

/// True if `word` fits the template `wazn`, whatever radicals fill its slots.
pub fn waznlike(word: &str, wazn: &str) -> bool {
    waznlike_with(word, wazn, &DEFAULT_PLACEHOLDERS)
}

pub fn waznlike_with(word: &str, wazn: &str, placeholders: &[char]) -> bool {
    wazn_root_with(word, wazn, placeholders).is_some()
}

/// The radicals of `word` read off the placeholder slots, if it fits `wazn`.
pub fn wazn_root(word: &str, wazn: &str) -> Option<String> {
    wazn_root_with(word, wazn, &DEFAULT_PLACEHOLDERS)
}

/// Walks both words letter by letter: placeholder slots take any letter,
/// other letters must be equal, and marks follow the `vocalizedlike` rules.
pub fn wazn_root_with(word: &str, wazn: &str, placeholders: &[char]) -> Option<String> {
    let word = VocalizedWord::parse_lenient(word);
    let template = VocalizedWord::parse_lenient(wazn);
    if word.len() != template.len() {
        return None;
    }

    let last = word.len().saturating_sub(1);
    let mut root = String::with_capacity(placeholders.len() * 2);
    for (i, (letter, slot)) in word.iter().zip(template.iter()).enumerate() {
        if placeholders.contains(&slot.letter) {
            root.push(letter.letter);
        } else if letter.letter != slot.letter {
            return None;
        }
        if compare_marks(letter, slot, i == last).contradicts {
            return None;
        }
    }

    trace!("{:?} fits {:?} with root {:?}", word.skeleton(), template.skeleton(), root);
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_word_fits_vocalized_pattern() {
        assert!(waznlike("ضارب", "فَاعِل"));
        assert_eq!(wazn_root("ضارب", "فَاعِل").as_deref(), Some("ضرب"));
    }

    #[test]
    fn literal_letters_must_match() {
        assert!(!waznlike("مضروب", "فَاعِل"));
        assert!(waznlike("مَضْرُوب", "مَفْعُول"));
        assert!(!waznlike("ضرب", "فَاعِل"));
    }

    #[test]
    fn marks_must_not_contradict_the_pattern() {
        assert!(waznlike("كَاتِب", "فَاعِل"));
        assert!(!waznlike("كُاتِب", "فَاعِل"));
    }

    #[test]
    fn custom_placeholders() {
        assert!(waznlike_with("كاتب", "XاYZ", &['X', 'Y', 'Z']));
        assert!(!waznlike_with("كاتب", "XوYZ", &['X', 'Y', 'Z']));
    }
}
