// File: src/compare/mod.rs
pub mod similarity;
pub mod wazn;

use crate::core::types::{HarakaClass, VocalizedLetter};

/// How two vocalized letters at the same position relate, marks only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MarkAgreement {
    pub matches: u32,
    pub contradicts: bool,
}

/// Compares the marks of two letters. An absent mark never contradicts; on the
/// last letter a sukun counts as absent (pausal form).
pub(crate) fn compare_marks(a: &VocalizedLetter, b: &VocalizedLetter, terminal: bool) -> MarkAgreement {
    let mut agreement = MarkAgreement::default();

    if a.shadda && b.shadda {
        agreement.matches += 1;
    }

    let pausal = |haraka: HarakaClass| match haraka {
        HarakaClass::Sukun if terminal => HarakaClass::None,
        other => other,
    };
    let (left, right) = (pausal(a.haraka), pausal(b.haraka));
    if left.is_present() && right.is_present() {
        if left == right {
            agreement.matches += 1;
        } else {
            agreement.contradicts = true;
        }
    }

    agreement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(shadda: bool, haraka: HarakaClass) -> VocalizedLetter {
        VocalizedLetter::new('ب', shadda, haraka)
    }

    #[test]
    fn absent_marks_are_neutral() {
        let agreement = compare_marks(&letter(false, HarakaClass::Fatha), &letter(false, HarakaClass::None), false);
        assert_eq!(agreement, MarkAgreement { matches: 0, contradicts: false });
    }

    #[test]
    fn shared_marks_count() {
        let agreement = compare_marks(&letter(true, HarakaClass::Kasra), &letter(true, HarakaClass::Kasra), false);
        assert_eq!(agreement.matches, 2);
        assert!(!agreement.contradicts);
    }

    #[test]
    fn sukun_contradicts_inside_but_not_at_the_end() {
        let a = letter(false, HarakaClass::Sukun);
        let b = letter(false, HarakaClass::Damma);
        assert!(compare_marks(&a, &b, false).contradicts);
        assert!(!compare_marks(&a, &b, true).contradicts);
    }
}
