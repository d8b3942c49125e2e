// File: src/canonical/autocorrect.rs
use crate::canonical::{apply_rules, collapse_repeated_marks, flatten_runs, split_runs, Rule};
use crate::core::marks::{is_vowel_mark, ALEF, FATHATAN, SHADDA};
use log::debug;

/// The correction pipeline. Order matters: later rules assume the runs they
/// see are already free of orphans, repeats and misplaced shaddas.
const CORRECTION_RULES: [Rule; 4] = [
    drop_orphan_marks,
    collapse_repeated_marks,
    shadda_first,
    move_tanwin_off_alef,
];

/// Repairs common authoring errors in vocalized text. Idempotent.
pub fn autocorrect(text: &str) -> String {
    let corrected = apply_rules(text, &CORRECTION_RULES);
    if corrected != text {
        debug!("autocorrect {:?} -> {:?}", text, corrected);
    }
    corrected
}

/// Marks at the start of the text or right after whitespace have no letter.
fn drop_orphan_marks(chars: &[char]) -> Vec<char> {
    let mut runs = split_runs(chars);
    for run in &mut runs {
        if run.base.map_or(true, char::is_whitespace) {
            run.marks.clear();
        }
    }
    flatten_runs(runs)
}

/// A haraka typed before its shadda moves behind it.
fn shadda_first(chars: &[char]) -> Vec<char> {
    let mut runs = split_runs(chars);
    for run in &mut runs {
        if run.marks.contains(&SHADDA) && run.marks.first() != Some(&SHADDA) {
            let (shaddas, others): (Vec<char>, Vec<char>) =
                run.marks.iter().partition(|&&mark| mark == SHADDA);
            run.marks = shaddas.into_iter().chain(others).collect();
        }
    }
    flatten_runs(runs)
}

/// `بًا` rather than `باً`: word-final fathatan belongs on the letter before
/// the alef spacer, not on the alef.
fn move_tanwin_off_alef(chars: &[char]) -> Vec<char> {
    let mut runs = split_runs(chars);
    for i in 1..runs.len() {
        let on_final_alef = runs[i].base == Some(ALEF)
            && runs[i].marks == [FATHATAN]
            && runs
                .get(i + 1)
                .and_then(|next| next.base)
                .map_or(true, |c| !c.is_alphabetic());
        let bearer_is_letter = runs[i - 1].base.is_some_and(char::is_alphabetic);

        if on_final_alef && bearer_is_letter {
            runs[i].marks.clear();
            let bearer = &mut runs[i - 1].marks;
            bearer.retain(|&mark| !is_vowel_mark(mark));
            bearer.push(FATHATAN);
        }
    }
    flatten_runs(runs)
}
