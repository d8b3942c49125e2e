// File: src/canonical/hamza.rs
use crate::core::marks::{
    ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, HAMZA_ABOVE, HAMZA_BELOW, WAW_HAMZA, YEH_HAMZA,
};
use serde::{Deserialize, Serialize};

/// Target form for hamza-bearing letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HamzaMethod {
    /// Every hamza form becomes the bare hamza, whatever its seat.
    #[default]
    Uniform,
    /// Every seated hamza becomes its seat letter; the bare hamza stays.
    Tasheel,
}

fn uniform_form(c: char) -> Option<&'static str> {
    match c {
        ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | WAW_HAMZA | YEH_HAMZA | HAMZA_ABOVE | HAMZA_BELOW => {
            Some("\u{0621}")
        }
        ALEF_MADDA => Some("\u{0621}\u{0627}"),
        _ => None,
    }
}

fn tasheel_form(c: char) -> Option<&'static str> {
    match c {
        ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | ALEF_MADDA => Some("\u{0627}"),
        WAW_HAMZA => Some("\u{0648}"),
        YEH_HAMZA => Some("\u{064A}"),
        HAMZA_ABOVE | HAMZA_BELOW => Some(""),
        _ => None,
    }
}

/// Rewrites every hamza form to the bare hamza in one left-to-right pass.
/// Idempotent: no replacement contains a hamza form other than the bare one.
pub fn normalize_hamza(text: &str) -> String {
    normalize_hamza_with(text, HamzaMethod::Uniform)
}

pub fn normalize_hamza_with(text: &str, method: HamzaMethod) -> String {
    let table: fn(char) -> Option<&'static str> = match method {
        HamzaMethod::Uniform => uniform_form,
        HamzaMethod::Tasheel => tasheel_form,
    };

    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match table(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_rewrites_every_seat() {
        assert_eq!(normalize_hamza("سئل أحد الأئمة"), "سءل ءحد الءءمة");
        assert_eq!(normalize_hamza("مؤمن إسلام"), "مءمن ءسلام");
        assert_eq!(normalize_hamza("آمن"), "ءامن");
    }

    #[test]
    fn tasheel_keeps_the_seat() {
        assert_eq!(normalize_hamza_with("سئل أحد مؤمن", HamzaMethod::Tasheel), "سيل احد مومن");
        assert_eq!(normalize_hamza_with("سماء", HamzaMethod::Tasheel), "سماء");
    }

    #[test]
    fn both_methods_are_idempotent() {
        let text = "سأل الأئمة عن المؤمنين والآيات";
        for method in [HamzaMethod::Uniform, HamzaMethod::Tasheel] {
            let once = normalize_hamza_with(text, method);
            assert_eq!(normalize_hamza_with(&once, method), once);
        }
    }

    #[test]
    fn other_text_passes_through() {
        assert_eq!(normalize_hamza("abc كتب"), "abc كتب");
        assert_eq!(normalize_hamza(""), "");
    }
}
