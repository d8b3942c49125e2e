// File: src/canonical/ligature.rs

/// Expands the lam-alef presentation ligatures into lam followed by the alef form.
pub fn normalize_ligature(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{FEF5}' | '\u{FEF6}' => result.push_str("\u{0644}\u{0622}"),
            '\u{FEF7}' | '\u{FEF8}' => result.push_str("\u{0644}\u{0623}"),
            '\u{FEF9}' | '\u{FEFA}' => result.push_str("\u{0644}\u{0625}"),
            '\u{FEFB}' | '\u{FEFC}' => result.push_str("\u{0644}\u{0627}"),
            other => result.push(other),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ligatures_expand() {
        assert_eq!(normalize_ligature("\u{FEFB}\u{0639}\u{0628}"), "لاعب");
        assert_eq!(normalize_ligature("\u{FEF7}"), "لأ");
        assert_eq!(normalize_ligature("كتب"), "كتب");
    }
}
