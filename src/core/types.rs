// src/core/types.rs
use crate::core::marks::{DAMMA, DAMMATAN, FATHA, FATHATAN, KASRA, KASRATAN, SHADDA, SUKUN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The vowel slot of a letter. A letter carries at most one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HarakaClass {
    #[default]
    None,
    Fatha,
    Damma,
    Kasra,
    Sukun,
    Fathatan,
    Dammatan,
    Kasratan,
}

impl HarakaClass {
    pub const ALL: [HarakaClass; 8] = [
        HarakaClass::None,
        HarakaClass::Fatha,
        HarakaClass::Damma,
        HarakaClass::Kasra,
        HarakaClass::Sukun,
        HarakaClass::Fathatan,
        HarakaClass::Dammatan,
        HarakaClass::Kasratan,
    ];

    /// Classifies a vowel mark. Shadda and non-marks yield `None`.
    pub fn from_mark(c: char) -> Option<Self> {
        match c {
            FATHA => Some(HarakaClass::Fatha),
            DAMMA => Some(HarakaClass::Damma),
            KASRA => Some(HarakaClass::Kasra),
            SUKUN => Some(HarakaClass::Sukun),
            FATHATAN => Some(HarakaClass::Fathatan),
            DAMMATAN => Some(HarakaClass::Dammatan),
            KASRATAN => Some(HarakaClass::Kasratan),
            _ => None,
        }
    }

    /// The codepoint written for this class, if any.
    pub fn mark(self) -> Option<char> {
        match self {
            HarakaClass::None => None,
            HarakaClass::Fatha => Some(FATHA),
            HarakaClass::Damma => Some(DAMMA),
            HarakaClass::Kasra => Some(KASRA),
            HarakaClass::Sukun => Some(SUKUN),
            HarakaClass::Fathatan => Some(FATHATAN),
            HarakaClass::Dammatan => Some(DAMMATAN),
            HarakaClass::Kasratan => Some(KASRATAN),
        }
    }

    pub fn is_present(self) -> bool {
        self != HarakaClass::None
    }

    pub fn is_tanwin(self) -> bool {
        matches!(self, HarakaClass::Fathatan | HarakaClass::Dammatan | HarakaClass::Kasratan)
    }
}

/// One base letter with its shadda flag and haraka slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocalizedLetter {
    pub letter: char,
    pub shadda: bool,
    pub haraka: HarakaClass,
    /// Shadda is written before the haraka. Only meaningful when the letter
    /// carries both.
    #[serde(default)]
    pub shadda_first: bool,
}

impl VocalizedLetter {
    /// A letter whose marks are written in Unicode canonical order.
    pub fn new(letter: char, shadda: bool, haraka: HarakaClass) -> Self {
        Self { letter, shadda, haraka, shadda_first: canonical_shadda_first(haraka) }
    }

    pub fn bare(letter: char) -> Self {
        Self::new(letter, false, HarakaClass::None)
    }

    pub fn is_bare(&self) -> bool {
        !self.shadda && !self.haraka.is_present()
    }

    /// Shadda with sukun: a doubled consonant cannot be vowelless.
    pub fn is_inconsistent(&self) -> bool {
        self.shadda && self.haraka == HarakaClass::Sukun
    }

    /// True when shadda and haraka, if both present, follow Unicode canonical
    /// ordering: harakat and tanwin (classes 27..=32) before shadda (33),
    /// sukun (34) after it.
    pub fn in_canonical_order(&self) -> bool {
        !self.shadda || !self.haraka.is_present() || self.shadda_first == canonical_shadda_first(self.haraka)
    }

    /// Writes the letter followed by its marks in their recorded order.
    pub fn write_to(&self, out: &mut String) {
        out.push(self.letter);
        let haraka = self.haraka.mark();
        if self.shadda && self.shadda_first {
            out.push(SHADDA);
        }
        out.extend(haraka);
        if self.shadda && !self.shadda_first {
            out.push(SHADDA);
        }
    }
}

fn canonical_shadda_first(haraka: HarakaClass) -> bool {
    haraka == HarakaClass::Sukun
}

/// A word as an ordered sequence of vocalized letters, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VocalizedWord {
    letters: Vec<VocalizedLetter>,
}

impl VocalizedWord {
    pub fn new(letters: Vec<VocalizedLetter>) -> Self {
        Self { letters }
    }

    pub fn letters(&self) -> &[VocalizedLetter] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VocalizedLetter> {
        self.letters.iter()
    }

    /// The consonantal skeleton: base letters only.
    pub fn skeleton(&self) -> String {
        self.letters.iter().map(|l| l.letter).collect()
    }

    pub fn same_skeleton(&self, other: &VocalizedWord) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|(a, b)| a.letter == b.letter)
    }
}

impl FromIterator<VocalizedLetter> for VocalizedWord {
    fn from_iter<I: IntoIterator<Item = VocalizedLetter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VocalizedWord {
    type Item = &'a VocalizedLetter;
    type IntoIter = std::slice::Iter<'a, VocalizedLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl fmt::Display for VocalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::with_capacity(self.letters.len() * 6);
        for letter in &self.letters {
            letter.write_to(&mut rendered);
        }
        f.write_str(&rendered)
    }
}
