// File: src/core/encoder.rs
use crate::core::marks::is_mark;
use crate::core::types::{HarakaClass, VocalizedLetter, VocalizedWord};
use crate::error::{Result, TashkeelError};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-letter mark combinations are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// One printable ASCII character per letter.
    #[default]
    Character,
    /// One digit group per letter, packed into a single integer.
    Decimal,
}

impl FromStr for EncodingMode {
    type Err = TashkeelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "character" | "ascii" => Ok(EncodingMode::Character),
            "decimal" => Ok(EncodingMode::Decimal),
            other => Err(TashkeelError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingMode::Character => f.write_str("character"),
            EncodingMode::Decimal => f.write_str("decimal"),
        }
    }
}

/// The compact mark stream produced by `encode_tashkeel`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum EncodedMarks {
    Character(String),
    Decimal(u128),
}

impl EncodedMarks {
    pub fn mode(&self) -> EncodingMode {
        match self {
            EncodedMarks::Character(_) => EncodingMode::Character,
            EncodedMarks::Decimal(_) => EncodingMode::Decimal,
        }
    }

    /// Reads codes written as text, e.g. from a command line.
    pub fn parse(mode: EncodingMode, codes: &str) -> Result<Self> {
        match mode {
            EncodingMode::Character => Ok(EncodedMarks::Character(codes.to_string())),
            EncodingMode::Decimal => codes
                .parse::<u128>()
                .map(EncodedMarks::Decimal)
                .map_err(|e| TashkeelError::InvalidEncoding(format!("{:?} is not a decimal code: {}", codes, e))),
        }
    }
}

impl fmt::Display for EncodedMarks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodedMarks::Character(codes) => f.write_str(codes),
            EncodedMarks::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// Decimal group prefix marking a shadda; the haraka digit follows it.
const SHADDA_DIGIT: u8 = 7;

/// (haraka, character code, character code with shadda, decimal digit)
const CODE_TABLE: [(HarakaClass, char, char, u8); 8] = [
    (HarakaClass::None, '0', '~', 0),
    (HarakaClass::Fathatan, 'A', 'B', 1),
    (HarakaClass::Dammatan, 'U', 'V', 2),
    (HarakaClass::Kasratan, 'I', 'J', 3),
    (HarakaClass::Fatha, 'a', 'b', 4),
    (HarakaClass::Damma, 'u', 'v', 5),
    (HarakaClass::Kasra, 'i', 'j', 6),
    (HarakaClass::Sukun, 'o', 'p', 8),
];

fn table_entry(haraka: HarakaClass) -> (HarakaClass, char, char, u8) {
    CODE_TABLE
        .iter()
        .copied()
        .find(|&(class, ..)| class == haraka)
        .unwrap_or(CODE_TABLE[0])
}

fn character_code(letter: &VocalizedLetter) -> char {
    let (_, plain, doubled, _) = table_entry(letter.haraka);
    if letter.shadda {
        doubled
    } else {
        plain
    }
}

fn from_character_code(code: char) -> Option<(bool, HarakaClass)> {
    CODE_TABLE.iter().find_map(|&(class, plain, doubled, _)| {
        if code == plain {
            Some((false, class))
        } else if code == doubled {
            Some((true, class))
        } else {
            None
        }
    })
}

fn from_digit(digit: u8) -> Option<HarakaClass> {
    CODE_TABLE
        .iter()
        .find(|&&(.., value)| value == digit)
        .map(|&(class, ..)| class)
}

fn push_digit(value: u128, digit: u8) -> Result<u128> {
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add(u128::from(digit)))
        .ok_or_else(|| TashkeelError::InvalidEncoding("word too long for decimal encoding".to_string()))
}

/// Splits a vocalized word into its letters and one code per letter.
///
/// Character mode yields a code string as long as the letter string. Decimal
/// mode yields one digit per letter, or `7` plus the haraka digit for a letter
/// with shadda, most significant letter first.
pub fn encode_tashkeel(word: &str, mode: EncodingMode) -> Result<(String, EncodedMarks)> {
    let parsed = VocalizedWord::parse(word)?;
    let letters = parsed.skeleton();

    let encoded = match mode {
        EncodingMode::Character => EncodedMarks::Character(parsed.iter().map(character_code).collect()),
        EncodingMode::Decimal => {
            let mut value: u128 = 0;
            for letter in &parsed {
                if letter.shadda {
                    value = push_digit(value, SHADDA_DIGIT)?;
                }
                value = push_digit(value, table_entry(letter.haraka).3)?;
            }
            EncodedMarks::Decimal(value)
        }
    };

    trace!("encode {:?} ({}) -> {}", word, mode, encoded);
    Ok((letters, encoded))
}

/// Rebuilds the vocalized word from its letters and codes. A letter with
/// shadda and haraka gets them in Unicode canonical order, so every word in
/// that order comes back unchanged.
pub fn decode_tashkeel(letters: &str, codes: &EncodedMarks) -> Result<String> {
    if let Some(mark) = letters.chars().find(|&c| is_mark(c)) {
        return Err(TashkeelError::InvalidEncoding(format!("letters carry the mark {:?}", mark)));
    }
    let letter_count = letters.chars().count();

    let pairs = match codes {
        EncodedMarks::Character(codes) => character_pairs(codes, letter_count)?,
        EncodedMarks::Decimal(value) => decimal_pairs(*value, letter_count)?,
    };

    let word: VocalizedWord = letters
        .chars()
        .zip(pairs)
        .map(|(letter, (shadda, haraka))| VocalizedLetter::new(letter, shadda, haraka))
        .collect();
    Ok(word.to_string())
}

fn character_pairs(codes: &str, letter_count: usize) -> Result<Vec<(bool, HarakaClass)>> {
    let code_count = codes.chars().count();
    if code_count != letter_count {
        return Err(TashkeelError::InvalidEncoding(format!(
            "{} codes for {} letters",
            code_count, letter_count
        )));
    }

    codes
        .chars()
        .map(|code| {
            from_character_code(code)
                .ok_or_else(|| TashkeelError::InvalidEncoding(format!("unknown code {:?}", code)))
        })
        .collect()
}

fn decimal_pairs(value: u128, letter_count: usize) -> Result<Vec<(bool, HarakaClass)>> {
    let digits: Vec<u8> = match value {
        0 => Vec::new(),
        _ => value.to_string().bytes().map(|b| b - b'0').collect(),
    };

    let mut groups = Vec::with_capacity(letter_count);
    let mut iter = digits.into_iter();
    while let Some(digit) = iter.next() {
        let (shadda, haraka_digit) = match digit {
            SHADDA_DIGIT => {
                let next = iter.next().ok_or_else(|| {
                    TashkeelError::InvalidEncoding("shadda group without a haraka digit".to_string())
                })?;
                (true, next)
            }
            other => (false, other),
        };
        let haraka = from_digit(haraka_digit)
            .ok_or_else(|| TashkeelError::InvalidEncoding(format!("unknown digit {}", haraka_digit)))?;
        groups.push((shadda, haraka));
    }

    if groups.len() > letter_count {
        debug!("decimal code {} holds {} groups for {} letters", value, groups.len(), letter_count);
        return Err(TashkeelError::InvalidEncoding(format!(
            "{} digit groups for {} letters",
            groups.len(),
            letter_count
        )));
    }

    // Leading bare letters were leading zeros.
    let mut pairs = vec![(false, HarakaClass::None); letter_count - groups.len()];
    pairs.extend(groups);
    Ok(pairs)
}
