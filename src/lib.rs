// src/lib.rs

pub mod canonical;
pub mod compare;
pub mod config;
pub mod core;
pub mod error;

pub use crate::canonical::autocorrect::autocorrect;
pub use crate::canonical::hamza::{normalize_hamza, normalize_hamza_with, HamzaMethod};
pub use crate::canonical::ligature::normalize_ligature;
pub use crate::canonical::reduce::reduce_tashkeel;
pub use crate::canonical::{inconsistencies, Inconsistency};
pub use crate::compare::similarity::{
    shaddalike, vocalized_similarity, vocalizedlike, CONTRADICTORY_MARKS, SKELETON_MISMATCH,
    VOCALIZED_LIKE_THRESHOLD,
};
pub use crate::compare::wazn::{wazn_root, wazn_root_with, waznlike, waznlike_with};
pub use crate::config::ToolkitConfig;
pub use crate::core::codec::{joint, separate};
pub use crate::core::encoder::{decode_tashkeel, encode_tashkeel, EncodedMarks, EncodingMode};
pub use crate::core::engine::TashkeelToolkit;
pub use crate::core::marks::{
    is_haraka, is_mark, is_shadda, is_tanwin, is_vocalized, is_vowel_mark, strip_harakat,
    strip_last_haraka, strip_shadda, strip_tashkeel, strip_tatweel,
};
pub use crate::core::types::{HarakaClass, VocalizedLetter, VocalizedWord};
pub use crate::error::{Result, TashkeelError};
