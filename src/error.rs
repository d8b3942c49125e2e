// File: src/error.rs
use thiserror::Error;

/// The error type for every fallible operation of the crate.
#[derive(Debug, Error)]
pub enum TashkeelError {
    /// A mark has no letter it can attach to, or a mark-only input holds a non-mark.
    #[error("Malformed mark sequence at position {position}: {reason} (found {mark:?})")]
    MalformedMarkSequence {
        position: usize,
        mark: char,
        reason: &'static str,
    },

    /// Encoded marks do not line up with the letters, or hold an unknown code.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The encode/decode mode string is neither "character" nor "decimal".
    #[error("Unsupported encoding mode: {0:?}. Expected \"character\" or \"decimal\".")]
    UnsupportedMode(String),

    /// A config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file is not valid JSON for `ToolkitConfig`.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl TashkeelError {
    pub(crate) fn malformed(position: usize, mark: char, reason: &'static str) -> Self {
        TashkeelError::MalformedMarkSequence { position, mark, reason }
    }
}

/// A convenience `Result` type alias using the crate's `TashkeelError` type.
pub type Result<T> = std::result::Result<T, TashkeelError>;
