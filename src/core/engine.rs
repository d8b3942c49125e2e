// File: src/core/engine.rs
use crate::canonical::{autocorrect::autocorrect, hamza::normalize_hamza_with, reduce::reduce_tashkeel};
use crate::compare::wazn::{wazn_root_with, waznlike_with};
use crate::config::ToolkitConfig;
use crate::core::codec::{joint, separate};
use crate::core::encoder::{decode_tashkeel, encode_tashkeel, EncodedMarks, EncodingMode};
use crate::error::Result;
use log::{info, warn};
use std::path::Path;

// The toolkit bundles a config with the pure operations that depend on it.
// It holds no other state; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct TashkeelToolkit {
    config: ToolkitConfig,
}

impl TashkeelToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ToolkitConfig) -> Self {
        Self { config }
    }

    /// Loads the config at `path`, falling back to defaults when it is missing
    /// or unreadable.
    pub fn from_config_file_or_default(path: &Path) -> Self {
        match ToolkitConfig::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                Self::with_config(config)
            }
            Err(e) => {
                warn!("using default config, {} not loaded: {}", path.display(), e);
                Self::new()
            }
        }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    pub fn set_encoding_mode(&mut self, mode: EncodingMode) {
        self.config.encoding_mode = mode;
    }

    pub fn separate(&self, word: &str) -> Result<(String, String)> {
        separate(word)
    }

    pub fn joint(&self, letters: &str, marks: &str) -> Result<String> {
        joint(letters, marks)
    }

    /// Encodes with the configured mode.
    pub fn encode(&self, word: &str) -> Result<(String, EncodedMarks)> {
        encode_tashkeel(word, self.config.encoding_mode)
    }

    /// Decodes codes written as text in the configured mode.
    pub fn decode(&self, letters: &str, codes: &str) -> Result<String> {
        let codes = EncodedMarks::parse(self.config.encoding_mode, codes)?;
        decode_tashkeel(letters, &codes)
    }

    pub fn normalize_hamza(&self, text: &str) -> String {
        normalize_hamza_with(text, self.config.hamza_method)
    }

    pub fn reduce(&self, word: &str) -> String {
        reduce_tashkeel(word)
    }

    pub fn autocorrect(&self, text: &str) -> String {
        autocorrect(text)
    }

    pub fn waznlike(&self, word: &str, wazn: &str) -> bool {
        waznlike_with(word, wazn, &self.config.wazn_placeholders)
    }

    pub fn wazn_root(&self, word: &str, wazn: &str) -> Option<String> {
        wazn_root_with(word, wazn, &self.config.wazn_placeholders)
    }
}
