// File: src/config.rs
use crate::canonical::hamza::HamzaMethod;
use crate::compare::wazn::DEFAULT_PLACEHOLDERS;
use crate::core::encoder::EncodingMode;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Settings for a `TashkeelToolkit`. Every field has a default, so a config
/// file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub encoding_mode: EncodingMode,
    pub hamza_method: HamzaMethod,
    /// Letters that stand for radicals in a wazn.
    pub wazn_placeholders: Vec<char>,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            encoding_mode: EncodingMode::default(),
            hamza_method: HamzaMethod::default(),
            wazn_placeholders: DEFAULT_PLACEHOLDERS.to_vec(),
        }
    }
}

impl ToolkitConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
