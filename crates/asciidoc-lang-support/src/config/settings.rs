//! Configuration settings

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Conventional settings file name in a workspace root
pub const CONFIG_FILE_NAME: &str = "asciidoc-lang.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Grammar and spell checking settings
    pub grammar: GrammarSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Load `asciidoc-lang.toml` from a directory, or defaults if there is none
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.exists() {
            debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.as_ref().display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Grammar checking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarSettings {
    /// Whether grammar checking of AsciiDoc is on when the host has no
    /// explicit user choice
    pub enabled: bool,
    /// Treat comments as independent units of text to check
    pub check_comments: bool,
}

impl Default for GrammarSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            check_comments: true,
        }
    }
}
