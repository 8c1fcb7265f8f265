//! Error types for asciidoc-lang-support

use thiserror::Error;

/// Result type for fallible operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration.
///
/// Classification, stealth ranges and rename validation never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Settings file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML for [`crate::config::Settings`]
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
