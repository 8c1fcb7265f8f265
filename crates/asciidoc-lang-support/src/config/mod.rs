//! Configuration
//!
//! Settings are read from an `asciidoc-lang.toml` file:
//!
//! ```toml
//! [grammar]
//! enabled = true
//! check_comments = false
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

mod settings;


pub use settings::{GrammarSettings, Settings, CONFIG_FILE_NAME};
