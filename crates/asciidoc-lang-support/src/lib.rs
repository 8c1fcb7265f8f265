//! asciidoc-lang editing support
//!
//! This library answers the questions an editor host asks about an AsciiDoc
//! syntax tree:
//! - Grammar checking: which nodes hold sentences, how their descendants
//!   contribute text, which markup to hide from the checker
//! - Rename: whether a proposed new id, attribute or tag name is valid
//! - Structure: section titles, levels and ids for outlines
//!
//! # Library Usage
//!
//! ```
//! use asciidoc_lang_support::grammar::{AsciiDocLanguageSupport, CheckableText};
//! use asciidoc_lang_syntax::{NodeKind, SyntaxNode};
//!
//! let support = AsciiDocLanguageSupport::new();
//! let heading = SyntaxNode::token(NodeKind::Heading, 0, "== Getting Started");
//!
//! let text = CheckableText::extract(&support, &heading);
//! assert_eq!(text.text(), "Getting Started");
//! ```
//!
//! # Logging
//!
//! Diagnostics go through `tracing`. Hosts without a subscriber of their
//! own can call [`logging::init`] and set `RUST_LOG=asciidoc_lang_support=trace`.

pub mod config;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod rename;
pub mod structural;

// Re-export commonly used types
pub use config::Settings;
pub use error::{Error, Result};
pub use grammar::{AsciiDocLanguageSupport, ElementBehavior, GrammarCheckingStrategy};
pub use rename::{RenameInputValidator, RenameTarget};
pub use structural::Section;
