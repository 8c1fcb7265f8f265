//! asciidoc-lang-syntax - Syntax tree model
//!
//! This crate provides the node kinds and tree nodes that a host hands to
//! asciidoc-lang's editing support. Parsing is the host's job; this crate
//! only models the result.
//!
//! # Example
//!
//! ```
//! use asciidoc_lang_syntax::{NodeKind, SyntaxNode};
//!
//! let section = SyntaxNode::node(
//!     NodeKind::Section,
//!     vec![SyntaxNode::token(NodeKind::Heading, 0, "== Intro")],
//! );
//! assert_eq!(section.text(), "== Intro");
//! ```

pub mod kind;
pub mod node;

pub use kind::{KindSet, NodeKind};
pub use node::{Descendants, SyntaxNode, TextRange};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
