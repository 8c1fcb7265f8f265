//! Validation of proposed names

use asciidoc_lang_syntax::{NodeKind, SyntaxNode};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Type of renameable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenameTarget {
    /// `tag=name` inside an include macro
    IncludeTagInDocument,
    /// `tag::name[]` in an included file
    TagDeclaration,
    /// `[[id]]` or `[#id]`
    BlockId,
    /// `:name:`
    AttributeDeclarationName,
}

impl RenameTarget {
    /// Map a node kind to the rename target it represents
    pub fn from_kind(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::IncludeTagInDocument => Some(RenameTarget::IncludeTagInDocument),
            NodeKind::TagDeclaration => Some(RenameTarget::TagDeclaration),
            NodeKind::BlockId => Some(RenameTarget::BlockId),
            NodeKind::AttributeDeclarationName => Some(RenameTarget::AttributeDeclarationName),
            _ => None,
        }
    }
}

/// Names of attributes and tags
fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\A[\p{Alphabetic}\p{Nd}_-]*\z").unwrap())
}

/// Block anchors, as Asciidoctor's `BlockAnchorRx` accepts them.
///
/// `{` and `}` are allowed because an id may reference attributes.
fn block_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\A[\p{Alphabetic}_:{][\p{Alphabetic}\p{Nd}\w\-:.{}]*\z").unwrap()
    })
}

/// Decides whether a proposed new name is acceptable for a rename
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameInputValidator;

impl RenameInputValidator {
    pub fn new() -> Self {
        Self
    }

    /// The rename target `node` represents, if this validator handles it
    pub fn accepts(&self, node: &SyntaxNode) -> Option<RenameTarget> {
        RenameTarget::from_kind(node.kind())
    }

    /// Check a new name for the given target. Never fails; invalid names
    /// are simply rejected.
    pub fn is_input_valid(&self, new_name: &str, target: RenameTarget) -> bool {
        let valid = match target {
            RenameTarget::BlockId => block_id_re().is_match(new_name),
            _ => identifier_re().is_match(new_name),
        };
        if !valid {
            debug!("Rejected new name {:?} for {:?}", new_name, target);
        }
        valid
    }

    /// Check a new name for `node`; nodes no rename can target are rejected
    pub fn is_valid_for(&self, new_name: &str, node: &SyntaxNode) -> bool {
        self.accepts(node)
            .is_some_and(|target| self.is_input_valid(new_name, target))
    }
}
