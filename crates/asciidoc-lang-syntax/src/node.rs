//! Syntax tree nodes
//!
//! Nodes are immutable once built. Leaves carry their raw text; composite
//! nodes span their children and their text is the children's text
//! concatenated, so the tree stays lossless.

use serde::{Deserialize, Serialize};

use crate::kind::NodeKind;

/// A span of the containing document, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    /// Start offset
    pub start: usize,
    /// Length
    pub len: usize,
}

impl TextRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if an offset falls inside this range
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end()
    }
}

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxNode {
    #[serde(default)]
    kind: NodeKind,
    range: TextRange,
    text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf token starting at `start` in the document
    pub fn token(kind: NodeKind, start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind,
            range: TextRange::new(start, text.len()),
            text,
            children: Vec::new(),
        }
    }

    /// Create a composite node spanning its children.
    ///
    /// A node without children is empty and positioned at offset 0.
    pub fn node(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        let start = children.first().map(|c| c.range.start).unwrap_or(0);
        let end = children.last().map(|c| c.range.end()).unwrap_or(start);
        let text = children.iter().map(|c| c.text.as_str()).collect();
        Self {
            kind,
            range: TextRange::new(start, end.saturating_sub(start)),
            text,
            children,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Raw text of this node
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text length in chars (not bytes)
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn children(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// First direct child of the given kind
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Identity comparison: true only if both references point at the same node
    pub fn same(&self, other: &SyntaxNode) -> bool {
        std::ptr::eq(self, other)
    }

    /// Pre-order traversal of this node and all of its descendants
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
