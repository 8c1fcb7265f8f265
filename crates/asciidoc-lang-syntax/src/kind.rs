//! Node kinds for the AsciiDoc syntax tree
//!
//! Tokens (lexer output) and composite elements (parser output) share a
//! single enum, the same way the host's tree does. Kinds the host reports
//! that this crate does not know become [`NodeKind::Unknown`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! node_kinds {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)*) => {
        /// Syntactic category of a tree node.
        ///
        /// Serialized by its host tag name (`"HEADING"`, `"LINE_COMMENT"`, ...).
        /// A null or missing tag decodes as [`NodeKind::Unknown`] too.
        #[repr(u8)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(into = "String", from = "Option<String>")]
        pub enum NodeKind {
            $($(#[$doc])* $variant,)*
            /// Any kind this crate does not recognise, or no kind at all
            #[default]
            Unknown,
        }

        impl NodeKind {
            /// Every known kind, excluding [`NodeKind::Unknown`]
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// Host tag name of this kind
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name,)*
                    NodeKind::Unknown => "UNKNOWN",
                }
            }

            /// Look up a kind by host tag name, falling back to `Unknown`
            pub fn from_name(name: &str) -> NodeKind {
                match name {
                    $($name => NodeKind::$variant,)*
                    _ => NodeKind::Unknown,
                }
            }
        }
    };
}

node_kinds! {
    // === Tokens ===
    /// New-style heading line (`== Title`, `## Title`)
    Heading => "HEADING",
    /// Setext-style heading: title line plus underline
    HeadingOldstyle => "HEADING_OLDSTYLE",
    /// Block title (`.Title`)
    TitleToken => "TITLE_TOKEN",
    /// `// comment`
    LineComment => "LINE_COMMENT",
    /// `////` delimited comment block
    BlockComment => "BLOCK_COMMENT",
    /// Literal block content
    LiteralBlock => "LITERAL_BLOCK",
    /// Text of a block reference (`<<id,text>>`)
    BlockRefText => "BLOCKREFTEXT",
    /// Plain text
    Text => "TEXT",
    Italic => "ITALIC",
    Bold => "BOLD",
    BoldItalic => "BOLDITALIC",
    Mono => "MONO",
    MonoBold => "MONOBOLD",
    MonoItalic => "MONOITALIC",
    MonoBoldItalic => "MONOBOLDITALIC",
    /// Description list term
    Description => "DESCRIPTION",
    LinkText => "LINKTEXT",
    /// Sentence terminator (`.`, `?`, `!`)
    EndOfSentence => "END_OF_SENTENCE",
    LParen => "LPAREN",
    RParen => "RPAREN",
    LBracket => "LBRACKET",
    RBracket => "RBRACKET",
    /// List bullet (`*`, `-`)
    Bullet => "BULLET",
    WhiteSpace => "WHITE_SPACE",
    /// Whitespace inside a monospace run
    WhiteSpaceMono => "WHITE_SPACE_MONO",
    /// The host's own generic whitespace token
    HostWhiteSpace => "HOST_WHITE_SPACE",
    BoldStart => "BOLD_START",
    BoldEnd => "BOLD_END",
    ItalicStart => "ITALIC_START",
    ItalicEnd => "ITALIC_END",
    MonoStart => "MONO_START",
    MonoEnd => "MONO_END",
    /// `----`, `....`, `====` and friends
    BlockDelimiter => "BLOCK_DELIMITER",
    AttributeNameStart => "ATTRIBUTE_NAME_START",
    AttributeNameEnd => "ATTRIBUTE_NAME_END",
    /// `[[` or `[#`
    BlockIdStart => "BLOCKIDSTART",
    /// `]]` or `]`
    BlockIdEnd => "BLOCKIDEND",
    Newline => "NEWLINE",
    /// Comment element the host knows only as "a comment"
    Comment => "COMMENT",

    // === Elements ===
    Document => "DOCUMENT",
    Section => "SECTION",
    Block => "BLOCK",
    Url => "URL",
    /// Inline reference, can nest reference text
    Ref => "REF",
    Link => "LINK",
    /// Monospace run element wrapping `Mono` tokens
    MonoRun => "MONO_RUN",
    /// Italic run element wrapping `Italic` tokens
    ItalicRun => "ITALIC_RUN",
    BlockId => "BLOCKID",
    AttributeDeclaration => "ATTRIBUTE_DECLARATION",
    AttributeDeclarationName => "ATTRIBUTE_DECLARATION_NAME",
    /// `tag::name[]` / `end::name[]` in an included file
    TagDeclaration => "TAG_DECLARATION",
    /// `tag=name` inside an include macro
    IncludeTagInDocument => "INCLUDE_TAG_IN_DOCUMENT",
}

impl NodeKind {
    /// Whether the host treats nodes of this kind as comments
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            NodeKind::LineComment | NodeKind::BlockComment | NodeKind::Comment
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NodeKind::from_name(s))
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.name().to_string()
    }
}

impl From<String> for NodeKind {
    fn from(name: String) -> Self {
        NodeKind::from_name(&name)
    }
}

impl From<Option<String>> for NodeKind {
    fn from(name: Option<String>) -> Self {
        name.map(NodeKind::from).unwrap_or_default()
    }
}

/// A fixed set of node kinds, usable in `const` context.
///
/// Backed by a bit mask indexed by the kind's discriminant. `Unknown` is
/// never a member, so lookups of unrecognised kinds always miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindSet(u64);

impl KindSet {
    /// The empty set
    pub const EMPTY: KindSet = KindSet(0);

    /// Build a set from a list of kinds
    pub const fn new(kinds: &[NodeKind]) -> KindSet {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= Self::bit(kinds[i]);
            i += 1;
        }
        KindSet(bits)
    }

    /// Union of two sets
    pub const fn union(self, other: KindSet) -> KindSet {
        KindSet(self.0 | other.0)
    }

    /// Membership test
    pub const fn contains(self, kind: NodeKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    /// Number of kinds in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the members in discriminant order
    pub fn iter(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }

    const fn bit(kind: NodeKind) -> u64 {
        match kind {
            NodeKind::Unknown => 0,
            _ => 1u64 << (kind as u8),
        }
    }
}

impl FromIterator<NodeKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KindSet::EMPTY, |set, kind| KindSet(set.0 | KindSet::bit(kind)))
    }
}
