//! Node kind tables for grammar checking

use asciidoc_lang_syntax::{KindSet, NodeKind};

/// Kinds that contain full sentences and are checked as independent units
pub const CHECK_ROOT_KINDS: KindSet = KindSet::new(&[
    NodeKind::Heading,
    NodeKind::HeadingOldstyle,
    NodeKind::TitleToken,
    NodeKind::LineComment,
    NodeKind::BlockComment,
    NodeKind::LiteralBlock,
    NodeKind::BlockRefText,
    NodeKind::Section,
    NodeKind::Block,
]);

/// Kinds whose text is part of a sentence inside one of the roots above.
///
/// Whitespace stays in here: dropping it would glue neighbouring words.
pub const TEXT_KINDS: KindSet = KindSet::new(&[
    NodeKind::Text,
    NodeKind::Italic,
    NodeKind::Bold,
    NodeKind::BoldItalic,
    NodeKind::Mono,
    NodeKind::MonoBold,
    NodeKind::Description,
    NodeKind::LinkText,
    NodeKind::BlockRefText,
    NodeKind::MonoItalic,
    NodeKind::MonoBoldItalic,
    NodeKind::EndOfSentence,
    NodeKind::LParen,
    NodeKind::RParen,
    NodeKind::LBracket,
    NodeKind::RBracket,
    NodeKind::Bullet,
    NodeKind::WhiteSpace,
    NodeKind::WhiteSpaceMono,
    NodeKind::HostWhiteSpace,
    // can nest LinkText
    NodeKind::Url,
    // can nest reference text
    NodeKind::Ref,
    // can nest LinkText
    NodeKind::Link,
    NodeKind::MonoRun,
    NodeKind::ItalicRun,
])
.union(CHECK_ROOT_KINDS);
