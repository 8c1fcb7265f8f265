//! Typed view over section nodes
//!
//! Gives outline and navigation code what it needs from a section: its
//! title, level, explicit block id and the id Asciidoctor would generate.

use asciidoc_lang_syntax::{NodeKind, SyntaxNode, TextRange};
use regex::Regex;
use std::sync::OnceLock;

use crate::grammar::{AsciiDocLanguageSupport, GrammarCheckingStrategy};

/// Prefix of generated section ids (Asciidoctor `idprefix` default)
pub const ID_PREFIX: char = '_';
/// Word separator of generated section ids (Asciidoctor `idseparator` default)
pub const ID_SEPARATOR: char = '_';

/// A `Section` node
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    node: &'a SyntaxNode,
}

impl<'a> Section<'a> {
    /// View `node` as a section if it is one
    pub fn cast(node: &'a SyntaxNode) -> Option<Self> {
        (node.kind() == NodeKind::Section).then_some(Self { node })
    }

    pub fn syntax(&self) -> &'a SyntaxNode {
        self.node
    }

    pub fn range(&self) -> TextRange {
        self.node.range()
    }

    /// The heading token, new or old style
    pub fn heading(&self) -> Option<&'a SyntaxNode> {
        self.node
            .children()
            .iter()
            .find(|c| matches!(c.kind(), NodeKind::Heading | NodeKind::HeadingOldstyle))
    }

    /// Heading text without markers, spaces or underline
    pub fn title(&self) -> String {
        let Some(heading) = self.heading() else {
            return String::new();
        };
        let hidden = AsciiDocLanguageSupport::new().stealthy_ranges(heading);
        let title: String = heading
            .text()
            .chars()
            .enumerate()
            .filter(|(i, _)| !hidden.covers(*i))
            .map(|(_, c)| c)
            .collect();
        title.trim().to_string()
    }

    /// Section level: 0 for the document title, 1 for `==`, and so on.
    ///
    /// Two-line headings take their level from the underline char.
    pub fn heading_level(&self) -> usize {
        let Some(heading) = self.heading() else {
            return 0;
        };
        let text = heading.text();
        match heading.kind() {
            NodeKind::HeadingOldstyle => {
                let underline = text.split_once('\n').and_then(|(_, rest)| rest.chars().next());
                match underline {
                    Some('-') => 1,
                    Some('~') => 2,
                    Some('^') => 3,
                    Some('+') => 4,
                    _ => 0,
                }
            }
            _ => {
                let Some(marker) = text.chars().next() else {
                    return 0;
                };
                text.chars().take_while(|c| *c == marker).count().saturating_sub(1)
            }
        }
    }

    /// Explicit id from a `[[id]]` or `[#id]` anchor.
    ///
    /// Reference text (`[[id,text]]`) is dropped, and so are the roles and
    /// options of the shorthand form (`[#id.role%option]`).
    pub fn block_id(&self) -> Option<String> {
        let block_id = self.node.child_of_kind(NodeKind::BlockId)?;
        let (shorthand, raw): (bool, String) = if block_id.is_leaf() {
            let text = block_id.text();
            let shorthand = text.starts_with("[#");
            let raw = text
                .trim_start_matches("[[")
                .trim_start_matches("[#")
                .trim_end_matches(']');
            (shorthand, raw.to_string())
        } else {
            let shorthand = block_id
                .child_of_kind(NodeKind::BlockIdStart)
                .is_some_and(|start| start.text() == "[#");
            let raw = block_id
                .children()
                .iter()
                .filter(|c| !matches!(c.kind(), NodeKind::BlockIdStart | NodeKind::BlockIdEnd))
                .map(|c| c.text())
                .collect();
            (shorthand, raw)
        };
        let id = if shorthand {
            raw.split(['.', '%']).next()
        } else {
            raw.split(',').next()
        };
        let id = id.unwrap_or_default().trim();
        (!id.is_empty()).then(|| id.to_string())
    }

    /// The id Asciidoctor generates from the title with default settings
    pub fn autogenerated_id(&self) -> String {
        generate_id(&self.title())
    }

    /// Whether `key` refers to this section's generated id, including the
    /// `_2`, `_3`, ... suffixes added to duplicates
    pub fn matches_autogenerated_id(&self, key: &str) -> bool {
        let id = self.autogenerated_id();
        if id.is_empty() {
            return false;
        }
        match key.strip_prefix(id.as_str()) {
            Some("") => true,
            Some(rest) => rest
                .strip_prefix(ID_SEPARATOR)
                .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit())),
            None => false,
        }
    }

    /// Directly nested sections
    pub fn subsections(&self) -> impl Iterator<Item = Section<'a>> {
        self.node.children().iter().filter_map(Section::cast)
    }
}

/// Markup, entities and chars that may not appear in a generated id
fn invalid_id_chars_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"<[^>]+>|&(?:[a-z][a-z]+\d{0,2}|#\d\d\d{0,4}|#x[\da-f][\da-f][\da-f]{0,3});|[^ \w\-.]+",
        )
        .unwrap()
    })
}

/// Generate a section id from a title the way Asciidoctor does
pub fn generate_id(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = invalid_id_chars_re().replace_all(&lowered, "");

    let mut id = String::with_capacity(cleaned.len() + 1);
    id.push(ID_PREFIX);
    for c in cleaned.chars() {
        if matches!(c, ' ' | '.' | '-') || c == ID_SEPARATOR {
            if !id.ends_with(ID_SEPARATOR) {
                id.push(ID_SEPARATOR);
            }
        } else {
            id.push(c);
        }
    }
    if id.ends_with(ID_SEPARATOR) {
        id.pop();
    }
    id
}
