//! Grammar checking strategy for AsciiDoc

use asciidoc_lang_syntax::{NodeKind, SyntaxNode};
use tracing::trace;

use super::kinds::{CHECK_ROOT_KINDS, TEXT_KINDS};
use super::ranges::{StealthRange, StealthRanges};
use super::strategy::{ElementBehavior, GrammarCheckingStrategy};
use crate::config::GrammarSettings;

/// AsciiDoc implementation of [`GrammarCheckingStrategy`]
#[derive(Debug, Clone, Default)]
pub struct AsciiDocLanguageSupport {
    settings: GrammarSettings,
}

impl AsciiDocLanguageSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: GrammarSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GrammarSettings {
        &self.settings
    }
}

impl GrammarCheckingStrategy for AsciiDocLanguageSupport {
    fn element_behavior(&self, root: &SyntaxNode, child: &SyntaxNode) -> ElementBehavior {
        let kind = child.kind();
        if !root.same(child) && CHECK_ROOT_KINDS.contains(kind) {
            ElementBehavior::Absorb
        } else if TEXT_KINDS.contains(kind) {
            ElementBehavior::Text
        } else {
            ElementBehavior::Stealth
        }
    }

    fn is_context_root(&self, node: &SyntaxNode) -> bool {
        let kind = node.kind();
        if kind.is_comment() {
            return self.settings.check_comments;
        }
        CHECK_ROOT_KINDS.contains(kind)
    }

    fn stealthy_ranges(&self, token: &SyntaxNode) -> StealthRanges {
        let mut ranges = StealthRanges::new();
        let chars: Vec<char> = token.text().chars().collect();

        match token.kind() {
            // "//" at the start of a line comment
            NodeKind::LineComment if chars.len() >= 2 => {
                ranges.insert(StealthRange::new(0, 1));
            }
            // "==" or "##" at the start of a heading, plus the spaces after it
            NodeKind::Heading if !chars.is_empty() => {
                let marker = chars[0];
                let mut i = chars.iter().take_while(|c| **c == marker).count();
                i += chars[i..].iter().take_while(|c| **c == ' ').count();
                ranges.insert(StealthRange::new(0, i - 1));
            }
            // underline of a two-line heading
            NodeKind::HeadingOldstyle if !chars.is_empty() => {
                let newline = chars
                    .iter()
                    .position(|c| *c == '\n')
                    .unwrap_or(chars.len());
                ranges.insert(StealthRange::new(newline, chars.len()));
            }
            _ => {}
        }

        if !ranges.is_empty() {
            trace!("Stealth ranges for {}: {:?}", token.kind(), ranges);
        }
        ranges
    }

    fn is_enabled_by_default(&self) -> bool {
        self.settings.enabled
    }
}
