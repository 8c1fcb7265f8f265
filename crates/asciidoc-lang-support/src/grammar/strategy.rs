//! Grammar checking strategy contract
//!
//! Defines what a grammar/spell checking engine asks of a language: which
//! nodes are independent units of text, how their descendants contribute to
//! that text, and which parts of a token to hide.

use std::collections::{BTreeSet, HashSet};
use std::ops::RangeInclusive;

use asciidoc_lang_syntax::SyntaxNode;

use super::ranges::StealthRanges;

/// How a node contributes to the text of the check root it sits under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementBehavior {
    /// Folded into the parent's unit; checked later as its own root
    Absorb,
    /// Contributes its text
    Text,
    /// Invisible to the checker, subtree included
    Stealth,
}

/// Categories of problems a checker can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypoCategory {
    Grammar,
    Spelling,
    Punctuation,
    Typography,
    Casing,
    Style,
    Other,
}

/// A named group of checker rules to switch off
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleGroup {
    rules: BTreeSet<String>,
}

impl RuleGroup {
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.rules.contains(rule)
    }

    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }
}

/// Replaces one char with another before the text reaches the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceCharRule {
    pub from: char,
    pub to: char,
}

impl ReplaceCharRule {
    pub fn new(from: char, to: char) -> Self {
        Self { from, to }
    }

    pub fn apply(&self, c: char) -> char {
        if c == self.from {
            self.to
        } else {
            c
        }
    }
}

/// The contract between a checking engine and a language.
///
/// Every method is a pure query over the nodes it is given, so one strategy
/// may serve many trees from many threads.
pub trait GrammarCheckingStrategy: Send + Sync {
    /// Decide how `child` contributes to the text of `root`.
    ///
    /// `child` is `root` itself or a descendant reached without crossing
    /// another context root.
    fn element_behavior(&self, root: &SyntaxNode, child: &SyntaxNode) -> ElementBehavior;

    /// Whether `node` is an independent unit of text to check
    fn is_context_root(&self, node: &SyntaxNode) -> bool;

    /// Char ranges of `token`'s own text to hide from the checker
    fn stealthy_ranges(&self, token: &SyntaxNode) -> StealthRanges;

    /// Final veto on a reported typo.
    ///
    /// `pattern_range` is the span the rule matched, `typo_range` the span
    /// it flagged, both as char offsets into the extracted text.
    fn is_typo_accepted(
        &self,
        _root: &SyntaxNode,
        _pattern_range: RangeInclusive<usize>,
        _typo_range: RangeInclusive<usize>,
    ) -> bool {
        true
    }

    /// Rules to switch off below `child`
    fn ignored_rule_group(&self, _root: &SyntaxNode, _child: &SyntaxNode) -> Option<RuleGroup> {
        None
    }

    /// Typo categories to switch off below `child`
    fn ignored_typo_categories(
        &self,
        _root: &SyntaxNode,
        _child: &SyntaxNode,
    ) -> HashSet<TypoCategory> {
        HashSet::new()
    }

    /// Char replacements to apply to the text of `root`
    fn replace_char_rules(&self, _root: &SyntaxNode) -> Vec<ReplaceCharRule> {
        Vec::new()
    }

    /// Whether the host should enable this strategy without user opt-in
    fn is_enabled_by_default(&self) -> bool {
        true
    }
}
