//! Checkable text of a context root
//!
//! Walks a root with a [`GrammarCheckingStrategy`] and produces the text a
//! checker sees, with every char mapped back to its document offset so that
//! reported typos can be located in the source.

use std::ops::RangeInclusive;

use asciidoc_lang_syntax::{SyntaxNode, TextRange};
use tracing::trace;

use super::strategy::{ElementBehavior, GrammarCheckingStrategy, ReplaceCharRule};

/// Text extracted from one context root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckableText {
    root_range: TextRange,
    text: String,
    /// Source span of each char of `text`
    spans: Vec<TextRange>,
}

impl CheckableText {
    /// Extract the checkable text below `root`
    pub fn extract<S>(strategy: &S, root: &SyntaxNode) -> Self
    where
        S: GrammarCheckingStrategy + ?Sized,
    {
        let rules = strategy.replace_char_rules(root);
        let mut out = Self {
            root_range: root.range(),
            text: String::new(),
            spans: Vec::new(),
        };
        out.collect(strategy, root, root, &rules);
        trace!(
            "Extracted {} chars from {} at {}",
            out.spans.len(),
            root.kind(),
            root.range().start
        );
        out
    }

    fn collect<S>(
        &mut self,
        strategy: &S,
        root: &SyntaxNode,
        node: &SyntaxNode,
        rules: &[ReplaceCharRule],
    ) where
        S: GrammarCheckingStrategy + ?Sized,
    {
        match strategy.element_behavior(root, node) {
            ElementBehavior::Absorb | ElementBehavior::Stealth => {}
            ElementBehavior::Text if node.is_leaf() => self.push_token(strategy, node, rules),
            ElementBehavior::Text => {
                for child in node.children() {
                    self.collect(strategy, root, child, rules);
                }
            }
        }
    }

    fn push_token<S>(&mut self, strategy: &S, token: &SyntaxNode, rules: &[ReplaceCharRule])
    where
        S: GrammarCheckingStrategy + ?Sized,
    {
        let stealth = strategy.stealthy_ranges(token);
        let start = token.range().start;

        for (index, (byte, c)) in token.text().char_indices().enumerate() {
            if stealth.covers(index) {
                continue;
            }
            self.text.push(rules.iter().fold(c, |c, rule| rule.apply(c)));
            self.spans.push(TextRange::new(start + byte, c.len_utf8()));
        }
    }

    /// Range of the root this text came from
    pub fn root_range(&self) -> TextRange {
        self.root_range
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Document offset of the char at `index` in the extracted text
    pub fn document_offset(&self, index: usize) -> Option<usize> {
        self.spans.get(index).map(|span| span.start)
    }

    /// Map an inclusive char range of the extracted text back to the document.
    ///
    /// The result spans from the first char to the end of the last one, so it
    /// also covers anything hidden in between.
    pub fn document_range(&self, chars: RangeInclusive<usize>) -> Option<TextRange> {
        let (first, last) = chars.into_inner();
        if first > last {
            return None;
        }
        let start = self.spans.get(first)?.start;
        let end = self.spans.get(last)?.end();
        Some(TextRange::new(start, end - start))
    }
}

/// All context roots of a tree, in document order
pub fn context_roots<'a, S>(strategy: &S, tree: &'a SyntaxNode) -> Vec<&'a SyntaxNode>
where
    S: GrammarCheckingStrategy + ?Sized,
{
    tree.descendants()
        .filter(|node| strategy.is_context_root(node))
        .collect()
}
