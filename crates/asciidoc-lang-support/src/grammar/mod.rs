//! Grammar and spell checking support
//!
//! Tells a checking engine which nodes of an AsciiDoc tree hold sentences,
//! how their descendants feed the sentence text, and which markup inside a
//! token (comment markers, heading markers, heading underlines) to hide.

pub mod extract;
pub mod kinds;
pub mod ranges;
pub mod strategy;
pub mod support;


pub use extract::{context_roots, CheckableText};
pub use kinds::{CHECK_ROOT_KINDS, TEXT_KINDS};
pub use ranges::{StealthRange, StealthRanges};
pub use strategy::{
    ElementBehavior, GrammarCheckingStrategy, ReplaceCharRule, RuleGroup, TypoCategory,
};
pub use support::AsciiDocLanguageSupport;
