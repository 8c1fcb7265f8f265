//! Classifier throughput
//!
//! The checking engine queries every node of every open document, so
//! classification and extraction must stay cheap on large trees.

use asciidoc_lang_support::grammar::{context_roots, CheckableText};
use asciidoc_lang_support::{AsciiDocLanguageSupport, ElementBehavior, GrammarCheckingStrategy};
use asciidoc_lang_syntax::{NodeKind, SyntaxNode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a document with `count` sections, each holding a heading and a
/// paragraph with some inline markup
fn create_document(count: usize) -> SyntaxNode {
    let mut offset = 0;
    let mut next = |kind: NodeKind, text: &str| {
        let token = SyntaxNode::token(kind, offset, text);
        offset += text.len();
        token
    };

    let sections = (1..=count)
        .map(|i| {
            let heading = next(NodeKind::Heading, &format!("== Section {i}"));
            let newline = next(NodeKind::Newline, "\n");
            let block = SyntaxNode::node(
                NodeKind::Block,
                vec![
                    next(NodeKind::Text, "This"),
                    next(NodeKind::WhiteSpace, " "),
                    next(NodeKind::Text, "is"),
                    next(NodeKind::WhiteSpace, " "),
                    next(NodeKind::BoldStart, "*"),
                    next(NodeKind::Bold, "important"),
                    next(NodeKind::BoldEnd, "*"),
                    next(NodeKind::WhiteSpace, " "),
                    next(NodeKind::Text, "text"),
                    next(NodeKind::EndOfSentence, "."),
                ],
            );
            let comment = next(NodeKind::LineComment, "// reviewed");
            SyntaxNode::node(NodeKind::Section, vec![heading, newline, block, comment])
        })
        .collect();

    SyntaxNode::node(NodeKind::Document, sections)
}

fn bench_classification(c: &mut Criterion) {
    let support = AsciiDocLanguageSupport::new();
    let document = create_document(250);
    let root = &document.children()[0];

    c.bench_function("element_behavior_all_nodes", |b| {
        b.iter(|| {
            document
                .descendants()
                .filter(|node| {
                    support.element_behavior(black_box(root), node) == ElementBehavior::Text
                })
                .count()
        })
    });

    c.bench_function("stealthy_ranges_heading", |b| {
        let heading = SyntaxNode::token(NodeKind::Heading, 0, "==== A rather long heading title");
        b.iter(|| support.stealthy_ranges(black_box(&heading)))
    });
}

fn bench_extraction(c: &mut Criterion) {
    let support = AsciiDocLanguageSupport::new();
    let mut group = c.benchmark_group("extract_document");

    for count in [50, 250] {
        let document = create_document(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &document, |b, doc| {
            b.iter(|| {
                context_roots(&support, doc)
                    .into_iter()
                    .map(|root| CheckableText::extract(&support, root).text().len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classification, bench_extraction);
criterion_main!(benches);
