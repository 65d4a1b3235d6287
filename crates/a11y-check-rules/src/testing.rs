//! Helpers shared by the unit tests of this crate.

use a11y_check_core::document::{Block, Document, Paragraph};
use a11y_check_core::{
    DocumentCheck, DocumentContext, IssueCollection, IssueKind, IssueOptions, IssueSink,
    NodeCheck,
};

pub fn run_node_check(check: &mut dyn NodeCheck, document: &Document) -> IssueCollection {
    let ctx = DocumentContext::new(document);
    let options = IssueOptions::default();
    let mut issues = IssueCollection::new();
    let mut sink = IssueSink::new(&mut issues, &options);
    check.reset();
    for node in ctx.contexts() {
        check.check(&node, &mut sink).unwrap();
    }
    issues
}

pub fn run_document_check(check: &mut dyn DocumentCheck, document: &Document) -> IssueCollection {
    let ctx = DocumentContext::new(document);
    let options = IssueOptions::default();
    let mut issues = IssueCollection::new();
    let mut sink = IssueSink::new(&mut issues, &options);
    check.check_document(&ctx, &mut sink).unwrap();
    issues
}

pub fn body(blocks: Vec<Block>) -> Document {
    Document {
        body: blocks,
        ..Document::default()
    }
}

pub fn para(text: &str) -> Block {
    Block::Paragraph(Paragraph::new(text))
}

pub fn heading(text: &str, level: u8) -> Block {
    Block::Paragraph(Paragraph {
        outline_level: Some(level),
        ..Paragraph::new(text)
    })
}

pub fn kinds(issues: &IssueCollection) -> Vec<IssueKind> {
    issues.iter().map(|i| i.kind).collect()
}

pub fn ranges(issues: &IssueCollection) -> Vec<(Option<usize>, Option<usize>)> {
    issues
        .iter()
        .map(|i| (i.location.start, i.location.end))
        .collect()
}
