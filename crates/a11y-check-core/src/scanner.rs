//! Core scanner for orchestrating check execution.

use crate::check::{
    CheckError, DocumentCheck, DocumentCheckBox, NodeCheck, NodeCheckBox,
};
use crate::config::Config;
use crate::context::{DocumentContext, NodeContext, NodeId};
use crate::document::Document;
use crate::object::{self, DRAWING_OBJECTS};
use crate::types::{IssueCollection, IssueOptions, IssueSink};

use tracing::{debug, info, warn};

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    node_checks: Vec<NodeCheckBox>,
    document_checks: Vec<DocumentCheckBox>,
    config: Option<Config>,
    options: Option<IssueOptions>,
}

impl ScannerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node check.
    #[must_use]
    pub fn node_check<C: NodeCheck + 'static>(mut self, check: C) -> Self {
        self.node_checks.push(Box::new(check));
        self
    }

    /// Adds a boxed node check.
    #[must_use]
    pub fn node_check_box(mut self, check: NodeCheckBox) -> Self {
        self.node_checks.push(check);
        self
    }

    /// Adds a document check.
    #[must_use]
    pub fn document_check<C: DocumentCheck + 'static>(mut self, check: C) -> Self {
        self.document_checks.push(Box::new(check));
        self
    }

    /// Adds a boxed document check.
    #[must_use]
    pub fn document_check_box(mut self, check: DocumentCheckBox) -> Self {
        self.document_checks.push(check);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Replaces the issue options derived from the configuration.
    #[must_use]
    pub fn issue_options(mut self, options: IssueOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Builds the scanner, dropping checks the configuration disables.
    #[must_use]
    pub fn build(self) -> Scanner {
        let config = self.config.unwrap_or_default();

        let node_checks: Vec<NodeCheckBox> = self
            .node_checks
            .into_iter()
            .filter(|check| {
                let enabled = config.is_check_enabled(check.name());
                if !enabled {
                    debug!("Skipping disabled check: {}", check.name());
                }
                enabled
            })
            .collect();
        let document_checks: Vec<DocumentCheckBox> = self
            .document_checks
            .into_iter()
            .filter(|check| {
                let enabled = config.is_check_enabled(check.name());
                if !enabled {
                    debug!("Skipping disabled check: {}", check.name());
                }
                enabled
            })
            .collect();

        Scanner {
            node_checks,
            document_checks,
            options: self
                .options
                .unwrap_or_else(|| IssueOptions::from_config(&config)),
            drawing_objects: config.is_check_enabled(DRAWING_OBJECTS),
        }
    }
}

/// Runs registered checks over documents.
///
/// Use [`Scanner::builder()`] to construct an instance.
pub struct Scanner {
    node_checks: Vec<NodeCheckBox>,
    document_checks: Vec<DocumentCheckBox>,
    options: IssueOptions,
    drawing_objects: bool,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.node_checks.len() + self.document_checks.len()
    }

    /// Names of the registered checks: document checks first, then node checks.
    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.document_checks
            .iter()
            .map(|c| c.name())
            .chain(self.node_checks.iter().map(|c| c.name()))
            .collect()
    }

    /// The issue options snapshot in use.
    #[must_use]
    pub fn options(&self) -> &IssueOptions {
        &self.options
    }

    /// Scans a whole document.
    pub fn scan(&mut self, document: &Document) -> IssueCollection {
        let mut issues = IssueCollection::new();
        self.scan_into(document, &mut issues);
        issues
    }

    /// Scans a whole document into `issues`, clearing it first.
    pub fn scan_into(&mut self, document: &Document, issues: &mut IssueCollection) {
        issues.clear();
        self.reset();

        let ctx = DocumentContext::new(document);
        info!(
            "Starting scan: {} nodes, {} shapes, {} checks",
            ctx.nodes().len(),
            ctx.shapes().len(),
            self.check_count()
        );

        let mut sink = IssueSink::new(issues, &self.options);

        for check in &mut self.document_checks {
            if let Err(e) = check.check_document(&ctx, &mut sink) {
                log_failure(check.name(), None, &e);
            }
        }

        for node_ctx in ctx.contexts() {
            run_node_checks(&mut self.node_checks, &node_ctx, &mut sink);
            if self.drawing_objects {
                check_shapes(&ctx, node_ctx.id(), &mut sink);
            }
        }

        let (errors, warnings) = issues.count_by_severity();
        info!(
            "Scan complete: {} issues ({errors} errors, {warnings} warnings visible)",
            issues.len()
        );
    }

    /// Checks a single node and the shapes anchored at it.
    ///
    /// Check state is reset first, so the result does not depend on what was
    /// scanned before. An unknown id yields an empty collection.
    pub fn scan_node(&mut self, document: &Document, id: NodeId) -> IssueCollection {
        let mut issues = IssueCollection::new();
        self.reset();

        let ctx = DocumentContext::new(document);
        let Some(node_ctx) = ctx.node_context(id) else {
            debug!("No node {id} in document");
            return issues;
        };

        let mut sink = IssueSink::new(&mut issues, &self.options);
        run_node_checks(&mut self.node_checks, &node_ctx, &mut sink);
        if self.drawing_objects {
            check_shapes(&ctx, id, &mut sink);
        }
        issues
    }

    fn reset(&mut self) {
        for check in &mut self.node_checks {
            check.reset();
        }
    }
}

fn run_node_checks(
    checks: &mut [NodeCheckBox],
    ctx: &NodeContext<'_>,
    sink: &mut IssueSink<'_>,
) {
    for check in checks.iter_mut() {
        if let Err(e) = check.check(ctx, sink) {
            log_failure(check.name(), Some(ctx.id()), &e);
        }
    }
}

fn check_shapes(ctx: &DocumentContext<'_>, anchor: NodeId, sink: &mut IssueSink<'_>) {
    for shape in ctx.shapes_at(anchor) {
        object::check_shape(shape, sink);
    }
}

fn log_failure(check: &str, node: Option<NodeId>, error: &CheckError) {
    match (error, node) {
        (CheckError::Unavailable { .. }, Some(node)) => {
            debug!("Check {check} skipped node {node}: {error}");
        }
        (CheckError::Unavailable { .. }, None) => debug!("Check {check} skipped: {error}"),
        (CheckError::Style(_), Some(node)) => warn!("Check {check} failed on node {node}: {error}"),
        (CheckError::Style(_), None) => warn!("Check {check} failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckError;
    use crate::config::Config;
    use crate::context::{DocumentContext, NodeContext};
    use crate::document::{AnchoredObject, Block, Paragraph, Shape, ShapeKind, StyleError};
    use crate::types::{IssueKind, Severity};

    struct EveryParagraph;

    impl NodeCheck for EveryParagraph {
        fn name(&self) -> &'static str {
            "every-paragraph"
        }

        fn check(
            &mut self,
            ctx: &NodeContext<'_>,
            sink: &mut IssueSink<'_>,
        ) -> Result<(), CheckError> {
            if ctx.paragraph().is_some() {
                sink.add_issue("paragraph", IssueKind::TextSpaces, Severity::Warning)
                    .set_node(ctx.id());
            }
            Ok(())
        }
    }

    struct AlwaysFails;

    impl NodeCheck for AlwaysFails {
        fn name(&self) -> &'static str {
            "always-fails"
        }

        fn check(
            &mut self,
            _ctx: &NodeContext<'_>,
            _sink: &mut IssueSink<'_>,
        ) -> Result<(), CheckError> {
            Err(StyleError::Unknown {
                family: "paragraph",
                name: "Ghost".into(),
            }
            .into())
        }
    }

    struct TitleCheck;

    impl DocumentCheck for TitleCheck {
        fn name(&self) -> &'static str {
            "title"
        }

        fn check_document(
            &mut self,
            _ctx: &DocumentContext<'_>,
            sink: &mut IssueSink<'_>,
        ) -> Result<(), CheckError> {
            sink.add_issue("title", IssueKind::DocumentTitle, Severity::Error);
            Ok(())
        }
    }

    fn document() -> Document {
        let mut anchor = Paragraph::new("anchor");
        anchor.anchored = vec![AnchoredObject::Shape(Shape {
            name: "Shape1".into(),
            kind: ShapeKind::CustomShape,
            ..Shape::default()
        })];
        Document {
            body: vec![
                Block::Paragraph(Paragraph::new("one")),
                Block::Paragraph(anchor),
            ],
            ..Document::default()
        }
    }

    #[test]
    fn test_scan_order() {
        let mut scanner = Scanner::builder()
            .node_check(AlwaysFails)
            .node_check(EveryParagraph)
            .document_check(TitleCheck)
            .build();
        let issues = scanner.scan(&document());
        let kinds: Vec<IssueKind> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::DocumentTitle,
                IssueKind::TextSpaces,
                IssueKind::TextSpaces,
                IssueKind::NoAltShape
            ]
        );
    }

    #[test]
    fn test_shape_issues_follow_their_anchor() {
        let mut doc = document();
        doc.body.reverse();
        let mut scanner = Scanner::builder().node_check(EveryParagraph).build();
        let issues: Vec<(IssueKind, Option<NodeId>)> = scanner
            .scan(&doc)
            .iter()
            .map(|i| (i.kind, i.location.node))
            .collect();
        assert_eq!(
            issues,
            vec![
                (IssueKind::TextSpaces, Some(NodeId(0))),
                (IssueKind::NoAltShape, Some(NodeId(0))),
                (IssueKind::TextSpaces, Some(NodeId(1))),
            ]
        );
    }

    #[test]
    fn test_scan_is_idempotent() {
        let mut scanner = Scanner::builder().node_check(EveryParagraph).build();
        let doc = document();
        assert_eq!(scanner.scan(&doc), scanner.scan(&doc));
    }

    #[test]
    fn test_disabled_checks_are_dropped() {
        let config = Config::parse(
            "[checks.every-paragraph]\nenabled = false\n[checks.drawing-objects]\nenabled = false\n",
        )
        .unwrap();
        let mut scanner = Scanner::builder()
            .node_check(EveryParagraph)
            .document_check(TitleCheck)
            .config(config)
            .build();
        assert_eq!(scanner.check_names(), vec!["title"]);
        assert_eq!(scanner.scan(&document()).len(), 1);
    }

    #[test]
    fn test_scan_node() {
        let mut scanner = Scanner::builder().node_check(EveryParagraph).build();
        let doc = document();
        let issues = scanner.scan_node(&doc, NodeId(1));
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.location.node == Some(NodeId(1))));
        assert!(scanner.scan_node(&doc, NodeId(42)).is_empty());
    }
}
