//! Check traits for defining accessibility checks.

use crate::context::{DocumentContext, NodeContext};
use crate::document::StyleError;
use crate::types::IssueSink;

/// Error that aborts one check for one node.
///
/// The scanner logs it and continues with the next check, so a single
/// unresolvable attribute never hides the rest of the report.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// A style referenced by the node could not be resolved.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Something the check needs is missing from the document.
    #[error("{what} is unavailable")]
    Unavailable {
        /// What could not be read.
        what: String,
    },
}

/// A check that runs once per scan node.
///
/// Checks may keep state between nodes of one scan (heading levels, for
/// instance); the scanner calls [`NodeCheck::reset`] before every scan.
///
/// # Example
///
/// ```ignore
/// use a11y_check_core::{NodeCheck, NodeContext, IssueSink, CheckError, IssueKind, Severity};
///
/// pub struct BlinkingText;
///
/// impl NodeCheck for BlinkingText {
///     fn name(&self) -> &'static str { "blinking-text" }
///
///     fn check(&mut self, ctx: &NodeContext, sink: &mut IssueSink) -> Result<(), CheckError> {
///         if let Some(paragraph) = ctx.paragraph() {
///             // ...
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait NodeCheck: Send {
    /// Returns the kebab-case name of this check (e.g., "hyperlink").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this check looks for.
    fn description(&self) -> &'static str {
        ""
    }

    /// Clears state carried over from a previous scan.
    fn reset(&mut self) {}

    /// Inspects one node and reports issues through `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error when the node's attributes cannot be resolved.
    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>)
        -> Result<(), CheckError>;
}

/// Type alias for boxed `NodeCheck` trait objects.
pub type NodeCheckBox = Box<dyn NodeCheck>;

/// A check that runs once per scan over document-wide properties.
pub trait DocumentCheck: Send {
    /// Returns the kebab-case name of this check.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this check looks for.
    fn description(&self) -> &'static str {
        ""
    }

    /// Inspects the document and reports issues through `sink`.
    ///
    /// # Errors
    ///
    /// Returns an error when a document property cannot be read.
    fn check_document(
        &mut self,
        ctx: &DocumentContext<'_>,
        sink: &mut IssueSink<'_>,
    ) -> Result<(), CheckError>;
}

/// Type alias for boxed `DocumentCheck` trait objects.
pub type DocumentCheckBox = Box<dyn DocumentCheck>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Block, Document, Paragraph};
    use crate::types::{IssueCollection, IssueKind, IssueOptions, Severity};

    struct CountingCheck {
        seen: usize,
    }

    impl NodeCheck for CountingCheck {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn reset(&mut self) {
            self.seen = 0;
        }

        fn check(
            &mut self,
            ctx: &NodeContext<'_>,
            sink: &mut IssueSink<'_>,
        ) -> Result<(), CheckError> {
            self.seen += 1;
            sink.add_issue("seen", IssueKind::TextSpaces, Severity::Warning)
                .set_node(ctx.id());
            Ok(())
        }
    }

    #[test]
    fn test_check_trait() {
        let document = Document {
            body: vec![Block::Paragraph(Paragraph::new("a"))],
            ..Document::default()
        };
        let doc_ctx = DocumentContext::new(&document);
        let options = IssueOptions::default();
        let mut issues = IssueCollection::new();
        let mut sink = IssueSink::new(&mut issues, &options);
        let mut check = CountingCheck { seen: 0 };

        for ctx in doc_ctx.contexts() {
            check.check(&ctx, &mut sink).unwrap();
        }
        assert_eq!(check.seen, 1);
        check.reset();
        assert_eq!(check.seen, 0);
        assert_eq!(check.description(), "");
        assert_eq!(issues.len(), 1);
    }
}
