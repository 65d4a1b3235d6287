//! Check for a missing document title.

use a11y_check_core::{
    CheckError, DocumentCheck, DocumentContext, IssueKind, IssueObject, IssueSink, Severity,
};

/// Check name for document-title.
pub const NAME: &str = "document-title";

/// Flags documents whose title property is missing or blank.
#[derive(Debug, Clone, Default)]
pub struct DocumentTitle;

impl DocumentTitle {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCheck for DocumentTitle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Documents should have a title"
    }

    fn check_document(
        &mut self,
        ctx: &DocumentContext<'_>,
        sink: &mut IssueSink<'_>,
    ) -> Result<(), CheckError> {
        let title = ctx.document().metadata.title.as_deref().unwrap_or_default();
        if title.trim().is_empty() {
            sink.add_issue(
                "Document title is not set.",
                IssueKind::DocumentTitle,
                Severity::Error,
            )
            .set_object(IssueObject::Document);
        }
        Ok(())
    }
}
