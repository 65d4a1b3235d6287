//! Check for background images behind the text.

use a11y_check_core::document::PageFill;
use a11y_check_core::{
    CheckError, DocumentCheck, DocumentContext, IssueKind, IssueObject, IssueSink, Severity,
};

/// Check name for document-background.
pub const NAME: &str = "document-background";

/// Flags page styles filled with a bitmap.
#[derive(Debug, Clone, Default)]
pub struct DocumentBackground;

impl DocumentBackground {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DocumentCheck for DocumentBackground {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Pages should not use background images"
    }

    fn check_document(
        &mut self,
        ctx: &DocumentContext<'_>,
        sink: &mut IssueSink<'_>,
    ) -> Result<(), CheckError> {
        for page in &ctx.styles().page_styles {
            if page.fill == PageFill::Bitmap {
                sink.add_issue(
                    "Avoid background images.",
                    IssueKind::DocumentBackground,
                    Severity::Warning,
                )
                .set_object(IssueObject::PageStyle)
                .set_object_id(&page.name);
            }
        }
        Ok(())
    }
}
