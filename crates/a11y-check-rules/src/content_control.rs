//! Check for content controls in headers and footers.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for content-control.
pub const NAME: &str = "content-control";

/// Flags header and footer paragraphs that contain content controls.
#[derive(Debug, Clone, Default)]
pub struct ContentControl;

impl ContentControl {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for ContentControl {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Headers and footers should not contain content controls"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        if !ctx.in_header_footer() {
            return Ok(());
        }
        let Some(control) = ctx.paragraph().and_then(|p| p.content_controls.first()) else {
            return Ok(());
        };
        sink.add_issue(
            "Content controls in the page header or footer are not accessible.",
            IssueKind::ContentControl,
            Severity::Warning,
        )
        .set_node(ctx.id())
        .set_range(control.start, control.end)
        .set_object(IssueObject::Text);
        Ok(())
    }
}
