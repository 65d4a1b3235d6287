//! Check for empty paragraphs inside numbered lists.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for empty-numbered-line.
pub const NAME: &str = "empty-numbered-line";

/// Flags an empty paragraph that splits a numbered list in two.
#[derive(Debug, Clone, Default)]
pub struct EmptyNumberedLine;

impl EmptyNumberedLine {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for EmptyNumberedLine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Numbered lists should not contain empty items"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        if !paragraph.is_empty() {
            return Ok(());
        }
        let numbered_before = ctx.previous_paragraph().is_some_and(|p| p.numbered);
        let numbered_after = ctx.next_paragraph().is_some_and(|p| p.numbered);
        if numbered_before && numbered_after {
            sink.add_issue(
                "Avoid empty lines between numbered paragraphs.",
                IssueKind::TextEmptyNumberedParagraph,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_object(IssueObject::Text);
        }
        Ok(())
    }
}
