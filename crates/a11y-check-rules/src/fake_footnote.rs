//! Check for footnote markers typed by hand.

use a11y_check_core::document::Escapement;
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for fake-footnote.
pub const NAME: &str = "fake-footnote";

/// Flags paragraphs that start with `*` or a single superscript character.
#[derive(Debug, Clone, Default)]
pub struct FakeFootnote;

impl FakeFootnote {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for FakeFootnote {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Footnotes should use real footnotes"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };

        let fake = if paragraph.text.starts_with('*') {
            true
        } else {
            match paragraph.portions().first() {
                Some(first) if first.start == 0 && first.end == 1 => {
                    let format = ctx.styles().resolve_portion(paragraph, first)?;
                    format.escapement == Some(Escapement::Superscript)
                }
                _ => false,
            }
        };

        if fake {
            sink.add_issue(
                "Avoid fake footnotes.",
                IssueKind::FakeFootnote,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(0, 1)
            .set_object(IssueObject::Text);
        }
        Ok(())
    }
}
