//! Check for forms simulated with underscores and dots.
//!
//! A line of underscores is a blank to fill in on paper only. Form
//! controls can be filled in and are announced as fields.

use a11y_check_core::utils::{char_len, find_char_index};
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for non-interactive-forms.
pub const NAME: &str = "non-interactive-forms";

const FORM_PATTERNS: &[&str] = &["___", "....", "\u{2026}\u{2026}", "\u{2026}.", ".\u{2026}"];

/// Earliest placeholder pattern in `text` as `(start, end)`.
fn first_placeholder(text: &str) -> Option<(usize, usize)> {
    FORM_PATTERNS
        .iter()
        .filter_map(|pattern| {
            find_char_index(text, pattern).map(|start| (start, start + char_len(pattern)))
        })
        .min()
}

/// Flags paragraphs that use placeholder characters as form fields.
#[derive(Debug, Clone, Default)]
pub struct NonInteractiveForm;

impl NonInteractiveForm {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for NonInteractiveForm {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Forms should use form controls"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        if let Some((start, end)) = first_placeholder(&paragraph.text) {
            sink.add_issue(
                "An input form is not interactive.",
                IssueKind::NonInteractiveForms,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(start, end)
            .set_object(IssueObject::Text);
        }
        Ok(())
    }
}
