//! Check for empty lines used as vertical spacing.
//!
//! Screen readers announce every empty line as "blank". Paragraph spacing
//! gives the same look silently. Table cells are skipped: an empty cell
//! paragraph is normal.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for newline-spacing.
pub const NAME: &str = "newline-spacing";

/// Line breaks in a row above this count are reported.
const MAX_LINE_BREAKS: usize = 2;

/// Runs of more than [`MAX_LINE_BREAKS`] line breaks as `(start, end)`.
///
/// Carriage returns do not interrupt a run.
fn line_break_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut count = 0;
    let mut last = 0;
    for (index, c) in text.chars().enumerate() {
        match c {
            '\n' => {
                if count == 0 {
                    start = index;
                }
                count += 1;
                last = index;
            }
            '\r' => {}
            _ => {
                if count > MAX_LINE_BREAKS {
                    runs.push((start, last + 1));
                }
                count = 0;
            }
        }
    }
    if count > MAX_LINE_BREAKS {
        runs.push((start, last + 1));
    }
    runs
}

/// Flags consecutive empty paragraphs and repeated line breaks.
#[derive(Debug, Clone, Default)]
pub struct NewlineSpacing;

impl NewlineSpacing {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for NewlineSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Use paragraph spacing instead of empty lines"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        if ctx.in_table() {
            return Ok(());
        }

        if paragraph.is_empty() {
            if ctx.previous_paragraph().is_some_and(|prev| prev.is_empty()) {
                sink.add_issue(
                    "Avoid using empty lines to add space.",
                    IssueKind::TextNewLines,
                    Severity::Warning,
                )
                .set_node(ctx.id())
                .set_object(IssueObject::Text);
            }
            return Ok(());
        }

        for (start, end) in line_break_runs(&paragraph.text) {
            sink.add_issue(
                "Avoid using new lines to add space.",
                IssueKind::TextNewLines,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(start, end)
            .set_object(IssueObject::Text);
        }
        Ok(())
    }
}
