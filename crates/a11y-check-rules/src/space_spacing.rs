//! Check for repeated spaces and tabs used to position text.
//!
//! # Detected Patterns
//!
//! - Two or more spaces inside the text, followed by more text. Leading
//!   indentation and trailing spaces are not reported.
//! - A second tab used for alignment: a tab after text, or any tab once
//!   one has been counted. Reported once per paragraph and never inside a
//!   table of contents, whose entries use tabs for their page numbers.
//!
//! The spaces issue covers the second through the last space of the run,
//! both inclusive.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for space-spacing.
pub const NAME: &str = "space-spacing";

/// Runs of repeated spaces as `(second space, last space)`.
fn space_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut seen_text = false;
    let mut run_start = None;
    let mut run_len = 0;
    for (index, c) in text.chars().enumerate() {
        if c == ' ' {
            if seen_text {
                run_start.get_or_insert(index);
                run_len += 1;
            }
            continue;
        }
        if let Some(start) = run_start.take() {
            if run_len >= 2 {
                runs.push((start + 1, start + run_len - 1));
            }
        }
        run_len = 0;
        seen_text = true;
    }
    runs
}

/// Character index of the second alignment tab.
fn second_alignment_tab(text: &str) -> Option<usize> {
    let mut seen_text = false;
    let mut counted = 0;
    for (index, c) in text.chars().enumerate() {
        if c == '\t' {
            if seen_text || counted > 0 {
                counted += 1;
                if counted == 2 {
                    return Some(index);
                }
            }
        } else if !c.is_whitespace() {
            seen_text = true;
        }
    }
    None
}

/// Flags spaces and tabs used to lay out text.
#[derive(Debug, Clone, Default)]
pub struct SpaceSpacing;

impl SpaceSpacing {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for SpaceSpacing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Use indents and tab stops instead of repeated spaces and tabs"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };

        for (start, end) in space_runs(&paragraph.text) {
            sink.add_issue(
                "Avoid using space characters to add space.",
                IssueKind::TextSpaces,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(start, end)
            .set_object(IssueObject::Text);
        }

        if !ctx.in_table_of_contents() {
            if let Some(index) = second_alignment_tab(&paragraph.text) {
                sink.add_issue(
                    "Avoid using tabs for alignment.",
                    IssueKind::TextTabs,
                    Severity::Warning,
                )
                .set_node(ctx.id())
                .set_range(index, index + 1)
                .set_object(IssueObject::Text);
            }
        }
        Ok(())
    }
}
