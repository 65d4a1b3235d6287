//! Check for list numbering typed by hand.
//!
//! # Rationale
//!
//! A list typed as "1." / "2." paragraphs looks like a list but is read as
//! plain paragraphs, so the reader never learns how many items there are.
//!
//! # Detected Patterns
//!
//! A paragraph starting with one of `1.`, `(1)`, `1)`, `a.`, `(a)`, `a)`,
//! `A.`, `(A)`, `A)` directly followed by a paragraph starting with the next
//! token of the same family. Images and tables between the two paragraphs
//! are skipped over; leading whitespace is not. Table of contents entries
//! are skipped.

use a11y_check_core::utils::char_len;
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for manual-numbering.
pub const NAME: &str = "manual-numbering";

const NUMBERING_PAIRS: &[(&str, &str)] = &[
    ("1.", "2."),
    ("(1)", "(2)"),
    ("1)", "2)"),
    ("a.", "b."),
    ("(a)", "(b)"),
    ("a)", "b)"),
    ("A.", "B."),
    ("(A)", "(B)"),
    ("A)", "B)"),
];

/// Flags consecutive paragraphs that imitate a numbered list.
#[derive(Debug, Clone, Default)]
pub struct ManualNumbering;

impl ManualNumbering {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for ManualNumbering {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Lists should use list numbering, not typed numbers"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        if ctx.in_table_of_contents() {
            return Ok(());
        }
        let Some(next) = ctx.following_paragraph() else {
            return Ok(());
        };

        if let Some((token, _)) = NUMBERING_PAIRS.iter().find(|(this, following)| {
            paragraph.text.starts_with(this) && next.text.starts_with(following)
        }) {
            sink.add_issue(
                format!("Avoid fake numbering: \"{token}\" is typed, not a list."),
                IssueKind::ManualNumbering,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_range(0, char_len(token))
            .set_object(IssueObject::Text);
        }
        Ok(())
    }
}
