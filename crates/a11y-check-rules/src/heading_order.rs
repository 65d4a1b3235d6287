//! Check for skipped outline levels.
//!
//! # Rationale
//!
//! Screen reader users navigate by headings and infer the structure from
//! their levels. An outline that starts at level 2, or goes from level 1
//! straight to level 3, suggests sections that do not exist.
//!
//! # Detected Patterns
//!
//! - The first heading of the document is not at level 1
//! - A heading more than one level deeper than the heading before it
//!
//! Going back up any number of levels is fine.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for heading-order.
pub const NAME: &str = "heading-order";

/// Tracks the previous outline level across the scan.
#[derive(Debug, Clone, Default)]
pub struct HeadingOrder {
    previous_level: u8,
}

impl HeadingOrder {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeCheck for HeadingOrder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Headings should not skip outline levels"
    }

    fn reset(&mut self) {
        self.previous_level = 0;
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(level) = ctx.paragraph().and_then(|p| p.outline_level) else {
            return Ok(());
        };
        if level == 0 {
            return Ok(());
        }

        let previous = self.previous_level;
        self.previous_level = level;
        if level <= previous.saturating_add(1) {
            return Ok(());
        }

        let (message, kind) = if previous == 0 {
            (
                format!("Outline levels should start with level 1, not level {level}."),
                IssueKind::HeadingStart,
            )
        } else {
            (
                format!("Heading order is broken: skipped from level {previous} to level {level}."),
                IssueKind::HeadingOrder,
            )
        };
        sink.add_issue(message, kind, Severity::Error)
            .set_node(ctx.id())
            .set_object(IssueObject::Text);
        Ok(())
    }
}
