//! Check for headings placed inside tables.
//!
//! Headings in table cells break both the document outline and the table
//! structure announced by screen readers. Only the first one is reported.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for table-heading.
pub const NAME: &str = "table-heading";

/// Flags the first heading found inside a table, once per scan.
#[derive(Debug, Clone, Default)]
pub struct TableHeading {
    reported: bool,
}

impl TableHeading {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeCheck for TableHeading {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Tables should not contain headings"
    }

    fn reset(&mut self) {
        self.reported = false;
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        if self.reported || !ctx.in_table() {
            return Ok(());
        }
        let Some(paragraph) = ctx.paragraph() else {
            return Ok(());
        };
        if paragraph.outline_level.unwrap_or(0) == 0 {
            return Ok(());
        }
        self.reported = true;
        let table = ctx.node().table.map(|t| t.name.clone()).unwrap_or_default();
        sink.add_issue(
            "Tables must not contain headings.",
            IssueKind::TableHeadings,
            Severity::Error,
        )
        .set_node(ctx.id())
        .set_object(IssueObject::Table)
        .set_object_id(table);
        Ok(())
    }
}
