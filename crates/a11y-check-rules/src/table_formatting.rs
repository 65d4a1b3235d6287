//! Check for tables used for page layout.

use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for table-formatting.
pub const NAME: &str = "table-formatting";

/// Flags simple tables where more than half of the cells are empty.
#[derive(Debug, Clone, Default)]
pub struct TableFormatting;

impl TableFormatting {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for TableFormatting {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Tables should hold data, not arrange content"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(table) = ctx.table() else {
            return Ok(());
        };
        if table.complex {
            return Ok(());
        }
        let (total, empty) = table.cells().fold((0usize, 0usize), |(total, empty), cell| {
            (total + 1, empty + usize::from(cell.is_empty()))
        });
        if 2 * empty > total {
            sink.add_issue(
                format!("Table \"{}\" is likely used for formatting.", table.name),
                IssueKind::TableFormatting,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_object(IssueObject::Table)
            .set_object_id(&table.name)
            .set_additional_info(vec![format!("{empty} of {total} cells are empty")]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{body, para, run_node_check};
    use a11y_check_core::document::{Block, Cell, Row, Table};

    fn table(cells: &[&str]) -> Table {
        Table {
            name: "Layout".into(),
            complex: false,
            rows: vec![Row {
                cells: cells
                    .iter()
                    .map(|text| Cell {
                        row_span: 1,
                        blocks: vec![para(text)],
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_mostly_empty_table() {
        let doc = body(vec![Block::Table(table(&["logo", "", ""]))]);
        let issues = run_node_check(&mut TableFormatting::new(), &doc);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues.iter().next().unwrap().additional_info,
            vec!["2 of 3 cells are empty".to_string()]
        );
    }

    #[test]
    fn test_half_empty_is_fine() {
        let doc = body(vec![Block::Table(table(&["a", "", "b", ""]))]);
        assert!(run_node_check(&mut TableFormatting::new(), &doc).is_empty());
    }

    #[test]
    fn test_complex_tables_are_skipped() {
        let mut complex = table(&["", "", ""]);
        complex.complex = true;
        let doc = body(vec![Block::Table(complex), Block::Table(Table::default())]);
        assert!(run_node_check(&mut TableFormatting::new(), &doc).is_empty());
    }
}
