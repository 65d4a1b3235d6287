//! Check for tables with merged or split cells.
//!
//! Screen readers walk a table cell by cell and announce row and column
//! headers. Irregular grids make that navigation unreliable.

use a11y_check_core::document::Table;
use a11y_check_core::{
    CheckError, IssueKind, IssueObject, IssueSink, NodeCheck, NodeContext, Severity,
};

/// Check name for table-merge-split.
pub const NAME: &str = "table-merge-split";

/// Whether the table is something other than a plain grid.
fn has_merged_cells(table: &Table) -> bool {
    if table.complex {
        return true;
    }
    let uneven = match table.rows.split_first() {
        Some((first, rest)) if !rest.is_empty() => {
            rest.iter().any(|row| row.cells.len() != first.cells.len())
        }
        _ => false,
    };
    uneven || table.cells().any(|cell| cell.row_span > 1)
}

/// Flags tables whose rows have different cell counts or spanning cells.
#[derive(Debug, Clone, Default)]
pub struct TableMergeSplit;

impl TableMergeSplit {
    /// Creates a new check.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl NodeCheck for TableMergeSplit {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Tables should not contain merged or split cells"
    }

    fn check(&mut self, ctx: &NodeContext<'_>, sink: &mut IssueSink<'_>) -> Result<(), CheckError> {
        let Some(table) = ctx.table() else {
            return Ok(());
        };
        if has_merged_cells(table) {
            sink.add_issue(
                format!("Table \"{}\" contains merges or splits.", table.name),
                IssueKind::TableMergeSplit,
                Severity::Warning,
            )
            .set_node(ctx.id())
            .set_object(IssueObject::Table)
            .set_object_id(&table.name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{body, kinds, run_node_check};
    use a11y_check_core::document::{Block, Cell, Row};

    fn table(cells_per_row: &[usize]) -> Table {
        Table {
            name: "Table1".into(),
            complex: false,
            rows: cells_per_row
                .iter()
                .map(|&n| Row {
                    cells: vec![Cell::default(); n],
                })
                .collect(),
        }
    }

    #[test]
    fn test_uneven_rows_reported_once() {
        let doc = body(vec![Block::Table(table(&[2, 2, 3]))]);
        let issues = run_node_check(&mut TableMergeSplit::new(), &doc);
        assert_eq!(kinds(&issues), vec![IssueKind::TableMergeSplit]);
        assert_eq!(
            issues.iter().next().unwrap().location.object_id.as_deref(),
            Some("Table1")
        );
    }

    #[test]
    fn test_regular_grid_passes() {
        let doc = body(vec![Block::Table(table(&[3, 3, 3])), Block::Table(table(&[4]))]);
        assert!(run_node_check(&mut TableMergeSplit::new(), &doc).is_empty());
    }

    #[test]
    fn test_row_span_and_complex_flag() {
        let mut spanning = table(&[2, 2]);
        spanning.rows[0].cells[0].row_span = 2;
        let mut complex = table(&[2]);
        complex.complex = true;
        let doc = body(vec![Block::Table(spanning), Block::Table(complex)]);
        assert_eq!(run_node_check(&mut TableMergeSplit::new(), &doc).len(), 2);
    }
}
