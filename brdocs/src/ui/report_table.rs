// brdocs/src/ui/report_table.rs
//! Table view of an [`OperationReport`] for `--output text`.

use brdocs_core::OperationReport;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

const NONE: &str = "-";

pub fn build_report_table(report: &OperationReport, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![Cell::new("Field").add_attribute(Attribute::Bold), Cell::new("Value").add_attribute(Attribute::Bold)]);

    let verdict = if report.is_valid { "valid" } else { "invalid" };
    let mut verdict_cell = Cell::new(verdict);
    if supports_color {
        verdict_cell = verdict_cell.fg(if report.is_valid { Color::Green } else { Color::Red });
    }

    table.add_row(vec![Cell::new("operation"), Cell::new(&report.operation)]);
    table.add_row(vec![Cell::new("original"), Cell::new(&report.original)]);
    table.add_row(vec![Cell::new("verdict"), verdict_cell]);
    table.add_row(vec![Cell::new("masked"), Cell::new(report.masked.as_deref().unwrap_or(NONE))]);
    table.add_row(vec![Cell::new("unmasked"), Cell::new(report.unmasked.as_deref().unwrap_or(NONE))]);
    if let Some(error) = &report.error {
        table.add_row(vec![Cell::new("error"), Cell::new(error)]);
    }
    if !supports_color {
        table.force_no_tty();
    }
    table
}
