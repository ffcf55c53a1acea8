/// Row Rendering Module
///
/// Formats table output as fixed-width, tab-separated lines: a header row,
/// a separator row of dashes, then one line per data row. The template is
/// sized to the column count of the table being displayed.
use rusqlite::types::ValueRef;

/// Minimum cell width in the fixed-width template.
const CELL_WIDTH: usize = 8;

/// Formats one row of cells with the fixed-width, tab-separated template.
pub fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| format!("{:width$}", cell.as_ref(), width = CELL_WIDTH))
        .collect::<Vec<_>>()
        .join("\t\t")
}

/// Formats the dashed separator row for the given column count.
pub fn separator_row(column_count: usize) -> String {
    format_row(&vec!["-".repeat(CELL_WIDTH); column_count])
}

/// Renders a single SQLite value as display text.
pub fn format_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<BLOB: {} bytes>", b.len()),
    }
}
