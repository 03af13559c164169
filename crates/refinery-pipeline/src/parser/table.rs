//! Conversion of tabular data into header and markdown table elements.
//!
//! Spreadsheets become one `HEADER` per sheet followed by the rows as markdown tables.
//! Large sheets are split every `rows_per_table` data rows; every slice repeats the column
//! header row so each table stands on its own once chunked.

use refinery_document::{Element, ElementKind};

/// Text emitted for a sheet without data rows.
pub const EMPTY_SHEET_TEXT: &str = "(Empty Sheet)";

/// One sheet of rows, the first of which is the column header.
#[derive(Debug, Clone, Default)]
pub struct SheetTables {
    /// Sheet name, used in the header label.
    pub name: String,
    /// Column names.
    pub columns: Vec<String>,
    /// Data rows. Rows may be ragged; short rows are padded.
    pub rows: Vec<Vec<String>>,
}

impl SheetTables {
    /// Builds the element sequence for this sheet.
    pub fn into_elements(self, rows_per_table: usize) -> Vec<Element> {
        let mut elements = vec![Element::header(format!("Sheet: {}", self.name)).with_depth(1)];

        if self.rows.is_empty() {
            elements.push(
                Element::new(ElementKind::NarrativeText, EMPTY_SHEET_TEXT)
                    .with_meta("sheet_name", self.name.as_str()),
            );
            return elements;
        }

        let width = self
            .rows
            .iter()
            .map(Vec::len)
            .chain([self.columns.len()])
            .max()
            .unwrap_or(0);
        let rows_per_table = rows_per_table.max(1);
        let total_chunks = self.rows.len().div_ceil(rows_per_table);

        for (chunk_index, slice) in self.rows.chunks(rows_per_table).enumerate() {
            let row_start = chunk_index * rows_per_table;
            let text = render_markdown(&self.columns, slice, width);
            elements.push(
                Element::table(text)
                    .with_meta("sheet_name", self.name.as_str())
                    .with_meta("chunk_index", chunk_index)
                    .with_meta("total_chunks", total_chunks)
                    .with_meta("row_start", row_start)
                    .with_meta("row_end", row_start + slice.len())
                    .with_meta("is_table", true),
            );
        }

        elements
    }
}

/// Renders columns and rows as a pipe table padded to `width` columns.
fn render_markdown(columns: &[String], rows: &[Vec<String>], width: usize) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(columns, width));
    lines.push(format!("|{}", " --- |".repeat(width)));
    lines.extend(rows.iter().map(|row| format_row(row, width)));
    lines.join("\n")
}

/// Formats one table row, filling missing cells with blanks.
fn format_row(cells: &[String], width: usize) -> String {
    let mut line = String::from("|");
    for i in 0..width {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(&escape_cell(cell));
        line.push_str(" |");
    }
    line
}

/// Escapes characters that would break a pipe table cell.
fn escape_cell(cell: &str) -> String {
    cell.trim()
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}
