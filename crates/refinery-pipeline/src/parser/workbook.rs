//! Excel workbooks, one header and table run per sheet.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use refinery_document::Element;
use tracing::debug;

use super::{DocumentParser, SheetTables};
use crate::ParseError;

/// Parses `.xlsx` and `.xls` workbooks.
///
/// Sheets are emitted in workbook order. The first row of each sheet's used range holds the
/// column names.
#[derive(Debug, Clone)]
pub struct ExcelParser {
    /// Data rows per emitted table element.
    rows_per_table: usize,
}

impl ExcelParser {
    /// Creates a parser that splits tables every `rows_per_table` data rows.
    pub fn new(rows_per_table: usize) -> Self {
        Self { rows_per_table }
    }
}

impl DocumentParser for ExcelParser {
    fn name(&self) -> &'static str {
        "excel"
    }

    fn parse(&self, path: &Path) -> Result<Vec<Element>, ParseError> {
        let workbook_err = |source| ParseError::Workbook {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;
        let mut elements = Vec::new();

        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name).map_err(workbook_err)?;
            debug!(sheet = %name, rows = range.height(), "read sheet");
            elements.extend(sheet_tables(name, &range).into_elements(self.rows_per_table));
        }

        Ok(elements)
    }
}

/// Splits a sheet's used range into column names and data rows.
fn sheet_tables(name: String, range: &Range<Data>) -> SheetTables {
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    let columns = rows.next().unwrap_or_default();

    SheetTables {
        name,
        columns,
        rows: rows.collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use refinery_document::ElementKind;
    use tempfile::TempDir;

    use super::*;
    use crate::parser::EMPTY_SHEET_TEXT;

    fn range(cells: &[&[Data]]) -> Range<Data> {
        let height = cells.len() as u32;
        let width = cells.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    #[test]
    fn test_sheet_tables() {
        let range = range(&[
            &[Data::String("Col1".into()), Data::String("Col2".into())],
            &[Data::String("A".into()), Data::Int(1)],
            &[Data::String("B".into()), Data::Float(2.5)],
        ]);

        let elements = sheet_tables("Sheet1".into(), &range).into_elements(50);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text, "Sheet: Sheet1");
        assert_eq!(elements[1].kind, ElementKind::Table);
        assert_eq!(
            elements[1].text,
            "| Col1 | Col2 |\n| --- | --- |\n| A | 1 |\n| B | 2.5 |"
        );
    }

    #[test]
    fn test_header_only_sheet() {
        let range = range(&[&[Data::String("Only".into())]]);
        let elements = sheet_tables("Empty".into(), &range).into_elements(50);
        assert_eq!(elements[1].text, EMPTY_SHEET_TEXT);
    }

    #[test]
    fn test_empty_cells_render_blank() {
        let range = range(&[
            &[Data::String("A".into()), Data::String("B".into())],
            &[Data::Empty, Data::String("x".into())],
        ]);
        let elements = sheet_tables("S".into(), &range).into_elements(50);
        assert!(elements[1].text.ends_with("|  | x |"));
    }

    /// Two-sheet workbook: `Sheet1` (Region, Total) then `Sheet2` (Item).
    fn fixture() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/two_sheets.xlsx")
    }

    #[test]
    fn test_parse_workbook_in_sheet_order() {
        let elements = ExcelParser::new(50).parse(&fixture()).unwrap();

        let kinds: Vec<ElementKind> = elements.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Header,
                ElementKind::Table,
                ElementKind::Header,
                ElementKind::Table
            ]
        );
        assert_eq!(elements[0].text, "Sheet: Sheet1");
        assert_eq!(
            elements[1].text,
            "| Region | Total |\n| --- | --- |\n| North | 10 |\n| South | 20 |"
        );
        assert_eq!(elements[1].metadata["sheet_name"], "Sheet1");
        assert_eq!(elements[2].text, "Sheet: Sheet2");
        assert_eq!(elements[2].section_depth(), Some(1));
        assert_eq!(
            elements[3].text,
            "| Item |\n| --- |\n| Bolt |\n| Nut |\n| Washer |"
        );
    }

    #[test]
    fn test_parse_workbook_splits_rows() {
        let elements = ExcelParser::new(2).parse(&fixture()).unwrap();

        // Sheet1 has two data rows, Sheet2 three.
        assert_eq!(elements.len(), 5);
        assert_eq!(elements[2].text, "Sheet: Sheet2");
        assert_eq!(elements[3].metadata["total_chunks"], 2);
        assert_eq!(elements[4].metadata["row_start"], 2);
        assert_eq!(elements[4].text, "| Item |\n| --- |\n| Washer |");
    }

    #[test]
    fn test_missing_workbook() {
        let dir = TempDir::new().unwrap();
        let err = ExcelParser::new(50)
            .parse(&dir.path().join("missing.xlsx"))
            .unwrap_err();
        assert!(matches!(err, ParseError::Workbook { .. }));
    }

    #[test]
    fn test_corrupt_workbook() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.xlsx");
        fs::write(&path, "not a zip archive").unwrap();

        let err = ExcelParser::new(50).parse(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse structured file ("));
    }
}
