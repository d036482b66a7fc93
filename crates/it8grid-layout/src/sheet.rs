//! Sink-independent workbook model.
//!
//! The layout functions produce a [`Document`]; a [`DocumentWriter`] turns it
//! into bytes. Coordinates are 1-based [`GridCoord`]s throughout.

use std::collections::BTreeMap;
use std::path::Path;

use it8grid_core::GridCoord;

use crate::style::Style;

/// Content of a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// No value; the cell exists only for its style.
    Blank,
    /// A number, rendered through the style's number format.
    Number(f64),
    /// Text.
    Text(String),
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A positioned, styled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Position.
    pub at: GridCoord,
    /// Content.
    pub value: CellValue,
    /// Appearance.
    pub style: Style,
}

/// A named worksheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    /// Tab name.
    pub name: String,
    /// Cells keyed by position, iterated row-major.
    pub cells: BTreeMap<GridCoord, Cell>,
    /// Column widths in character units, keyed by 1-based column.
    pub column_widths: BTreeMap<u32, f64>,
    /// Row heights in points, keyed by 1-based row.
    pub row_heights: BTreeMap<u32, f64>,
}

impl Sheet {
    /// Creates an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Places a cell, replacing whatever was at `at`.
    pub fn put(&mut self, at: GridCoord, value: impl Into<CellValue>, style: &Style) {
        let cell = Cell {
            at,
            value: value.into(),
            style: style.clone(),
        };
        self.cells.insert(at, cell);
    }

    /// Cell at a position.
    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&GridCoord::new(row, col))
    }

    /// Sets a column width.
    pub fn set_column_width(&mut self, col: u32, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Sets a row height.
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.insert(row, height);
    }
}

/// An ordered list of sheets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Sheets in tab order.
    pub sheets: Vec<Sheet>,
}

impl Document {
    /// Sheet by name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Serializes a [`Document`] to a concrete format.
///
/// Implementors provide [`write_to_buffer`](Self::write_to_buffer); the
/// default [`write`](Self::write) serializes fully in memory and then writes
/// the file in one call, so a failed serialization never leaves a partial
/// file behind.
pub trait DocumentWriter {
    /// Error type of the sink.
    type Error: From<std::io::Error>;

    /// Serializes the document to memory.
    fn write_to_buffer(&self, doc: &Document) -> Result<Vec<u8>, Self::Error>;

    /// Serializes the document to a file.
    fn write<P: AsRef<Path>>(&self, doc: &Document, path: P) -> Result<(), Self::Error> {
        let bytes = self.write_to_buffer(doc)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::HAlign;

    /// Tab separated dump, one line per cell.
    struct TsvWriter;

    impl DocumentWriter for TsvWriter {
        type Error = std::io::Error;

        fn write_to_buffer(&self, doc: &Document) -> std::io::Result<Vec<u8>> {
            let mut out = String::new();
            for sheet in &doc.sheets {
                for cell in sheet.cells.values() {
                    let value = match &cell.value {
                        CellValue::Blank => String::new(),
                        CellValue::Number(v) => v.to_string(),
                        CellValue::Text(s) => s.clone(),
                    };
                    out.push_str(&format!("{}\t{}\t{}\n", sheet.name, cell.at, value));
                }
            }
            Ok(out.into_bytes())
        }
    }

    #[test]
    fn test_put_replaces() {
        let mut sheet = Sheet::new("s");
        let style = Style::new();
        sheet.put(GridCoord::new(1, 1), "a", &style);
        sheet.put(GridCoord::new(1, 1), 2.0, &style.with_align(HAlign::Right, Default::default()));

        assert_eq!(sheet.cells.len(), 1);
        let cell = sheet.cell(1, 1).unwrap();
        assert_eq!(cell.value, CellValue::Number(2.0));
        assert_eq!(cell.style.h_align, HAlign::Right);
        assert!(sheet.cell(2, 1).is_none());
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let mut sheet = Sheet::new("s");
        let style = Style::new();
        sheet.put(GridCoord::new(2, 1), "c", &style);
        sheet.put(GridCoord::new(1, 3), "b", &style);
        sheet.put(GridCoord::new(1, 1), "a", &style);

        let order: Vec<String> = sheet.cells.keys().map(ToString::to_string).collect();
        assert_eq!(order, ["R1C1", "R1C3", "R2C1"]);
    }

    #[test]
    fn test_default_write_goes_through_buffer() {
        let mut sheet = Sheet::new("only");
        sheet.put(GridCoord::new(3, 2), "x", &Style::new());
        let doc = Document { sheets: vec![sheet] };
        assert!(doc.sheet("only").is_some());
        assert!(doc.sheet("other").is_none());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        TsvWriter.write(&doc, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "only\tR3C2\tx\n");
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.tsv");
        assert!(TsvWriter.write(&Document::default(), path).is_err());
    }
}
