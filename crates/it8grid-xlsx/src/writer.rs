//! Workbook writer.

use it8grid_core::GridCoord;
use it8grid_layout::{CellValue, Document, DocumentWriter, Sheet};
use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet};
use tracing::debug;

use crate::error::{XlsxResult, XlsxWriteError};
use crate::format::to_format;

/// Writes documents as `.xlsx` workbooks.
///
/// Grid coordinates are 1-based; the worksheet is addressed 0-based, so
/// `GridCoord::new(1, 1)` is cell `A1`.
///
/// # Example
///
/// ```rust
/// use it8grid_core::GridCoord;
/// use it8grid_layout::{Document, DocumentWriter, Sheet, Style};
/// use it8grid_xlsx::XlsxWriter;
///
/// let mut sheet = Sheet::new("data");
/// sheet.put(GridCoord::new(1, 1), 1.25, &Style::new());
/// let doc = Document { sheets: vec![sheet] };
///
/// let bytes = XlsxWriter::new().write_to_buffer(&doc).unwrap();
/// assert_eq!(&bytes[..2], b"PK");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

impl XlsxWriter {
    /// Creates a writer.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for XlsxWriter {
    type Error = XlsxWriteError;

    fn write_to_buffer(&self, doc: &Document) -> XlsxResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        for sheet in &doc.sheets {
            let worksheet = workbook.add_worksheet();
            fill_worksheet(worksheet, sheet)?;
        }
        let bytes = workbook.save_to_buffer()?;
        debug!(sheets = doc.sheets.len(), bytes = bytes.len(), "workbook serialized");
        Ok(bytes)
    }
}

fn fill_worksheet(worksheet: &mut Worksheet, sheet: &Sheet) -> XlsxResult<()> {
    worksheet.set_name(&sheet.name)?;

    for (&col, &width) in &sheet.column_widths {
        let col = to_col(GridCoord::new(1, col))?;
        worksheet.set_column_width(col, width)?;
    }
    for (&row, &height) in &sheet.row_heights {
        let row = to_row(GridCoord::new(row, 1))?;
        worksheet.set_row_height(row, height)?;
    }

    for cell in sheet.cells.values() {
        let (row, col) = (to_row(cell.at)?, to_col(cell.at)?);
        let format = to_format(&cell.style);
        match &cell.value {
            CellValue::Blank => worksheet.write_blank(row, col, &format)?,
            CellValue::Number(v) => worksheet.write_number_with_format(row, col, *v, &format)?,
            CellValue::Text(s) => worksheet.write_string_with_format(row, col, s, &format)?,
        };
    }

    debug!(sheet = %sheet.name, cells = sheet.cells.len(), "worksheet filled");
    Ok(())
}

fn to_row(at: GridCoord) -> XlsxResult<RowNum> {
    at.row
        .checked_sub(1)
        .ok_or(XlsxWriteError::CellOutOfRange(at))
}

fn to_col(at: GridCoord) -> XlsxResult<ColNum> {
    at.col
        .checked_sub(1)
        .and_then(|c| ColNum::try_from(c).ok())
        .ok_or(XlsxWriteError::CellOutOfRange(at))
}
