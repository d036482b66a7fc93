//! Error types for workbook output.

use std::io;

use it8grid_core::GridCoord;
use thiserror::Error;

/// Workbook output error.
#[derive(Debug, Error)]
pub enum XlsxWriteError {
    /// Error reported by the workbook serializer.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A cell, row or column lies outside what a worksheet can address.
    #[error("cell {0} is outside the worksheet")]
    CellOutOfRange(GridCoord),
}

/// Result type for workbook output.
pub type XlsxResult<T> = Result<T, XlsxWriteError>;
