//! # it8grid-xlsx
//!
//! Writes an it8grid [`Document`](it8grid_layout::Document) as an Office Open
//! XML workbook.
//!
//! - [`XlsxWriter`] - The [`DocumentWriter`](it8grid_layout::DocumentWriter) implementation
//! - [`XlsxWriteError`] - Sink errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use it8grid_layout::DocumentWriter;
//! use it8grid_xlsx::XlsxWriter;
//!
//! XlsxWriter::new().write(&doc, "display.xlsx")?;
//! ```
//!
//! # Dependencies
//!
//! - [`rust_xlsxwriter`] - Workbook serialization
//! - [`thiserror`] - Error derive

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod format;
mod writer;

pub use error::{XlsxResult, XlsxWriteError};
pub use writer::XlsxWriter;
