//! # it8grid-layout
//!
//! Turns a parsed [`Report`](it8grid_core::Report) into a sink-independent
//! [`Document`]: two sheets of positioned, styled cells.
//!
//! - [`address`] - Patch id to grid cell (`A1` -> row 2, column 2)
//! - [`grade`] - dE severity bands: classification and partitioning
//! - [`style`] - Immutable cell styles and the [`Theme`] holding them
//! - [`sheet`] - [`Document`], [`Sheet`], [`Cell`] and the [`DocumentWriter`] seam
//! - [`config`] - Render switches and grade table loading
//! - [`layout`] - The grid and legend views
//!
//! # Usage
//!
//! ```rust
//! use it8grid_layout::{build_document, GradeTable, RenderOptions, Theme};
//! use it8grid_report::parse_report;
//!
//! let report = parse_report("\
//! [1.23] A5: 0.01 0.02 -0.01 -> 50.0 0.0 0.0 should be 49.9 0.1 -0.1
//! max. = 3.45, avg. = 1.10, RMS = 1.50
//! ").unwrap();
//!
//! let doc = build_document(&report, &GradeTable::default(), &Theme::default(), RenderOptions::default()).unwrap();
//! assert_eq!(doc.sheets.len(), 2);
//! ```
//!
//! # Dependencies
//!
//! - `it8grid-core` - Data model and errors
//! - `it8grid-color` - Reference swatches
//! - [`regex`] - Patch id splitting
//! - [`serde`], [`serde_yaml`] - Grade table files

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod address;
pub mod config;
pub mod grade;
pub mod layout;
pub mod sheet;
pub mod style;

pub use address::{patch_to_cell, place_patches};
pub use config::{RenderOptions, grades_from_yaml, load_grades};
pub use grade::{BandGroup, GradeBand, GradeTable};
pub use layout::{build_document, grid_sheet, legend_sheet};
pub use sheet::{Cell, CellValue, Document, DocumentWriter, Sheet};
pub use style::{HAlign, Style, Theme, VAlign};
