//! # it8grid-report
//!
//! Parser for ArgyllCMS `profcheck -v` reports.
//!
//! # Format
//!
//! Only two line shapes carry data; everything else is skipped:
//!
//! ```text
//! [1.234] A1: 0.012 -0.340 0.220 -> 50.10 10.20 -5.30 should be 49.80 10.50 -5.10
//! Profile check complete, errors(CIEDE2000): max. = 3.45, avg. = 1.10, RMS = 1.50
//! ```
//!
//! The first is a patch line: dE in brackets, patch id, per-channel error,
//! measured Lab and reference Lab. The second is the summary line; when a
//! report holds several, the last one wins.
//!
//! # Example
//!
//! ```rust
//! use it8grid_report::parse_report;
//!
//! let text = "\
//! [1.23] A5: 0.01 0.02 -0.01 -> 50.0 0.0 0.0 should be 49.9 0.1 -0.1
//! max. = 3.45, avg. = 1.10, RMS = 1.50
//! ";
//! let report = parse_report(text).unwrap();
//! assert_eq!(report.patches[0].id, "A5");
//! assert_eq!(report.stat.max, 3.45);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod line;
pub mod parser;

pub use line::{ReportLine, classify_line, parse_triplet};
pub use parser::{ReportBuilder, parse_reader, parse_report, read_report};
