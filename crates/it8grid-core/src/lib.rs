//! # it8grid-core
//!
//! Core types shared by every it8grid crate.
//!
//! - [`Patch`] - One measured patch of an IT8.7/2 target
//! - [`Stat`] - The max/avg/RMS dE summary of a report
//! - [`Report`] - Parsed patches plus their summary
//! - [`GridCoord`] - 1-based cell position in the rendered target layout
//! - [`Rgb8`] - 8-bit display color
//! - [`Error`] - Unified error type for parsing, addressing and configuration
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other crates build on it:
//!
//! ```text
//! it8grid-core (this crate)
//!    ^
//!    |
//!    +-- it8grid-color (Lab -> sRGB swatches)
//!    +-- it8grid-report (profcheck report parser)
//!    +-- it8grid-layout (addressing, grading, sheet layout)
//!    +-- it8grid-xlsx (workbook output)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod coord;
pub mod error;
pub mod patch;
pub mod rgb;

pub use coord::*;
pub use error::*;
pub use patch::*;
pub use rgb::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use it8grid_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::coord::GridCoord;
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::patch::{Patch, Report, Stat, Triplet};
    pub use crate::rgb::Rgb8;
}
