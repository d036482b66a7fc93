//! Error types for it8grid operations.
//!
//! Every failure in the report-to-workbook pipeline is fatal: nothing is
//! retried or recovered, and no partial output is written. The [`Error`]
//! enum covers the failure modes of:
//!
//! - Report parsing (malformed numbers or triplets, missing summary)
//! - Patch addressing (malformed ids, out-of-range ids, cell collisions)
//! - Empty reports
//! - Grade table configuration
//! - I/O
//!
//! # Usage
//!
//! ```rust
//! use it8grid_core::{Error, ErrorKind, Result};
//!
//! fn require_patches(count: usize) -> Result<()> {
//!     if count == 0 {
//!         return Err(Error::NoData);
//!     }
//!     Ok(())
//! }
//!
//! let err = require_patches(0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NoData);
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning a report into a workbook.
///
/// # Categories
///
/// - **Parse errors**: [`MalformedTriplet`](Error::MalformedTriplet),
///   [`MalformedNumber`](Error::MalformedNumber),
///   [`MissingSummary`](Error::MissingSummary),
///   [`DuplicatePatch`](Error::DuplicatePatch)
/// - **Address errors**: [`InvalidAddress`](Error::InvalidAddress),
///   [`AddressOutOfRange`](Error::AddressOutOfRange),
///   [`AddressCollision`](Error::AddressCollision)
/// - **No data**: [`NoData`](Error::NoData)
/// - **Configuration errors**: [`InvalidGrades`](Error::InvalidGrades),
///   [`InvalidColor`](Error::InvalidColor)
/// - **I/O errors**: [`Io`](Error::Io)
#[derive(Debug, Error)]
pub enum Error {
    /// A color triplet did not contain exactly three values.
    ///
    /// Carries the offending substring as it appeared in the report.
    #[error("malformed triplet: '{0}'")]
    MalformedTriplet(String),

    /// A numeric token could not be parsed as a real number.
    #[error("malformed number: '{0}'")]
    MalformedNumber(String),

    /// The report contained patch lines but no `max. = .., avg. = .., RMS = ..` line.
    #[error("report has patch data but no summary line (max./avg./RMS)")]
    MissingSummary,

    /// The same patch id appeared on more than one patch line.
    #[error("duplicate patch id: {0}")]
    DuplicatePatch(String),

    /// Patch id does not have the `<letters><digits>` shape.
    #[error("invalid patch address: '{0}'")]
    InvalidAddress(String),

    /// Patch id is well-formed but lies outside the IT8.7/2 layout.
    #[error("patch address out of range: '{0}'")]
    AddressOutOfRange(String),

    /// Two patches resolve to the same grid cell.
    #[error("patches '{first}' and '{second}' both map to cell (row {row}, column {col})")]
    AddressCollision {
        /// Id of the patch that claimed the cell first.
        first: String,
        /// Id of the patch that collided with it.
        second: String,
        /// 1-based row of the shared cell.
        row: u32,
        /// 1-based column of the shared cell.
        col: u32,
    },

    /// The report contained no patch lines at all.
    #[error("no patch data found in report")]
    NoData,

    /// A grade table violates its ordering rules.
    #[error("invalid grade table: {0}")]
    InvalidGrades(String),

    /// A color string is not `RRGGBB` hex.
    #[error("invalid color '{0}', expected RRGGBB hex")]
    InvalidColor(String),

    /// I/O error while reading a report or configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`].
///
/// Lets callers map errors to user-facing categories without matching
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed report content.
    Parse,
    /// Malformed, out-of-range or colliding patch id.
    Address,
    /// Report without patch lines.
    NoData,
    /// Invalid grade table or color configuration.
    Config,
    /// Unreadable input or unwritable output.
    Io,
}

impl Error {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedTriplet(_)
            | Error::MalformedNumber(_)
            | Error::MissingSummary
            | Error::DuplicatePatch(_) => ErrorKind::Parse,
            Error::InvalidAddress(_)
            | Error::AddressOutOfRange(_)
            | Error::AddressCollision { .. } => ErrorKind::Address,
            Error::NoData => ErrorKind::NoData,
            Error::InvalidGrades(_) | Error::InvalidColor(_) => ErrorKind::Config,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}
