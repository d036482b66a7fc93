//! Grid coordinates of the rendered IT8.7/2 layout.
//!
//! Coordinates are 1-based and include the header bands, so the first
//! lettered row (A) is row 2 and patch column 1 is grid column 2.
//!
//! ```text
//!         col 1   col 2 .. col 23   col 24
//! row 1   [ ]     [1]   .. [22]     [ ]      column-number header
//! row 2   [A]     A1    .. A22      [A]
//!  ..
//! row 13  [L]     L1    .. L22      [L]
//! row 14  [ ]     [1]   .. [22]     [ ]      column-number header
//! row 15  GS0     GS1   .. GS22     GS23     grayscale strip
//! ```

use std::fmt;

/// A 1-based (row, column) position in the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// 1-based row.
    pub row: u32,
    /// 1-based column.
    pub col: u32,
}

impl GridCoord {
    /// Creates a coordinate.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate shifted right by `n` columns.
    #[inline]
    pub const fn right(self, n: u32) -> Self {
        Self::new(self.row, self.col + n)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.col)
    }
}
