//! Patch id to grid cell addressing.
//!
//! IT8.7/2 patches are named by a row letter and a column number (`A1` ..
//! `L22`), plus a grayscale strip `GS0` .. `GS23`. The rendered grid keeps
//! row 1 and column 1 for axis headers, so:
//!
//! ```text
//! <letter><n> -> row = rank(letter) + 2, col = n + 1
//! GS<n>       -> row = 15,               col = n + 1
//! ```
//!
//! Row 14 carries the lower column-number header and column 24 the right
//! row-letter header; the grayscale strip sits below them and spans all 24
//! columns.

use std::collections::HashMap;
use std::sync::OnceLock;

use it8grid_core::{Error, GridCoord, Patch, Result};
use regex::Regex;

/// Row designator of the grayscale strip.
pub const GRAYSCALE_CODE: &str = "GS";
/// Grid row of the grayscale strip.
pub const GRAYSCALE_ROW: u32 = 15;
/// Highest grayscale patch number (`GS23`).
pub const GRAYSCALE_MAX: u32 = 23;

/// Grid row of the first lettered row (`A`).
pub const FIRST_LETTER_ROW: u32 = 2;
/// Number of lettered rows (`A` .. `L`).
pub const LETTER_ROWS: u32 = 12;
/// Patch columns per lettered row.
pub const PATCH_COLUMNS: u32 = 22;

/// Upper column-number header row.
pub const TOP_HEADER_ROW: u32 = 1;
/// Lower column-number header row.
pub const BOTTOM_HEADER_ROW: u32 = FIRST_LETTER_ROW + LETTER_ROWS;
/// Left row-letter header column.
pub const LEFT_HEADER_COL: u32 = 1;
/// Right row-letter header column.
pub const RIGHT_HEADER_COL: u32 = PATCH_COLUMNS + 2;

fn address_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z]+)([0-9]+)$").expect("address pattern is valid"))
}

/// Maps a patch id to its grid cell.
///
/// Letters are case-insensitive. Fails with [`Error::InvalidAddress`] if the
/// id is not `<letters><digits>` or uses a multi-letter designator other
/// than `GS`, and with [`Error::AddressOutOfRange`] if it names a patch
/// outside the IT8.7/2 layout.
///
/// Ids past the printed chart (`M1`, `A23`, `GS24`) are rejected instead of
/// being placed by the bare row/column formula, which would land them on
/// the header bands.
///
/// # Example
///
/// ```rust
/// use it8grid_layout::patch_to_cell;
/// use it8grid_core::GridCoord;
///
/// assert_eq!(patch_to_cell("A1").unwrap(), GridCoord::new(2, 2));
/// assert_eq!(patch_to_cell("l22").unwrap(), GridCoord::new(13, 23));
/// assert_eq!(patch_to_cell("GS5").unwrap(), GridCoord::new(15, 6));
/// assert!(patch_to_cell("1A").is_err());
/// ```
pub fn patch_to_cell(id: &str) -> Result<GridCoord> {
    let caps = address_re()
        .captures(id)
        .ok_or_else(|| Error::InvalidAddress(id.to_string()))?;

    let letters = caps[1].to_ascii_uppercase();
    // Only overflows for absurdly long digit runs
    let number: u32 = caps[2]
        .parse()
        .map_err(|_| Error::AddressOutOfRange(id.to_string()))?;

    if letters == GRAYSCALE_CODE {
        if number > GRAYSCALE_MAX {
            return Err(Error::AddressOutOfRange(id.to_string()));
        }
        return Ok(GridCoord::new(GRAYSCALE_ROW, number + 1));
    }

    let &[letter] = letters.as_bytes() else {
        return Err(Error::InvalidAddress(id.to_string()));
    };
    let rank = u32::from(letter - b'A');
    if rank >= LETTER_ROWS || number == 0 || number > PATCH_COLUMNS {
        return Err(Error::AddressOutOfRange(id.to_string()));
    }
    Ok(GridCoord::new(rank + FIRST_LETTER_ROW, number + 1))
}

/// Addresses every patch and rejects grid collisions.
///
/// Returns `(cell, patch)` pairs in input order. Two ids resolving to the
/// same cell (`A1` and `a01`, say) fail with [`Error::AddressCollision`].
pub fn place_patches(patches: &[Patch]) -> Result<Vec<(GridCoord, &Patch)>> {
    let mut owners: HashMap<GridCoord, &str> = HashMap::with_capacity(patches.len());
    let mut placed = Vec::with_capacity(patches.len());

    for patch in patches {
        let at = patch_to_cell(&patch.id)?;
        if let Some(first) = owners.insert(at, &patch.id) {
            return Err(Error::AddressCollision {
                first: first.to_string(),
                second: patch.id.clone(),
                row: at.row,
                col: at.col,
            });
        }
        placed.push((at, patch));
    }
    Ok(placed)
}

/// Header label for a lettered grid row, `None` outside the lettered rows.
pub fn row_letter(row: u32) -> Option<char> {
    let rank = row.checked_sub(FIRST_LETTER_ROW)?;
    (rank < LETTER_ROWS).then(|| char::from(b'A' + rank as u8))
}
