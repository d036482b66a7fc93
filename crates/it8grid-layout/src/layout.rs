//! Grid and legend views.
//!
//! The grid sheet mirrors the physical IT8.7/2 chart: one cell per patch,
//! its dE as the value, the reference color as the fill and the severity
//! band as the font color. The legend sheet lists the patches of each band
//! on one row.

use it8grid_color::lab_to_rgb8;
use it8grid_core::{GridCoord, Patch, Report, Result};
use tracing::debug;

use crate::address::{
    BOTTOM_HEADER_ROW, FIRST_LETTER_ROW, GRAYSCALE_ROW, LEFT_HEADER_COL, PATCH_COLUMNS,
    RIGHT_HEADER_COL, TOP_HEADER_ROW, place_patches, row_letter,
};
use crate::config::RenderOptions;
use crate::grade::GradeTable;
use crate::sheet::{CellValue, Document, Sheet};
use crate::style::{Style, Theme};

/// Name of the grid sheet.
pub const GRID_SHEET: &str = "IT8.7-2";
/// Name of the legend sheet.
pub const GRADES_SHEET: &str = "Grades";

/// First row of the summary block.
pub const STAT_ROW: u32 = 17;

/// Builds the complete two-sheet document.
///
/// Nothing is written here; any addressing error surfaces before a sink
/// sees the document.
pub fn build_document(
    report: &Report,
    grades: &GradeTable,
    theme: &Theme,
    options: RenderOptions,
) -> Result<Document> {
    let grid = grid_sheet(report, grades, theme, options)?;
    let legend = legend_sheet(&report.patches, grades, theme, options);
    Ok(Document {
        sheets: vec![grid, legend],
    })
}

/// Builds the IT8.7/2 grid sheet.
///
/// Fails if a patch id cannot be placed (see
/// [`place_patches`](crate::address::place_patches)).
pub fn grid_sheet(
    report: &Report,
    grades: &GradeTable,
    theme: &Theme,
    options: RenderOptions,
) -> Result<Sheet> {
    let placed = place_patches(&report.patches)?;
    let mut sheet = Sheet::new(GRID_SHEET);

    write_headers(&mut sheet, theme);

    for (at, patch) in placed {
        let style = patch_style(patch, &theme.value, grades, options);
        sheet.put(at, patch.delta_e, &style);
    }

    let stat = &report.stat;
    for (i, (label, value)) in [("max:", stat.max), ("avg:", stat.avg), ("rms:", stat.rms)]
        .into_iter()
        .enumerate()
    {
        let at = GridCoord::new(STAT_ROW + i as u32, 1);
        sheet.put(at, label, &theme.stat_label);
        sheet.put(at.right(1), value, &theme.stat_value);
    }

    debug!(
        sheet = GRID_SHEET,
        patches = report.patches.len(),
        cells = sheet.cells.len(),
        "grid laid out"
    );
    Ok(sheet)
}

/// Builds the severity legend sheet.
///
/// Row `i + 1` holds band `i`: its label in column 1, then the ids of its
/// patches in input order from column 2 on. Empty bands keep their row.
pub fn legend_sheet(
    patches: &[Patch],
    grades: &GradeTable,
    theme: &Theme,
    options: RenderOptions,
) -> Sheet {
    let mut sheet = Sheet::new(GRADES_SHEET);
    let mut widest = 1;

    for (i, group) in grades.partition(patches).into_iter().enumerate() {
        let row = i as u32 + 1;
        let label_style = if options.flat_grading {
            theme.grade_label.clone()
        } else {
            theme.grade_label.with_fill(group.band.color)
        };
        sheet.put(GridCoord::new(row, 1), group.label(), &label_style);
        sheet.set_row_height(row, theme.cell_height);

        for (j, patch) in group.patches.iter().enumerate() {
            let at = GridCoord::new(row, j as u32 + 2);
            let style = if options.flat_patch_fill {
                theme.grade_value.clone()
            } else {
                theme.grade_value.with_fill(lab_to_rgb8(patch.reference))
            };
            sheet.put(at, patch.id.as_str(), &style);
            widest = widest.max(at.col);
        }
        debug!(band = %group.label(), members = group.patches.len(), "legend row");
    }

    for col in 2..=widest {
        sheet.set_column_width(col, theme.cell_width);
    }
    sheet
}

fn write_headers(sheet: &mut Sheet, theme: &Theme) {
    let header = &theme.header;

    for row in [TOP_HEADER_ROW, BOTTOM_HEADER_ROW] {
        for col in LEFT_HEADER_COL..=RIGHT_HEADER_COL {
            let value = if (2..=PATCH_COLUMNS + 1).contains(&col) {
                CellValue::Number(f64::from(col - 1))
            } else {
                CellValue::Blank
            };
            sheet.put(GridCoord::new(row, col), value, header);
            sheet.set_column_width(col, theme.cell_width);
        }
        sheet.set_row_height(row, theme.cell_height);
    }

    for col in [LEFT_HEADER_COL, RIGHT_HEADER_COL] {
        for row in FIRST_LETTER_ROW..BOTTOM_HEADER_ROW {
            if let Some(letter) = row_letter(row) {
                sheet.put(GridCoord::new(row, col), letter.to_string(), header);
            }
            sheet.set_row_height(row, theme.cell_height);
        }
    }

    sheet.set_row_height(GRAYSCALE_ROW, theme.grayscale_row_height());
}

fn patch_style(patch: &Patch, base: &Style, grades: &GradeTable, options: RenderOptions) -> Style {
    let style = if options.flat_patch_fill {
        base.clone()
    } else {
        base.with_fill(lab_to_rgb8(patch.reference))
    };
    if options.flat_grading {
        return style;
    }
    match grades.classify(patch.delta_e) {
        Some(band) => style.with_font_color(band.color),
        None => style,
    }
}
