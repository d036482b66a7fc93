//! Integration tests for it8grid crates.
//!
//! End-to-end checks of the report -> document -> workbook pipeline.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    use it8grid_core::{Error, ErrorKind, GridCoord, Rgb8};
    use it8grid_layout::layout::{GRADES_SHEET, GRID_SHEET};
    use it8grid_layout::{
        CellValue, DocumentWriter, GradeTable, RenderOptions, Theme, build_document,
    };
    use it8grid_xlsx::XlsxWriter;

    /// Verbose profcheck output, trimmed.
    const PROFCHECK: &str = "\
Profile check complete, peak err = 6.812000, avg err = 2.401000
[6.812000] L22: 3.1 -4.2 2.0 -> 31.2 -9.8 -34.1 should be 28.1 -5.6 -36.1
[2.040000] E10: 0.8 -1.1 1.2 -> 61.5 38.0 62.1 should be 60.7 39.1 60.9
[0.350000] A1: 0.1 0.2 -0.1 -> 15.2 0.1 0.0 should be 15.1 -0.1 0.1
[1.000000] GS0: 0.5 0.0 0.0 -> 5.5 0.0 0.0 should be 5.0 0.0 0.0
[1.810000] GS23: 1.2 -0.3 0.4 -> 96.0 0.0 1.0 should be 94.8 0.3 0.6
Profile check complete, errors(CIEDE2000): max. = 6.812000, avg. = 2.401000, RMS = 3.300000
";

    fn report_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    /// Full pipeline: read -> lay out -> write xlsx
    #[test]
    fn test_report_to_workbook() {
        let input = report_file(PROFCHECK);
        let report = it8grid_report::read_report(input.path()).unwrap();
        assert_eq!(report.len(), 5);

        let doc = build_document(&report, &GradeTable::default(), &Theme::default(), RenderOptions::default())
            .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("profcheck.xlsx");
        XlsxWriter::new().write(&doc, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_grid_cells_match_report() {
        let input = report_file(PROFCHECK);
        let report = it8grid_report::read_report(input.path()).unwrap();
        let doc = build_document(&report, &GradeTable::default(), &Theme::default(), RenderOptions::default())
            .unwrap();
        let grid = doc.sheet(GRID_SHEET).unwrap();

        let l22 = grid.cell(13, 23).unwrap();
        assert_eq!(l22.value, CellValue::Number(6.812));
        // top band: magenta
        assert_eq!(l22.style.font_color, Some(Rgb8::from_u32(0xFF00FF)));
        assert_eq!(
            l22.style.fill,
            Some(it8grid_color::lab_to_rgb8([28.1, -5.6, -36.1]))
        );

        // a value on a threshold takes that band's color
        let gs0 = grid.cell(15, 1).unwrap();
        assert_eq!(gs0.style.font_color, Some(Rgb8::from_u32(0x00C000)));

        let max = grid.cell(17, 2).unwrap();
        let CellValue::Number(v) = max.value else {
            panic!("max is not numeric");
        };
        assert_relative_eq!(v, 6.812);
    }

    #[test]
    fn test_legend_groups() {
        let input = report_file(PROFCHECK);
        let report = it8grid_report::read_report(input.path()).unwrap();
        let doc = build_document(&report, &GradeTable::default(), &Theme::default(), RenderOptions::default())
            .unwrap();
        let legend = doc.sheet(GRADES_SHEET).unwrap();

        let row = |r: u32| -> Vec<String> {
            (2..)
                .map_while(|c| legend.cell(r, c))
                .map(|cell| match &cell.value {
                    CellValue::Text(s) => s.clone(),
                    other => panic!("unexpected {other:?}"),
                })
                .collect()
        };
        assert_eq!(row(1), ["A1"]);
        assert_eq!(row(2), ["GS0", "GS23"]);
        assert_eq!(row(3), ["E10"]);
        assert!(row(4).is_empty());
        assert_eq!(row(7), ["L22"]);
    }

    #[test]
    fn test_collision_stops_before_output() {
        let text = format!("{PROFCHECK}[0.5] L022: 0 0 0 -> 50 0 0 should be 50 0 0\n");
        let report = it8grid_report::parse_report(&text).unwrap();

        let err = build_document(&report, &GradeTable::default(), &Theme::default(), RenderOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Address);
        assert!(matches!(
            err,
            Error::AddressCollision { row: 13, col: 23, .. }
        ));
    }

    #[test]
    fn test_unknown_patch_is_address_error() {
        let text = "[0.5] M1: 0 0 0 -> 50 0 0 should be 50 0 0\nmax. = 0.5, avg. = 0.5, RMS = 0.5\n";
        let report = it8grid_report::parse_report(text).unwrap();
        let err = build_document(&report, &GradeTable::default(), &Theme::default(), RenderOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::AddressOutOfRange(ref id) if id == "M1"));
    }

    #[test]
    fn test_flat_workbook() {
        let report = it8grid_report::parse_report(PROFCHECK).unwrap();
        let theme = Theme::default();
        let options = RenderOptions {
            flat_patch_fill: true,
            flat_grading: true,
        };
        let doc = build_document(&report, &GradeTable::default(), &theme, options).unwrap();
        let grid = doc.sheet(GRID_SHEET).unwrap();

        for patch in &report.patches {
            let at: GridCoord = it8grid_layout::patch_to_cell(&patch.id).unwrap();
            assert_eq!(grid.cells[&at].style, theme.value, "{}", patch.id);
        }

        let bytes = XlsxWriter::new().write_to_buffer(&doc).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
