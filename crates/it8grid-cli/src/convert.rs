//! Report to workbook conversion.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

use crate::Cli;
use it8grid_layout::{
    DocumentWriter, GradeTable, RenderOptions, Theme, build_document, load_grades,
};
use it8grid_report::read_report;
use it8grid_xlsx::XlsxWriter;

/// Runs the conversion and returns the path written.
///
/// The workbook is fully built before the output file is touched.
pub fn run(cli: &Cli) -> Result<PathBuf> {
    trace!(?cli, "convert::run");
    let output = output_path(&cli.input, cli.output.as_deref());

    let report = read_report(&cli.input)
        .with_context(|| format!("Failed to read report: {}", cli.input.display()))?;
    info!(
        input = %cli.input.display(),
        patches = report.len(),
        max = report.stat.max,
        avg = report.stat.avg,
        rms = report.stat.rms,
        "Report loaded"
    );

    let grades = match &cli.grades {
        Some(path) => load_grades(path)
            .with_context(|| format!("Failed to load grades: {}", path.display()))?,
        None => GradeTable::default(),
    };
    debug!(bands = grades.bands().len(), "Grade table");

    let options = RenderOptions {
        flat_patch_fill: cli.nopatchfill,
        flat_grading: cli.nocolorgrade,
    };
    let doc = build_document(&report, &grades, &Theme::default(), options)
        .with_context(|| format!("Failed to lay out report: {}", cli.input.display()))?;

    XlsxWriter::new()
        .write(&doc, &output)
        .with_context(|| format!("Failed to save: {}", output.display()))?;
    info!(output = %output.display(), "Workbook written");

    Ok(output)
}

/// Explicit output, or the input with its extension replaced by `xlsx`.
fn output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    output.map_or_else(|| input.with_extension("xlsx"), Path::to_path_buf)
}
