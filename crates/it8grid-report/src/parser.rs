//! Report assembly.
//!
//! [`ReportBuilder`] accumulates classified lines and enforces the report
//! level rules:
//!
//! - patch order is preserved
//! - patch ids are unique
//! - the last summary line wins
//! - at least one patch is required ([`Error::NoData`])
//! - a report with patches must have a summary ([`Error::MissingSummary`])

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::line::{ReportLine, classify_line};
use it8grid_core::{Error, Patch, Report, Result, Stat};
use tracing::{debug, trace};

/// Accumulates report lines into a [`Report`].
///
/// # Example
///
/// ```rust
/// use it8grid_report::{ReportBuilder, ReportLine};
/// use it8grid_core::Stat;
///
/// let mut builder = ReportBuilder::new();
/// builder.push(ReportLine::Summary(Stat::new(1.0, 0.5, 0.6))).unwrap();
/// builder.push(ReportLine::Unmatched).unwrap();
/// // A summary alone is not a report
/// assert!(builder.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    patches: Vec<Patch>,
    seen: HashSet<String>,
    stat: Option<Stat>,
}

impl ReportBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one classified line.
    ///
    /// Fails with [`Error::DuplicatePatch`] if the patch id was already seen.
    pub fn push(&mut self, line: ReportLine) -> Result<()> {
        match line {
            ReportLine::Patch(patch) => {
                if !self.seen.insert(patch.id.clone()) {
                    return Err(Error::DuplicatePatch(patch.id));
                }
                trace!(id = %patch.id, de = patch.delta_e, "patch");
                self.patches.push(patch);
            }
            ReportLine::Summary(stat) => {
                if let Some(prev) = self.stat {
                    debug!(?prev, ?stat, "summary line replaces earlier one");
                }
                self.stat = Some(stat);
            }
            ReportLine::Unmatched => {}
        }
        Ok(())
    }

    /// Finishes the report.
    pub fn finish(self) -> Result<Report> {
        if self.patches.is_empty() {
            return Err(Error::NoData);
        }
        let stat = self.stat.ok_or(Error::MissingSummary)?;
        debug!(
            patches = self.patches.len(),
            max = stat.max,
            avg = stat.avg,
            rms = stat.rms,
            "report parsed"
        );
        Ok(Report {
            patches: self.patches,
            stat,
        })
    }
}

/// Parses a complete report held in memory.
pub fn parse_report(text: &str) -> Result<Report> {
    let mut builder = ReportBuilder::new();
    for (n, line) in text.lines().enumerate() {
        push_line(&mut builder, n + 1, line)?;
    }
    builder.finish()
}

/// Parses a report from a buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Report> {
    let mut builder = ReportBuilder::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        push_line(&mut builder, n + 1, &line)?;
    }
    builder.finish()
}

/// Reads and parses a report file.
///
/// # Example
///
/// ```rust,ignore
/// let report = it8grid_report::read_report("display.txt")?;
/// println!("{} patches, max dE {}", report.len(), report.stat.max);
/// ```
pub fn read_report<P: AsRef<Path>>(path: P) -> Result<Report> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading report");
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

fn push_line(builder: &mut ReportBuilder, line_no: usize, line: &str) -> Result<()> {
    let classified = classify_line(line).inspect_err(|e| {
        debug!(line = line_no, error = %e, "malformed report line");
    })?;
    if let ReportLine::Summary(_) = classified {
        debug!(line = line_no, "summary line");
    }
    builder.push(classified)
}
