//! Line classification.
//!
//! Each report line is matched against the patch pattern first, then the
//! summary pattern. The patch pattern is anchored at the start of the line;
//! the summary pattern may appear anywhere in it.

use std::sync::OnceLock;

use it8grid_core::{Error, Patch, Result, Stat, Triplet};
use regex::{Captures, Regex};

/// Lexical class of a report number: digits, sign, dot and exponent.
const NUM: &str = r"[0-9.eE+-]+";

/// One classified report line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    /// A patch measurement.
    Patch(Patch),
    /// A `max. = .., avg. = .., RMS = ..` summary.
    Summary(Stat),
    /// Anything else: headers, blank lines, progress output.
    Unmatched,
}

fn patch_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let triplet = format!(r"{NUM}\s+{NUM}\s+{NUM}");
        let pattern = format!(
            r"^\[(?P<de>[0-9.]+)\]\s+(?P<id>[A-Z]+[0-9]+):\s+(?P<error>{triplet})\s+->\s+(?P<actual>{triplet})\s+should be\s+(?P<reference>{triplet})"
        );
        Regex::new(&pattern).expect("patch line pattern is valid")
    })
}

fn summary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"max\.\s*=\s*([0-9.]+),\s*avg\.\s*=\s*([0-9.]+),\s*RMS\s*=\s*([0-9.]+)")
            .expect("summary line pattern is valid")
    })
}

/// Classifies a single report line.
///
/// Unrecognized lines are [`ReportLine::Unmatched`], never an error. Errors
/// only arise when a line has the shape of a patch or summary line but one
/// of its numbers does not parse.
///
/// # Example
///
/// ```rust
/// use it8grid_report::{classify_line, ReportLine};
///
/// let line = classify_line("max. = 3.45, avg. = 1.10, RMS = 1.50").unwrap();
/// assert!(matches!(line, ReportLine::Summary(s) if s.rms == 1.50));
///
/// assert_eq!(classify_line("Verifying profile").unwrap(), ReportLine::Unmatched);
/// ```
pub fn classify_line(line: &str) -> Result<ReportLine> {
    if let Some(caps) = patch_re().captures(line) {
        return patch_from(&caps).map(ReportLine::Patch);
    }
    if let Some(caps) = summary_re().captures(line) {
        let stat = Stat::new(
            parse_number(&caps[1])?,
            parse_number(&caps[2])?,
            parse_number(&caps[3])?,
        );
        return Ok(ReportLine::Summary(stat));
    }
    Ok(ReportLine::Unmatched)
}

fn patch_from(caps: &Captures<'_>) -> Result<Patch> {
    Ok(Patch {
        id: caps["id"].to_string(),
        delta_e: parse_number(&caps["de"])?,
        error: parse_triplet(&caps["error"])?,
        actual: parse_triplet(&caps["actual"])?,
        reference: parse_triplet(&caps["reference"])?,
    })
}

/// Parses exactly three whitespace-separated reals.
///
/// A wrong value count is [`Error::MalformedTriplet`] naming the whole
/// substring; an unparseable value is [`Error::MalformedNumber`].
///
/// # Example
///
/// ```rust
/// use it8grid_report::parse_triplet;
///
/// assert_eq!(parse_triplet(" 1e-3 -2 +3.5 ").unwrap(), [0.001, -2.0, 3.5]);
/// assert!(parse_triplet("1 2").is_err());
/// ```
pub fn parse_triplet(s: &str) -> Result<Triplet> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedTriplet(s.trim().to_string()));
    }
    Ok([
        parse_number(parts[0])?,
        parse_number(parts[1])?,
        parse_number(parts[2])?,
    ])
}

fn parse_number(s: &str) -> Result<f64> {
    s.parse()
        .map_err(|_| Error::MalformedNumber(s.to_string()))
}
