//! Render switches and grade table files.
//!
//! A grade table file is YAML, either a bare list of bands or a mapping
//! with a `grades` key:
//!
//! ```yaml
//! grades:
//!   - { threshold: 0.0, color: "0080FF" }
//!   - { threshold: 1.0, color: "00C000" }
//!   - { threshold: 2.5, color: "#FF0000" }
//! ```

use std::path::Path;

use it8grid_core::{Error, Result, Rgb8};
use serde::Deserialize;
use tracing::debug;

use crate::grade::{GradeBand, GradeTable};

/// Switches that flatten the two color channels of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fill patch cells with the neutral theme fill instead of the
    /// reference swatch.
    pub flat_patch_fill: bool,
    /// Render dE values in the neutral font color instead of the grade color.
    pub flat_grading: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGrades {
    Wrapped { grades: Vec<RawBand> },
    Bare(Vec<RawBand>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBand {
    threshold: f64,
    color: String,
}

/// Parses and validates a grade table from YAML text.
///
/// Syntax errors, bad colors and band ordering problems all surface as
/// [`Error::InvalidGrades`].
///
/// # Example
///
/// ```rust
/// use it8grid_layout::grades_from_yaml;
///
/// let table = grades_from_yaml("- { threshold: 0.0, color: '0000FF' }\n- { threshold: 3.0, color: 'FF0000' }").unwrap();
/// assert_eq!(table.bands().len(), 2);
/// ```
pub fn grades_from_yaml(yaml: &str) -> Result<GradeTable> {
    let raw: RawGrades =
        serde_yaml::from_str(yaml).map_err(|e| Error::InvalidGrades(e.to_string()))?;
    let raw = match raw {
        RawGrades::Wrapped { grades } => grades,
        RawGrades::Bare(grades) => grades,
    };

    let bands = raw
        .into_iter()
        .map(|b| {
            let color = Rgb8::from_hex(&b.color)
                .map_err(|e| Error::InvalidGrades(format!("threshold {}: {e}", b.threshold)))?;
            Ok(GradeBand::new(b.threshold, color))
        })
        .collect::<Result<Vec<_>>>()?;

    GradeTable::new(bands)
}

/// Reads a grade table file.
pub fn load_grades<P: AsRef<Path>>(path: P) -> Result<GradeTable> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let table = grades_from_yaml(&text)?;
    debug!(path = %path.display(), bands = table.bands().len(), "loaded grade table");
    Ok(table)
}
