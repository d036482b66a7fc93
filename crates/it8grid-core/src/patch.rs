//! Measured patch records and report summaries.
//!
//! A profcheck report lists one line per patch of the calibration target,
//! followed by a summary line with the maximum, average and RMS dE over all
//! patches. Parsing produces a [`Report`]; its contents are never modified
//! afterwards.

/// Three real values: a Lab color (L, a, b) or a per-channel residual.
pub type Triplet = [f64; 3];

/// One measured patch of the calibration target.
///
/// # Example
///
/// ```rust
/// use it8grid_core::Patch;
///
/// let patch = Patch {
///     id: "A5".into(),
///     delta_e: 1.23,
///     error: [0.01, 0.02, -0.01],
///     actual: [50.0, 0.0, 0.0],
///     reference: [49.9, 0.1, -0.1],
/// };
/// assert_eq!(patch.id, "A5");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Patch identifier: row designator plus 1-based column (`A1`, `L22`, `GS5`).
    pub id: String,
    /// Color difference between measured and reference color.
    pub delta_e: f64,
    /// Per-channel residual as printed by the report. Informational only.
    pub error: Triplet,
    /// Measured color in PCS (L\*a\*b\*).
    pub actual: Triplet,
    /// Reference color in PCS (L\*a\*b\*), used for swatches.
    pub reference: Triplet,
}

/// Summary dE statistics of a report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stat {
    /// Maximum dE.
    pub max: f64,
    /// Average dE.
    pub avg: f64,
    /// Root mean square dE.
    pub rms: f64,
}

impl Stat {
    /// Creates a summary from its three scalars.
    #[inline]
    pub const fn new(max: f64, avg: f64, rms: f64) -> Self {
        Self { max, avg, rms }
    }
}

/// A fully parsed report: patches in file order plus the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Patches in the order they appeared in the report.
    pub patches: Vec<Patch>,
    /// Summary line values (the last summary line in the report).
    pub stat: Stat,
}

impl Report {
    /// Number of patches.
    #[inline]
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// True if the report holds no patches.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Looks up a patch by id (case-sensitive).
    pub fn patch(&self, id: &str) -> Option<&Patch> {
        self.patches.iter().find(|p| p.id == id)
    }
}
