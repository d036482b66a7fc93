//! dE severity grading.
//!
//! A [`GradeTable`] is an ordered list of thresholds, each with a color.
//! A band covers `[threshold, next_threshold)`; the top band is open ended.
//! The same table drives the font color of each grid cell and the grouping
//! of the legend sheet.

use it8grid_core::{Error, Patch, Result, Rgb8};

/// Upper bound closing the top band. Never rendered.
pub const TERMINAL_BOUND: f64 = f64::INFINITY;

/// One severity band: values at or above `threshold` (up to the next band)
/// are shown in `color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    /// Inclusive lower bound.
    pub threshold: f64,
    /// Display color.
    pub color: Rgb8,
}

impl GradeBand {
    /// Creates a band.
    pub const fn new(threshold: f64, color: Rgb8) -> Self {
        Self { threshold, color }
    }
}

/// Default bands: blue below 1, greens up to 3, then yellow, orange, red, magenta.
pub const DEFAULT_BANDS: [GradeBand; 7] = [
    GradeBand::new(0.0, Rgb8::from_u32(0x0080FF)),
    GradeBand::new(1.0, Rgb8::from_u32(0x00C000)),
    GradeBand::new(2.0, Rgb8::from_u32(0x00FF00)),
    GradeBand::new(3.0, Rgb8::from_u32(0xFFFF00)),
    GradeBand::new(4.0, Rgb8::from_u32(0xFF8000)),
    GradeBand::new(5.0, Rgb8::from_u32(0xFF0000)),
    GradeBand::new(6.0, Rgb8::from_u32(0xFF00FF)),
];

/// Validated, ordered set of grade bands.
///
/// Invariants: at least one band, the first threshold is `0.0`, thresholds
/// are finite and strictly increasing. Together the bands partition
/// `[0, inf)`.
///
/// # Example
///
/// ```rust
/// use it8grid_layout::{GradeBand, GradeTable};
/// use it8grid_core::Rgb8;
///
/// let table = GradeTable::new(vec![
///     GradeBand::new(0.0, Rgb8::from_u32(0x0000FF)),
///     GradeBand::new(1.0, Rgb8::from_u32(0x00FF00)),
///     GradeBand::new(2.0, Rgb8::from_u32(0xFF0000)),
/// ]).unwrap();
///
/// assert_eq!(table.classify(1.0).unwrap().color, Rgb8::from_u32(0x00FF00));
/// assert_eq!(table.classify(0.999).unwrap().color, Rgb8::from_u32(0x0000FF));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GradeTable {
    bands: Vec<GradeBand>,
}

impl GradeTable {
    /// Validates and wraps a band list.
    pub fn new(bands: Vec<GradeBand>) -> Result<Self> {
        let first = bands
            .first()
            .ok_or_else(|| Error::InvalidGrades("no bands".into()))?;
        if first.threshold != 0.0 {
            return Err(Error::InvalidGrades(format!(
                "first threshold must be 0.0, got {}",
                first.threshold
            )));
        }
        if let Some(band) = bands.iter().find(|b| !b.threshold.is_finite()) {
            return Err(Error::InvalidGrades(format!(
                "threshold {} is not finite",
                band.threshold
            )));
        }
        if let Some(pair) = bands.windows(2).find(|w| w[1].threshold <= w[0].threshold) {
            return Err(Error::InvalidGrades(format!(
                "thresholds must increase strictly: {} then {}",
                pair[0].threshold, pair[1].threshold
            )));
        }
        Ok(Self { bands })
    }

    /// Bands in ascending threshold order.
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }

    /// Returns the highest band whose threshold is `<= de`.
    ///
    /// A value exactly on a threshold belongs to that threshold's band.
    /// `None` only for values below `0.0` or NaN.
    pub fn classify(&self, de: f64) -> Option<&GradeBand> {
        self.bands.iter().rev().find(|band| band.threshold <= de)
    }

    /// Groups patches by band.
    ///
    /// Returns one [`BandGroup`] per band, in band order, even when empty.
    /// Patches keep their input order inside a group.
    pub fn partition<'a>(&'a self, patches: &'a [Patch]) -> Vec<BandGroup<'a>> {
        self.bands
            .iter()
            .enumerate()
            .map(|(i, band)| {
                let upper = self
                    .bands
                    .get(i + 1)
                    .map_or(TERMINAL_BOUND, |next| next.threshold);
                let patches = patches
                    .iter()
                    .filter(|p| band.threshold <= p.delta_e && p.delta_e < upper)
                    .collect();
                BandGroup { band, upper, patches }
            })
            .collect()
    }
}

impl Default for GradeTable {
    fn default() -> Self {
        Self {
            bands: DEFAULT_BANDS.to_vec(),
        }
    }
}

/// Patches falling into one band.
#[derive(Debug, Clone)]
pub struct BandGroup<'a> {
    /// The band.
    pub band: &'a GradeBand,
    /// Exclusive upper bound: next band's threshold, or [`TERMINAL_BOUND`].
    pub upper: f64,
    /// Member patches.
    pub patches: Vec<&'a Patch>,
}

impl BandGroup<'_> {
    /// True for the open-ended top band.
    pub fn is_top(&self) -> bool {
        self.upper == TERMINAL_BOUND
    }

    /// Legend label: `"1.0…2.0"`, or `"≥ 6.0"` for the top band.
    pub fn label(&self) -> String {
        if self.is_top() {
            format!("\u{2265} {}", format_bound(self.band.threshold))
        } else {
            format!(
                "{}\u{2026}{}",
                format_bound(self.band.threshold),
                format_bound(self.upper)
            )
        }
    }
}

/// Formats a threshold with at least one decimal place.
fn format_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C0: Rgb8 = Rgb8::from_u32(0x000001);
    const C1: Rgb8 = Rgb8::from_u32(0x000002);
    const C2: Rgb8 = Rgb8::from_u32(0x000003);

    fn three_bands() -> GradeTable {
        GradeTable::new(vec![
            GradeBand::new(0.0, C0),
            GradeBand::new(1.0, C1),
            GradeBand::new(2.0, C2),
        ])
        .unwrap()
    }

    fn patch(id: &str, de: f64) -> Patch {
        Patch {
            id: id.into(),
            delta_e: de,
            error: [0.0; 3],
            actual: [50.0, 0.0, 0.0],
            reference: [50.0, 0.0, 0.0],
        }
    }

    #[test]
    fn test_classify_boundaries() {
        let t = three_bands();
        assert_eq!(t.classify(0.0).unwrap().color, C0);
        assert_eq!(t.classify(0.999).unwrap().color, C0);
        assert_eq!(t.classify(1.0).unwrap().color, C1);
        assert_eq!(t.classify(1.999).unwrap().color, C1);
        assert_eq!(t.classify(2.0).unwrap().color, C2);
        assert_eq!(t.classify(1e6).unwrap().color, C2);
        assert!(t.classify(-0.1).is_none());
        assert!(t.classify(f64::NAN).is_none());
    }

    #[test]
    fn test_partition_is_complete() {
        let table = GradeTable::default();
        // dE from 0.0 to 20.0 in steps of 0.25, including every threshold
        let patches: Vec<Patch> = (0..=80)
            .map(|i| patch(&format!("P{i}"), i as f64 * 0.25))
            .collect();

        let groups = table.partition(&patches);
        assert_eq!(groups.len(), DEFAULT_BANDS.len());

        let mut members: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.patches.iter().map(|p| p.id.as_str()))
            .collect();
        assert_eq!(members.len(), patches.len());
        members.sort_unstable();
        members.dedup();
        assert_eq!(members.len(), patches.len());

        for group in &groups {
            for p in &group.patches {
                assert_eq!(table.classify(p.delta_e).unwrap(), group.band);
            }
        }
    }

    #[test]
    fn test_partition_keeps_order_and_empty_bands() {
        let table = three_bands();
        let patches = [patch("A1", 2.5), patch("A2", 0.1), patch("A3", 9.0)];
        let groups = table.partition(&patches);

        assert!(groups[1].patches.is_empty());
        let top: Vec<&str> = groups[2].patches.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(top, ["A1", "A3"]);
    }

    #[test]
    fn test_labels() {
        let table = GradeTable::default();
        let groups = table.partition(&[]);
        let labels: Vec<String> = groups.iter().map(BandGroup::label).collect();
        assert_eq!(labels[0], "0.0\u{2026}1.0");
        assert_eq!(labels[5], "5.0\u{2026}6.0");
        assert_eq!(labels[6], "\u{2265} 6.0");
        assert!(groups[6].is_top());
        assert!(!groups[0].is_top());
    }

    #[test]
    fn test_fractional_label() {
        let table = GradeTable::new(vec![
            GradeBand::new(0.0, C0),
            GradeBand::new(2.5, C1),
        ])
        .unwrap();
        assert_eq!(table.partition(&[])[0].label(), "0.0\u{2026}2.5");
    }

    #[test]
    fn test_validation() {
        assert!(GradeTable::new(vec![]).is_err());
        assert!(GradeTable::new(vec![GradeBand::new(0.5, C0)]).is_err());
        assert!(GradeTable::new(vec![GradeBand::new(0.0, C0), GradeBand::new(0.0, C1)]).is_err());
        assert!(GradeTable::new(vec![GradeBand::new(0.0, C0), GradeBand::new(f64::INFINITY, C1)]).is_err());
        assert!(GradeTable::new(vec![GradeBand::new(0.0, C0)]).is_ok());
    }
}
