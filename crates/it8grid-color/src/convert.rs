//! PCS Lab to 8-bit display RGB.
//!
//! [`LabToSrgb`] folds chromatic adaptation and the XYZ-to-RGB matrix into
//! a single matrix, so converting a patch is one Lab decode, one matrix
//! multiply and three transfer function evaluations.

use std::sync::OnceLock;

use crate::lab::lab_to_xyz;
use crate::primaries::{Primaries, SRGB, xyz_to_rgb_matrix};
use crate::srgb;
use it8grid_core::{Rgb8, Triplet};
use it8grid_math::{D50, Mat3, Vec3, adapt_matrix};

/// Converter from D50 Lab to a display RGB space.
///
/// # Example
///
/// ```rust
/// use it8grid_color::LabToSrgb;
/// use it8grid_core::Rgb8;
///
/// let conv = LabToSrgb::default();
/// assert_eq!(conv.to_rgb8([100.0, 0.0, 0.0]), Rgb8::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabToSrgb {
    pcs_white: Vec3,
    xyz_to_rgb: Mat3,
}

impl LabToSrgb {
    /// Builds a converter targeting the given primaries.
    ///
    /// PCS XYZ is Bradford-adapted from D50 to the primaries' white.
    pub fn new(primaries: &Primaries) -> Self {
        let adapt = adapt_matrix(D50, primaries.white_xyz());
        Self {
            pcs_white: D50,
            xyz_to_rgb: xyz_to_rgb_matrix(primaries) * adapt,
        }
    }

    /// Lab to linear RGB, unclamped.
    #[inline]
    pub fn to_linear(&self, lab: Triplet) -> Vec3 {
        let xyz = lab_to_xyz(Vec3::from_array(lab), self.pcs_white);
        self.xyz_to_rgb * xyz
    }

    /// Lab to transfer-encoded RGB, unclamped.
    #[inline]
    pub fn to_encoded(&self, lab: Triplet) -> Vec3 {
        self.to_linear(lab).map(srgb::oetf)
    }

    /// Lab to 8-bit RGB. Each channel is rounded and clamped to `[0, 255]`.
    pub fn to_rgb8(&self, lab: Triplet) -> Rgb8 {
        let rgb = self.to_encoded(lab);
        Rgb8::new(quantize(rgb.x), quantize(rgb.y), quantize(rgb.z))
    }
}

impl Default for LabToSrgb {
    fn default() -> Self {
        Self::new(&SRGB)
    }
}

/// Shared sRGB converter, built on first use.
static SRGB_CONVERTER: OnceLock<LabToSrgb> = OnceLock::new();

/// Converts a D50 Lab color to 8-bit sRGB.
///
/// Never fails: out-of-gamut channels saturate at 0 or 255 and non-finite
/// input yields 0 for the affected channels.
///
/// # Example
///
/// ```rust
/// use it8grid_color::lab_to_rgb8;
///
/// let gray = lab_to_rgb8([50.0, 0.0, 0.0]);
/// assert_eq!(gray.r, gray.g);
/// ```
pub fn lab_to_rgb8(lab: Triplet) -> Rgb8 {
    SRGB_CONVERTER.get_or_init(LabToSrgb::default).to_rgb8(lab)
}

#[inline]
fn quantize(v: f64) -> u8 {
    let q = (v * 255.0).round();
    if q.is_nan() {
        0
    } else {
        q.clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Rgb8, expected: Rgb8, tol: i32) {
        let d = [
            actual.r as i32 - expected.r as i32,
            actual.g as i32 - expected.g as i32,
            actual.b as i32 - expected.b as i32,
        ];
        assert!(
            d.iter().all(|c| c.abs() <= tol),
            "got {}, expected {} (+-{})",
            actual,
            expected,
            tol
        );
    }

    #[test]
    fn test_reference_white_and_black() {
        assert_close(lab_to_rgb8([100.0, 0.0, 0.0]), Rgb8::WHITE, 1);
        assert_eq!(lab_to_rgb8([0.0, 0.0, 0.0]), Rgb8::BLACK);
    }

    #[test]
    fn test_mid_gray_is_neutral() {
        // L* 50 encodes to about 119 in sRGB
        assert_close(lab_to_rgb8([50.0, 0.0, 0.0]), Rgb8::new(119, 119, 119), 1);
    }

    #[test]
    fn test_out_of_gamut_saturates() {
        let red = lab_to_rgb8([50.0, 127.0, 0.0]);
        assert_eq!(red.r, 255);
        assert_eq!(red.g, 0);

        // Brighter than white
        assert_eq!(lab_to_rgb8([120.0, 0.0, 0.0]), Rgb8::WHITE);
        // Negative lightness
        assert_eq!(lab_to_rgb8([-20.0, 0.0, 0.0]), Rgb8::BLACK);
    }

    #[test]
    fn test_non_finite_input() {
        assert_eq!(lab_to_rgb8([f64::NAN, 0.0, 0.0]), Rgb8::BLACK);
        // inf - inf inside the matrix multiply; must still not panic
        let _ = lab_to_rgb8([f64::INFINITY, f64::NEG_INFINITY, 0.0]);
    }

    #[test]
    fn test_linear_white_is_one() {
        let conv = LabToSrgb::default();
        let lin = conv.to_linear([100.0, 0.0, 0.0]);
        assert!((lin.x - 1.0).abs() < 1e-9);
        assert!((lin.y - 1.0).abs() < 1e-9);
        assert!((lin.z - 1.0).abs() < 1e-9);
    }
}
