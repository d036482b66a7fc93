//! RGB primaries and RGB/XYZ matrix derivation.
//!
//! A display RGB space is defined by the xy chromaticities of its three
//! primaries and its white point. The RGB-to-XYZ matrix is derived from
//! those rather than hard-coded, so the matrix and the white used for
//! chromatic adaptation always agree.

use it8grid_math::{Mat3, Vec3};

/// RGB color space primaries, as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y)
    pub r: (f64, f64),
    /// Green primary (x, y)
    pub g: (f64, f64),
    /// Blue primary (x, y)
    pub b: (f64, f64),
    /// White point (x, y)
    pub w: (f64, f64),
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

/// D65 white point chromaticity.
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// sRGB / Rec.709 primaries, D65 white.
pub const SRGB: Primaries = Primaries {
    r: (0.64, 0.33),
    g: (0.30, 0.60),
    b: (0.15, 0.06),
    w: D65_XY,
};

/// Converts xy chromaticity to XYZ with Y=1.
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-12 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the linear RGB to XYZ matrix for a set of primaries.
///
/// 1. Convert primary chromaticities to XYZ (Y=1)
/// 2. Solve for per-primary scale so RGB (1,1,1) lands on the white point
/// 3. Scale the primary columns
///
/// # Example
///
/// ```rust
/// use it8grid_color::primaries::{SRGB, rgb_to_xyz_matrix};
/// use it8grid_math::Vec3;
///
/// let white = rgb_to_xyz_matrix(&SRGB) * Vec3::new(1.0, 1.0, 1.0);
/// assert!((white.y - 1.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = primaries.white_xyz();

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse().unwrap_or(Mat3::IDENTITY) * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to linear RGB matrix, the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_srgb_matrix_matches_iec() {
        // IEC 61966-2-1 RGB -> XYZ, first row
        let m = rgb_to_xyz_matrix(&SRGB);
        assert_abs_diff_eq!(m.m[0][0], 0.4124, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[0][1], 0.3576, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[0][2], 0.1805, epsilon = 1e-3);
        // Luminance row
        assert_abs_diff_eq!(m.m[1][0], 0.2126, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[1][1], 0.7152, epsilon = 1e-3);
        assert_abs_diff_eq!(m.m[1][2], 0.0722, epsilon = 1e-3);
    }

    #[test]
    fn test_white_maps_to_rgb_one() {
        let rgb = xyz_to_rgb_matrix(&SRGB) * SRGB.white_xyz();
        assert_abs_diff_eq!(rgb.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rgb.y, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rgb.z, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_chromaticity() {
        assert_eq!(xy_to_xyz(0.3, 0.0), Vec3::ZERO);
    }
}
