//! Chromatic adaptation from the ICC PCS white.
//!
//! profcheck Lab values are relative to D50, sRGB displays to D65. XYZ is
//! moved between the two whites with the Bradford transform, the one ICC v4
//! specifies.

use crate::{Mat3, Vec3};

/// D50 white (Y = 1), the ICC PCS illuminant.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// Bradford cone response matrix (Lam 1985).
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Bradford adaptation taking XYZ relative to `src_white` to XYZ relative
/// to `dst_white`: `B^-1 * diag(B * dst / B * src) * B`.
///
/// # Example
///
/// ```rust
/// use it8grid_math::{adapt_matrix, D50, Vec3};
///
/// let d65 = Vec3::new(0.95047, 1.0, 1.08883);
/// let w = adapt_matrix(D50, d65) * D50;
/// assert!((w.z - d65.z).abs() < 1e-9);
/// ```
pub fn adapt_matrix(src_white: Vec3, dst_white: Vec3) -> Mat3 {
    // BRADFORD is a fixed, well-conditioned matrix
    let Some(cone_to_xyz) = BRADFORD.inverse() else {
        return Mat3::IDENTITY;
    };
    let src = BRADFORD * src_white;
    let dst = BRADFORD * dst_white;
    let gain = Mat3::diagonal(dst.x / src.x, dst.y / src.y, dst.z / src.z);
    cone_to_xyz * gain * BRADFORD
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

    #[test]
    fn test_white_maps_to_white() {
        let w = adapt_matrix(D50, D65) * D50;
        assert_abs_diff_eq!(w.x, D65.x, epsilon = 1e-9);
        assert_abs_diff_eq!(w.y, D65.y, epsilon = 1e-9);
        assert_abs_diff_eq!(w.z, D65.z, epsilon = 1e-9);
    }

    #[test]
    fn test_matches_published_d50_to_d65() {
        // Lindbloom's Bradford D50 -> D65 diagonal
        let m = adapt_matrix(D50, D65);
        assert_abs_diff_eq!(m.m[0][0], 0.9555766, epsilon = 1e-4);
        assert_abs_diff_eq!(m.m[1][1], 1.0099416, epsilon = 1e-4);
        assert_abs_diff_eq!(m.m[2][2], 1.3299098, epsilon = 1e-4);
    }

    #[test]
    fn test_same_white_is_identity() {
        let m = adapt_matrix(D50, D50);
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.m[r][c], expected, epsilon = 1e-12);
            }
        }
    }
}
