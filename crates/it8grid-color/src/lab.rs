//! CIE L\*a\*b\* to XYZ.
//!
//! Uses the exact CIE constants (epsilon = 216/24389, kappa = 24389/27)
//! rather than the rounded 0.008856 / 903.3 pair, so the two branches meet
//! without a seam.

use it8grid_math::Vec3;

/// Threshold between the cube-root and linear segments.
pub const EPSILON: f64 = 216.0 / 24389.0;

/// Slope of the linear segment.
pub const KAPPA: f64 = 24389.0 / 27.0;

/// Converts Lab to XYZ relative to `white`.
///
/// # Example
///
/// ```rust
/// use it8grid_color::lab::lab_to_xyz;
/// use it8grid_math::{D50, Vec3};
///
/// let xyz = lab_to_xyz(Vec3::new(100.0, 0.0, 0.0), D50);
/// assert!((xyz.x - D50.x).abs() < 1e-12);
/// ```
pub fn lab_to_xyz(lab: Vec3, white: Vec3) -> Vec3 {
    let (l, a, b) = (lab.x, lab.y, lab.z);

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xr = f_inv(fx);
    let yr = if l > KAPPA * EPSILON { fy * fy * fy } else { l / KAPPA };
    let zr = f_inv(fz);

    Vec3::new(xr * white.x, yr * white.y, zr * white.z)
}

#[inline]
fn f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON { t3 } else { (116.0 * t - 16.0) / KAPPA }
}
