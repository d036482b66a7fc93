//! 3x3 matrices.
//!
//! Row-major storage, applied to column vectors: `out = m * v`.

use crate::Vec3;
use std::ops::Mul;

/// A row-major 3x3 matrix.
///
/// # Example
///
/// ```rust
/// use it8grid_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// assert_eq!(Mat3::diagonal(2.0, 1.0, 0.0) * v, Vec3::new(2.0, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// Rows.
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Identity.
    pub const IDENTITY: Self = Self::diagonal(1.0, 1.0, 1.0);

    /// From rows.
    #[inline]
    pub const fn from_rows(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Matrix whose columns are `c0`, `c1`, `c2`.
    #[inline]
    pub const fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_rows([[c0.x, c1.x, c2.x], [c0.y, c1.y, c2.y], [c0.z, c1.z, c2.z]])
    }

    /// Diagonal matrix.
    #[inline]
    pub const fn diagonal(a: f64, b: f64, c: f64) -> Self {
        Self::from_rows([[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]])
    }

    /// Inverse via the adjugate; `None` when (near) singular.
    pub fn inverse(&self) -> Option<Self> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;

        // cofactors of the first row
        let c00 = e * i - f * h;
        let c01 = f * g - d * i;
        let c02 = d * h - e * g;
        let det = a * c00 + b * c01 + c * c02;
        if det.abs() < 1e-12 {
            return None;
        }

        let adj = [
            [c00, c * h - b * i, b * f - c * e],
            [c01, a * i - c * g, c * d - a * f],
            [c02, b * g - a * h, a * e - b * d],
        ];
        Some(Self::from_rows(adj.map(|row| row.map(|v| v / det))))
    }

    #[inline]
    fn row(&self, r: usize) -> Vec3 {
        Vec3::from_array(self.m[r])
    }

    #[inline]
    fn col(&self, c: usize) -> Vec3 {
        Vec3::new(self.m[0][c], self.m[1][c], self.m[2][c])
    }
}

#[inline]
fn dot(a: Vec3, b: Vec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(dot(self.row(0), v), dot(self.row(1), v), dot(self.row(2), v))
    }
}

impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let m = std::array::from_fn(|r| std::array::from_fn(|c| dot(self.row(r), rhs.col(c))));
        Self::from_rows(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_columns() {
        let m = Mat3::from_col_vecs(
            Vec3::new(1.0, 4.0, 7.0),
            Vec3::new(2.0, 5.0, 8.0),
            Vec3::new(3.0, 6.0, 9.0),
        );
        assert_eq!(m.m, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    }

    #[test]
    fn test_inverse() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let product = m * m.inverse().unwrap();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product.m[r][c], expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_singular() {
        // second row is twice the first
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_products() {
        let a = Mat3::diagonal(2.0, 2.0, 2.0);
        let b = Mat3::diagonal(3.0, 1.0, 0.5);
        assert_eq!(a * b, Mat3::diagonal(6.0, 2.0, 1.0));
        assert_eq!(b * Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 1.0, 0.5));
    }
}
