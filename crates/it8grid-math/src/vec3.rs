//! XYZ / RGB triplets.

use std::ops::Mul;

/// A color triplet between the matrix stages of Lab to sRGB conversion.
///
/// Holds XYZ (x=X, y=Y, z=Z) or linear RGB (x=R, y=G, z=B).
///
/// # Example
///
/// ```rust
/// use it8grid_math::Vec3;
///
/// let xyz = Vec3::from_array([0.5, 1.0, 0.25]);
/// assert_eq!(xyz * 2.0, Vec3::new(1.0, 2.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X or R
    pub x: f64,
    /// Y or G
    pub y: f64,
    /// Z or B
    pub z: f64,
}

impl Vec3 {
    /// All zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a triplet.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// From `[x, y, z]`.
    #[inline]
    pub const fn from_array([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// As `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, k: f64) -> Self {
        self.map(|v| v * k)
    }
}
