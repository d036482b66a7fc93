//! sRGB encoding transfer function.
//!
//! Piecewise: a linear segment near black, a 1/2.4 power curve above it.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// sRGB OETF: linear light to encoded `[0, 1]`.
///
/// Negative input stays on the linear segment, so out-of-gamut values
/// remain negative rather than becoming NaN.
///
/// ```text
/// if L <= 0.0031308: V = L * 12.92
/// else:              V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}
