//! 8-bit display colors.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB color.
///
/// # Example
///
/// ```rust
/// use it8grid_core::Rgb8;
///
/// let c: Rgb8 = "0080FF".parse().unwrap();
/// assert_eq!(c, Rgb8::new(0x00, 0x80, 0xFF));
/// assert_eq!(c.to_hex(), "0080FF");
/// assert_eq!(c.to_u32(), 0x0080FF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(v: u32) -> Self {
        Self::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Packs the color as `0xRRGGBB`.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Formats as upper-case `RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Parses `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        u32::from_str_radix(hex, 16)
            .map(Self::from_u32)
            .map_err(|_| Error::InvalidColor(s.to_string()))
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb8::from_hex("#FF8000").unwrap(), Rgb8::new(255, 128, 0));
        assert_eq!(Rgb8::from_hex("c0c0c0").unwrap(), Rgb8::new(192, 192, 192));
        assert!(Rgb8::from_hex("FFF").is_err());
        assert!(Rgb8::from_hex("GG0000").is_err());
        assert!(Rgb8::from_hex("+12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb8::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Rgb8::from_u32(0x00C000), Rgb8::new(0, 192, 0));
    }
}
