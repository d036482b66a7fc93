//! # it8grid-color
//!
//! Converts PCS colors (CIE L\*a\*b\*, D50) to 8-bit display sRGB so each
//! patch can be shown over a swatch of its expected appearance.
//!
//! # Pipeline
//!
//! ```text
//! Lab (D50) -> XYZ (D50) -> Bradford -> XYZ (D65) -> linear sRGB -> sRGB OETF -> 8-bit
//! ```
//!
//! Out-of-gamut colors never fail: each channel is rounded and clamped to
//! `[0, 255]` independently.
//!
//! # Usage
//!
//! ```rust
//! use it8grid_color::lab_to_rgb8;
//! use it8grid_core::Rgb8;
//!
//! assert_eq!(lab_to_rgb8([0.0, 0.0, 0.0]), Rgb8::BLACK);
//! ```
//!
//! # Modules
//!
//! - [`lab`] - Lab to XYZ
//! - [`primaries`] - sRGB primaries and RGB/XYZ matrix derivation
//! - [`srgb`] - sRGB encoding transfer function
//! - [`convert`] - The combined converter

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod lab;
pub mod primaries;
pub mod srgb;

pub use convert::{LabToSrgb, lab_to_rgb8};
