//! # it8grid-math
//!
//! The linear algebra behind swatch colors:
//!
//! - [`Vec3`] - XYZ / RGB triplets
//! - [`Mat3`] - 3x3 matrices, row-major, applied as `m * v`
//! - [`adapt_matrix`] - Bradford adaptation from the PCS white ([`D50`])
//!
//! # Usage
//!
//! ```rust
//! use it8grid_math::{adapt_matrix, D50, Vec3};
//!
//! // PCS white adapted to a display white
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let white = adapt_matrix(D50, d65) * D50;
//! assert!((white.x - d65.x).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
