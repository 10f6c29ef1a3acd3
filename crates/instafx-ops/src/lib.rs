//! # instafx-ops
//!
//! The compositing engine behind instafx filters.
//!
//! # Modules
//!
//! - [`blend`] - CSS blend modes (separable and nonseparable)
//! - [`alpha`] - Alpha-aware wrapper around any RGB blend function
//! - [`color_matrix`] - CSS filter effects (brightness, contrast, saturate, ...)
//! - [`gradient`] - Flat fills, linear and radial gradients
//! - [`composite`] - Mask compositing, mixing and per-band arithmetic
//! - [`lut`] - 256-entry lookup tables
//!
//! # Example
//!
//! ```rust
//! use instafx_core::{Color, PixelMode, Image};
//! use instafx_ops::{blend, BlendMode, FilterEffect, apply_color_matrix, gradient};
//!
//! let photo = Image::filled(8, 8, PixelMode::Rgb, &[120, 90, 60]).unwrap();
//! let tint = gradient::fill((8, 8), Color::rgba(243, 106, 188, 0.3).unwrap());
//!
//! let toned = blend(BlendMode::Screen, &photo, &tint).unwrap();
//! let out = apply_color_matrix(FilterEffect::Contrast, &toned, 1.1).unwrap();
//! assert_eq!(out.mode(), PixelMode::Rgb);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Process rows with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alpha;
pub mod blend;
pub mod color_matrix;
pub mod composite;
pub mod gradient;
pub mod lut;
mod parallel;

pub use alpha::alpha_blend;
pub use blend::{BlendMode, blend, blend_rgb};
pub use color_matrix::{ColorMatrix, FilterEffect, apply_color_matrix};
pub use gradient::{RadialMask, fill, linear_gradient, linear_gradient_mask, radial_gradient, radial_gradient_mask};
