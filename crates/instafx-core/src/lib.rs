//! # instafx-core
//!
//! Core types for the instafx filter engine.
//!
//! - [`Image`] - Owned 8-bit image with an explicit [`PixelMode`]
//! - [`Channel`] - Single-band plane (alpha channels, gradient masks)
//! - [`Color`] - Flat color with optional alpha
//! - [`buffer`] - Band split/merge and alpha extraction
//! - [`Error`] - Error taxonomy shared by every instafx crate
//!
//! ## Crate Structure
//!
//! ```text
//! instafx-core (this crate)
//!    ^
//!    +-- instafx-ops (color matrices, blend modes, gradients)
//!           ^
//!           +-- instafx-presets (named filters)
//!                  ^
//!                  +-- instafx-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Process image rows with rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod channel;
pub mod color;
pub mod error;
pub mod image;
pub mod mode;

pub use channel::Channel;
pub use color::Color;
pub use error::*;
pub use image::Image;
pub use mode::PixelMode;

/// Whether pixel kernels were built to run on the rayon pool.
pub const PARALLEL: bool = cfg!(feature = "parallel");

/// Prelude module for convenient imports.
///
/// ```
/// use instafx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{merge, split, split_alpha};
    pub use crate::error::{Error, Result};
    pub use crate::{Channel, Color, Image, PixelMode};
}
