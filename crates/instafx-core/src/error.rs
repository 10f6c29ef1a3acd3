//! Error types for instafx operations.
//!
//! Every failure in the engine is a caller error detected before any pixel
//! is computed: an image in a mode the operation does not accept, a
//! parameter outside its documented range, or two operands of different
//! sizes. Nothing here is transient, so nothing is retried.
//!
//! # Usage
//!
//! ```rust
//! use instafx_core::{Error, Result};
//!
//! fn check_amount(amount: f64) -> Result<()> {
//!     if amount < 0.0 {
//!         return Err(Error::invalid_parameter("amount", amount, "must be >= 0"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_amount(-1.0).is_err());
//! ```

use crate::PixelMode;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by image construction, compositing and color operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The image's pixel mode is not one the operation supports.
    ///
    /// Alpha splitting and blending accept only RGB or RGBA; converting an
    /// alpha mask to RGB accepts only L.
    #[error("unsupported mode {mode} for {op}")]
    UnsupportedMode {
        /// Mode of the offending image
        mode: PixelMode,
        /// Operation that rejected it
        op: &'static str,
    },

    /// A numeric parameter violates its precondition.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Which precondition failed
        reason: String,
    },

    /// Two operands of a binary operation differ in width or height.
    #[error("shape mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    ShapeMismatch {
        /// First operand width
        a_width: u32,
        /// First operand height
        a_height: u32,
        /// Second operand width
        b_width: u32,
        /// Second operand height
        b_height: u32,
    },

    /// Merging received a number of channels that maps to no pixel mode.
    #[error("cannot merge {got} channels (expected 1 to 4)")]
    ChannelCount {
        /// Number of channels supplied
        got: usize,
    },

    /// Raw pixel data does not match the declared dimensions.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// What did not match
        reason: String,
    },

    /// A blend mode, filter effect or preset name was not recognized.
    #[error("unknown {kind} '{name}'")]
    UnknownName {
        /// What was being looked up (`"blend mode"`, `"preset"`, ...)
        kind: &'static str,
        /// Name as given
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedMode`] error.
    #[inline]
    pub fn unsupported_mode(mode: PixelMode, op: &'static str) -> Self {
        Self::UnsupportedMode { mode, op }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ShapeMismatch`] error from two `(width, height)` pairs.
    #[inline]
    pub fn shape_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::ShapeMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnknownName`] error.
    #[inline]
    pub fn unknown_name(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            name: name.into(),
        }
    }

    /// Returns `true` for [`Error::UnsupportedMode`].
    #[inline]
    pub fn is_unsupported_mode(&self) -> bool {
        matches!(self, Self::UnsupportedMode { .. })
    }

    /// Returns `true` for [`Error::InvalidParameter`].
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns `true` for [`Error::ShapeMismatch`].
    #[inline]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }
}

/// Fails with [`Error::ShapeMismatch`] unless both sizes are equal.
#[inline]
pub fn ensure_same_size(a: (u32, u32), b: (u32, u32)) -> Result<()> {
    if a == b {
        Ok(())
    } else {
        Err(Error::shape_mismatch(a, b))
    }
}

/// Fails with [`Error::InvalidParameter`] if `value` is negative or not finite.
#[inline]
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_parameter(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(Error::invalid_parameter(name, value, "must be >= 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch() {
        let err = Error::shape_mismatch((2, 2), (3, 4));
        let msg = err.to_string();
        assert!(msg.contains("2x2"));
        assert!(msg.contains("3x4"));
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn test_unsupported_mode_message() {
        let err = Error::unsupported_mode(PixelMode::L, "split_alpha");
        assert_eq!(err.to_string(), "unsupported mode L for split_alpha");
        assert!(err.is_unsupported_mode());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("amount", 0.0).is_ok());
        assert!(ensure_non_negative("amount", 2.5).is_ok());
        assert!(ensure_non_negative("amount", -0.1).unwrap_err().is_invalid_parameter());
        assert!(ensure_non_negative("amount", f64::NAN).is_err());
        assert!(ensure_non_negative("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_unknown_name_message() {
        let err = Error::unknown_name("preset", "polaroid");
        assert_eq!(err.to_string(), "unknown preset 'polaroid'");
    }

    #[test]
    fn test_ensure_same_size() {
        assert!(ensure_same_size((4, 4), (4, 4)).is_ok());
        assert!(ensure_same_size((4, 4), (4, 5)).is_err());
    }
}
