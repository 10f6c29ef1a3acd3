//! Presets that are pure filter-effect chains.

use instafx_core::{Image, Result};
use instafx_ops::FilterEffect::*;

use crate::effects;

pub(crate) fn inkwell(cb: &Image) -> Result<Image> {
    effects(
        cb.clone(),
        &[(Sepia, 0.3), (Contrast, 1.1), (Brightness, 1.1), (Grayscale, 1.0)],
    )
}

pub(crate) fn skyline(cb: &Image) -> Result<Image> {
    effects(
        cb.clone(),
        &[(Sepia, 0.15), (Contrast, 1.25), (Brightness, 1.25), (Saturate, 1.2)],
    )
}

pub(crate) fn dogpatch(cb: &Image) -> Result<Image> {
    effects(cb.clone(), &[(Sepia, 0.35), (Saturate, 1.1), (Contrast, 1.5)])
}
