#![forbid(unsafe_code)]

//! Perceptual luminance and light/dark classification.
//!
//! Uses the Rec. 601 luma weights (0.299 / 0.587 / 0.114) on the 0–255
//! channel scale and thresholds at the midpoint. The theme engine runs this
//! once per derivation, on the surface seed, to pick the light or dark
//! branch for every themed token.

use crate::color::Rgba;

/// Weighted perceptual luminance on the 0–255 scale.
pub fn luminance(color: Rgba) -> f64 {
    0.299 * f64::from(color.red) + 0.587 * f64::from(color.green) + 0.114 * f64::from(color.blue)
}

impl Rgba {
    /// Whether this color reads as light.
    ///
    /// Light iff luminance exceeds the 127.5 midpoint; an exact-midpoint
    /// color counts as dark.
    pub fn is_light(&self) -> bool {
        luminance(*self) > 127.5
    }
}
