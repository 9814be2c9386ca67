#![forbid(unsafe_code)]

//! Color value types.
//!
//! [`Hsla`] is the working representation for theme derivation: every token
//! is built from a seed's hue and saturation plus a table lightness, then
//! serialized through the [`std::fmt::Display`] impl here. [`Rgba`] exists
//! for luminance classification and for callers that need channel values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An RGB color with an alpha channel.
///
/// Channels are `u8` on the usual 0–255 scale; alpha is a fraction in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }
}

/// An HSL color with an alpha channel.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `lightness` are
/// percentages in `[0, 100]`, `alpha` is a fraction in `[0, 1]`. Values
/// produced by [`Hsla::from_hex`](crate::convert) carry the documented
/// compatibility rounding; see the crate docs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// Create an HSLA color from raw components.
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Create a fully opaque HSL color.
    pub const fn opaque(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::new(hue, saturation, lightness, 1.0)
    }

    /// A copy of this color with the given lightness, hue and saturation
    /// preserved, alpha reset to 1.
    ///
    /// This is the core derivation step: every token in a role family is
    /// the seed's hue/saturation with a table-selected lightness.
    pub const fn with_lightness(self, lightness: f64) -> Self {
        Self::opaque(self.hue, self.saturation, lightness)
    }
}

impl fmt::Display for Hsla {
    /// Serializes as `hsl(H, S%, L%, A)`.
    ///
    /// Components print at full shortest-roundtrip `f64` precision; no
    /// rounding is applied here. Integral values print without a decimal
    /// point (`98`, not `98.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
