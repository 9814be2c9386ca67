#![forbid(unsafe_code)]

//! Hex parsing and HSL/RGB conversions.
//!
//! The RGB→HSL direction carries a compatibility rounding scheme (see the
//! crate docs): hue rounds to whole degrees, saturation and lightness round
//! to two decimal places as fractions before scaling to percentages. The
//! HSL→RGB direction is the standard piecewise conversion and only feeds
//! luminance classification.

use std::fmt;

use crate::color::{Hsla, Rgba};

/// A seed string could not be parsed as a hex color.
///
/// Raised for anything that is not `#rgb`, `#rrggbb`, or `#rrggbbaa`.
/// The offending input is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorFormat {
    pub input: String,
}

impl InvalidColorFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color format: {:?}", self.input)
    }
}

impl std::error::Error for InvalidColorFormat {}

impl Hsla {
    /// Parse a hex color string into an HSLA value.
    ///
    /// Accepts `#rgb` (shorthand, each digit doubled), `#rrggbb`, and
    /// `#rrggbbaa` (alpha byte scaled to `[0, 1]`; absent alpha defaults
    /// to 1). Case-insensitive. Any other shape fails with
    /// [`InvalidColorFormat`].
    pub fn from_hex(input: &str) -> Result<Self, InvalidColorFormat> {
        let rgba = parse_hex(input)?;
        Ok(rgba.to_hsla())
    }

    /// Convert to RGB using the standard piecewise HSL→RGB mapping.
    ///
    /// Channels round to the nearest integer on the 0–255 scale. Alpha is
    /// carried through unchanged.
    pub fn to_rgb(&self) -> Rgba {
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = self.hue / 60.0;
        let secondary = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());

        let (red, green, blue) = if sector < 1.0 {
            (chroma, secondary, 0.0)
        } else if sector < 2.0 {
            (secondary, chroma, 0.0)
        } else if sector < 3.0 {
            (0.0, chroma, secondary)
        } else if sector < 4.0 {
            (0.0, secondary, chroma)
        } else if sector < 5.0 {
            (secondary, 0.0, chroma)
        } else {
            (chroma, 0.0, secondary)
        };

        let offset = lightness - chroma / 2.0;
        Rgba {
            red: channel(red + offset),
            green: channel(green + offset),
            blue: channel(blue + offset),
            alpha: self.alpha,
        }
    }
}

impl Rgba {
    /// Convert to HSLA with the compatibility rounding scheme.
    ///
    /// Saturation uses the lightness-relative formula
    /// `delta / (1 - |2L - 1|)`; achromatic colors get hue 0 and
    /// saturation 0. Out-of-range intermediates are normalized (hue
    /// wrapped into `[0, 360)`, fractions clamped), never rejected.
    pub fn to_hsla(&self) -> Hsla {
        let red = f64::from(self.red) / 255.0;
        let green = f64::from(self.green) / 255.0;
        let blue = f64::from(self.blue) / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
            let sector = if max == red {
                ((green - blue) / delta).rem_euclid(6.0)
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            let mut hue = (sector * 60.0).round();
            if hue >= 360.0 {
                hue -= 360.0;
            }
            (hue, saturation)
        };

        Hsla {
            hue: hue.clamp(0.0, 360.0),
            // Round to hundredths as a fraction, then scale. The scaling
            // multiply is deliberately unrounded; it reproduces reference
            // artifacts like 0.56 * 100 = 56.00000000000001.
            saturation: round_hundredths(saturation).clamp(0.0, 1.0) * 100.0,
            lightness: round_hundredths(lightness).clamp(0.0, 1.0) * 100.0,
            alpha: self.alpha,
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

fn parse_hex(input: &str) -> Result<Rgba, InvalidColorFormat> {
    let digits = input
        .strip_prefix('#')
        .ok_or_else(|| InvalidColorFormat::new(input))?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InvalidColorFormat::new(input));
    }

    let byte = |range: std::ops::Range<usize>| -> u8 {
        // Range is always two validated hex digits.
        u8::from_str_radix(&digits[range], 16).unwrap_or(0)
    };

    match digits.len() {
        3 => {
            let nibble = |idx: usize| -> u8 {
                let value = byte(idx..idx + 1);
                value * 16 + value
            };
            Ok(Rgba::rgb(nibble(0), nibble(1), nibble(2)))
        }
        6 => Ok(Rgba::rgb(byte(0..2), byte(2..4), byte(4..6))),
        8 => Ok(Rgba {
            red: byte(0..2),
            green: byte(2..4),
            blue: byte(4..6),
            alpha: f64::from(byte(6..8)) / 255.0,
        }),
        _ => Err(InvalidColorFormat::new(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let hsla = Hsla::from_hex("#0870D9").unwrap();
        assert_eq!(hsla.hue, 210.0);
        assert_eq!(hsla.saturation, 93.0);
        assert_eq!(hsla.lightness, 44.0);
        assert_eq!(hsla.alpha, 1.0);
    }

    #[test]
    fn parses_shorthand_hex() {
        // #08f expands to #0088ff.
        let hsla = Hsla::from_hex("#08f").unwrap();
        assert_eq!(hsla.hue, 208.0);
        assert_eq!(hsla.saturation, 100.0);
        assert_eq!(hsla.lightness, 50.0);
    }

    #[test]
    fn parses_eight_digit_hex_alpha() {
        let hsla = Hsla::from_hex("#ffffff80").unwrap();
        assert_eq!(hsla.lightness, 100.0);
        assert_eq!(hsla.alpha, 128.0 / 255.0);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Hsla::from_hex("#e32727"), Hsla::from_hex("#E32727"));
    }

    #[test]
    fn achromatic_colors_get_zero_hue_and_saturation() {
        let hsla = Hsla::from_hex("#FAFAFA").unwrap();
        assert_eq!(hsla.hue, 0.0);
        assert_eq!(hsla.saturation, 0.0);
        assert_eq!(hsla.lightness, 98.0);
    }

    #[test]
    fn saturation_scaling_keeps_float_artifact() {
        // 0.56 is not exactly representable; 0.56 * 100.0 lands one ulp
        // above 56. The reference palette depends on this exact value.
        let hsla = Hsla::from_hex("#59D0C2").unwrap();
        assert_eq!(hsla.hue, 173.0);
        assert_eq!(hsla.saturation, 56.000_000_000_000_01);
        assert_eq!(hsla.lightness, 57.999_999_999_999_99);
    }

    #[test]
    fn rejects_malformed_inputs() {
        for input in ["", "#", "#12345", "#1234567", "0870D9", "#GGGGGG", "blue"] {
            let err = Hsla::from_hex(input).unwrap_err();
            assert_eq!(err.input, input, "expected rejection for {input:?}");
        }
    }

    #[test]
    fn error_display_names_the_input() {
        let err = Hsla::from_hex("nope").unwrap_err();
        assert_eq!(err.to_string(), "invalid color format: \"nope\"");
    }

    #[test]
    fn to_rgb_round_trips_primaries() {
        let red = Hsla::opaque(0.0, 100.0, 50.0).to_rgb();
        assert_eq!((red.red, red.green, red.blue), (255, 0, 0));
        let green = Hsla::opaque(120.0, 100.0, 50.0).to_rgb();
        assert_eq!((green.red, green.green, green.blue), (0, 255, 0));
        let blue = Hsla::opaque(240.0, 100.0, 50.0).to_rgb();
        assert_eq!((blue.red, blue.green, blue.blue), (0, 0, 255));
    }

    #[test]
    fn to_rgb_handles_achromatic() {
        let grey = Hsla::opaque(0.0, 0.0, 98.0).to_rgb();
        assert_eq!((grey.red, grey.green, grey.blue), (250, 250, 250));
    }

    #[test]
    fn to_rgb_carries_alpha() {
        let rgba = Hsla::new(210.0, 93.0, 44.0, 0.25).to_rgb();
        assert_eq!(rgba.alpha, 0.25);
    }
}
