#![forbid(unsafe_code)]

//! Color primitives for hueforge.
//!
//! # Role in hueforge
//! `hueforge-color` is the shared vocabulary for color values. The theme
//! derivation engine in `hueforge-theme` parses caller-supplied hex seeds
//! into [`Hsla`] values, branches on perceptual lightness, and serializes
//! derived tokens — all through the types in this crate.
//!
//! # This crate provides
//! - [`Hsla`] and [`Rgba`] value types.
//! - Hex parsing (`#rgb`, `#rrggbb`, `#rrggbbaa`) via [`Hsla::from_hex`].
//! - HSL ↔ RGB conversion and `hsl(H, S%, L%, A)` serialization.
//! - Perceptual light/dark classification via [`Rgba::is_light`].
//!
//! # Precision contract
//! Conversions here reproduce a reference pipeline bit-for-bit: hue is
//! rounded to whole degrees, saturation and lightness are rounded to two
//! decimal places *as fractions* and then scaled by 100, and serialization
//! prints the resulting `f64`s at full shortest-roundtrip precision. That
//! scaling step is what yields values like `56.00000000000001%` in emitted
//! tokens. Downstream palettes depend on those exact strings, so none of
//! this may be "cleaned up" to rounder numbers.

/// Color value types and serialization.
pub mod color;
/// Hex parsing and HSL/RGB conversions.
pub mod convert;
/// Perceptual luminance and light/dark classification.
pub mod luminance;

pub use color::{Hsla, Rgba};
pub use convert::InvalidColorFormat;
pub use luminance::luminance;
