#![forbid(unsafe_code)]

//! Seed schema: the eight semantic color roles and their caller overrides.
//!
//! A [`SeedColors`] value is the engine's entire input. Every field is
//! optional; an absent role resolves to its documented default, so an empty
//! seed set is valid and produces the full reference palette.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The semantic color roles a caller can seed.
///
/// Each role's seed generates a family of derived tokens; the surface
/// role additionally drives the light/dark classification for the whole
/// palette. The interactive-neutral elevation family has no role of its
/// own — it is seeded from [`ColorRole::OnSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Surface,
    OnSurface,
    Interactive,
    Branded,
    Critical,
    Warning,
    Highlight,
    Success,
}

impl ColorRole {
    pub const ALL: [ColorRole; 8] = [
        ColorRole::Surface,
        ColorRole::OnSurface,
        ColorRole::Interactive,
        ColorRole::Branded,
        ColorRole::Critical,
        ColorRole::Warning,
        ColorRole::Highlight,
        ColorRole::Success,
    ];

    pub const fn index(self) -> usize {
        match self {
            ColorRole::Surface => 0,
            ColorRole::OnSurface => 1,
            ColorRole::Interactive => 2,
            ColorRole::Branded => 3,
            ColorRole::Critical => 4,
            ColorRole::Warning => 5,
            ColorRole::Highlight => 6,
            ColorRole::Success => 7,
        }
    }

    /// The documented default seed for this role.
    pub const fn default_hex(self) -> &'static str {
        match self {
            ColorRole::Surface => "#FAFAFA",
            ColorRole::OnSurface => "#1F2225",
            ColorRole::Interactive => "#0870D9",
            ColorRole::Branded => "#008060",
            ColorRole::Critical => "#E32727",
            ColorRole::Warning => "#FFC453",
            ColorRole::Highlight => "#59D0C2",
            ColorRole::Success => "#008060",
        }
    }
}

/// Caller-supplied seed colors, one optional hex string per role.
///
/// With the `serde` feature this deserializes from camelCase config keys
/// (`surface`, `onSurface`, ...). Unknown keys — including legacy nested
/// per-component override maps — are ignored and cannot alter output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct SeedColors {
    pub surface: Option<String>,
    pub on_surface: Option<String>,
    pub interactive: Option<String>,
    pub branded: Option<String>,
    pub critical: Option<String>,
    pub warning: Option<String>,
    pub highlight: Option<String>,
    pub success: Option<String>,
}

impl SeedColors {
    /// The hex string for a role: the caller's seed if present, otherwise
    /// the documented default. Never fails.
    pub fn resolve(&self, role: ColorRole) -> &str {
        let seed = match role {
            ColorRole::Surface => &self.surface,
            ColorRole::OnSurface => &self.on_surface,
            ColorRole::Interactive => &self.interactive,
            ColorRole::Branded => &self.branded,
            ColorRole::Critical => &self.critical,
            ColorRole::Warning => &self.warning,
            ColorRole::Highlight => &self.highlight,
            ColorRole::Success => &self.success,
        };
        seed.as_deref().unwrap_or(role.default_hex())
    }
}
