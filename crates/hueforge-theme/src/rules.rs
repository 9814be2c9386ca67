#![forbid(unsafe_code)]

//! The declarative derivation table: role → token → lightness rule.
//!
//! One static table drives one generic resolution routine. Every entry is
//! either a passthrough of the seed, a fixed lightness, or a
//! `{ light, dark }` pair selected by the palette's theme branch. Derived
//! tokens always carry the seed's exact hue and saturation; only lightness
//! comes from the table.
//!
//! Several entries are deliberate oddities inherited from the reference
//! palette and pinned by tests: `interactiveFocus` shares
//! `interactiveActionDisabled`'s pair, and `highlightText` reuses the
//! surface-muted 98/2 pair instead of a contrast text pair. Do not
//! normalize them.

use hueforge_color::Hsla;

use crate::seed::ColorRole;

/// How a token's lightness is produced from its seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lightness {
    /// The seed's full HSLA, untouched (alpha included).
    Base,
    /// A fixed lightness regardless of theme branch.
    Fixed(f64),
    /// A lightness pair resolved by the light/dark branch.
    Themed { light: f64, dark: f64 },
}

/// One derived token: internal camelCase name plus its lightness rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenRule {
    pub name: &'static str,
    pub lightness: Lightness,
}

impl TokenRule {
    /// Resolve this rule against a seed and theme branch.
    pub fn resolve(&self, seed: Hsla, is_light: bool) -> Hsla {
        match self.lightness {
            Lightness::Base => seed,
            Lightness::Fixed(lightness) => seed.with_lightness(lightness),
            Lightness::Themed { light, dark } => {
                seed.with_lightness(if is_light { light } else { dark })
            }
        }
    }
}

const fn base(name: &'static str) -> TokenRule {
    TokenRule {
        name,
        lightness: Lightness::Base,
    }
}

const fn fixed(name: &'static str, lightness: f64) -> TokenRule {
    TokenRule {
        name,
        lightness: Lightness::Fixed(lightness),
    }
}

const fn themed(name: &'static str, light: f64, dark: f64) -> TokenRule {
    TokenRule {
        name,
        lightness: Lightness::Themed { light, dark },
    }
}

/// A token family: the seed role that drives it plus its rules.
#[derive(Debug, Clone, Copy)]
pub struct RoleFamily {
    pub seed: ColorRole,
    pub rules: &'static [TokenRule],
}

/// Every family, in emission order.
///
/// The elevation family draws from the on-surface seed, not a seed of its
/// own, and contributes no base token: `interactive` is emitted exactly
/// once, from the interactive seed, so merge order cannot change its value.
pub const FAMILIES: [RoleFamily; 9] = [
    RoleFamily {
        seed: ColorRole::Surface,
        rules: SURFACE,
    },
    RoleFamily {
        seed: ColorRole::OnSurface,
        rules: ON_SURFACE,
    },
    RoleFamily {
        seed: ColorRole::Interactive,
        rules: INTERACTIVE,
    },
    RoleFamily {
        seed: ColorRole::OnSurface,
        rules: INTERACTIVE_NEUTRAL,
    },
    RoleFamily {
        seed: ColorRole::Branded,
        rules: BRANDED,
    },
    RoleFamily {
        seed: ColorRole::Critical,
        rules: CRITICAL,
    },
    RoleFamily {
        seed: ColorRole::Warning,
        rules: WARNING,
    },
    RoleFamily {
        seed: ColorRole::Highlight,
        rules: HIGHLIGHT,
    },
    RoleFamily {
        seed: ColorRole::Success,
        rules: SUCCESS,
    },
];

const SURFACE: &[TokenRule] = &[
    base("surface"),
    themed("surfaceBackground", 98.0, 7.0),
    themed("surfaceForeground", 100.0, 13.0),
    themed("surfaceForegroundSubdued", 90.0, 10.0),
    themed("surfaceOpposite", 0.0, 100.0),
];

// On-surface variants come in fours: OnDark and OnLight are fixed, while
// OnOpposite resolves to the OnDark value on a light theme (and vice
// versa) and OnSurface is the inverse swap.
const ON_SURFACE: &[TokenRule] = &[
    base("onSurface"),
    fixed("actionOnDark", 76.0),
    fixed("actionOnLight", 36.0),
    themed("actionOnOpposite", 76.0, 36.0),
    themed("actionOnSurface", 36.0, 76.0),
    fixed("actionDisabledOnDark", 66.0),
    fixed("actionDisabledOnLight", 46.0),
    themed("actionDisabledOnOpposite", 66.0, 46.0),
    themed("actionDisabledOnSurface", 46.0, 66.0),
    fixed("actionHoveredOnDark", 86.0),
    fixed("actionHoveredOnLight", 26.0),
    themed("actionHoveredOnOpposite", 86.0, 26.0),
    themed("actionHoveredOnSurface", 26.0, 86.0),
    fixed("actionPressedOnDark", 96.0),
    fixed("actionPressedOnLight", 16.0),
    themed("actionPressedOnOpposite", 96.0, 16.0),
    themed("actionPressedOnSurface", 16.0, 96.0),
    fixed("dividerOnDark", 80.0),
    fixed("dividerOnLight", 75.0),
    themed("dividerOnOpposite", 80.0, 75.0),
    themed("dividerOnSurface", 75.0, 80.0),
    fixed("dividerDisabledOnDark", 70.0),
    fixed("dividerDisabledOnLight", 95.0),
    themed("dividerDisabledOnOpposite", 70.0, 95.0),
    themed("dividerDisabledOnSurface", 95.0, 70.0),
    fixed("dividerMutedOnDark", 75.0),
    fixed("dividerMutedOnLight", 85.0),
    themed("dividerMutedOnOpposite", 75.0, 85.0),
    themed("dividerMutedOnSurface", 85.0, 75.0),
    fixed("iconOnDark", 98.0),
    fixed("iconOnLight", 18.0),
    themed("iconOnOpposite", 98.0, 18.0),
    themed("iconOnSurface", 18.0, 98.0),
    fixed("iconDisabledOnDark", 75.0),
    fixed("iconDisabledOnLight", 68.0),
    themed("iconDisabledOnOpposite", 75.0, 68.0),
    themed("iconDisabledOnSurface", 68.0, 75.0),
    fixed("iconMutedOnDark", 88.0),
    fixed("iconMutedOnLight", 43.0),
    themed("iconMutedOnOpposite", 88.0, 43.0),
    themed("iconMutedOnSurface", 43.0, 88.0),
    fixed("textOnDark", 100.0),
    fixed("textOnLight", 13.0),
    themed("textOnOpposite", 100.0, 13.0),
    themed("textOnSurface", 13.0, 100.0),
    fixed("textDisabledOnDark", 80.0),
    fixed("textDisabledOnLight", 63.0),
    themed("textDisabledOnOpposite", 80.0, 63.0),
    themed("textDisabledOnSurface", 63.0, 80.0),
    fixed("textMutedOnDark", 90.0),
    fixed("textMutedOnLight", 38.0),
    themed("textMutedOnOpposite", 90.0, 38.0),
    themed("textMutedOnSurface", 38.0, 90.0),
];

const INTERACTIVE: &[TokenRule] = &[
    base("interactive"),
    themed("interactiveAction", 44.0, 56.0),
    themed("interactiveActionDisabled", 58.0, 42.0),
    themed("interactiveActionHovered", 37.0, 63.0),
    themed("interactiveActionMuted", 51.0, 49.0),
    themed("interactiveActionPressed", 31.0, 69.0),
    // Intentionally identical to interactiveActionDisabled.
    themed("interactiveFocus", 58.0, 42.0),
    themed("interactiveSelected", 96.0, 4.0),
    themed("interactiveSelectedHovered", 89.0, 11.0),
    themed("interactiveSelectedPressed", 82.0, 18.0),
];

const INTERACTIVE_NEUTRAL: &[TokenRule] = &[
    themed("interactiveNeutralElevation0", 100.0, 7.0),
    themed("interactiveNeutralElevation1", 94.0, 13.0),
    themed("interactiveNeutralElevation2", 92.0, 22.0),
    themed("interactiveNeutralElevation3", 86.0, 29.0),
    themed("interactiveNeutralElevation4", 76.0, 39.0),
    themed("interactiveNeutralElevation5", 66.0, 49.0),
];

const BRANDED: &[TokenRule] = &[
    base("branded"),
    fixed("brandedAction", 25.0),
    fixed("brandedActionDisabled", 32.0),
    fixed("brandedActionHovered", 22.0),
    fixed("brandedActionPressed", 15.0),
    fixed("iconOnBranded", 98.0),
    fixed("iconMutedOnBranded", 88.0),
    fixed("textOnBranded", 100.0),
    fixed("textMutedOnBranded", 90.0),
    themed("brandedSelected", 95.0, 5.0),
    themed("brandedSelectedHovered", 81.0, 19.0),
    themed("brandedSelectedPressed", 74.0, 26.0),
];

const CRITICAL: &[TokenRule] = &[
    base("critical"),
    themed("criticalDivider", 52.0, 48.0),
    themed("criticalIcon", 52.0, 48.0),
    themed("criticalSurface", 88.0, 12.0),
    themed("criticalSurfaceMuted", 98.0, 2.0),
    themed("criticalText", 30.0, 70.0),
];

const WARNING: &[TokenRule] = &[
    base("warning"),
    themed("warningDivider", 66.0, 34.0),
    themed("warningIcon", 66.0, 34.0),
    themed("warningSurface", 88.0, 12.0),
    themed("warningSurfaceMuted", 98.0, 2.0),
    themed("warningText", 30.0, 70.0),
];

const HIGHLIGHT: &[TokenRule] = &[
    base("highlight"),
    themed("highlightDivider", 58.0, 42.0),
    themed("highlightIcon", 58.0, 42.0),
    themed("highlightSurface", 88.0, 12.0),
    themed("highlightSurfaceMuted", 98.0, 2.0),
    // Reuses the surface-muted pair, not a contrast text pair.
    themed("highlightText", 98.0, 2.0),
];

const SUCCESS: &[TokenRule] = &[
    base("success"),
    themed("successDivider", 25.0, 35.0),
    themed("successIcon", 25.0, 35.0),
    themed("successSurface", 88.0, 12.0),
    themed("successSurfaceMuted", 98.0, 2.0),
    themed("successText", 15.0, 85.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find(rules: &[TokenRule], name: &str) -> TokenRule {
        *rules
            .iter()
            .find(|rule| rule.name == name)
            .unwrap_or_else(|| panic!("missing rule {name}"))
    }

    #[test]
    fn family_sizes() {
        assert_eq!(SURFACE.len(), 5);
        assert_eq!(ON_SURFACE.len(), 53);
        assert_eq!(INTERACTIVE.len(), 10);
        assert_eq!(INTERACTIVE_NEUTRAL.len(), 6);
        assert_eq!(BRANDED.len(), 12);
        for family in [CRITICAL, WARNING, HIGHLIGHT, SUCCESS] {
            assert_eq!(family.len(), 6);
        }
    }

    #[test]
    fn every_family_has_exactly_one_base_except_elevations() {
        for family in FAMILIES {
            let bases = family
                .rules
                .iter()
                .filter(|rule| rule.lightness == Lightness::Base)
                .count();
            let is_elevation_family = family.rules[0].name.starts_with("interactiveNeutral");
            let expected = if is_elevation_family { 0 } else { 1 };
            assert_eq!(bases, expected);
        }
    }

    #[test]
    fn token_names_are_unique_across_families() {
        let mut seen = std::collections::HashSet::new();
        for family in FAMILIES {
            for rule in family.rules {
                assert!(seen.insert(rule.name), "duplicate token name {}", rule.name);
            }
        }
    }

    #[test]
    fn focus_duplicates_action_disabled_pair() {
        let focus = find(INTERACTIVE, "interactiveFocus");
        let disabled = find(INTERACTIVE, "interactiveActionDisabled");
        assert_eq!(focus.lightness, disabled.lightness);
    }

    #[test]
    fn highlight_text_reuses_surface_muted_pair() {
        let text = find(HIGHLIGHT, "highlightText");
        let muted = find(HIGHLIGHT, "highlightSurfaceMuted");
        assert_eq!(text.lightness, muted.lightness);
    }

    #[test]
    fn resolve_selects_branch_and_strips_alpha() {
        let seed = Hsla::new(173.0, 56.0, 58.0, 0.5);
        let rule = themed("highlightSurface", 88.0, 12.0);
        let light = rule.resolve(seed, true);
        assert_eq!((light.lightness, light.alpha), (88.0, 1.0));
        let dark = rule.resolve(seed, false);
        assert_eq!((dark.lightness, dark.alpha), (12.0, 1.0));
        assert_eq!((dark.hue, dark.saturation), (173.0, 56.0));
    }

    #[test]
    fn resolve_base_keeps_seed_alpha() {
        let seed = Hsla::new(0.0, 0.0, 100.0, 0.5);
        assert_eq!(base("surface").resolve(seed, true), seed);
    }

    #[test]
    fn on_surface_opposite_swaps_fixed_values() {
        // OnOpposite picks the OnDark fixed value on a light theme; OnSurface
        // picks the OnLight one.
        let seed = Hsla::opaque(210.0, 9.0, 13.0);
        let on_dark = find(ON_SURFACE, "actionOnDark").resolve(seed, true);
        let opposite = find(ON_SURFACE, "actionOnOpposite").resolve(seed, true);
        assert_eq!(on_dark, opposite);
        let on_light = find(ON_SURFACE, "actionOnLight").resolve(seed, false);
        let opposite_dark = find(ON_SURFACE, "actionOnOpposite").resolve(seed, false);
        assert_eq!(on_light, opposite_dark);
    }
}
