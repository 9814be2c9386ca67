#![forbid(unsafe_code)]

//! The derivation engine: seeds in, token set out.
//!
//! Pure and stateless. Every call resolves seeds against defaults, parses
//! them all up front (any failure aborts the call — no partial sets),
//! classifies the palette as light or dark from the surface seed, runs the
//! rule table, and appends the structural block. Callers discard the
//! previous set wholesale when seeds change; nothing is cached here.

use hueforge_color::{Hsla, InvalidColorFormat};
use tracing::debug;

use crate::rules::FAMILIES;
use crate::seed::{ColorRole, SeedColors};
use crate::tokens::{TokenSet, append_structural};

/// Derive the full token set from the given seeds.
///
/// `theming_enabled` is the process-wide theming toggle made explicit:
/// when false, no palette is produced and `Ok(None)` is returned
/// regardless of seeds. Roles absent from `seeds` fall back to their
/// documented defaults; a seed that fails to parse aborts the whole call
/// with [`InvalidColorFormat`].
///
/// The light/dark branch is classified once, from the surface seed, by
/// converting its rounded HSLA back to RGB and thresholding perceptual
/// luminance. Identical seeds always yield an identical set.
pub fn derive_tokens(
    seeds: &SeedColors,
    theming_enabled: bool,
) -> Result<Option<TokenSet>, InvalidColorFormat> {
    if !theming_enabled {
        return Ok(None);
    }

    // Parse every role before emitting anything.
    let mut resolved = [Hsla::opaque(0.0, 0.0, 0.0); ColorRole::ALL.len()];
    for role in ColorRole::ALL {
        resolved[role.index()] = Hsla::from_hex(seeds.resolve(role))?;
    }

    let surface = resolved[ColorRole::Surface.index()];
    let is_light = surface.to_rgb().is_light();

    let mut set = TokenSet::new();
    for family in FAMILIES {
        let seed = resolved[family.seed.index()];
        for rule in family.rules {
            set.insert_internal(rule.name, rule.resolve(seed, is_light).to_string());
        }
    }
    append_structural(&mut set);

    debug!(is_light, tokens = set.len(), "derived theme token set");
    Ok(Some(set))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_toggle_yields_no_palette() {
        let seeds = SeedColors {
            surface: Some("#000000".to_string()),
            ..SeedColors::default()
        };
        assert_eq!(derive_tokens(&seeds, false), Ok(None));
    }

    #[test]
    fn white_surface_selects_light_branch() {
        let seeds = SeedColors {
            surface: Some("#ffffff".to_string()),
            ..SeedColors::default()
        };
        let set = derive_tokens(&seeds, true).unwrap().unwrap();
        assert_eq!(set.get("--surface-foreground"), Some("hsl(0, 0%, 100%, 1)"));
    }

    #[test]
    fn black_surface_selects_dark_branch() {
        let seeds = SeedColors {
            surface: Some("#000000".to_string()),
            ..SeedColors::default()
        };
        let set = derive_tokens(&seeds, true).unwrap().unwrap();
        assert_eq!(set.get("--surface-foreground"), Some("hsl(0, 0%, 13%, 1)"));
    }

    #[test]
    fn unparsable_seed_aborts_whole_call() {
        for bad in ["not-a-color", "#12345"] {
            let seeds = SeedColors {
                warning: Some(bad.to_string()),
                ..SeedColors::default()
            };
            let err = derive_tokens(&seeds, true).unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn base_token_passes_seed_through_with_alpha() {
        let seeds = SeedColors {
            critical: Some("#E3272780".to_string()),
            ..SeedColors::default()
        };
        let set = derive_tokens(&seeds, true).unwrap().unwrap();
        let expected = Hsla::from_hex("#E3272780").unwrap().to_string();
        assert_eq!(set.get("--critical"), Some(expected.as_str()));
        // Derived siblings are opaque.
        assert_eq!(set.get("--critical-text"), Some("hsl(0, 77%, 30%, 1)"));
    }

    #[test]
    fn interactive_base_comes_from_interactive_seed() {
        // The elevation family shares the on-surface seed but must not
        // shadow the interactive passthrough.
        let set = derive_tokens(&SeedColors::default(), true).unwrap().unwrap();
        assert_eq!(set.get("--interactive"), Some("hsl(210, 93%, 44%, 1)"));
        assert_eq!(
            set.get("--interactive-neutral-elevation-0"),
            Some("hsl(210, 9%, 100%, 1)")
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let seeds = SeedColors {
            surface: Some("#eeeeee".to_string()),
            highlight: Some("#59D0C2".to_string()),
            ..SeedColors::default()
        };
        let a = derive_tokens(&seeds, true).unwrap().unwrap();
        let b = derive_tokens(&seeds, true).unwrap().unwrap();
        assert_eq!(a, b);
    }
}
