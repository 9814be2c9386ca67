#![forbid(unsafe_code)]

//! Deterministic UI theme token derivation.
//!
//! # Role in hueforge
//! `hueforge-theme` turns up to eight semantic seed colors into a complete
//! palette of named tokens (~110 colors plus a fixed structural block)
//! styled consistently across light and dark modes. It is the whole public
//! surface of the project; `hueforge-color` supplies the math.
//!
//! # This crate provides
//! - [`SeedColors`] / [`ColorRole`]: the seed schema with documented
//!   defaults for every role.
//! - [`rules`]: one declarative table (role → token → lightness rule)
//!   driving a single generic derivation routine.
//! - [`TokenSet`]: the insertion-ordered output mapping with mechanical
//!   `--custom-property` naming.
//! - [`derive_tokens`]: the pure entry point, with the theming toggle as
//!   an explicit parameter.
//!
//! # Determinism
//! Derivation is a pure function: no state survives a call, identical
//! seeds yield identical sets bit-for-bit, and reference-palette float
//! artifacts are reproduced rather than rounded away. Safe to call
//! concurrently from any number of threads.
//!
//! # Example
//! ```
//! use hueforge_theme::{SeedColors, derive_tokens};
//!
//! let seeds = SeedColors {
//!     surface: Some("#ffffff".to_string()),
//!     ..SeedColors::default()
//! };
//! let tokens = derive_tokens(&seeds, true).unwrap().unwrap();
//! assert_eq!(tokens.get("--surface-foreground"), Some("hsl(0, 0%, 100%, 1)"));
//! ```

/// The derivation engine entry point.
pub mod engine;
/// The declarative role → token lightness table.
pub mod rules;
/// Seed schema: roles, overrides, documented defaults.
pub mod seed;
/// Token aggregation and external naming.
pub mod tokens;

pub use engine::derive_tokens;
pub use hueforge_color::{Hsla, InvalidColorFormat, Rgba};
pub use seed::{ColorRole, SeedColors};
pub use tokens::{TokenSet, custom_property_name};
