#![forbid(unsafe_code)]

//! Token aggregation and external naming.
//!
//! Internal rule names are camelCase; consumers see CSS custom-property
//! names. The conversion is mechanical: a separator goes before every
//! ASCII uppercase letter or digit, everything lowercases, and the result
//! is prefixed with `--`. A fixed block of non-color structural tokens is
//! appended to every derived set so consumers reference one namespace.

use indexmap::IndexMap;

/// The derived token set: external custom-property name → serialized value.
///
/// Iteration follows insertion order (stable for golden tests and CSS
/// emission); equality ignores order per the data model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    entries: IndexMap<String, String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token under its internal camelCase name.
    pub(crate) fn insert_internal(&mut self, internal: &str, value: String) {
        self.entries.insert(custom_property_name(internal), value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// Structural tokens appended unconditionally, independent of seeds.
pub(crate) const STRUCTURAL: [(&str, &str); 5] = [
    ("none", "none"),
    ("transparent", "transparent"),
    ("zero", "0"),
    ("buttonFontWeight", "500"),
    ("focusRingContent", "''"),
];

pub(crate) fn append_structural(set: &mut TokenSet) {
    for (internal, value) in STRUCTURAL {
        set.insert_internal(internal, value.to_string());
    }
}

/// Convert an internal camelCase token name to its external
/// custom-property form.
///
/// Uppercase letters and digits each get a `-` inserted before them, then
/// the whole name lowercases under a `--` prefix:
/// `surfaceForegroundSubdued` → `--surface-foreground-subdued`,
/// `interactiveNeutralElevation0` → `--interactive-neutral-elevation-0`.
pub fn custom_property_name(internal: &str) -> String {
    let mut name = String::with_capacity(internal.len() + 8);
    name.push_str("--");
    for ch in internal.chars() {
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}
