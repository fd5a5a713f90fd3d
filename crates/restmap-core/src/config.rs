//! Engine configuration
//!
//! Options arrive from the discovery collaborator as plain strings and are
//! parsed into typed sets here. Recognized options:
//! - `name-overrides`: `name:override,...` pairs applied to friendly names
//! - `ignorable-name-parts`: dot-segments that make a resource name ignorable
//! - `ignorable-package-parts`: dot-segments dropped during name derivation
//! - `logged-names`: substrings selecting resources to log discovery events for
//! - `simplify-names`: boolean, default true

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Friendly-name override table (derived name -> override)
    pub name_overrides: BTreeMap<String, String>,

    /// Resource-name dot-segments that make the whole name ignorable
    pub ignorable_name_parts: BTreeSet<String>,

    /// Package dot-segments dropped by friendly-name derivation
    pub ignorable_package_parts: BTreeSet<String>,

    /// Substrings selecting resources whose discovery events are logged
    pub logged_name_parts: BTreeSet<String>,

    /// Whether the canonicalizer runs the name-simplification pass
    pub simplify_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name_overrides: BTreeMap::new(),
            ignorable_name_parts: BTreeSet::new(),
            ignorable_package_parts: BTreeSet::new(),
            logged_name_parts: BTreeSet::new(),
            simplify_names: true,
        }
    }
}

impl Config {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one named option from the discovery collaborator
    ///
    /// Unrecognized keys are logged and ignored.
    pub fn apply_option(&mut self, key: &str, value: &str) {
        match key {
            "name-overrides" => self.parse_name_overrides(value),
            "ignorable-name-parts" => {
                self.ignorable_name_parts.extend(split_list(value));
            }
            "ignorable-package-parts" => {
                self.ignorable_package_parts.extend(split_list(value));
            }
            "logged-names" => {
                self.logged_name_parts.extend(split_list(value));
            }
            "simplify-names" => {
                self.simplify_names = value.trim().eq_ignore_ascii_case("true");
            }
            _ => {
                tracing::warn!(key, "ignoring unrecognized configuration option");
            }
        }
    }

    /// Parse a `name:override,...` list into the override table
    pub fn parse_name_overrides(&mut self, raw: &str) {
        for pair in split_list(raw) {
            if let Some((name, replacement)) = pair.split_once(':') {
                self.name_overrides
                    .insert(name.trim().to_string(), replacement.trim().to_string());
            }
        }
    }

    /// Whether any dot-segment of `name` is configured as ignorable
    pub fn is_ignorable(&self, name: &str) -> bool {
        name.split('.')
            .any(|segment| self.ignorable_name_parts.contains(segment))
    }

    /// Whether discovery events for `name` should be logged
    pub fn should_log(&self, name: &str) -> bool {
        self.logged_name_parts
            .iter()
            .any(|part| name.contains(part.as_str()))
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
}
