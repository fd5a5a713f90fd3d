//! Friendly-name derivation
//!
//! Turns a raw dotted resource name into the display name a renderer shows:
//! ignorable package segments are dropped, framework-role suffixes stripped,
//! adjacent duplicate segments collapsed, configured overrides applied, and
//! the first character capitalized.

use crate::config::Config;

/// Framework-role suffixes stripped from each name segment
const ROLE_SUFFIXES: [&str; 6] = [
    "Resource",
    "Controller",
    "Endpoint",
    "Service",
    "Handler",
    "Impl",
];

/// Derive the friendly display name for a raw dotted resource name
pub fn friendly_name(raw: &str, config: &Config) -> String {
    let stripped = raw
        .split('.')
        .filter(|segment| !config.ignorable_package_parts.contains(*segment))
        .map(strip_role_suffix);

    // Collapse immediately adjacent case-insensitive duplicates, keeping the
    // later spelling.
    let mut segments: Vec<String> = Vec::new();
    for segment in stripped {
        let duplicate = segments
            .last()
            .is_some_and(|last| last.eq_ignore_ascii_case(&segment));
        if duplicate {
            if let Some(last) = segments.last_mut() {
                *last = segment;
            }
        } else {
            segments.push(segment);
        }
    }

    let mut joined = segments.join(".");
    if let Some(replacement) = config.name_overrides.get(&joined) {
        joined = replacement.clone();
    }
    capitalize(&joined)
}

/// Whether two friendly names form a singular/plural pair (trailing `s`)
pub fn is_plural_pair(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    format!("{a}s") == b || format!("{b}s") == a
}

fn strip_role_suffix(segment: &str) -> String {
    for suffix in ROLE_SUFFIXES {
        if segment.len() > suffix.len() && segment.ends_with(suffix) {
            return segment[..segment.len() - suffix.len()].to_string();
        }
    }
    segment.to_string()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
