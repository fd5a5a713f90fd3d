use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::errors::{RestmapError, Result};

/// Media-type wildcard: stands for "no constraint" and is treated as absent.
pub const MEDIA_WILDCARD: &str = "*/*";

/// An HTTP method discovered on a resource
///
/// Carries the method name, optional documentation, and optional consumed and
/// produced media-type sets. Media types are stored internally as a single
/// possibly comma-joined string; [`Method::consumed_representations`] and
/// [`Method::produced_representations`] split them back into values.
///
/// Method identity is the name alone: two methods with the same name compare
/// equal and hash identically regardless of documentation or media types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Method {
    name: String,
    documentation: Option<String>,
    consumes: Option<String>,
    produces: Option<String>,
}

impl Method {
    /// Create a new Method
    ///
    /// The wildcard media type `*/*` is normalized to absent on both the
    /// consumed and produced side.
    ///
    /// # Errors
    ///
    /// Returns `EmptyMethodName` if `name` is empty or blank.
    pub fn new(
        name: impl Into<String>,
        documentation: Option<String>,
        consumes: Option<String>,
        produces: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RestmapError::EmptyMethodName);
        }
        Ok(Self {
            name,
            documentation,
            consumes: normalize_media(consumes),
            produces: normalize_media(produces),
        })
    }

    /// The method name (e.g. "GET")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation attached to this method, if any
    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    /// Consumed media types as individual values
    pub fn consumed_representations(&self) -> Vec<String> {
        split_representations(self.consumes.as_deref())
    }

    /// Produced media types as individual values
    pub fn produced_representations(&self) -> Vec<String> {
        split_representations(self.produces.as_deref())
    }

    /// Combine this method with another discovery of the same method
    ///
    /// Documentation is taken from the left side if present, else from the
    /// right. Media types are unioned, left values first, right values
    /// appended when not already present.
    ///
    /// # Errors
    ///
    /// Returns `MethodNameMismatch` if the two names differ.
    pub fn combine_with(&self, other: &Method) -> Result<Method> {
        if self.name != other.name {
            return Err(RestmapError::MethodNameMismatch {
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }
        Ok(Method {
            name: self.name.clone(),
            documentation: self
                .documentation
                .clone()
                .or_else(|| other.documentation.clone()),
            consumes: union_media(self.consumes.as_deref(), other.consumes.as_deref()),
            produces: union_media(self.produces.as_deref(), other.produces.as_deref()),
        })
    }
}

// Identity is the method name only.
impl PartialEq for Method {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Method {}

impl Hash for Method {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

fn normalize_media(value: Option<String>) -> Option<String> {
    value.filter(|v| v != MEDIA_WILDCARD)
}

/// Split a stored media-type string on commas, stripping one pair of
/// surrounding quote characters per value.
fn split_representations(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(|value| strip_quotes(value.trim()))
        .filter(|value| !value.is_empty() && *value != MEDIA_WILDCARD)
        .map(str::to_string)
        .collect()
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Union two media-type strings: left values first, right values appended
/// when not already present, comma-joined.
fn union_media(left: Option<&str>, right: Option<&str>) -> Option<String> {
    match (left, right) {
        (None, None) => None,
        (Some(l), None) => Some(l.to_string()),
        (None, Some(r)) => Some(r.to_string()),
        (Some(l), Some(r)) => {
            let mut values: Vec<&str> = l.split(',').collect();
            for value in r.split(',') {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            Some(values.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_blank_name() {
        assert!(matches!(
            Method::new("", None, None, None),
            Err(RestmapError::EmptyMethodName)
        ));
        assert!(matches!(
            Method::new("   ", None, None, None),
            Err(RestmapError::EmptyMethodName)
        ));
    }

    #[test]
    fn test_wildcard_normalized_to_absent() {
        let method = Method::new("GET", None, Some(MEDIA_WILDCARD.to_string()), None).unwrap();
        assert!(method.consumed_representations().is_empty());

        let plain = Method::new("GET", None, None, None).unwrap();
        assert_eq!(
            method.consumed_representations(),
            plain.consumed_representations()
        );
    }

    #[test]
    fn test_identity_by_name_only() {
        let a = Method::new("GET", Some("doc".to_string()), None, None).unwrap();
        let b = Method::new("GET", None, Some("application/json".to_string()), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_combine_requires_equal_names() {
        let get = Method::new("GET", None, None, None).unwrap();
        let put = Method::new("PUT", None, None, None).unwrap();
        assert!(matches!(
            get.combine_with(&put),
            Err(RestmapError::MethodNameMismatch { .. })
        ));
    }

    #[test]
    fn test_combine_accumulates_media_in_order() {
        let first = Method::new("POST", None, Some("m1".to_string()), None).unwrap();
        let second = Method::new("POST", None, Some("m2".to_string()), None).unwrap();
        let combined = first.combine_with(&second).unwrap();
        assert_eq!(combined.consumed_representations(), vec!["m1", "m2"]);
    }

    #[test]
    fn test_combine_is_idempotent_for_identical_media() {
        let first = Method::new("POST", None, Some("m1".to_string()), None).unwrap();
        let combined = first.combine_with(&first).unwrap();
        assert_eq!(combined.consumed_representations(), vec!["m1"]);
    }

    #[test]
    fn test_combine_keeps_left_documentation() {
        let left = Method::new("GET", Some("left".to_string()), None, None).unwrap();
        let right = Method::new("GET", Some("right".to_string()), None, None).unwrap();
        assert_eq!(
            left.combine_with(&right).unwrap().documentation(),
            Some("left")
        );
        let bare = Method::new("GET", None, None, None).unwrap();
        assert_eq!(
            bare.combine_with(&right).unwrap().documentation(),
            Some("right")
        );
    }

    #[test]
    fn test_representations_strip_quotes() {
        let method = Method::new(
            "GET",
            None,
            None,
            Some("\"application/json\",text/plain".to_string()),
        )
        .unwrap();
        assert_eq!(
            method.produced_representations(),
            vec!["application/json", "text/plain"]
        );
    }
}
