//! Address-template algebra
//!
//! Helpers for working with address templates like `/orders/{id}/`:
//! classifying two templates against each other, stripping validation
//! patterns from template variables, extracting the last path segment, and
//! joining location fragments along an ancestor chain.

/// Ordering relation between two address templates of equal segment count
///
/// The relation is read left-to-right: `Specialization` means the left
/// template has a fixed segment exactly where the right has a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOrder {
    /// Segment-wise identical (variable names are not compared)
    Equal,
    /// Left is a specialization of right (fixed where right is variable)
    Specialization,
    /// Left is a generalization of right (variable where right is fixed)
    Generalization,
    /// Different segment counts, a fixed-segment mismatch, or mixed directions
    Different,
}

/// Classify two address templates
///
/// Templates are split on `/`. Differing segment counts are `Different`.
/// For each aligned segment pair: exactly one variable side makes the
/// variable side the generalization; two fixed segments with different text
/// make the pair `Different`; anything else (two fixed equal segments, or
/// two variables regardless of name) is `Equal`. Segment verdicts combine
/// over the whole template, and mixed directions collapse to `Different`.
pub fn compare(left: &str, right: &str) -> TemplateOrder {
    let left_segments: Vec<&str> = left.split('/').collect();
    let right_segments: Vec<&str> = right.split('/').collect();
    if left_segments.len() != right_segments.len() {
        return TemplateOrder::Different;
    }

    let mut order = TemplateOrder::Equal;
    for (l, r) in left_segments.iter().zip(right_segments.iter()) {
        let left_var = is_variable(l);
        let right_var = is_variable(r);

        let segment = if left_var && !right_var {
            TemplateOrder::Generalization
        } else if !left_var && right_var {
            TemplateOrder::Specialization
        } else if !left_var && !right_var && l != r {
            TemplateOrder::Different
        } else {
            TemplateOrder::Equal
        };

        match segment {
            TemplateOrder::Different => return TemplateOrder::Different,
            TemplateOrder::Equal => {}
            direction => {
                if order == TemplateOrder::Equal {
                    order = direction;
                } else if order != direction {
                    return TemplateOrder::Different;
                }
            }
        }
    }
    order
}

/// Whether a path segment is a brace-delimited template variable
pub fn is_variable(segment: &str) -> bool {
    segment.len() > 1 && segment.starts_with('{') && segment.ends_with('}')
}

/// Strip trailing validation patterns from template variables
///
/// `{id:[0-9]+}/` becomes `{id}/`. The pattern may itself contain braces
/// (`{id:\d{3}}`), so brace depth is tracked until the variable closes.
pub fn strip_validation_patterns(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '{' {
            out.push(c);
            continue;
        }
        out.push('{');
        let mut depth = 1usize;
        let mut in_pattern = false;
        for c in chars.by_ref() {
            match c {
                ':' if depth == 1 => {
                    in_pattern = true;
                    continue;
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        out.push('}');
                        break;
                    }
                }
                _ => {}
            }
            if !in_pattern && c != '{' && c != '}' {
                out.push(c);
            }
        }
    }
    out
}

/// The last non-empty path segment of a location, braces stripped when the
/// segment is a bare variable
pub fn last_segment(location: &str) -> Option<String> {
    location
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .map(strip_braces)
}

/// Strip the surrounding braces from a variable segment; other segments are
/// returned unchanged
pub fn strip_braces(segment: &str) -> String {
    if is_variable(segment) {
        segment[1..segment.len() - 1].to_string()
    } else {
        segment.to_string()
    }
}

/// Join location fragments along an ancestor chain
///
/// Empty fragments are skipped, exactly one `/` separates consecutive
/// non-empty fragments, and a non-empty result always ends in `/`.
pub fn join_locations<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if result.is_empty() {
            result.push_str(part);
        } else {
            while result.ends_with('/') {
                result.pop();
            }
            if !part.starts_with('/') {
                result.push('/');
            }
            result.push_str(part);
        }
    }
    if !result.is_empty() && !result.ends_with('/') {
        result.push('/');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_variable_generalizes_fixed() {
        assert_eq!(compare("/a/{x}/", "/a/b/"), TemplateOrder::Generalization);
        assert_eq!(compare("/a/b/", "/a/{x}/"), TemplateOrder::Specialization);
    }

    #[test]
    fn test_compare_two_variables_equal_regardless_of_name() {
        assert_eq!(compare("/a/{x}/", "/a/{y}/"), TemplateOrder::Equal);
    }

    #[test]
    fn test_compare_fixed_mismatch_is_different() {
        assert_eq!(compare("/a/b/", "/a/c/"), TemplateOrder::Different);
    }

    #[test]
    fn test_compare_segment_count_mismatch_is_different() {
        assert_eq!(compare("/a/b/", "/a/"), TemplateOrder::Different);
    }

    #[test]
    fn test_compare_mixed_directions_is_different() {
        assert_eq!(compare("/{x}/b/", "/a/{y}/"), TemplateOrder::Different);
    }

    #[test]
    fn test_strip_validation_patterns() {
        assert_eq!(strip_validation_patterns("{id:[0-9]+}/"), "{id}/");
        assert_eq!(strip_validation_patterns("/a/{id:\\d{3}}/b/"), "/a/{id}/b/");
        assert_eq!(strip_validation_patterns("/orders/{id}/"), "/orders/{id}/");
        assert_eq!(strip_validation_patterns("/plain/path/"), "/plain/path/");
    }

    #[test]
    fn test_last_segment_strips_braces() {
        assert_eq!(last_segment("/orders/{id}/"), Some("id".to_string()));
        assert_eq!(last_segment("/orders/"), Some("orders".to_string()));
        assert_eq!(last_segment("///"), None);
    }

    #[test]
    fn test_join_locations() {
        assert_eq!(join_locations(["/orders/", "{id}/"]), "/orders/{id}/");
        assert_eq!(join_locations(["/orders", "items"]), "/orders/items/");
        assert_eq!(join_locations(["", "/a/", "", "b"]), "/a/b/");
        assert_eq!(join_locations([""; 0]), "");
    }
}
