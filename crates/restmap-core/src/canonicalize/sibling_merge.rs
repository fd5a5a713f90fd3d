//! Merge of child resources sharing a resolved location

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::Resource;
use crate::ops::Store;
use crate::template;

/// Merge child resources that resolved to the same location
///
/// Resources with a recorded parent are grouped by resolved location. Each
/// group of two or more distinct names collapses into one resource named
/// after the location's last path segment (braces stripped for a variable),
/// prefixed by the dotted-name prefix common to all members when they share
/// one. Every attribute is unioned under the merged name and all edges are
/// re-keyed.
///
/// # Errors
///
/// Propagates method-combination errors (cannot occur for methods matched by
/// name).
pub(crate) fn merge_siblings(store: &mut Store) -> Result<()> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, resource) in &store.resources {
        if resource.parents.is_empty() {
            continue;
        }
        if let Some(location) = resource.locations.first() {
            groups.entry(location.clone()).or_default().push(name.clone());
        }
    }

    for (location, members) in groups {
        if members.len() < 2 {
            continue;
        }
        merge_group(store, &location, &members)?;
    }
    Ok(())
}

fn merge_group(store: &mut Store, location: &str, members: &[String]) -> Result<()> {
    let Some(segment) = template::last_segment(location) else {
        return Ok(());
    };
    let prefix = common_dotted_prefix(members);
    let target = if prefix.is_empty() {
        segment
    } else {
        format!("{}.{}", prefix, segment)
    };

    let mut merged = Resource::new(target.clone());
    merged.locations = vec![location.to_string()];

    // A resource already holding the merged name is absorbed like a member.
    let mut absorbed: Vec<String> = members.to_vec();
    if !absorbed.contains(&target) && store.contains(&target) {
        absorbed.push(target.clone());
    }

    for member in &absorbed {
        let Some(resource) = store.resources.remove(member) else {
            continue;
        };
        absorb(store, &mut merged, member, resource)?;
    }
    store.insert_resource(merged);
    Ok(())
}

/// Fold one member's attributes and edges into the merged resource
fn absorb(
    store: &mut Store,
    merged: &mut Resource,
    member: &str,
    resource: Resource,
) -> Result<()> {
    if merged.documentation.is_none() {
        merged.documentation = resource.documentation;
    }
    for method in resource.methods {
        merged.merge_method(method)?;
    }
    for var in resource.template_vars {
        merged.set_template_var(&var.name, var.documentation.as_deref());
    }
    for parent in resource.parents {
        if let Ok(parent_resource) = store.get_resource_mut(&parent) {
            parent_resource.children.remove(member);
            parent_resource.children.insert(merged.name.clone());
        }
        merged.parents.insert(parent);
    }
    for child in resource.children {
        if let Ok(child_resource) = store.get_resource_mut(&child) {
            child_resource.parents.remove(member);
            child_resource.parents.insert(merged.name.clone());
        }
        merged.children.insert(child);
    }
    Ok(())
}

/// Longest dot-segment prefix shared by every name, dot-joined
fn common_dotted_prefix(names: &[String]) -> String {
    let Some(first) = names.first() else {
        return String::new();
    };
    let mut prefix: Vec<&str> = first.split('.').collect();
    for name in &names[1..] {
        let segments: Vec<&str> = name.split('.').collect();
        let shared = prefix
            .iter()
            .zip(segments.iter())
            .take_while(|(a, b)| a == b)
            .count();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }
    prefix.join(".")
}
