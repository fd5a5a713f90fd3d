//! Name simplification: shorten dotted names to unambiguous suffixes

use std::collections::BTreeSet;

use crate::naming;
use crate::ops::Store;

/// Shorten dotted resource names to the shortest unambiguous suffix
///
/// For every resource whose name contains a dot (in name order), the
/// right-anchored suffixes are tried shortest first; the first one whose
/// lower-cased friendly name collides with no other resource's current
/// friendly name wins. Renames re-key the resource and its parent/child
/// edges.
pub(crate) fn simplify_names(store: &mut Store) {
    for name in store.resource_names() {
        if !name.contains('.') || !store.contains(&name) {
            continue;
        }
        if let Some(short) = choose_suffix(store, &name) {
            rename_resource(store, &name, &short);
        }
    }
}

fn choose_suffix(store: &Store, name: &str) -> Option<String> {
    let taken: BTreeSet<String> = store
        .resources
        .keys()
        .filter(|other| other.as_str() != name)
        .map(|other| naming::friendly_name(other, &store.config).to_lowercase())
        .collect();

    let dots: Vec<usize> = name.match_indices('.').map(|(i, _)| i).collect();
    for dot in dots.iter().rev() {
        let suffix = &name[dot + 1..];
        if store.contains(suffix) {
            continue;
        }
        let friendly = naming::friendly_name(suffix, &store.config).to_lowercase();
        if !taken.contains(&friendly) {
            return Some(suffix.to_string());
        }
    }
    None
}

fn rename_resource(store: &mut Store, from: &str, to: &str) {
    let Some(mut resource) = store.resources.remove(from) else {
        return;
    };
    resource.name = to.to_string();
    for parent in &resource.parents {
        if let Ok(parent_resource) = store.get_resource_mut(parent) {
            parent_resource.children.remove(from);
            parent_resource.children.insert(to.to_string());
        }
    }
    for child in &resource.children {
        if let Ok(child_resource) = store.get_resource_mut(child) {
            child_resource.parents.remove(from);
            child_resource.parents.insert(to.to_string());
        }
    }
    store.insert_resource(resource);
}
