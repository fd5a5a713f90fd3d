//! Graph-to-tree passes: cycle repair and multi-parent resolution

use crate::model::Resource;
use crate::ops::Store;

/// Break parent-chain cycles recorded at discovery time
///
/// Walks resources in name order and deletes any resource whose ancestor
/// closure contains itself; edges are detached and children left with no
/// other parent are deleted with it. The input stage already logged the
/// cycle as an error. The contract is "produces some acyclic graph": the
/// surviving shape is not stable under permutation of input order.
pub(crate) fn repair_cycles(store: &mut Store) {
    loop {
        let mut removed = false;
        for name in store.resource_names() {
            if !store.contains(&name) {
                continue;
            }
            if store.is_ancestor(&name, &name) {
                tracing::error!(resource = %name, "removing resource to break a parent cycle");
                remove_cascading(store, &name);
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
}

/// Resolve resources with more than one parent into per-parent copies
///
/// While any resource has more than one parent (scanning in name order), the
/// resource and its subtree are copied under each parent and the original is
/// deleted. The disambiguating counter is scoped to one canonicalizer run.
pub(crate) fn resolve_multi_parents(store: &mut Store, counter: &mut u64) {
    loop {
        let multi = store
            .resource_names()
            .into_iter()
            .find(|name| {
                store
                    .get_resource(name)
                    .map(|resource| resource.parents.len() > 1)
                    .unwrap_or(false)
            });
        let Some(name) = multi else {
            break;
        };
        distribute_to_parents(store, &name, counter);
    }
}

fn distribute_to_parents(store: &mut Store, name: &str, counter: &mut u64) {
    let parents: Vec<String> = match store.get_resource(name) {
        Ok(resource) => resource.parents.iter().cloned().collect(),
        Err(_) => return,
    };
    for parent in &parents {
        // Guard: a parent already reachable as an ancestor through some other
        // path would have this subtree duplicated into itself.
        if is_ancestor_via_other_path(store, parent, name) {
            continue;
        }
        copy_subtree(store, name, parent, counter);
    }
    remove_cascading(store, name);
}

/// Whether `candidate` is an ancestor of `resource` through a path that does
/// not use the direct `resource -> candidate` edge
fn is_ancestor_via_other_path(store: &Store, candidate: &str, resource: &str) -> bool {
    let Ok(resource) = store.get_resource(resource) else {
        return false;
    };
    resource
        .parents
        .iter()
        .filter(|parent| parent.as_str() != candidate)
        .any(|parent| store.is_ancestor(candidate, parent))
}

/// Copy `source` (and recursively its children) under `parent`
fn copy_subtree(store: &mut Store, source: &str, parent: &str, counter: &mut u64) {
    let Ok(original) = store.get_resource(source) else {
        return;
    };
    let documentation = original.documentation.clone();
    let locations = original.locations.clone();
    let template_vars = original.template_vars.clone();
    let methods = original.methods.clone();
    let children: Vec<String> = original.children.iter().cloned().collect();

    let mut copy_name = derive_copy_name(source, parent, counter);
    if store.contains(&copy_name) {
        *counter += 1;
        copy_name = format!("{}.{}", copy_name, counter);
    }

    let mut copy = Resource::new(copy_name.clone());
    copy.documentation = documentation;
    copy.locations = locations;
    copy.template_vars = template_vars;
    copy.methods = methods;
    copy.parents.insert(parent.to_string());
    store.insert_resource(copy);
    if let Ok(parent) = store.get_resource_mut(parent) {
        parent.children.insert(copy_name.clone());
    }

    for child in children {
        copy_subtree(store, &child, &copy_name, counter);
    }
}

/// Derive the name of a copy placed under `parent`
///
/// If the original name textually starts with the parent's name, a dot and
/// the run-scoped counter disambiguate. Otherwise the name is the longest
/// shared dot-segment prefix, the parent's remaining segments, then the
/// original's remaining segments.
fn derive_copy_name(source: &str, parent: &str, counter: &mut u64) -> String {
    if source.starts_with(parent) {
        *counter += 1;
        return format!("{}.{}", source, counter);
    }
    let source_segments: Vec<&str> = source.split('.').collect();
    let parent_segments: Vec<&str> = parent.split('.').collect();
    let shared = source_segments
        .iter()
        .zip(parent_segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::new();
    segments.extend_from_slice(&parent_segments[..shared]);
    segments.extend_from_slice(&parent_segments[shared..]);
    segments.extend_from_slice(&source_segments[shared..]);
    segments.join(".")
}

/// Remove a resource, cascading into children left with no other parent
///
/// Used after a subtree was copied elsewhere (and by cycle repair): the
/// original chain is deleted entirely, but children that still have another
/// parent survive.
pub(crate) fn remove_cascading(store: &mut Store, name: &str) {
    let mut stack = vec![name.to_string()];
    while let Some(current) = stack.pop() {
        let Some(resource) = store.resources.remove(&current) else {
            continue;
        };
        for parent in &resource.parents {
            if let Ok(parent) = store.get_resource_mut(parent) {
                parent.children.remove(&current);
            }
        }
        for child in &resource.children {
            if let Ok(child_resource) = store.get_resource_mut(child) {
                child_resource.parents.remove(&current);
                if child_resource.parents.is_empty() {
                    stack.push(child.clone());
                }
            }
        }
    }
}

/// Remove a resource, detaching children instead of deleting them
pub(crate) fn remove_detaching(store: &mut Store, name: &str) {
    let Some(resource) = store.resources.remove(name) else {
        return;
    };
    for parent in &resource.parents {
        if let Ok(parent) = store.get_resource_mut(parent) {
            parent.children.remove(name);
        }
    }
    for child in &resource.children {
        if let Ok(child_resource) = store.get_resource_mut(child) {
            child_resource.parents.remove(name);
        }
    }
}
