//! Location resolution: template merge and ancestor concatenation

use std::collections::BTreeMap;

use crate::ops::Store;
use crate::template::{self, TemplateOrder};

/// Reduce each resource's raw location set by template comparison
///
/// Templates fold left-to-right: the accepted set starts with the first
/// template; each candidate is compared against the accepted templates in
/// turn, and on the first decisive comparison a specialization replaces the
/// accepted entry while a generalization or an equal template is discarded.
/// A candidate different from everything accepted is kept as a new entry.
pub(crate) fn merge_templates(store: &mut Store) {
    for resource in store.resources.values_mut() {
        if resource.locations.len() < 2 {
            continue;
        }
        resource.locations = fold_templates(&resource.locations);
    }
}

fn fold_templates(locations: &[String]) -> Vec<String> {
    let mut accepted: Vec<String> = Vec::new();
    for candidate in locations {
        let mut decided = false;
        for slot in accepted.iter_mut() {
            match template::compare(candidate, slot) {
                TemplateOrder::Specialization => {
                    *slot = candidate.clone();
                    decided = true;
                    break;
                }
                TemplateOrder::Generalization | TemplateOrder::Equal => {
                    decided = true;
                    break;
                }
                TemplateOrder::Different => {}
            }
        }
        if !decided {
            accepted.push(candidate.clone());
        }
    }
    accepted
}

/// Resolve every resource's location against its ancestor chain
///
/// From a snapshot of the post-merge locations, each resource's location
/// becomes the concatenation, outermost ancestor first, of each chain
/// member's first location (members with none are skipped), with exactly one
/// `/` between fragments and a trailing `/`. A resource holding several own
/// locations resolves each against the same ancestor prefix; an empty result
/// clears the location entirely.
pub(crate) fn resolve_ancestor_chains(store: &mut Store) {
    let raw: BTreeMap<String, Vec<String>> = store
        .resources
        .iter()
        .map(|(name, resource)| (name.clone(), resource.locations.clone()))
        .collect();

    for name in store.resource_names() {
        let prefix_parts: Vec<&str> = ancestor_chain(store, &name)
            .iter()
            .filter_map(|ancestor| raw.get(ancestor).and_then(|l| l.first()))
            .map(String::as_str)
            .collect();
        let own = raw.get(&name).map(Vec::as_slice).unwrap_or(&[]);

        let resolved: Vec<String> = if own.is_empty() {
            let joined = template::join_locations(prefix_parts.iter().copied());
            if joined.is_empty() {
                Vec::new()
            } else {
                vec![joined]
            }
        } else {
            let mut resolved = Vec::new();
            for location in own {
                let mut parts = prefix_parts.clone();
                parts.push(location);
                let joined = template::join_locations(parts);
                if !joined.is_empty() && !resolved.contains(&joined) {
                    resolved.push(joined);
                }
            }
            resolved
        };

        if let Ok(resource) = store.get_resource_mut(&name) {
            resource.locations = resolved;
        }
    }
}

/// Ancestors of `name`, outermost first, excluding `name` itself
///
/// After the tree passes every resource has at most one parent; a visited
/// set keeps the walk finite on anything that slipped through.
fn ancestor_chain(store: &Store, name: &str) -> Vec<String> {
    let mut chain: Vec<String> = Vec::new();
    let mut current = name.to_string();
    while let Ok(resource) = store.get_resource(&current) {
        let Some(parent) = resource.parents.iter().next() else {
            break;
        };
        if chain.contains(parent) || parent.as_str() == name {
            break;
        }
        chain.push(parent.clone());
        current = parent.clone();
    }
    chain.reverse();
    chain
}
