//! Merge of same-location resources with disjoint method sets

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::Result;
use crate::naming;
use crate::ops::Store;

/// Merge resources that share an identical resolved location and have
/// pairwise disjoint method sets
///
/// Grouping ignores parentage entirely. Within one location, candidates are
/// accepted greedily in name order; a candidate sharing any method name with
/// an already-accepted member is left out. The survivor of a group is the
/// first member whose friendly name has a genuine singular/plural
/// counterpart among the currently known resources, falling back to the
/// lexicographically first member. All group methods are unioned into the
/// survivor and the rest are deleted.
///
/// # Errors
///
/// Propagates method-combination errors (cannot occur for disjoint sets).
pub(crate) fn merge_disjoint(store: &mut Store) -> Result<()> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, resource) in &store.resources {
        if let Some(location) = resource.locations.first() {
            groups.entry(location.clone()).or_default().push(name.clone());
        }
    }

    for (_, candidates) in groups {
        if candidates.len() < 2 {
            continue;
        }

        let mut accepted: Vec<String> = Vec::new();
        for candidate in candidates {
            let methods = method_names(store, &candidate);
            let disjoint = accepted
                .iter()
                .all(|member| method_names(store, member).is_disjoint(&methods));
            if disjoint {
                accepted.push(candidate);
            }
        }
        if accepted.len() < 2 {
            continue;
        }

        let survivor = choose_survivor(store, &accepted);
        merge_into_survivor(store, &survivor, &accepted)?;
    }
    Ok(())
}

fn method_names(store: &Store, name: &str) -> BTreeSet<String> {
    store
        .get_resource(name)
        .map(|resource| {
            resource
                .methods
                .iter()
                .map(|method| method.name().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Pick the group member that represents the merged resource
///
/// Prefers a member whose friendly name has a singular/plural counterpart
/// (e.g. "order" when "orders" is also known); the group is in name order,
/// so the fallback is the lexicographically first member.
fn choose_survivor(store: &Store, group: &[String]) -> String {
    for name in group {
        let friendly = naming::friendly_name(name, &store.config);
        let has_counterpart = store.resources.keys().any(|other| {
            other != name
                && naming::is_plural_pair(&friendly, &naming::friendly_name(other, &store.config))
        });
        if has_counterpart {
            return name.clone();
        }
    }
    group[0].clone()
}

fn merge_into_survivor(store: &mut Store, survivor: &str, group: &[String]) -> Result<()> {
    for member in group {
        if member.as_str() == survivor {
            continue;
        }
        let Some(resource) = store.resources.remove(member) else {
            continue;
        };

        for parent in &resource.parents {
            if let Ok(parent_resource) = store.get_resource_mut(parent) {
                parent_resource.children.remove(member);
            }
        }
        for child in &resource.children {
            if let Ok(child_resource) = store.get_resource_mut(child) {
                child_resource.parents.remove(member);
                child_resource.parents.insert(survivor.to_string());
            }
        }

        let survivor_resource = store.get_resource_mut(survivor)?;
        for method in resource.methods {
            survivor_resource.merge_method(method)?;
        }
        for var in resource.template_vars {
            survivor_resource.set_template_var(&var.name, var.documentation.as_deref());
        }
        if survivor_resource.documentation.is_none() {
            survivor_resource.documentation = resource.documentation;
        }
        for child in resource.children {
            store.get_resource_mut(survivor)?.children.insert(child);
        }
    }
    Ok(())
}
