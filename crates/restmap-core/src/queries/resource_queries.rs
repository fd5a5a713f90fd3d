//! Resource query operations
//!
//! Read-only views over a finalized store for the rendering collaborator.
//! All orderings are deterministic: resources sort by resolved location with
//! the name as fallback key, lists keep their stored order.

use std::collections::BTreeSet;

use crate::errors::Result;
use crate::model::{Method, Resource, TemplateVar};
use crate::naming;
use crate::ops::Store;

/// Resources that expose at least one method, in rendering order
///
/// Ordered by resolved location; a resource without a location sorts by its
/// name instead.
pub fn resources_with_methods(store: &Store) -> Vec<&Resource> {
    let mut resources: Vec<&Resource> = store
        .list_resources()
        .into_iter()
        .filter(|resource| resource.has_methods())
        .collect();
    resources.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    resources
}

fn sort_key<'a>(resource: &'a Resource) -> (&'a str, &'a str) {
    let primary = resource.location().unwrap_or(&resource.name);
    (primary, resource.name.as_str())
}

/// Methods of a resource, in stored order
///
/// # Errors
///
/// Returns `ResourceNotFound` if the resource doesn't exist.
pub fn methods_of<'a>(store: &'a Store, name: &str) -> Result<&'a [Method]> {
    Ok(&store.get_resource(name)?.methods)
}

/// A resource's resolved location, if it has one
///
/// # Errors
///
/// Returns `ResourceNotFound` if the resource doesn't exist.
pub fn location_of<'a>(store: &'a Store, name: &str) -> Result<Option<&'a str>> {
    Ok(store.get_resource(name)?.location())
}

/// A resource's documentation, if any
///
/// # Errors
///
/// Returns `ResourceNotFound` if the resource doesn't exist.
pub fn documentation_of<'a>(store: &'a Store, name: &str) -> Result<Option<&'a str>> {
    Ok(store.get_resource(name)?.documentation.as_deref())
}

/// A resource's derived friendly display name
///
/// # Errors
///
/// Returns `ResourceNotFound` if the resource doesn't exist.
pub fn friendly_name_of(store: &Store, name: &str) -> Result<String> {
    store.get_resource(name)?;
    Ok(naming::friendly_name(name, &store.config))
}

/// A resource's location-template variables, in stored order
///
/// # Errors
///
/// Returns `ResourceNotFound` if the resource doesn't exist.
pub fn template_vars_of<'a>(store: &'a Store, name: &str) -> Result<&'a [TemplateVar]> {
    Ok(&store.get_resource(name)?.template_vars)
}

/// Sorted union of every consumed and produced media type across all methods
pub fn media_types(store: &Store) -> Vec<String> {
    let mut types: BTreeSet<String> = BTreeSet::new();
    for resource in store.list_resources() {
        for method in &resource.methods {
            types.extend(method.consumed_representations());
            types.extend(method.produced_representations());
        }
    }
    types.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::discovery::{add_locations, add_method, add_resource};

    fn sample_store() -> Store {
        let mut store = Store::new();
        add_resource(&mut store, "orders", None);
        add_locations(&mut store, "orders", &["/orders/"]);
        add_method(
            &mut store,
            "orders",
            "GET",
            None,
            Some("application/json"),
            None,
        )
        .unwrap();
        add_resource(&mut store, "carts", None);
        add_locations(&mut store, "carts", &["/carts/"]);
        add_method(&mut store, "carts", "POST", Some("text/plain"), None, None).unwrap();
        add_resource(&mut store, "bare", None);
        store
    }

    #[test]
    fn test_resources_with_methods_ordered_by_location() {
        let store = sample_store();
        let names: Vec<&str> = resources_with_methods(&store)
            .iter()
            .map(|resource| resource.name.as_str())
            .collect();
        assert_eq!(names, vec!["carts", "orders"]);
    }

    #[test]
    fn test_resource_without_location_sorts_by_name() {
        let mut store = sample_store();
        add_method(&mut store, "bare", "GET", None, None, None).unwrap();

        let names: Vec<&str> = resources_with_methods(&store)
            .iter()
            .map(|resource| resource.name.as_str())
            .collect();
        // '/' sorts before 'b', so located resources come first
        assert_eq!(names, vec!["carts", "orders", "bare"]);
    }

    #[test]
    fn test_media_types_union_is_sorted() {
        let store = sample_store();
        assert_eq!(media_types(&store), vec!["application/json", "text/plain"]);
    }

    #[test]
    fn test_missing_resource_is_an_error() {
        let store = Store::new();
        assert!(methods_of(&store, "nope").is_err());
        assert!(friendly_name_of(&store, "nope").is_err());
    }
}
