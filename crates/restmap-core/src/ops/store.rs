use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{RestmapError, Result};
use crate::model::Resource;

/// In-memory store for discovered resources
///
/// A `BTreeMap` keyed by raw dotted name keeps iteration deterministic; all
/// tie-breaks in the canonicalizer lean on that name order. Not thread-safe
/// (no Arc/RwLock) - discovery and build run single-threaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Map of raw dotted name to resource
    pub(crate) resources: BTreeMap<String, Resource>,

    /// Engine configuration supplied by the discovery collaborator
    pub config: Config,
}

impl Store {
    /// Create a new empty store with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            resources: BTreeMap::new(),
            config,
        }
    }

    /// Get a resource by raw name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no resource with that name exists.
    pub fn get_resource(&self, name: &str) -> Result<&Resource> {
        self.resources
            .get(name)
            .ok_or_else(|| RestmapError::ResourceNotFound {
                name: name.to_string(),
            })
    }

    /// Get a mutable reference to a resource by raw name
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no resource with that name exists.
    pub fn get_resource_mut(&mut self, name: &str) -> Result<&mut Resource> {
        self.resources
            .get_mut(name)
            .ok_or_else(|| RestmapError::ResourceNotFound {
                name: name.to_string(),
            })
    }

    /// Whether a resource with that name exists
    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// All resources in name order
    pub fn list_resources(&self) -> Vec<&Resource> {
        self.resources.values().collect()
    }

    /// All resource names in order
    pub fn resource_names(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    /// Insert a resource, replacing any resource with the same name
    pub fn insert_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.name.clone(), resource);
    }

    /// Get the resource with that name, creating an empty one if absent
    pub(crate) fn ensure_resource(&mut self, name: &str) -> &mut Resource {
        self.resources
            .entry(name.to_string())
            .or_insert_with(|| Resource::new(name))
    }

    /// Whether `candidate` is a recorded ancestor of `of`
    ///
    /// Walks the parent indices upward from `of`; a visited set makes the
    /// walk safe on graphs that still contain cycles.
    pub(crate) fn is_ancestor(&self, candidate: &str, of: &str) -> bool {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut queue: Vec<&str> = match self.resources.get(of) {
            Some(resource) => resource.parents.iter().map(String::as_str).collect(),
            None => return false,
        };
        while let Some(current) = queue.pop() {
            if current == candidate {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(resource) = self.resources.get(current) {
                queue.extend(resource.parents.iter().map(String::as_str));
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.list_resources().is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = Store::new();
        store.insert_resource(Resource::new("orders"));

        assert!(store.contains("orders"));
        assert_eq!(store.get_resource("orders").unwrap().name, "orders");
    }

    #[test]
    fn test_get_missing_resource() {
        let store = Store::new();
        assert!(matches!(
            store.get_resource("missing"),
            Err(RestmapError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn test_is_ancestor_walks_chain() {
        let mut store = Store::new();
        let mut a = Resource::new("a");
        let mut b = Resource::new("b");
        let c = Resource::new("c");
        a.parents.insert("b".to_string());
        b.parents.insert("c".to_string());
        store.insert_resource(a);
        store.insert_resource(b);
        store.insert_resource(c);

        assert!(store.is_ancestor("b", "a"));
        assert!(store.is_ancestor("c", "a"));
        assert!(!store.is_ancestor("a", "c"));
        assert!(!store.is_ancestor("a", "a"));
    }

    #[test]
    fn test_is_ancestor_survives_cycles() {
        let mut store = Store::new();
        let mut a = Resource::new("a");
        let mut b = Resource::new("b");
        a.parents.insert("b".to_string());
        b.parents.insert("a".to_string());
        store.insert_resource(a);
        store.insert_resource(b);

        assert!(store.is_ancestor("a", "a"));
        assert!(store.is_ancestor("b", "a"));
    }
}
