//! Discovery mutators
//!
//! Entry points for the source-code scanner. Facts arrive in any order and
//! repeated calls with identical arguments are idempotent. Resources are
//! created on demand, so a parent edge or a method may be recorded before
//! the resource itself is announced.
//!
//! Names containing a configured ignorable dot-segment are silently dropped,
//! never reported. A parent edge that closes a cycle is logged as an error
//! but still recorded; the canonicalizer resolves it structurally.

use crate::model::Method;
use crate::template;

use super::Store;
use crate::errors::Result;

/// Register a resource, optionally overwriting its documentation
///
/// Dropped if any dot-segment of `name` is ignorable. A non-null `doc`
/// overwrites prior documentation (last write wins).
pub fn add_resource(store: &mut Store, name: &str, doc: Option<&str>) {
    if store.config.is_ignorable(name) {
        return;
    }
    log_discovery(store, name, "add_resource");
    let resource = store.ensure_resource(name);
    if doc.is_some() {
        resource.documentation = doc.map(str::to_string);
    }
}

/// Record a parent/child edge between two resources
///
/// Dropped if either name is ignorable or the edge is a self-parent. An edge
/// that closes a parent-chain cycle is logged as an error but still recorded;
/// structural resolution is deferred to `build()`.
pub fn add_parent_resource(store: &mut Store, child: &str, parent: &str) {
    if child == parent {
        return;
    }
    if store.config.is_ignorable(child) || store.config.is_ignorable(parent) {
        return;
    }
    if store.is_ancestor(child, parent) {
        tracing::error!(
            child,
            parent,
            "parent edge closes a cycle in the resource graph"
        );
    }
    log_discovery(store, child, "add_parent_resource");
    store.ensure_resource(parent).children.insert(child.to_string());
    store.ensure_resource(child).parents.insert(parent.to_string());
}

/// Union raw locations into a resource's existing location set
///
/// Dropped if the name is ignorable. Each raw address has any trailing
/// validation pattern on a template variable stripped (`{v:regex}` -> `{v}`).
pub fn add_locations(store: &mut Store, name: &str, locations: &[&str]) {
    if store.config.is_ignorable(name) {
        return;
    }
    log_discovery(store, name, "add_locations");
    let resource = store.ensure_resource(name);
    for location in locations {
        resource.add_location(template::strip_validation_patterns(location));
    }
}

/// Replace a resource's locations with the given set
///
/// Same stripping as [`add_locations`], but existing locations are cleared
/// first (override semantics).
pub fn set_locations(store: &mut Store, name: &str, locations: &[&str]) {
    if store.config.is_ignorable(name) {
        return;
    }
    log_discovery(store, name, "set_locations");
    let resource = store.ensure_resource(name);
    resource.locations.clear();
    for location in locations {
        resource.add_location(template::strip_validation_patterns(location));
    }
}

/// Record a location-template variable on a resource
///
/// Insert-or-replace: a later write with an equal or absent documentation is
/// a no-op, otherwise the richer documentation wins and the variable moves
/// to the end of the list.
pub fn add_location_var(store: &mut Store, name: &str, var_name: &str, doc: Option<&str>) {
    if store.config.is_ignorable(name) {
        return;
    }
    log_discovery(store, name, "add_location_var");
    store.ensure_resource(name).set_template_var(var_name, doc);
}

/// Record a method discovered on a resource
///
/// Dropped if the resource name is ignorable. A method of the same name is
/// combined with the incoming one, so repeated discovery accumulates media
/// types rather than overwriting.
///
/// # Errors
///
/// Returns `EmptyMethodName` if `method` is empty or blank.
pub fn add_method(
    store: &mut Store,
    name: &str,
    method: &str,
    consumes: Option<&str>,
    produces: Option<&str>,
    doc: Option<&str>,
) -> Result<()> {
    let method = Method::new(
        method,
        doc.map(str::to_string),
        consumes.map(str::to_string),
        produces.map(str::to_string),
    )?;
    if store.config.is_ignorable(name) {
        return Ok(());
    }
    log_discovery(store, name, "add_method");
    store.ensure_resource(name).merge_method(method)
}

fn log_discovery(store: &Store, name: &str, op: &str) {
    if store.config.should_log(name) {
        tracing::debug!(resource = name, op, "discovery event");
    }
}
