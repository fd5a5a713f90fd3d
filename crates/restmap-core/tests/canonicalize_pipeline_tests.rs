// Integration tests for the full build() pipeline.
// Covers location resolution, multi-parent distribution, merging passes,
// name simplification, and the renderer-facing queries over the result.

use restmap_core::ops::discovery::{
    add_location_var, add_locations, add_method, add_parent_resource, add_resource,
};
use restmap_core::queries;
use restmap_core::{Canonicalizer, Store};

// ---------------------------------------------------------------------------
// location resolution
// ---------------------------------------------------------------------------

#[test]
fn test_child_location_concatenates_ancestor_chain() {
    let mut store = Store::new();
    add_resource(&mut store, "com.shop.OrdersResource", Some("Order collection"));
    add_locations(&mut store, "com.shop.OrdersResource", &["/orders/"]);
    add_method(
        &mut store,
        "com.shop.OrdersResource",
        "GET",
        None,
        Some("application/json"),
        None,
    )
    .unwrap();

    add_parent_resource(&mut store, "com.shop.OrderResource", "com.shop.OrdersResource");
    add_locations(&mut store, "com.shop.OrderResource", &["{id:[0-9]+}/"]);
    add_location_var(&mut store, "com.shop.OrderResource", "id", Some("order identifier"));
    add_method(
        &mut store,
        "com.shop.OrderResource",
        "GET",
        None,
        Some("application/json"),
        None,
    )
    .unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    // validation pattern stripped, ancestor location prepended, names simplified
    let child = store.get_resource("OrderResource").unwrap();
    assert_eq!(child.locations, vec!["/orders/{id}/"]);
    assert_eq!(child.template_vars.len(), 1);
    assert_eq!(
        child.template_vars[0].documentation.as_deref(),
        Some("order identifier")
    );

    let parent = store.get_resource("OrdersResource").unwrap();
    assert_eq!(parent.locations, vec!["/orders/"]);
    assert_eq!(parent.documentation.as_deref(), Some("Order collection"));
    assert!(parent.children.contains("OrderResource"));
}

#[test]
fn test_template_merge_keeps_specialization() {
    let mut store = Store::new();
    add_locations(&mut store, "items", &["/a/{x}/", "/a/b/"]);
    add_method(&mut store, "items", "GET", None, None, None).unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    assert_eq!(store.get_resource("items").unwrap().locations, vec!["/a/b/"]);
}

#[test]
fn test_equal_templates_collapse_to_first() {
    let mut store = Store::new();
    add_locations(&mut store, "items", &["/a/{x}/", "/a/{y}/"]);

    let store = Canonicalizer::new(store).build().unwrap();

    assert_eq!(
        store.get_resource("items").unwrap().locations,
        vec!["/a/{x}/"]
    );
}

// ---------------------------------------------------------------------------
// multi-parent distribution
// ---------------------------------------------------------------------------

#[test]
fn test_shared_child_is_duplicated_under_each_parent() {
    let mut store = Store::new();
    add_locations(&mut store, "com.api.OrdersResource", &["/orders/"]);
    add_locations(&mut store, "com.api.CartsResource", &["/carts/"]);
    add_parent_resource(&mut store, "com.api.StatusResource", "com.api.OrdersResource");
    add_parent_resource(&mut store, "com.api.StatusResource", "com.api.CartsResource");
    add_locations(&mut store, "com.api.StatusResource", &["status/"]);
    add_method(&mut store, "com.api.StatusResource", "GET", None, None, None).unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    let locations: Vec<String> = store
        .list_resources()
        .into_iter()
        .filter(|resource| resource.has_methods())
        .filter_map(|resource| resource.location().map(str::to_string))
        .collect();
    assert!(locations.contains(&"/orders/status/".to_string()));
    assert!(locations.contains(&"/carts/status/".to_string()));

    for resource in store.list_resources() {
        assert!(resource.parents.len() <= 1);
    }
}

// ---------------------------------------------------------------------------
// splitting and merging
// ---------------------------------------------------------------------------

#[test]
fn test_root_with_two_locations_is_split() {
    let mut store = Store::new();
    add_locations(&mut store, "admin", &["/users/", "/groups/"]);
    add_method(&mut store, "admin", "GET", None, None, None).unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    assert!(!store.contains("admin"));
    let with_methods = queries::resources_with_methods(&store);
    assert_eq!(with_methods.len(), 2);
    for resource in with_methods {
        assert_eq!(resource.locations.len(), 1);
        assert_eq!(resource.methods.len(), 1);
    }
}

#[test]
fn test_siblings_with_same_location_collapse() {
    let mut store = Store::new();
    add_locations(&mut store, "api.Root", &["/api/"]);
    add_parent_resource(&mut store, "api.OrderReader", "api.Root");
    add_parent_resource(&mut store, "api.OrderWriter", "api.Root");
    add_locations(&mut store, "api.OrderReader", &["orders/"]);
    add_locations(&mut store, "api.OrderWriter", &["orders/"]);
    add_method(&mut store, "api.OrderReader", "GET", None, None, None).unwrap();
    add_method(&mut store, "api.OrderWriter", "PUT", None, None, None).unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    let merged: Vec<_> = store
        .list_resources()
        .into_iter()
        .filter(|resource| resource.location() == Some("/api/orders/"))
        .collect();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].methods.len(), 2);
}

#[test]
fn test_no_two_mergeable_resources_share_a_location() {
    let mut store = Store::new();
    add_locations(&mut store, "reader", &["/items/"]);
    add_locations(&mut store, "writer", &["/items/"]);
    add_method(&mut store, "reader", "GET", None, None, None).unwrap();
    add_method(&mut store, "writer", "DELETE", None, None, None).unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    let at_location: Vec<_> = store
        .list_resources()
        .into_iter()
        .filter(|resource| resource.location() == Some("/items/"))
        .collect();
    assert_eq!(at_location.len(), 1);
    assert_eq!(at_location[0].methods.len(), 2);
}

// ---------------------------------------------------------------------------
// queries over the canonical model
// ---------------------------------------------------------------------------

#[test]
fn test_render_queries_over_finished_model() {
    let mut store = Store::new();
    add_locations(&mut store, "com.shop.CartResource", &["/carts/"]);
    add_method(
        &mut store,
        "com.shop.CartResource",
        "POST",
        Some("application/xml"),
        None,
        Some("create a cart"),
    )
    .unwrap();
    add_locations(&mut store, "com.shop.OrdersResource", &["/orders/"]);
    add_method(
        &mut store,
        "com.shop.OrdersResource",
        "GET",
        None,
        Some("application/json"),
        None,
    )
    .unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    let ordered: Vec<String> = queries::resources_with_methods(&store)
        .iter()
        .filter_map(|resource| resource.location().map(str::to_string))
        .collect();
    assert_eq!(ordered, vec!["/carts/", "/orders/"]);

    assert_eq!(
        queries::media_types(&store),
        vec!["application/json", "application/xml"]
    );

    let cart_name = queries::resources_with_methods(&store)[0].name.clone();
    assert_eq!(queries::friendly_name_of(&store, &cart_name).unwrap(), "Cart");
    assert_eq!(
        queries::methods_of(&store, &cart_name).unwrap()[0].documentation(),
        Some("create a cart")
    );
}

#[test]
fn test_wildcard_media_type_reports_nothing() {
    let mut store = Store::new();
    add_locations(&mut store, "items", &["/items/"]);
    add_method(&mut store, "items", "GET", Some("*/*"), None, None).unwrap();

    let store = Canonicalizer::new(store).build().unwrap();

    assert!(queries::media_types(&store).is_empty());
    let methods = queries::methods_of(&store, "items").unwrap();
    assert!(methods[0].consumed_representations().is_empty());
}
