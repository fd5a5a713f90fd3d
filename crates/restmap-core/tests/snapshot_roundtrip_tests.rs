// Integration tests for the snapshot round-trip contract: every store
// attribute survives serialize/deserialize exactly, and tampering is caught.

use restmap_core::ops::discovery::{
    add_location_var, add_locations, add_method, add_parent_resource, add_resource,
};
use restmap_core::{snapshot, Canonicalizer, Config, Store};

fn rich_store() -> Store {
    let mut config = Config::new();
    config.apply_option("name-overrides", "order:PlacedOrder");
    config.apply_option("ignorable-package-parts", "com");
    config.apply_option("logged-names", "Order");

    let mut store = Store::with_config(config);
    add_resource(&mut store, "com.shop.OrdersResource", Some("Order collection"));
    add_locations(&mut store, "com.shop.OrdersResource", &["/orders/"]);
    add_parent_resource(&mut store, "com.shop.OrderResource", "com.shop.OrdersResource");
    add_locations(&mut store, "com.shop.OrderResource", &["{id:[0-9]+}/"]);
    add_location_var(&mut store, "com.shop.OrderResource", "id", Some("order identifier"));
    add_method(
        &mut store,
        "com.shop.OrderResource",
        "GET",
        None,
        Some("application/json,\"application/xml\""),
        Some("read one order"),
    )
    .unwrap();
    add_method(
        &mut store,
        "com.shop.OrdersResource",
        "POST",
        Some("application/json"),
        None,
        None,
    )
    .unwrap();
    store
}

#[test]
fn test_raw_store_roundtrips_exactly() {
    let store = rich_store();

    let snap = snapshot::snapshot(&store).unwrap();
    let json = snapshot::to_json(&snap).unwrap();
    let restored = snapshot::restore(&snapshot::from_json(&json).unwrap()).unwrap();

    // structural comparison over the serialized form catches every attribute,
    // including ones the name-keyed Method equality would miss
    assert_eq!(
        serde_json::to_value(&store).unwrap(),
        serde_json::to_value(&restored).unwrap()
    );
}

#[test]
fn test_canonical_store_roundtrips_exactly() {
    let store = Canonicalizer::new(rich_store()).build().unwrap();

    let snap = snapshot::snapshot(&store).unwrap();
    let json = snapshot::to_json(&snap).unwrap();
    let restored = snapshot::restore(&snapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(
        serde_json::to_value(&store).unwrap(),
        serde_json::to_value(&restored).unwrap()
    );
}

#[test]
fn test_semantic_digest_is_stable_across_snapshot_times() {
    let store = rich_store();

    let first = snapshot::snapshot(&store).unwrap();
    let second = snapshot::snapshot(&store).unwrap();

    assert_eq!(first.semantic_digest, second.semantic_digest);
}

#[test]
fn test_tampered_payload_fails_restore() {
    let snap = snapshot::snapshot(&rich_store()).unwrap();
    let mut parsed = snapshot::from_json(&snapshot::to_json(&snap).unwrap()).unwrap();
    add_resource(&mut parsed.store, "injected", None);

    assert!(snapshot::restore(&parsed).is_err());
}

#[test]
fn test_garbage_json_is_a_serialization_error() {
    assert!(matches!(
        snapshot::from_json("{not json"),
        Err(restmap_core::RestmapError::Serialization { .. })
    ));
}
