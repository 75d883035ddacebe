#![allow(missing_docs)]

use valkit::tree::{FlattenOptions, Mapping, Value, flatten_dict, flatten_value};
use valkit_testkit::load_json_fixture;

fn fixture_map(name: &str) -> Mapping {
	match Value::from(load_json_fixture(name)) {
		Value::Map(map) => map,
		other => panic!("{name} should hold a map, found {}", other.kind()),
	}
}

#[test]
fn catalog_flattens_to_expected_keys_in_order() {
	let catalog = fixture_map("catalog.json");
	let expected = fixture_map("catalog_flat.json");

	let out = flatten_dict(&catalog, "", "_");
	assert_eq!(out, expected);
	assert_eq!(out.keys().collect::<Vec<_>>(), expected.keys().collect::<Vec<_>>());
	assert!(out.values().all(Value::is_scalar), "flattened values must be scalars");
}

#[test]
fn flattening_flat_output_is_a_no_op() {
	let expected = fixture_map("catalog_flat.json");
	assert_eq!(flatten_dict(&expected, "", "_"), expected);
}

#[test]
fn flattened_catalog_serializes_as_json_object() {
	let catalog = Value::from(load_json_fixture("catalog.json"));
	let out = flatten_value(&catalog, &FlattenOptions::with_separator(".")).expect("catalog flattens");

	let json = serde_json::to_value(&out).expect("flattened map serializes");
	assert_eq!(json["address.geo.lat"], serde_json::json!(55.95));
	assert_eq!(json["books_0.tags_1"], serde_json::json!("Detective"));
	assert_eq!(json["shelves_1_0"], serde_json::json!(3));
}
