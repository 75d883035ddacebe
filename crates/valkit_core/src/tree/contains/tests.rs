use crate::tree::{Value, value_contains};

fn json(text: &str) -> Value {
	Value::from_json_str(text).expect("test json parses")
}

#[test]
fn substring_ignores_whitespace_and_case() {
	assert!(value_contains(&Value::from("foo bar"), &Value::from("xfoobary")));
	assert!(value_contains(&Value::from("FOO"), &Value::from("a foo b")));
	assert!(value_contains(&Value::from("foo\tbar"), &Value::from("FOO\nBAR")));
	assert!(!value_contains(&Value::from("hello"), &Value::from("world")));
}

#[test]
fn empty_needle_string_is_always_contained() {
	assert!(value_contains(&Value::from(""), &Value::from("anything")));
	assert!(value_contains(&Value::from("   "), &Value::from("")));
}

#[test]
fn strings_contain_themselves() {
	for text in ["", "a", "Mixed Case", "ünïcödé"] {
		assert!(value_contains(&Value::from(text), &Value::from(text)), "{text:?} should contain itself");
	}
}

#[test]
fn sequence_elements_match_anywhere() {
	assert!(value_contains(&json("[1]"), &json("[2, 1, 3]")));
	assert!(value_contains(&json("[3, 1]"), &json("[1, 2, 3]")));
	assert!(!value_contains(&json("[1, 4]"), &json("[1, 2]")));
	assert!(value_contains(&json("[]"), &json("[1]")));
	assert!(!value_contains(&json("[1]"), &json("[]")));
}

#[test]
fn sequence_elements_use_substring_semantics() {
	assert!(value_contains(&json(r#"["Blue", "red"]"#), &json(r#"["dark blue", "bright red"]"#)));
	assert!(!value_contains(&json(r#"["green"]"#), &json(r#"["dark blue", "bright red"]"#)));
}

#[test]
fn mapping_values_are_contained_per_key() {
	let haystack = json(r#"{"name": "Alice Liddell", "tags": ["a", "b", "c"], "age": 7}"#);
	assert!(value_contains(&json(r#"{"name": "alice"}"#), &haystack));
	assert!(value_contains(&json(r#"{"tags": ["c", "a"], "age": 7}"#), &haystack));
	assert!(!value_contains(&json(r#"{"name": "bob"}"#), &haystack));
	assert!(!value_contains(&json(r#"{"missing": 1}"#), &haystack));
	assert!(!value_contains(&json(r#"{"age": 8}"#), &haystack));
}

#[test]
fn nested_structures_recurse() {
	let haystack = json(r#"{"items": [{"title": "The Big Sleep", "year": 1939}, {"title": "Farewell"}]}"#);
	assert!(value_contains(&json(r#"{"items": [{"title": "bigsleep"}]}"#), &haystack));
	assert!(!value_contains(&json(r#"{"items": [{"title": "bigsleep", "year": 1940}]}"#), &haystack));
}

#[test]
fn scalars_defer_to_match() {
	assert!(value_contains(&Value::from(5), &Value::from(5)));
	assert!(!value_contains(&Value::from(5), &Value::from(6)));
	assert!(value_contains(&Value::Null, &Value::Null));
	assert!(value_contains(&Value::I64(2), &Value::F64(2.0)));
	assert!(!value_contains(&Value::from("5"), &Value::from(5)));
	assert!(!value_contains(&json("[5]"), &Value::from(5)));
}
