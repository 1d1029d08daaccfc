use serde_json::json;

use super::*;

fn record(value: Value) -> Record {
	match value {
		Value::Object(map) => map,
		other => panic!("expected object, got {other}"),
	}
}

#[test]
fn absent_fields_are_suppressed_by_default() {
	let input = record(json!({"name": "Jane", "age": 30, "email": null}));
	let out = normalize_record(&input, &[], false).expect("record normalizes");

	assert_eq!(Value::Object(out), json!({"name": "Jane", "age": 30}));
}

#[test]
fn keep_null_emits_absent_fields_as_null() {
	let input = record(json!({"name": "Jane", "email": null}));
	let extra = vec!["age".to_owned()];
	let out = normalize_record(&input, &extra, true).expect("record normalizes");

	assert_eq!(Value::Object(out), json!({"name": "Jane", "email": null, "age": null}));
}

#[test]
fn zero_like_values_survive_suppression() {
	let input = record(json!({"count": 0, "flag": false, "label": "", "items": []}));
	let out = normalize_record(&input, &[], false).expect("record normalizes");

	assert_eq!(Value::Object(out), json!({"count": 0, "flag": false, "label": "", "items": []}));
}

#[test]
fn extra_missing_fields_vanish_without_keep_null() {
	let input = record(json!({"name": "Jane"}));
	let extra = vec!["age".to_owned(), "name".to_owned()];
	let out = normalize_record(&input, &extra, false).expect("record normalizes");

	assert_eq!(Value::Object(out), json!({"name": "Jane"}));
}
