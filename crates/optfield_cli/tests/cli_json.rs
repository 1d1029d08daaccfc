#![allow(missing_docs)]

use std::process::{Command, Output};

use optfield_testkit::{fixture_path, object_keys, scratch_file};
use serde_json::{Value, json};

#[test]
fn inspect_json_reports_missing_null_and_present() {
	let fixture = fixture_path("user_nulls.json").display().to_string();
	let json = run_json(&["inspect", &fixture, "--field", "age", "--field", "email", "--field", "phone", "--json"]);

	let fields = json["fields"].as_array().expect("fields array");
	assert_eq!(fields.len(), 3);
	assert_eq!(fields[0], json!({"name": "age", "state": "present", "absent": false, "value": 0}));
	assert_eq!(fields[1]["state"], "null");
	assert_eq!(fields[1]["absent"], true);
	assert_eq!(fields[2]["state"], "missing");
	assert_eq!(fields[2]["value"], Value::Null);
}

#[test]
fn inspect_text_lists_every_key() {
	let fixture = fixture_path("user_partial.json").display().to_string();
	let output = run(&["inspect", &fixture]);
	assert!(output.status.success(), "inspect should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("age\tpresent\t30"), "unexpected output: {stdout}");
	assert!(stdout.contains("name\tpresent\t\"Jane\""), "unexpected output: {stdout}");
}

#[test]
fn normalize_drops_absent_fields() {
	let fixture = fixture_path("chat_request.json").display().to_string();
	let json = run_json(&["normalize", &fixture]);

	assert_eq!(object_keys(&json), vec!["headers", "logit_bias", "model", "stop", "stream", "temperature"]);
	assert_eq!(json["stream"], false);
}

#[test]
fn normalize_keep_null_preserves_absent_keys() {
	let fixture = fixture_path("user_partial.json").display().to_string();
	let json = run_json(&["normalize", &fixture, "--keep-null", "--field", "email"]);

	assert_eq!(json, json!({"name": "Jane", "age": 30, "email": null}));
}

#[test]
fn roundtrip_succeeds_on_fixtures() {
	for name in ["user_partial.json", "user_nulls.json", "chat_request.json"] {
		let fixture = fixture_path(name).display().to_string();
		let output = run(&["roundtrip", &fixture]);
		assert!(
			output.status.success(),
			"roundtrip failed for {name}: {}",
			String::from_utf8_lossy(&output.stderr)
		);
	}
}

#[test]
fn non_object_input_fails_with_message() {
	let fixture = fixture_path("not_object.json").display().to_string();
	let output = run(&["inspect", &fixture]);

	assert!(!output.status.success(), "array input should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("expected a JSON object at top level, got array"), "unexpected stderr: {stderr}");
}

#[test]
fn malformed_json_fails() {
	let scratch = scratch_file("malformed.json", "{\"name\": ");
	let output = run(&["normalize", &scratch.path().display().to_string()]);

	assert!(!output.status.success(), "malformed input should fail");
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: json:"));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_optfield")).args(args).output().expect("optfield command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"optfield command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
