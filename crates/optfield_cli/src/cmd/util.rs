use std::fs;
use std::path::Path;

use optfield::field::OptAny;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{CliError, Result};

/// Top-level JSON object treated as the host record.
pub(crate) type Record = Map<String, Value>;

/// Where a field's decoded state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FieldSource {
	/// Key not in the document.
	Missing,
	/// Key present with a `null` literal.
	Null,
	/// Key present with any other token.
	Present,
}

impl FieldSource {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			Self::Missing => "missing",
			Self::Null => "null",
			Self::Present => "present",
		}
	}
}

/// One record field pushed through [`OptAny`].
#[derive(Debug, Clone)]
pub(crate) struct DecodedField {
	pub name: String,
	pub source: FieldSource,
	pub value: OptAny,
}

/// Read `path` and require a top-level JSON object.
pub(crate) fn load_record(path: &Path) -> Result<Record> {
	let bytes = fs::read(path).map_err(|source| CliError::Io {
		path: path.to_owned(),
		source,
	})?;

	match serde_json::from_slice::<Value>(&bytes)? {
		Value::Object(map) => Ok(map),
		other => Err(CliError::NotAnObject {
			path: path.to_owned(),
			kind: json_kind(&other),
		}),
	}
}

/// Field names to process: `requested` in order (deduplicated), or every key when empty.
pub(crate) fn select_fields(record: &Record, requested: &[String]) -> Vec<String> {
	if requested.is_empty() {
		let mut keys: Vec<String> = record.keys().cloned().collect();
		keys.sort_unstable();
		return keys;
	}

	let mut out: Vec<String> = Vec::with_capacity(requested.len());
	for name in requested {
		if !out.contains(name) {
			out.push(name.clone());
		}
	}
	out
}

/// Decode `name` from `record` the way a host struct field would see it.
///
/// A missing key is fed to the wrapper as empty input, a present key as its
/// re-serialized token.
pub(crate) fn decode_field(record: &Record, name: &str) -> Result<DecodedField> {
	let raw = match record.get(name) {
		Some(token) => serde_json::to_vec(token)?,
		None => Vec::new(),
	};

	let value = OptAny::from_slice(&raw).map_err(|source| CliError::Field {
		name: name.to_owned(),
		source,
	})?;

	let source = if !record.contains_key(name) {
		FieldSource::Missing
	} else if value.is_absent() {
		FieldSource::Null
	} else {
		FieldSource::Present
	};
	tracing::debug!(field = name, source = source.as_str(), "decoded field");

	Ok(DecodedField {
		name: name.to_owned(),
		source,
		value,
	})
}

/// Decode every selected field of `record`.
pub(crate) fn decode_fields(record: &Record, requested: &[String]) -> Result<Vec<DecodedField>> {
	select_fields(record, requested)
		.iter()
		.map(|name| decode_field(record, name))
		.collect()
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}

/// JSON kind label for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
