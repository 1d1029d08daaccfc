use std::path::PathBuf;

use serde_json::Value;

use crate::cmd::util::{Record, decode_field, emit_json, load_record};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Emit absent fields as explicit `null` instead of omitting their keys.
	#[arg(long)]
	pub keep_null: bool,
	/// Extra field names to include even when missing from the document (repeatable).
	#[arg(long = "field")]
	pub fields: Vec<String>,
}

/// Re-encode the record with every field passed through the optional wrapper.
pub fn run(args: Args) -> Result<()> {
	let Args { path, keep_null, fields } = args;

	let record = load_record(&path)?;
	let normalized = normalize_record(&record, &fields, keep_null)?;
	emit_json(&Value::Object(normalized))
}

/// Decode each field of `record` (plus `extra` names) and re-encode.
///
/// Absent fields are dropped unless `keep_null` is set, in which case they are
/// written as `null`.
pub(crate) fn normalize_record(record: &Record, extra: &[String], keep_null: bool) -> Result<Record> {
	let mut names: Vec<&str> = record.keys().map(String::as_str).collect();
	for name in extra {
		if !record.contains_key(name) && !names.contains(&name.as_str()) {
			names.push(name.as_str());
		}
	}

	let mut out = Record::new();
	for name in names {
		let field = decode_field(record, name)?;
		if field.value.is_absent() && !keep_null {
			tracing::debug!(field = name, "suppressing absent field");
			continue;
		}

		let encoded = field.value.to_json_value().map_err(|source| CliError::Field {
			name: field.name.clone(),
			source,
		})?;
		out.insert(field.name, encoded);
	}

	Ok(out)
}

#[cfg(test)]
mod tests;
