use std::path::PathBuf;

use serde_json::Value;

use crate::cmd::util::{DecodedField, FieldSource, decode_fields, emit_json, load_record};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Restrict the report to these fields (repeatable); unknown names report as missing.
	#[arg(long = "field")]
	pub fields: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Print the decoded state of each record field.
pub fn run(args: Args) -> Result<()> {
	let Args { path, fields, json } = args;

	let record = load_record(&path)?;
	let decoded = decode_fields(&record, &fields)?;

	if json {
		let payload = InspectJson {
			path: path.display().to_string(),
			fields: decoded.iter().map(field_json).collect::<Result<_>>()?,
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	for field in &decoded {
		println!("{}\t{}\t{}", field.name, field.source.as_str(), render_value(field)?);
	}

	Ok(())
}

fn field_json(field: &DecodedField) -> Result<FieldJson> {
	Ok(FieldJson {
		name: field.name.clone(),
		state: field.source,
		absent: field.value.is_absent(),
		value: encoded_value(field)?,
	})
}

/// Wrapper encoding of the field: the token itself, or `null` when absent.
fn encoded_value(field: &DecodedField) -> Result<Value> {
	field.value.to_json_value().map_err(|source| CliError::Field {
		name: field.name.clone(),
		source,
	})
}

fn render_value(field: &DecodedField) -> Result<String> {
	if field.source == FieldSource::Missing {
		return Ok("-".to_owned());
	}

	field.value.encode_to_string().map_err(|source| CliError::Field {
		name: field.name.clone(),
		source,
	})
}

#[derive(serde::Serialize)]
struct InspectJson {
	path: String,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	state: FieldSource,
	absent: bool,
	value: Value,
}
