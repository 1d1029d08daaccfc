use std::path::PathBuf;

use optfield::field::{FieldError, OptAny};

use crate::cmd::util::{DecodedField, decode_fields, load_record};
use crate::error::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Restrict the check to these fields (repeatable).
	#[arg(long = "field")]
	pub fields: Vec<String>,
}

/// Encode and re-decode every field, failing on any state change.
pub fn run(args: Args) -> Result<()> {
	let Args { path, fields } = args;

	let record = load_record(&path)?;
	let decoded = decode_fields(&record, &fields)?;
	let mismatches = find_mismatches(&decoded)?;

	if !mismatches.is_empty() {
		return Err(CliError::RoundTripMismatch {
			count: mismatches.len(),
			fields: mismatches,
		});
	}

	println!("ok: {} field(s) stable in {}", decoded.len(), path.display());
	Ok(())
}

/// Names of fields whose wrapper state differs after encode then decode.
pub(crate) fn find_mismatches(fields: &[DecodedField]) -> Result<Vec<String>> {
	let mut out = Vec::new();

	for field in fields {
		let field_error = |source: FieldError| CliError::Field {
			name: field.name.clone(),
			source,
		};
		let encoded = field.value.encode().map_err(field_error)?;
		let again = OptAny::from_slice(&encoded).map_err(field_error)?;

		if again != field.value {
			tracing::warn!(field = field.name.as_str(), "round-trip changed field state");
			out.push(field.name.clone());
		}
	}

	Ok(out)
}
