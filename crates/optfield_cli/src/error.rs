use std::path::PathBuf;

use optfield::field::FieldError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `optfield` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading the input document failed.
	#[error("read {path}: {source}")]
	Io {
		/// Input path.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
	/// Input was not valid JSON, or output could not be rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A field failed to encode or decode through the optional wrapper.
	#[error("field {name}: {source}")]
	Field {
		/// Field name within the record.
		name: String,
		/// Wrapper failure.
		#[source]
		source: FieldError,
	},
	/// Top-level JSON value was not an object.
	#[error("{path}: expected a JSON object at top level, got {kind}")]
	NotAnObject {
		/// Input path.
		path: PathBuf,
		/// JSON kind actually found.
		kind: &'static str,
	},
	/// Fields whose state changed across an encode/decode cycle.
	#[error("round-trip mismatch in {count} field(s): {}", .fields.join(", "))]
	RoundTripMismatch {
		/// Number of mismatched fields.
		count: usize,
		/// Mismatched field names.
		fields: Vec<String>,
	},
}
