use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde_json::Value;

use crate::field::{FieldError, Optional, Result};

/// JSON literal emitted for an absent optional.
const NULL_LITERAL: &[u8] = b"null";

impl<T: Serialize> Optional<T> {
	/// Encode to JSON bytes: `null` when absent, the value's own encoding otherwise.
	///
	/// A present value whose encoding is `null` (a non-finite float, or
	/// `Value::Null`) is rejected, since it would decode back as absent.
	pub fn encode(&self) -> Result<Vec<u8>> {
		match self.get() {
			Some(value) => {
				let out = serde_json::to_vec(value).map_err(FieldError::encode::<T>)?;
				reject_null::<T>(out.as_slice() == NULL_LITERAL)?;
				Ok(out)
			}
			None => Ok(NULL_LITERAL.to_vec()),
		}
	}

	/// Encode to a JSON string.
	pub fn encode_to_string(&self) -> Result<String> {
		match self.get() {
			Some(value) => {
				let out = serde_json::to_string(value).map_err(FieldError::encode::<T>)?;
				reject_null::<T>(out.as_bytes() == NULL_LITERAL)?;
				Ok(out)
			}
			None => Ok("null".to_owned()),
		}
	}

	/// Encode to a parsed JSON tree; absent becomes [`Value::Null`].
	pub fn to_json_value(&self) -> Result<Value> {
		match self.get() {
			Some(value) => {
				let out = serde_json::to_value(value).map_err(FieldError::encode::<T>)?;
				reject_null::<T>(out.is_null())?;
				Ok(out)
			}
			None => Ok(Value::Null),
		}
	}
}

fn reject_null<T>(is_null: bool) -> Result<()> {
	if is_null {
		return Err(FieldError::encode::<T>(serde_json::Error::custom(
			"present value encodes as null and would decode as absent",
		)));
	}
	Ok(())
}

impl<T: DeserializeOwned + Default> Optional<T> {
	/// Decode one JSON token into `self`.
	///
	/// Empty input and `null` reset to absent. Any other token must decode as
	/// `T`; on failure `self` is left exactly as it was.
	pub fn decode(&mut self, input: &[u8]) -> Result<()> {
		if input.is_empty() {
			self.clear();
			return Ok(());
		}

		let decoded = serde_json::from_slice::<Option<T>>(input).map_err(FieldError::decode::<T>)?;
		*self = Self::from_option(decoded);
		Ok(())
	}

	/// Decode one JSON token from text into `self`.
	pub fn decode_str(&mut self, input: &str) -> Result<()> {
		self.decode(input.as_bytes())
	}

	/// Decode a fresh optional from JSON bytes.
	pub fn from_slice(input: &[u8]) -> Result<Self> {
		let mut out = Self::absent();
		out.decode(input)?;
		Ok(out)
	}

	/// Decode a fresh optional from a parsed JSON tree; [`Value::Null`] is absent.
	pub fn from_json_value(value: Value) -> Result<Self> {
		serde_json::from_value::<Option<T>>(value)
			.map(Self::from_option)
			.map_err(FieldError::decode::<T>)
	}
}
