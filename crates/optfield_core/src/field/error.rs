use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors produced while encoding or decoding an [`Optional`](super::Optional).
#[derive(Debug, Error)]
pub enum FieldError {
	/// The wrapped value's own encoder rejected it.
	#[error("encode {type_name}: {source}")]
	Encode {
		/// Rust type name of the wrapped value.
		type_name: &'static str,
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Input could not be interpreted as the wrapped type.
	#[error("decode {type_name}: {source}")]
	Decode {
		/// Rust type name of the wrapped value.
		type_name: &'static str,
		/// Underlying deserializer failure.
		#[source]
		source: serde_json::Error,
	},
}

impl FieldError {
	pub(crate) fn encode<T>(source: serde_json::Error) -> Self {
		Self::Encode {
			type_name: std::any::type_name::<T>(),
			source,
		}
	}

	pub(crate) fn decode<T>(source: serde_json::Error) -> Self {
		Self::Decode {
			type_name: std::any::type_name::<T>(),
			source,
		}
	}

	/// Whether this error came from the decode direction.
	pub fn is_decode(&self) -> bool {
		matches!(self, Self::Decode { .. })
	}
}
