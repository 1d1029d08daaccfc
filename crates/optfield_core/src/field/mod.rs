mod codec;
mod error;
mod optional;
mod serde_impl;
mod types;

/// Error and result aliases.
pub use error::{FieldError, Result};
/// Generic optional wrapper.
pub use optional::Optional;
/// Named instantiations for common scalar and mapping types.
pub use types::{OptAny, OptBool, OptFloat64, OptInt, OptMapIntInt, OptMapStringAny, OptMapStringString, OptString};
