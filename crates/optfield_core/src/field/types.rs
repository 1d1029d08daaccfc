//! Named instantiations of [`Optional`] for the shapes API records use most.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::field::Optional;

/// Optional UTF-8 string.
pub type OptString = Optional<String>;

/// Optional signed integer.
pub type OptInt = Optional<i64>;

/// Optional 64-bit float.
pub type OptFloat64 = Optional<f64>;

/// Optional boolean; `present(false)` is distinct from absent.
pub type OptBool = Optional<bool>;

/// Optional arbitrary JSON value. A JSON `null` decodes to absent, never to
/// `present(Value::Null)`.
pub type OptAny = Optional<Value>;

/// Optional string-keyed map of arbitrary JSON values.
pub type OptMapStringAny = Optional<BTreeMap<String, Value>>;

/// Optional string-to-string map.
pub type OptMapStringString = Optional<BTreeMap<String, String>>;

/// Optional integer-to-integer map. Keys travel as JSON object keys (`"1"`).
pub type OptMapIntInt = Optional<BTreeMap<i64, i64>>;
