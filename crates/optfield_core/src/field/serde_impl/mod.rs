use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::field::Optional;

// Absent -> none, present -> some(value). Whether an absent field's key is
// written at all is the host's call (`skip_serializing_if = "Optional::is_absent"`).
impl<T: Serialize> Serialize for Optional<T> {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self.get() {
			Some(value) => serializer.serialize_some(value),
			None => serializer.serialize_none(),
		}
	}
}

// Derived host structs answer a missing key through `deserialize_option`, so a
// missing key lands here as `None` just like an explicit `null`.
impl<'de, T> Deserialize<'de> for Optional<T>
where
	T: Deserialize<'de> + Default,
{
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Option::<T>::deserialize(deserializer).map(Optional::from_option)
	}
}
