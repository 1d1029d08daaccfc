/// Value that may be absent from a source document.
///
/// Two states: absent (key missing or `null`) and present. The stored value is
/// always readable; while absent it equals `T::default()`, so absence never
/// leaves a stale value behind.
///
/// Presence is tracked separately from the value, so `Optional::present(false)`
/// and `Optional::present(0)` are distinct from the absent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Optional<T> {
	set: bool,
	value: T,
}

impl<T> Optional<T> {
	/// Present optional holding `value`.
	pub const fn present(value: T) -> Self {
		Self { set: true, value }
	}

	/// Whether no value has been supplied.
	pub const fn is_absent(&self) -> bool {
		!self.set
	}

	/// Whether a value has been supplied.
	pub const fn is_present(&self) -> bool {
		self.set
	}

	/// Stored value; `T::default()` while absent.
	pub const fn value(&self) -> &T {
		&self.value
	}

	/// Stored value when present.
	pub fn get(&self) -> Option<&T> {
		self.set.then_some(&self.value)
	}

	/// Same as [`get`](Self::get), for call sites that read as `Option` conversions.
	pub fn as_option(&self) -> Option<&T> {
		self.get()
	}

	/// Mutable access to the stored value when present.
	pub fn get_mut(&mut self) -> Option<&mut T> {
		if self.set { Some(&mut self.value) } else { None }
	}

	/// Stored value when present, otherwise `fallback`.
	pub fn value_or<'a>(&'a self, fallback: &'a T) -> &'a T {
		if self.set { &self.value } else { fallback }
	}

	/// Assign `value` and mark present.
	pub fn set(&mut self, value: T) {
		self.value = value;
		self.set = true;
	}

	/// Consume into `Option<T>`.
	pub fn into_option(self) -> Option<T> {
		if self.set { Some(self.value) } else { None }
	}

	/// Consume into the stored value, `T::default()` when absent.
	pub fn into_value(self) -> T {
		self.value
	}
}

impl<T: Default> Optional<T> {
	/// Absent optional holding `T::default()`.
	pub fn absent() -> Self {
		Self::default()
	}

	/// Build from `Option<T>`; `None` maps to absent.
	pub fn from_option(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::present(value),
			None => Self::absent(),
		}
	}

	/// Reset to absent.
	pub fn clear(&mut self) {
		self.set = false;
		self.value = T::default();
	}

	/// Take the value out, leaving the optional absent.
	pub fn take(&mut self) -> Option<T> {
		std::mem::take(self).into_option()
	}

	/// Store `value`, returning the previous value if one was present.
	pub fn replace(&mut self, value: T) -> Option<T> {
		std::mem::replace(self, Self::present(value)).into_option()
	}

	/// Apply `f` to a present value; absent stays absent.
	pub fn map<U, F>(self, f: F) -> Optional<U>
	where
		U: Default,
		F: FnOnce(T) -> U,
	{
		Optional::from_option(self.into_option().map(f))
	}
}

impl<T: Default> From<Option<T>> for Optional<T> {
	fn from(value: Option<T>) -> Self {
		Self::from_option(value)
	}
}

impl<T> From<Optional<T>> for Option<T> {
	fn from(value: Optional<T>) -> Self {
		value.into_option()
	}
}
