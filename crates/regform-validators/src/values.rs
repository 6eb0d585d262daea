//! Sources of current field values

use crate::field::FieldKey;

/// Anything that can report the current text of a field.
///
/// Validators read through this trait at validation time, so the
/// confirm-password check always compares against the live password value.
pub trait ValueSource {
	fn value(&self, key: FieldKey) -> String;
}

/// Plain snapshot of the five field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
	values: [String; 5],
}

impl FormValues {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style setter.
	pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
		self.set(key, value);
		self
	}

	pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
		self.values[key.index()] = value.into();
	}

	pub fn get(&self, key: FieldKey) -> &str {
		&self.values[key.index()]
	}

	/// Copy every field out of another source.
	pub fn capture<S: ValueSource + ?Sized>(source: &S) -> Self {
		let mut values = Self::new();
		for key in FieldKey::ALL {
			values.set(key, source.value(key));
		}
		values
	}
}

impl ValueSource for FormValues {
	fn value(&self, key: FieldKey) -> String {
		self.get(key).to_string()
	}
}
