//! Field identity and per-field validity state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of one of the five registration form inputs.
///
/// Variants are declared in form order; [`FieldKey::ALL`] and the derived
/// `Ord` both follow it, so "first invalid field" is simply the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
	Name,
	Email,
	Password,
	ConfirmPassword,
	Message,
}

impl FieldKey {
	/// All keys in form order.
	pub const ALL: [FieldKey; 5] = [
		FieldKey::Name,
		FieldKey::Email,
		FieldKey::Password,
		FieldKey::ConfirmPassword,
		FieldKey::Message,
	];

	/// Identifier used for the input element and in serialized config.
	///
	/// # Examples
	///
	/// ```
	/// use regform_validators::FieldKey;
	///
	/// assert_eq!(FieldKey::ConfirmPassword.as_str(), "confirmPassword");
	/// ```
	pub const fn as_str(self) -> &'static str {
		match self {
			FieldKey::Name => "name",
			FieldKey::Email => "email",
			FieldKey::Password => "password",
			FieldKey::ConfirmPassword => "confirmPassword",
			FieldKey::Message => "message",
		}
	}

	/// Resolve an element id back to a key.
	///
	/// Returns `None` for ids outside the form; callers treat such elements
	/// as having nothing to validate.
	///
	/// # Examples
	///
	/// ```
	/// use regform_validators::FieldKey;
	///
	/// assert_eq!(FieldKey::from_id("email"), Some(FieldKey::Email));
	/// assert_eq!(FieldKey::from_id("newsletter"), None);
	/// ```
	pub fn from_id(id: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|key| key.as_str() == id)
	}

	/// Position of the key in form order.
	pub const fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for FieldKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Validity of a single field as last rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityState {
	/// Never validated since load or the last reset.
	#[default]
	Untouched,
	Valid,
	Invalid,
}

impl ValidityState {
	pub fn from_valid(valid: bool) -> Self {
		if valid { Self::Valid } else { Self::Invalid }
	}

	pub fn is_invalid(self) -> bool {
		self == Self::Invalid
	}
}
