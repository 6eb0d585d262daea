//! Whole-form validation pass

use crate::field::FieldKey;
use crate::validators::{FieldError, FieldResult, validate_field};
use crate::values::ValueSource;

/// Result of validating every field once, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
	results: [FieldResult; 5],
}

impl FormReport {
	pub fn result(&self, key: FieldKey) -> &FieldResult {
		&self.results[key.index()]
	}

	/// Logical AND over all fields.
	pub fn is_valid(&self) -> bool {
		self.results.iter().all(Result::is_ok)
	}

	/// First failing field in form order.
	pub fn first_invalid(&self) -> Option<FieldKey> {
		FieldKey::ALL
			.into_iter()
			.find(|key| self.result(*key).is_err())
	}

	/// `(key, result)` pairs in form order.
	pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldResult)> {
		FieldKey::ALL.into_iter().zip(self.results.iter())
	}

	pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
		self.results.iter().filter_map(|result| result.as_ref().err())
	}
}

/// Run every validator against `source`, without short-circuiting across
/// fields.
pub fn validate_all<S: ValueSource + ?Sized>(source: &S) -> FormReport {
	FormReport {
		results: FieldKey::ALL.map(|key| validate_field(key, source)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::Failure;
	use crate::values::FormValues;
	use rstest::{fixture, rstest};

	#[fixture]
	fn complete() -> FormValues {
		FormValues::new()
			.with(FieldKey::Name, "Ann")
			.with(FieldKey::Email, "ann@example.com")
			.with(FieldKey::Password, "Abcdef1!")
			.with(FieldKey::ConfirmPassword, "Abcdef1!")
			.with(FieldKey::Message, "Hello there, world")
	}

	#[rstest]
	fn test_complete_form_is_valid(complete: FormValues) {
		let report = validate_all(&complete);
		assert!(report.is_valid());
		assert_eq!(report.first_invalid(), None);
		assert_eq!(report.errors().count(), 0);
	}

	#[rstest]
	fn test_empty_form_reports_required_everywhere() {
		let report = validate_all(&FormValues::new());
		assert!(!report.is_valid());
		assert_eq!(report.first_invalid(), Some(FieldKey::Name));
		assert_eq!(report.errors().count(), 5);
		assert!(
			report
				.errors()
				.all(|error| error.failure == Failure::Required)
		);
	}

	#[rstest]
	#[case(FieldKey::Email, "nope")]
	#[case(FieldKey::ConfirmPassword, "Abcdef1?")]
	#[case(FieldKey::Message, "short")]
	fn test_first_invalid_follows_form_order(
		complete: FormValues,
		#[case] broken: FieldKey,
		#[case] value: &str,
	) {
		let values = complete.with(broken, value).with(FieldKey::Message, "short");
		let report = validate_all(&values);
		assert_eq!(report.first_invalid(), Some(broken));
		assert!(report.result(FieldKey::Message).is_err());
	}

	#[rstest]
	fn test_iter_is_in_form_order(complete: FormValues) {
		let keys: Vec<_> = validate_all(&complete).iter().map(|(key, _)| key).collect();
		assert_eq!(keys, FieldKey::ALL.to_vec());
	}
}
