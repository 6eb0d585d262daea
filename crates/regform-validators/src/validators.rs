//! Field validators
//!
//! All five validators share one evaluator that walks a [`RuleSet`]'s
//! checks in priority order and stops at the first failure.

use crate::field::FieldKey;
use crate::rules::{Failure, PASSWORD_SPECIAL_CHARS, RuleSet};
use crate::values::ValueSource;

/// A field value failed one of its checks.
///
/// `Display` yields the exact message shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
	pub field: FieldKey,
	pub failure: Failure,
	pub message: &'static str,
}

pub type FieldResult = Result<(), FieldError>;

/// Evaluate `raw` against `rules`.
///
/// `dependency` is the current value of `rules.depends_on`; it is only
/// consulted by the mismatch check.
pub fn evaluate(rules: &RuleSet, raw: &str, dependency: Option<&str>) -> FieldResult {
	let value = rules.prepare(raw);
	match rules.checks().find(|check| fails(rules, *check, value, dependency)) {
		None => Ok(()),
		Some(failure) => Err(FieldError {
			field: rules.key,
			failure,
			message: rules.message(failure).unwrap_or_default(),
		}),
	}
}

fn fails(rules: &RuleSet, check: Failure, value: &str, dependency: Option<&str>) -> bool {
	match check {
		Failure::Required => value.is_empty(),
		Failure::TooShort => rules
			.min_length
			.is_some_and(|min| value.encode_utf16().count() < min),
		Failure::InvalidFormat => rules.pattern.is_some_and(|pattern| !pattern.is_match(value)),
		Failure::MissingUppercase => !value.chars().any(|c| c.is_ascii_uppercase()),
		Failure::MissingLowercase => !value.chars().any(|c| c.is_ascii_lowercase()),
		Failure::MissingDigit => !value.chars().any(|c| c.is_ascii_digit()),
		Failure::MissingSpecial => !value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
		Failure::Mismatch => dependency != Some(value),
	}
}

/// # Examples
///
/// ```
/// use regform_validators::validate_name;
///
/// assert!(validate_name("Al").is_err());
/// assert!(validate_name("Ann").is_ok());
/// ```
pub fn validate_name(value: &str) -> FieldResult {
	evaluate(RuleSet::for_field(FieldKey::Name), value, None)
}

/// # Examples
///
/// ```
/// use regform_validators::validate_email;
///
/// assert!(validate_email("a@b").is_err());
/// assert!(validate_email("a@b.com").is_ok());
/// ```
pub fn validate_email(value: &str) -> FieldResult {
	evaluate(RuleSet::for_field(FieldKey::Email), value, None)
}

/// The value is checked untrimmed: surrounding spaces count toward the
/// length and may satisfy no class check.
pub fn validate_password(value: &str) -> FieldResult {
	evaluate(RuleSet::for_field(FieldKey::Password), value, None)
}

/// Valid when non-empty and byte-for-byte equal to `password`, whatever the
/// password's own validity.
pub fn validate_confirm_password(value: &str, password: &str) -> FieldResult {
	evaluate(
		RuleSet::for_field(FieldKey::ConfirmPassword),
		value,
		Some(password),
	)
}

pub fn validate_message(value: &str) -> FieldResult {
	evaluate(RuleSet::for_field(FieldKey::Message), value, None)
}

/// Validate the field `key` reading current values from `source`.
///
/// # Examples
///
/// ```
/// use regform_validators::{FieldKey, FormValues, validate_field};
///
/// let values = FormValues::new()
/// 	.with(FieldKey::Password, "weak")
/// 	.with(FieldKey::ConfirmPassword, "weak");
/// assert!(validate_field(FieldKey::Password, &values).is_err());
/// assert!(validate_field(FieldKey::ConfirmPassword, &values).is_ok());
/// ```
pub fn validate_field<S: ValueSource + ?Sized>(key: FieldKey, source: &S) -> FieldResult {
	let rules = RuleSet::for_field(key);
	let value = source.value(key);
	let dependency = rules.depends_on.map(|other| source.value(other));
	evaluate(rules, &value, dependency.as_deref())
}
