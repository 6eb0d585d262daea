//! Field validators for the registration form
//!
//! This crate holds everything about the registration form that does not
//! touch a page: the closed set of field keys, the static rule set of each
//! field, and the validators that evaluate a value against its rules.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   value(key)   ┌──────────────┐   &'static   ┌──────────┐
//! │ ValueSource  │ ─────────────▶ │ validate_*() │ ◀─────────── │ RuleSet  │
//! │ (form/page)  │                │              │              │  table   │
//! └──────────────┘                └──────────────┘              └──────────┘
//!                                        │
//!                                        ▼
//!                               Result<(), FieldError>
//! ```
//!
//! Every validator is total. A value either passes or yields exactly one
//! [`FieldError`], the first failing check in the field's priority order.
//!
//! ## Example
//!
//! ```
//! use regform_validators::{FieldKey, Failure, FormValues, validate_all, validate_password};
//!
//! let err = validate_password("abc12345").unwrap_err();
//! assert_eq!(err.failure, Failure::MissingUppercase);
//!
//! let values = FormValues::new()
//! 	.with(FieldKey::Name, "Ann")
//! 	.with(FieldKey::Email, "a@b.com");
//! let report = validate_all(&values);
//! assert_eq!(report.first_invalid(), Some(FieldKey::Password));
//! ```

pub mod field;
pub mod report;
pub mod rules;
pub mod validators;
pub mod values;

pub use field::{FieldKey, ValidityState};
pub use report::{FormReport, validate_all};
pub use rules::{Failure, PASSWORD_SPECIAL_CHARS, RuleSet};
pub use validators::{
	FieldError, FieldResult, evaluate, validate_confirm_password, validate_email, validate_field,
	validate_message, validate_name, validate_password,
};
pub use values::{FormValues, ValueSource};
