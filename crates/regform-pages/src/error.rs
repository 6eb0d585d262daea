//! Binding and configuration errors
//!
//! Validation failures are not errors at this level; they are rendered. The
//! variants here describe a host page that does not meet the markup
//! contract, or a configuration that cannot be parsed.

use regform_validators::FieldKey;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
	#[error("Element `#{id}` not found in document")]
	MissingElement { id: String },
	#[error("Field `{field}` has no error slot matching `{selector}` next to it")]
	MissingErrorSlot { field: FieldKey, selector: String },
	#[error("Element `#{id}` is not {expected}")]
	UnexpectedElement { id: String, expected: &'static str },
	#[error("No browser window or document available")]
	NoDocument,
	#[error("JavaScript error: {0}")]
	Js(String),
	#[error("Invalid form configuration: {0}")]
	Config(#[from] serde_json::Error),
}

pub type FormResult<T> = Result<T, FormError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for FormError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		FormError::Js(format!("{:?}", value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_display_names_the_offending_element() {
		let error = FormError::MissingErrorSlot {
			field: FieldKey::ConfirmPassword,
			selector: ".error-message".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Field `confirmPassword` has no error slot matching `.error-message` next to it"
		);
		let error = FormError::MissingElement {
			id: "successMessage".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Element `#successMessage` not found in document"
		);
	}

	#[rstest]
	fn test_config_error_converts_from_json() {
		let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
		let error: FormError = parse.unwrap_err().into();
		assert!(matches!(error, FormError::Config(_)));
	}
}
