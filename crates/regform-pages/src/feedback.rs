//! Feedback rendering
//!
//! Keeps the invariant that a field's error slot has text exactly while the
//! field carries the error mark.

use crate::surface::{FormSurface, Mark};
use regform_validators::{FieldKey, FieldResult, ValidityState};

/// Put `message` in the error slot and mark the field invalid.
pub fn show_error<S: FormSurface + ?Sized>(surface: &mut S, key: FieldKey, message: &str) {
	surface.set_error_text(key, message);
	surface.set_mark(key, Mark::Error, true);
	surface.set_mark(key, Mark::Valid, false);
}

/// Empty the error slot and drop the error mark. The valid mark is left as is.
pub fn clear_error<S: FormSurface + ?Sized>(surface: &mut S, key: FieldKey) {
	surface.set_error_text(key, "");
	surface.set_mark(key, Mark::Error, false);
}

pub fn set_valid<S: FormSurface + ?Sized>(surface: &mut S, key: FieldKey) {
	clear_error(surface, key);
	surface.set_mark(key, Mark::Valid, true);
}

/// Back to the untouched look: no message, no marks.
pub fn clear_marks<S: FormSurface + ?Sized>(surface: &mut S, key: FieldKey) {
	clear_error(surface, key);
	surface.set_mark(key, Mark::Valid, false);
}

/// Render a validator result and return the state it puts the field in.
pub fn render<S: FormSurface + ?Sized>(
	surface: &mut S,
	key: FieldKey,
	result: &FieldResult,
) -> ValidityState {
	match result {
		Ok(()) => set_valid(surface, key),
		Err(error) => show_error(surface, key, error.message),
	}
	ValidityState::from_valid(result.is_ok())
}
