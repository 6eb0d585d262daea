//! Presentation seam between the controller and a page

use regform_validators::{FieldKey, ValueSource};

/// Visual state mark on a field input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
	Error,
	Valid,
}

/// The presentation state a [`FormController`](crate::FormController)
/// renders into.
///
/// Implementations own the five inputs, their error slots, and the success
/// banner. Methods never fail: a surface that cannot apply a change logs it
/// and carries on, since nothing upstream can recover.
pub trait FormSurface: ValueSource {
	fn set_value(&mut self, key: FieldKey, value: &str);

	/// Replace the text of `key`'s error slot. Empty text hides the slot.
	fn set_error_text(&mut self, key: FieldKey, text: &str);

	fn set_mark(&mut self, key: FieldKey, mark: Mark, on: bool);

	fn focus(&mut self, key: FieldKey);

	fn set_banner_visible(&mut self, visible: bool);

	fn scroll_banner_into_view(&mut self);

	/// Restore every input to its default (empty) value.
	fn reset_values(&mut self) {
		for key in FieldKey::ALL {
			self.set_value(key, "");
		}
	}
}
