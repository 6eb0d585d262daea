//! In-memory form surface
//!
//! Stands in for the page when the controller runs headless: tests, or a
//! host that renders the form some other way and only wants the state.

use crate::surface::{FormSurface, Mark};
use regform_validators::{FieldKey, FormValues, ValueSource};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
	values: FormValues,
	error_texts: [String; 5],
	marks: HashSet<(FieldKey, Mark)>,
	focused: Option<FieldKey>,
	focus_count: usize,
	banner_visible: bool,
	scroll_count: usize,
}

impl MemorySurface {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from the given values instead of an empty form.
	pub fn with_values(values: FormValues) -> Self {
		Self {
			values,
			..Self::default()
		}
	}

	pub fn values(&self) -> &FormValues {
		&self.values
	}

	pub fn error_text(&self, key: FieldKey) -> &str {
		&self.error_texts[key.index()]
	}

	pub fn has_mark(&self, key: FieldKey, mark: Mark) -> bool {
		self.marks.contains(&(key, mark))
	}

	/// Field that most recently received focus.
	pub fn focused(&self) -> Option<FieldKey> {
		self.focused
	}

	/// Number of focus moves so far.
	pub fn focus_count(&self) -> usize {
		self.focus_count
	}

	pub fn banner_visible(&self) -> bool {
		self.banner_visible
	}

	pub fn scroll_count(&self) -> usize {
		self.scroll_count
	}
}

impl ValueSource for MemorySurface {
	fn value(&self, key: FieldKey) -> String {
		self.values.value(key)
	}
}

impl FormSurface for MemorySurface {
	fn set_value(&mut self, key: FieldKey, value: &str) {
		self.values.set(key, value);
	}

	fn set_error_text(&mut self, key: FieldKey, text: &str) {
		self.error_texts[key.index()] = text.to_string();
	}

	fn set_mark(&mut self, key: FieldKey, mark: Mark, on: bool) {
		if on {
			self.marks.insert((key, mark));
		} else {
			self.marks.remove(&(key, mark));
		}
	}

	fn focus(&mut self, key: FieldKey) {
		self.focused = Some(key);
		self.focus_count += 1;
	}

	fn set_banner_visible(&mut self, visible: bool) {
		self.banner_visible = visible;
	}

	fn scroll_banner_into_view(&mut self) {
		self.scroll_count += 1;
	}
}
