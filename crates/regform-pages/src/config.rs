//! Form configuration
//!
//! Every setting has a default matching the stock registration page, so an
//! empty JSON object is a complete configuration.
//!
//! ```
//! use regform_pages::{FormConfig, ResubmitPolicy};
//! use std::time::Duration;
//!
//! let config = FormConfig::from_json(r#"{ "reset_delay_ms": 500, "resubmit": "supersede" }"#).unwrap();
//! assert_eq!(config.reset_delay(), Duration::from_millis(500));
//! assert_eq!(config.banner_hide_delay(), Duration::from_secs(5));
//! assert_eq!(config.resubmit, ResubmitPolicy::Supersede);
//! ```

use crate::error::FormResult;
use crate::surface::Mark;
use regform_validators::FieldKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Delay between a successful submit and the form reset.
pub const DEFAULT_RESET_DELAY_MS: u64 = 2_000;

/// Delay between the form reset and hiding the success banner.
pub const DEFAULT_BANNER_HIDE_DELAY_MS: u64 = 5_000;

/// What a successful submit does while an earlier success window is still
/// pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResubmitPolicy {
	/// Every window runs to completion; the last deferred action wins.
	#[default]
	Overlap,
	/// The new window cancels the pending reset and hide of the old one.
	Supersede,
	/// The submit is acknowledged but no new window starts.
	IgnoreWhilePending,
}

/// CSS class names toggled on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
	pub error: String,
	pub valid: String,
	/// Added to the error slot while it has text, and to the banner while
	/// it is visible.
	pub show: String,
}

impl Default for ClassNames {
	fn default() -> Self {
		Self {
			error: "error".to_string(),
			valid: "valid".to_string(),
			show: "show".to_string(),
		}
	}
}

impl ClassNames {
	pub fn for_mark(&self, mark: Mark) -> &str {
		match mark {
			Mark::Error => &self.error,
			Mark::Valid => &self.valid,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
	pub form_id: String,
	pub success_id: String,
	/// Per-field element id overrides; missing keys use the field key.
	pub field_ids: BTreeMap<FieldKey, String>,
	/// Selector of the error slot, resolved under each input's parent.
	pub error_slot_selector: String,
	pub classes: ClassNames,
	pub reset_delay_ms: u64,
	pub banner_hide_delay_ms: u64,
	pub resubmit: ResubmitPolicy,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			form_id: "registrationForm".to_string(),
			success_id: "successMessage".to_string(),
			field_ids: BTreeMap::new(),
			error_slot_selector: ".error-message".to_string(),
			classes: ClassNames::default(),
			reset_delay_ms: DEFAULT_RESET_DELAY_MS,
			banner_hide_delay_ms: DEFAULT_BANNER_HIDE_DELAY_MS,
			resubmit: ResubmitPolicy::default(),
		}
	}
}

impl FormConfig {
	/// Parse a JSON configuration; absent settings keep their defaults.
	pub fn from_json(json: &str) -> FormResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Element id of `key`'s input.
	pub fn field_id(&self, key: FieldKey) -> &str {
		self.field_ids
			.get(&key)
			.map(String::as_str)
			.unwrap_or(key.as_str())
	}

	/// Field whose input carries `id`, if any.
	pub fn key_for_id(&self, id: &str) -> Option<FieldKey> {
		FieldKey::ALL
			.into_iter()
			.find(|key| self.field_id(*key) == id)
	}

	pub fn reset_delay(&self) -> Duration {
		Duration::from_millis(self.reset_delay_ms)
	}

	pub fn banner_hide_delay(&self) -> Duration {
		Duration::from_millis(self.banner_hide_delay_ms)
	}
}
