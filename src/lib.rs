//! # regform
//!
//! Client-side validation and submission feedback for a five-field
//! registration form (name, email, password, password confirmation,
//! message).
//!
//! Nothing leaves the browser: a submission that passes every rule shows a
//! success banner, resets the form after a short delay, and hides the banner
//! a little later.
//!
//! ## Crates
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`validators`] | `regform-validators` | field keys, rule sets, pure validators |
//! | [`pages`] | `regform-pages` | feedback rendering, form controller, browser binding |
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - route Rust panics to the browser console
//!   when the form is mounted
//!
//! ## Quick Example
//!
//! ```
//! use regform::prelude::*;
//!
//! let values = FormValues::new()
//! 	.with(FieldKey::Name, "Ada")
//! 	.with(FieldKey::Email, "ada@example.com")
//! 	.with(FieldKey::Password, "Engine!1843")
//! 	.with(FieldKey::ConfirmPassword, "Engine!1843")
//! 	.with(FieldKey::Message, "Hello there, Charles");
//!
//! let scheduler = ManualScheduler::new();
//! let form = FormController::new(
//! 	MemorySurface::with_values(values),
//! 	scheduler.clone(),
//! 	&FormConfig::default(),
//! );
//! assert_eq!(form.on_submit(), SubmitOutcome::Accepted);
//!
//! scheduler.run_until_idle();
//! assert!(!form.banner_shown());
//! ```
//!
//! In the browser, `regform::pages::mount_default()` binds the form with
//! the default element ids.

pub mod pages;
pub mod validators;

/// Everything needed to validate values or drive a form.
pub mod prelude {
	pub use crate::pages::{
		FormConfig, FormController, FormError, FormResult, FormSurface, ManualScheduler, Mark,
		MemorySurface, ResubmitPolicy, Scheduler, SubmitOutcome,
	};
	pub use crate::validators::{
		FieldError, FieldKey, FieldResult, FormReport, FormValues, ValidityState, ValueSource,
		validate_all, validate_field,
	};

	#[cfg(target_arch = "wasm32")]
	pub use crate::pages::{DomController, mount, mount_default};
}
