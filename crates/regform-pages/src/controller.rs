//! Form orchestration
//!
//! [`FormController`] owns the per-field state machine
//! (`Untouched → Invalid ⇄ Valid`), the success banner flag, and the
//! deferred reset/hide of a successful submission.
//!
//! ## Events
//!
//! | Event  | Effect |
//! |--------|--------|
//! | blur   | validate the field and render the result |
//! | input  | re-validate only if the field is currently invalid |
//! | submit | validate all five fields, then reject or start a success window |
//!
//! Touching the password (blur or input) also re-validates a non-empty
//! confirmation, whatever the confirmation's own state.
//!
//! ## Success window
//!
//! ```text
//! submit ok ──▶ banner shown ──(reset delay)──▶ fields reset ──(hide delay)──▶ banner hidden
//! ```

use crate::config::{FormConfig, ResubmitPolicy};
use crate::feedback;
use crate::scheduler::{Scheduler, TaskHandle};
use crate::surface::FormSurface;
use regform_validators::{FieldKey, ValidityState, validate_all, validate_field};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Result of handling a submit event.
///
/// Submission never reaches the network in any case; the outcome only says
/// what was rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// All fields passed and a success window started.
	Accepted,
	/// All fields passed while a window was still pending and the policy is
	/// [`ResubmitPolicy::IgnoreWhilePending`].
	AlreadyPending,
	/// At least one field failed; focus moved to `first_invalid`.
	Rejected { first_invalid: FieldKey },
}

#[derive(Debug, Clone, Copy)]
struct Timing {
	reset_delay: Duration,
	banner_hide_delay: Duration,
	resubmit: ResubmitPolicy,
}

#[derive(Debug)]
struct SuccessWindow {
	id: u64,
	reset: Option<TaskHandle>,
	hide: Option<TaskHandle>,
}

struct FormState<S> {
	surface: S,
	validity: [ValidityState; 5],
	banner_shown: bool,
	window: Option<SuccessWindow>,
	next_window: u64,
}

impl<S: FormSurface> FormState<S> {
	fn validate(&mut self, key: FieldKey) -> ValidityState {
		let result = validate_field(key, &self.surface);
		let state = feedback::render(&mut self.surface, key, &result);
		self.validity[key.index()] = state;
		tracing::debug!(field = %key, state = ?state, "validated field");
		state
	}

	fn revalidate_confirmation(&mut self) {
		if !self.surface.value(FieldKey::ConfirmPassword).is_empty() {
			self.validate(FieldKey::ConfirmPassword);
		}
	}

	fn set_banner(&mut self, shown: bool) {
		self.surface.set_banner_visible(shown);
		self.banner_shown = shown;
	}

	fn reset_fields(&mut self) {
		self.surface.reset_values();
		for key in FieldKey::ALL {
			feedback::clear_marks(&mut self.surface, key);
		}
		self.validity = [ValidityState::Untouched; 5];
	}

	fn attach_hide(&mut self, window: u64, hide: TaskHandle) {
		if let Some(current) = self.window.as_mut().filter(|current| current.id == window) {
			current.reset = None;
			current.hide = Some(hide);
		}
	}

	fn finish_window(&mut self, window: u64) {
		self.set_banner(false);
		if self.window.as_ref().is_some_and(|current| current.id == window) {
			self.window = None;
		}
		tracing::info!(window, "success banner hidden");
	}
}

/// Event-driven controller of one registration form.
///
/// Cloning is cheap and yields a handle to the same form, which is how event
/// listeners share it.
pub struct FormController<S, D> {
	state: Rc<RefCell<FormState<S>>>,
	scheduler: D,
	timing: Timing,
}

impl<S, D: Clone> Clone for FormController<S, D> {
	fn clone(&self) -> Self {
		Self {
			state: Rc::clone(&self.state),
			scheduler: self.scheduler.clone(),
			timing: self.timing,
		}
	}
}

impl<S, D> FormController<S, D>
where
	S: FormSurface + 'static,
	D: Scheduler + Clone + 'static,
{
	pub fn new(surface: S, scheduler: D, config: &FormConfig) -> Self {
		Self {
			state: Rc::new(RefCell::new(FormState {
				surface,
				validity: [ValidityState::Untouched; 5],
				banner_shown: false,
				window: None,
				next_window: 0,
			})),
			scheduler,
			timing: Timing {
				reset_delay: config.reset_delay(),
				banner_hide_delay: config.banner_hide_delay(),
				resubmit: config.resubmit,
			},
		}
	}

	/// Handle loss of focus on `key`.
	///
	/// Returns `None` when the event arrived while the controller was
	/// already rendering (focus moves dispatch blur synchronously); such
	/// events are dropped.
	pub fn on_blur(&self, key: FieldKey) -> Option<ValidityState> {
		let Ok(mut state) = self.state.try_borrow_mut() else {
			tracing::debug!(field = %key, "blur during render skipped");
			return None;
		};
		let validity = state.validate(key);
		if key == FieldKey::Password {
			state.revalidate_confirmation();
		}
		Some(validity)
	}

	/// Handle a value change on `key`.
	///
	/// Only an invalid field is re-validated, so a field never flips to
	/// invalid while the user is still typing.
	pub fn on_input(&self, key: FieldKey) -> Option<ValidityState> {
		let Ok(mut state) = self.state.try_borrow_mut() else {
			tracing::debug!(field = %key, "input during render skipped");
			return None;
		};
		let current = state.validity[key.index()];
		let validity = if current.is_invalid() {
			state.validate(key)
		} else {
			current
		};
		if key == FieldKey::Password {
			state.revalidate_confirmation();
		}
		Some(validity)
	}

	/// Handle a submit event.
	pub fn on_submit(&self) -> SubmitOutcome {
		let mut state = self.state.borrow_mut();
		state.set_banner(false);

		let report = validate_all(&state.surface);
		for (key, result) in report.iter() {
			let validity = feedback::render(&mut state.surface, key, result);
			state.validity[key.index()] = validity;
		}

		if let Some(first_invalid) = report.first_invalid() {
			state.surface.focus(first_invalid);
			tracing::debug!(
				field = %first_invalid,
				errors = report.errors().count(),
				"submission rejected"
			);
			return SubmitOutcome::Rejected { first_invalid };
		}

		match (self.timing.resubmit, state.window.take()) {
			(ResubmitPolicy::IgnoreWhilePending, Some(pending)) => {
				state.window = Some(pending);
				state.set_banner(true);
				tracing::debug!("submission accepted while success window pending");
				return SubmitOutcome::AlreadyPending;
			}
			(ResubmitPolicy::Supersede, Some(previous)) => {
				for handle in [previous.reset, previous.hide].into_iter().flatten() {
					self.scheduler.cancel(handle);
				}
				tracing::debug!(window = previous.id, "superseded pending success window");
			}
			_ => {}
		}

		state.set_banner(true);
		state.surface.scroll_banner_into_view();
		let window = state.next_window;
		state.next_window += 1;
		let reset = self.schedule_reset(window);
		state.window = Some(SuccessWindow {
			id: window,
			reset: Some(reset),
			hide: None,
		});
		tracing::info!(window, "form submitted successfully");
		SubmitOutcome::Accepted
	}

	/// Clear every value, message, and mark right away.
	///
	/// The banner and any pending success window are left alone.
	pub fn reset(&self) {
		self.state.borrow_mut().reset_fields();
	}

	pub fn validity(&self, key: FieldKey) -> ValidityState {
		self.state.borrow().validity[key.index()]
	}

	pub fn banner_shown(&self) -> bool {
		self.state.borrow().banner_shown
	}

	/// Whether a success window's reset or hide is still outstanding.
	pub fn has_pending_success(&self) -> bool {
		self.state.borrow().window.is_some()
	}

	pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
		f(&self.state.borrow().surface)
	}

	/// Mutate the surface directly, without firing any form event.
	pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
		f(&mut self.state.borrow_mut().surface)
	}

	fn schedule_reset(&self, window: u64) -> TaskHandle {
		let weak = Rc::downgrade(&self.state);
		let scheduler = self.scheduler.clone();
		let hide_delay = self.timing.banner_hide_delay;
		self.scheduler.schedule(
			self.timing.reset_delay,
			Box::new(move || {
				let Some(state) = weak.upgrade() else { return };
				let hide = schedule_hide(&scheduler, Rc::downgrade(&state), window, hide_delay);
				let mut state = state.borrow_mut();
				state.reset_fields();
				state.attach_hide(window, hide);
				tracing::info!(window, "form reset after successful submission");
			}),
		)
	}
}

fn schedule_hide<S, D>(
	scheduler: &D,
	state: Weak<RefCell<FormState<S>>>,
	window: u64,
	delay: Duration,
) -> TaskHandle
where
	S: FormSurface + 'static,
	D: Scheduler,
{
	scheduler.schedule(
		delay,
		Box::new(move || {
			if let Some(state) = state.upgrade() {
				state.borrow_mut().finish_window(window);
			}
		}),
	)
}
