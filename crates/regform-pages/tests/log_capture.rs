//! Log output of the form lifecycle

use regform_pages::{FormConfig, FormController, ManualScheduler, MemorySurface};
use regform_validators::{FieldKey, FormValues};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Collects `[LEVEL] message` lines.
struct LogCapture {
	logs: Arc<Mutex<Vec<String>>>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);
		self.logs
			.lock()
			.unwrap()
			.push(format!("[{}] {}", event.metadata().level(), visitor.message));
	}
}

fn capture() -> (Arc<Mutex<Vec<String>>>, tracing::subscriber::DefaultGuard) {
	let logs = Arc::new(Mutex::new(Vec::new()));
	let guard = tracing_subscriber::registry()
		.with(LogCapture { logs: logs.clone() })
		.set_default();
	(logs, guard)
}

fn contains(logs: &Arc<Mutex<Vec<String>>>, level: &str, text: &str) -> bool {
	logs.lock()
		.unwrap()
		.iter()
		.any(|line| line.contains(level) && line.contains(text))
}

#[rstest]
fn test_success_window_is_logged_at_info() {
	let (logs, _guard) = capture();
	let scheduler = ManualScheduler::new();
	let values = FormValues::new()
		.with(FieldKey::Name, "Grace")
		.with(FieldKey::Email, "grace@example.org")
		.with(FieldKey::Password, "Cobol!1959")
		.with(FieldKey::ConfirmPassword, "Cobol!1959")
		.with(FieldKey::Message, "Please sign me up");
	let controller = FormController::new(
		MemorySurface::with_values(values),
		scheduler.clone(),
		&FormConfig::default(),
	);

	controller.on_submit();
	scheduler.advance(Duration::from_secs(7));

	let captured = logs.lock().unwrap().clone();
	for text in [
		"form submitted successfully",
		"form reset after successful submission",
		"success banner hidden",
	] {
		assert!(
			contains(&logs, "INFO", text),
			"Expected info log `{text}`, got: {captured:?}"
		);
	}
}

#[rstest]
fn test_rejection_and_validation_are_logged_at_debug() {
	let (logs, _guard) = capture();
	let controller = FormController::new(
		MemorySurface::new(),
		ManualScheduler::new(),
		&FormConfig::default(),
	);

	controller.on_blur(FieldKey::Email);
	controller.on_submit();

	assert!(contains(&logs, "DEBUG", "validated field"));
	assert!(contains(&logs, "DEBUG", "submission rejected"));
	assert!(!contains(&logs, "INFO", "form submitted successfully"));
}
