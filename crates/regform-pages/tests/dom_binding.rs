//! Browser binding and timer tests
//!
//! Run with `wasm-pack test --headless --chrome crates/regform-pages`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use regform_pages::{FormConfig, FormError, Scheduler, SubmitOutcome, TimeoutScheduler, mount};
use regform_validators::{FieldKey, ValidityState};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r#"
<form id="registrationForm">
	<div><input id="name"><span class="error-message"></span></div>
	<div><input id="email"><span class="error-message"></span></div>
	<div><input id="password" type="password"><span class="error-message"></span></div>
	<div><input id="confirmPassword" type="password"><span class="error-message"></span></div>
	<div><textarea id="message"></textarea><span class="error-message"></span></div>
	<button type="submit">Register</button>
</form>
<div id="successMessage"></div>
"#;

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

fn install(markup: &str) {
	document().body().unwrap().set_inner_html(markup);
}

fn input(id: &str) -> HtmlInputElement {
	document()
		.get_element_by_id(id)
		.unwrap()
		.dyn_into::<HtmlInputElement>()
		.unwrap()
}

fn has_class(id: &str, class: &str) -> bool {
	document()
		.get_element_by_id(id)
		.unwrap()
		.class_list()
		.contains(class)
}

#[wasm_bindgen_test]
fn mount_renders_feedback_into_markup() {
	install(MARKUP);
	let controller = mount(&FormConfig::default()).unwrap();

	assert_eq!(
		controller.on_submit(),
		SubmitOutcome::Rejected {
			first_invalid: FieldKey::Name
		}
	);
	assert!(has_class("name", "error"));
	let slot = input("name").next_element_sibling().unwrap();
	assert_eq!(slot.text_content().unwrap(), "Name is required");
	assert!(slot.class_list().contains("show"));

	input("name").set_value("Ada");
	controller.on_input(FieldKey::Name);
	assert_eq!(controller.validity(FieldKey::Name), ValidityState::Valid);
	assert!(has_class("name", "valid"));
	assert!(!slot.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn blur_event_validates_field() {
	install(MARKUP);
	let controller = mount(&FormConfig::default()).unwrap();

	input("email").set_value("ada@example");
	let event = web_sys::Event::new("blur").unwrap();
	input("email").dispatch_event(&event).unwrap();

	assert_eq!(controller.validity(FieldKey::Email), ValidityState::Invalid);
	assert!(!has_class("successMessage", "show"));
}

#[wasm_bindgen_test]
fn missing_banner_is_reported() {
	install(&MARKUP.replace("successMessage", "somethingElse"));

	let error = mount(&FormConfig::default()).err().unwrap();

	assert!(matches!(error, FormError::MissingElement { ref id } if id == "successMessage"));
}

#[wasm_bindgen_test]
fn textarea_bound_as_message_field() {
	install(MARKUP);
	let controller = mount(&FormConfig::default()).unwrap();

	let message = document()
		.get_element_by_id("message")
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap();
	controller.on_blur(FieldKey::Message);

	assert!(message.class_list().contains("error"));
}

#[wasm_bindgen_test]
async fn timeout_task_can_schedule_follow_up() {
	let scheduler = TimeoutScheduler::new();
	let log = Rc::new(RefCell::new(Vec::new()));
	let inner = scheduler.clone();
	let sink = log.clone();
	let first = scheduler.schedule(
		Duration::from_millis(10),
		Box::new(move || {
			sink.borrow_mut().push("first");
			let sink = sink.clone();
			inner.schedule(
				Duration::from_millis(10),
				Box::new(move || sink.borrow_mut().push("follow-up")),
			);
		}),
	);

	TimeoutFuture::new(60).await;

	assert_eq!(*log.borrow(), vec!["first", "follow-up"]);
	assert!(!scheduler.cancel(first));
}

#[wasm_bindgen_test]
async fn cancelled_timeout_never_runs() {
	let scheduler = TimeoutScheduler::new();
	let log = Rc::new(RefCell::new(Vec::new()));
	let sink = log.clone();
	let handle = scheduler.schedule(
		Duration::from_millis(10),
		Box::new(move || sink.borrow_mut().push("cancelled")),
	);

	assert!(scheduler.cancel(handle));
	TimeoutFuture::new(40).await;

	assert!(log.borrow().is_empty());
}
