//! Browser binding (wasm32 only)
//!
//! [`DomSurface`] resolves the form, its five inputs, their error slots,
//! and the success banner once at mount time. [`mount`] then wires the
//! browser events to a [`FormController`].
//!
//! ## Markup contract
//!
//! ```html
//! <form id="registrationForm">
//!   <div class="form-group">
//!     <input id="name">
//!     <span class="error-message"></span>
//!   </div>
//!   <!-- email, password, confirmPassword, message (textarea) alike -->
//! </form>
//! <div id="successMessage">...</div>
//! ```
//!
//! The error slot is looked up inside the input's parent element. Ids,
//! selector, and class names all come from [`FormConfig`].

use crate::config::{ClassNames, FormConfig};
use crate::controller::FormController;
use crate::error::{FormError, FormResult};
use crate::scheduler::TimeoutScheduler;
use crate::surface::{FormSurface, Mark};
use regform_validators::{FieldKey, ValueSource};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
	HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

pub type DomController = FormController<DomSurface, TimeoutScheduler>;

enum FieldInput {
	Input(HtmlInputElement),
	TextArea(HtmlTextAreaElement),
}

impl FieldInput {
	fn element(&self) -> &HtmlElement {
		match self {
			FieldInput::Input(input) => input,
			FieldInput::TextArea(area) => area,
		}
	}

	fn value(&self) -> String {
		match self {
			FieldInput::Input(input) => input.value(),
			FieldInput::TextArea(area) => area.value(),
		}
	}

	fn set_value(&self, value: &str) {
		match self {
			FieldInput::Input(input) => input.set_value(value),
			FieldInput::TextArea(area) => area.set_value(value),
		}
	}
}

struct FieldBinding {
	input: FieldInput,
	slot: Element,
}

/// [`FormSurface`] over live DOM elements.
pub struct DomSurface {
	form: HtmlFormElement,
	// Indexed by `FieldKey::index`.
	fields: Vec<FieldBinding>,
	banner: HtmlElement,
	classes: ClassNames,
}

impl DomSurface {
	/// Resolve every element the form needs.
	///
	/// Fails on the first element that is missing or of the wrong kind.
	pub fn bind(document: &Document, config: &FormConfig) -> FormResult<Self> {
		let form = element_by_id(document, &config.form_id)?
			.dyn_into::<HtmlFormElement>()
			.map_err(|_| FormError::UnexpectedElement {
				id: config.form_id.clone(),
				expected: "a form",
			})?;

		let mut fields = Vec::with_capacity(FieldKey::ALL.len());
		for key in FieldKey::ALL {
			fields.push(bind_field(document, config, key)?);
		}

		let banner = element_by_id(document, &config.success_id)?
			.dyn_into::<HtmlElement>()
			.map_err(|_| FormError::UnexpectedElement {
				id: config.success_id.clone(),
				expected: "an HTML element",
			})?;

		Ok(Self {
			form,
			fields,
			banner,
			classes: config.classes.clone(),
		})
	}

	fn field(&self, key: FieldKey) -> &FieldBinding {
		&self.fields[key.index()]
	}
}

fn element_by_id(document: &Document, id: &str) -> FormResult<Element> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| FormError::MissingElement { id: id.to_string() })
}

fn bind_field(document: &Document, config: &FormConfig, key: FieldKey) -> FormResult<FieldBinding> {
	let id = config.field_id(key);
	let input = match element_by_id(document, id)?.dyn_into::<HtmlInputElement>() {
		Ok(input) => FieldInput::Input(input),
		Err(element) => FieldInput::TextArea(element.dyn_into::<HtmlTextAreaElement>().map_err(
			|_| FormError::UnexpectedElement {
				id: id.to_string(),
				expected: "an input or textarea",
			},
		)?),
	};

	let missing_slot = || FormError::MissingErrorSlot {
		field: key,
		selector: config.error_slot_selector.clone(),
	};
	let slot = input
		.element()
		.parent_element()
		.ok_or_else(missing_slot)?
		.query_selector(&config.error_slot_selector)?
		.ok_or_else(missing_slot)?;

	Ok(FieldBinding { input, slot })
}

fn toggle_class(element: &Element, class: &str, on: bool) {
	let list = element.class_list();
	let result = if on {
		list.add_1(class)
	} else {
		list.remove_1(class)
	};
	if let Err(err) = result {
		tracing::warn!("Failed to update class `{}`: {:?}", class, err);
	}
}

impl ValueSource for DomSurface {
	fn value(&self, key: FieldKey) -> String {
		self.field(key).input.value()
	}
}

impl FormSurface for DomSurface {
	fn set_value(&mut self, key: FieldKey, value: &str) {
		self.field(key).input.set_value(value);
	}

	fn set_error_text(&mut self, key: FieldKey, text: &str) {
		let slot = &self.field(key).slot;
		slot.set_text_content(Some(text));
		toggle_class(slot, &self.classes.show, !text.is_empty());
	}

	fn set_mark(&mut self, key: FieldKey, mark: Mark, on: bool) {
		toggle_class(
			self.field(key).input.element(),
			self.classes.for_mark(mark),
			on,
		);
	}

	fn focus(&mut self, key: FieldKey) {
		if let Err(err) = self.field(key).input.element().focus() {
			tracing::warn!("Failed to focus `{}`: {:?}", key, err);
		}
	}

	fn set_banner_visible(&mut self, visible: bool) {
		toggle_class(&self.banner, &self.classes.show, visible);
	}

	fn scroll_banner_into_view(&mut self) {
		let options = ScrollIntoViewOptions::new();
		options.set_behavior(ScrollBehavior::Smooth);
		options.set_block(ScrollLogicalPosition::Nearest);
		self.banner
			.scroll_into_view_with_scroll_into_view_options(&options);
	}

	fn reset_values(&mut self) {
		self.form.reset();
	}
}

/// Bind the form described by `config` in the current document.
///
/// The returned controller is a handle; the event listeners keep their own
/// clones, so dropping it does not unbind the form.
///
/// # Examples
///
/// ```ignore
/// use regform_pages::{FormConfig, mount};
///
/// let controller = mount(&FormConfig::default())?;
/// assert!(!controller.banner_shown());
/// ```
pub fn mount(config: &FormConfig) -> FormResult<DomController> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(FormError::NoDocument)?;
	let surface = DomSurface::bind(&document, config)?;

	let form = surface.form.clone();
	let inputs: Vec<(FieldKey, HtmlElement)> = FieldKey::ALL
		.into_iter()
		.map(|key| (key, surface.field(key).input.element().clone()))
		.collect();
	let controller = FormController::new(surface, TimeoutScheduler::new(), config);

	for (key, input) in inputs {
		let on_blur = controller.clone();
		listen(&input, "blur", move |_event| {
			on_blur.on_blur(key);
		})?;
		let on_input = controller.clone();
		listen(&input, "input", move |_event| {
			on_input.on_input(key);
		})?;
	}

	let on_submit = controller.clone();
	listen(&form, "submit", move |event| {
		event.prevent_default();
		on_submit.on_submit();
	})?;

	tracing::info!("Registration form `#{}` mounted", config.form_id);
	Ok(controller)
}

/// [`mount`] with the default ids and timings.
pub fn mount_default() -> FormResult<DomController> {
	mount(&FormConfig::default())
}

fn listen(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> FormResult<()> {
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	// Listeners live as long as the page.
	closure.forget();
	Ok(())
}
