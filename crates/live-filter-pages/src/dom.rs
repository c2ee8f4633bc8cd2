//! DOM adapter (WASM only).
//!
//! Binds a [`FilterController`] to a live page: the children of the list
//! container become [`DomEntry`] values, and the search input's `input`
//! event drives [`FilterController::on_query_change`].
//!
//! ```ignore
//! use live_filter_pages::dom::mount;
//! use live_filter_pages::settings::FilterSettings;
//!
//! let handle = mount(&FilterSettings::default())?;
//! // Keep the filter bound for the lifetime of the page.
//! handle.forget();
//! ```

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

use crate::controller::{FilterController, FilterSummary};
use crate::entry::Entry;
use crate::error::{FilterError, FilterResult};
use crate::settings::{FilterSettings, VisibilityStrategy};
use crate::{error_log, info_log, warn_log};

/// A list element treated as a filterable entry.
#[derive(Debug, Clone)]
pub struct DomEntry {
	element: HtmlElement,
	strategy: VisibilityStrategy,
}

impl DomEntry {
	/// Wraps an element, rendering visibility with `strategy`.
	pub fn new(element: HtmlElement, strategy: VisibilityStrategy) -> Self {
		Self { element, strategy }
	}

	/// Returns the wrapped element.
	pub fn element(&self) -> &HtmlElement {
		&self.element
	}
}

impl Entry for DomEntry {
	fn display_text(&self) -> Cow<'_, str> {
		Cow::Owned(self.element.text_content().unwrap_or_default())
	}

	fn set_visible(&mut self, visible: bool) {
		let result = match &self.strategy {
			VisibilityStrategy::Display => {
				let style = self.element.style();
				if visible {
					style.remove_property("display").map(|_| ())
				} else {
					style.set_property("display", "none")
				}
			}
			VisibilityStrategy::HiddenAttribute => {
				self.element.set_hidden(!visible);
				Ok(())
			}
			VisibilityStrategy::Class { name } => self
				.element
				.class_list()
				.toggle_with_force(name, !visible)
				.map(|_| ()),
		};

		if let Err(err) = result {
			warn_log!("failed to update entry visibility: {:?}", err);
		}
	}

	fn is_visible(&self) -> bool {
		match &self.strategy {
			VisibilityStrategy::Display => self
				.element
				.style()
				.get_property_value("display")
				.map(|value| value != "none")
				.unwrap_or(true),
			VisibilityStrategy::HiddenAttribute => !self.element.hidden(),
			VisibilityStrategy::Class { name } => !self.element.class_list().contains(name),
		}
	}
}

/// Captures the direct children of `container` matching `settings.item_selector`.
///
/// A selector the browser cannot parse is reported as
/// [`FilterError::InvalidSettings`].
pub fn capture_entries(
	container: &Element,
	settings: &FilterSettings,
) -> FilterResult<Vec<DomEntry>> {
	let children = container.children();
	let mut entries = Vec::new();
	for child in (0..children.length()).filter_map(|index| children.item(index)) {
		let selected = child.matches(&settings.item_selector).map_err(|_| {
			FilterError::InvalidSettings(format!(
				"invalid item selector {:?}",
				settings.item_selector
			))
		})?;
		if !selected {
			continue;
		}
		if let Ok(element) = child.dyn_into::<HtmlElement>() {
			entries.push(DomEntry::new(element, settings.visibility.clone()));
		}
	}
	Ok(entries)
}

/// A filter bound to a page.
///
/// Dropping the handle removes the `input` listener; the entries keep
/// whatever visibility they had. Call [`FilterHandle::forget`] to keep the
/// filter bound for the lifetime of the page.
pub struct FilterHandle {
	input: HtmlInputElement,
	controller: Rc<RefCell<FilterController<DomEntry>>>,
	listener: Option<Closure<dyn FnMut(Event)>>,
}

impl std::fmt::Debug for FilterHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FilterHandle")
			.field("entries", &self.controller.borrow().len())
			.field("bound", &self.listener.is_some())
			.finish()
	}
}

impl FilterHandle {
	/// Filters with the input's current value, as an `input` event would.
	pub fn refresh(&self) -> FilterSummary {
		self.apply(&self.input.value())
	}

	/// Filters with an explicit query without touching the input.
	pub fn apply(&self, raw_query: &str) -> FilterSummary {
		self.controller.borrow_mut().on_query_change(raw_query)
	}

	/// Returns the number of captured entries.
	pub fn len(&self) -> usize {
		self.controller.borrow().len()
	}

	/// Returns true if the container had no matching children.
	pub fn is_empty(&self) -> bool {
		self.controller.borrow().is_empty()
	}

	/// Returns the visibility of each captured entry, in order.
	pub fn visibility(&self) -> Vec<bool> {
		self.controller
			.borrow()
			.entries()
			.iter()
			.map(Entry::is_visible)
			.collect()
	}

	/// Leaves the listener attached for the lifetime of the page.
	pub fn forget(mut self) {
		if let Some(listener) = self.listener.take() {
			listener.forget();
		}
	}
}

impl Drop for FilterHandle {
	fn drop(&mut self) {
		if let Some(listener) = self.listener.take()
			&& let Err(err) = self
				.input
				.remove_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
		{
			warn_log!("failed to detach input listener: {:?}", err);
		}
	}
}

/// Binds a filter to an input and a list container.
///
/// The Entry Set is captured once, here. Children added to the container
/// afterwards are not filtered. Settings are validated before anything is
/// touched.
pub fn initialize(
	input: HtmlInputElement,
	container: Element,
	settings: &FilterSettings,
) -> FilterResult<FilterHandle> {
	settings.validate().map_err(report)?;
	let entries = capture_entries(&container, settings).map_err(report)?;
	if entries.is_empty() {
		warn_log!(
			"no children of #{1} match {0:?}; nothing to filter",
			settings.item_selector,
			container.id()
		);
	}
	info_log!("captured {} entries from #{}", entries.len(), container.id());

	let controller = Rc::new(RefCell::new(FilterController::new(entries)));
	if settings.apply_on_mount {
		controller.borrow_mut().on_query_change(&input.value());
	}

	let input_for_listener = input.clone();
	let controller_for_listener = Rc::clone(&controller);
	let listener = Closure::wrap(Box::new(move |_event: Event| {
		let value = input_for_listener.value();
		controller_for_listener.borrow_mut().on_query_change(&value);
	}) as Box<dyn FnMut(_)>);

	input
		.add_event_listener_with_callback("input", listener.as_ref().unchecked_ref())
		.map_err(|err| report(FilterError::ListenerAttach(format!("{:?}", err))))?;

	Ok(FilterHandle {
		input,
		controller,
		listener: Some(listener),
	})
}

fn report(err: FilterError) -> FilterError {
	error_log!("{}", err);
	err
}

/// Looks up the input and container by id and binds a filter to them.
pub fn mount(settings: &FilterSettings) -> FilterResult<FilterHandle> {
	let window = web_sys::window().ok_or(FilterError::NoWindow)?;
	let document = window.document().ok_or(FilterError::NoDocument)?;

	let input = document
		.get_element_by_id(&settings.input_id)
		.ok_or_else(|| FilterError::ElementNotFound {
			id: settings.input_id.clone(),
		})
		.and_then(|element| {
			element
				.dyn_into::<HtmlInputElement>()
				.map_err(|_| FilterError::NotAnInput {
					id: settings.input_id.clone(),
				})
		})
		.map_err(report)?;

	let container = document
		.get_element_by_id(&settings.list_id)
		.ok_or_else(|| FilterError::ElementNotFound {
			id: settings.list_id.clone(),
		})
		.map_err(report)?;

	initialize(input, container, settings)
}

/// Binds a filter for the lifetime of the page.
///
/// Intended to be called from a page script once the markup exists.
#[wasm_bindgen]
pub fn install(input_id: &str, list_id: &str) -> Result<(), JsValue> {
	let settings = FilterSettings::new()
		.with_input_id(input_id)
		.with_list_id(list_id);
	install_settings(&settings)
}

/// Binds a filter configured by a JSON settings object.
#[wasm_bindgen(js_name = installWithSettings)]
pub fn install_with_settings(settings_json: &str) -> Result<(), JsValue> {
	let settings = FilterSettings::from_json(settings_json)?;
	install_settings(&settings)
}

fn install_settings(settings: &FilterSettings) -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	mount(settings)?.forget();
	Ok(())
}
