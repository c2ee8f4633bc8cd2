//! Browser tests for the DOM adapter
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/live-filter-pages

#![cfg(target_arch = "wasm32")]

use live_filter_pages::dom::{FilterHandle, initialize, install, install_with_settings, mount};
use live_filter_pages::{FilterError, FilterSettings, VisibilityStrategy};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Renders `<input id=input_id>` and `<ul id=list_id>` with one `<li>` per item.
fn render_page(input_id: &str, list_id: &str, items: &[&str]) -> (HtmlInputElement, Element) {
	let document = document();
	let body = document.body().unwrap();

	let input: HtmlInputElement = document
		.create_element("input")
		.unwrap()
		.dyn_into()
		.unwrap();
	input.set_id(input_id);
	body.append_child(&input).unwrap();

	let list = document.create_element("ul").unwrap();
	list.set_id(list_id);
	for item in items {
		let li = document.create_element("li").unwrap();
		li.set_text_content(Some(item));
		list.append_child(&li).unwrap();
	}
	body.append_child(&list).unwrap();

	(input, list)
}

fn type_into(input: &HtmlInputElement, value: &str) {
	input.set_value(value);
	let event = Event::new("input").unwrap();
	input.dispatch_event(&event).unwrap();
}

fn display_of(list: &Element, index: u32) -> String {
	list.children()
		.item(index)
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
		.style()
		.get_property_value("display")
		.unwrap()
}

#[wasm_bindgen_test]
fn test_input_event_hides_non_matching_items() {
	let (input, list) = render_page("q1", "l1", &["Alice Smith", "Bob Jones", "ALICE Cooper"]);
	let handle: FilterHandle = initialize(input.clone(), list.clone(), &FilterSettings::new()).unwrap();
	assert_eq!(handle.len(), 3);

	type_into(&input, "alice");
	assert_eq!(handle.visibility(), vec![true, false, true]);
	assert_eq!(display_of(&list, 0), "");
	assert_eq!(display_of(&list, 1), "none");

	type_into(&input, "");
	assert_eq!(handle.visibility(), vec![true, true, true]);
	assert_eq!(display_of(&list, 1), "");
}

#[wasm_bindgen_test]
fn test_mount_by_id_applies_prefilled_value() {
	let (input, _list) = render_page("q2", "l2", &["Mathematics", "Physics"]);
	input.set_value("phys");

	let settings = FilterSettings::new().with_input_id("q2").with_list_id("l2");
	let handle = mount(&settings).unwrap();
	assert_eq!(handle.visibility(), vec![false, true]);
}

#[wasm_bindgen_test]
fn test_class_strategy_toggles_class() {
	let (input, list) = render_page("q3", "l3", &["Alice", "Bob"]);
	let settings = FilterSettings::new().with_visibility(VisibilityStrategy::Class {
		name: "is-hidden".to_string(),
	});
	let _handle = initialize(input.clone(), list.clone(), &settings).unwrap();

	type_into(&input, "bob");
	let first = list.children().item(0).unwrap();
	let second = list.children().item(1).unwrap();
	assert!(first.class_list().contains("is-hidden"));
	assert!(!second.class_list().contains("is-hidden"));
}

#[wasm_bindgen_test]
fn test_hidden_attribute_strategy() {
	let (input, list) = render_page("q4", "l4", &["Alice", "Bob"]);
	let settings = FilterSettings::new().with_visibility(VisibilityStrategy::HiddenAttribute);
	let handle = initialize(input.clone(), list.clone(), &settings).unwrap();

	type_into(&input, "ali");
	assert_eq!(handle.visibility(), vec![true, false]);
	assert!(list.children().item(1).unwrap().has_attribute("hidden"));
}

#[wasm_bindgen_test]
fn test_dropped_handle_stops_filtering() {
	let (input, list) = render_page("q5", "l5", &["Alice", "Bob"]);
	let handle = initialize(input.clone(), list.clone(), &FilterSettings::new()).unwrap();
	drop(handle);

	type_into(&input, "alice");
	assert_eq!(display_of(&list, 1), "");
}

#[wasm_bindgen_test]
fn test_only_selected_children_are_captured() {
	let (input, list) = render_page("q6", "l6", &["Alice", "Bob"]);
	let stray = document().create_element("div").unwrap();
	stray.set_text_content(Some("not an entry"));
	list.append_child(&stray).unwrap();

	let handle = initialize(input, list, &FilterSettings::new()).unwrap();
	assert_eq!(handle.len(), 2);
}

#[wasm_bindgen_test]
fn test_mount_reports_missing_elements() {
	let settings = FilterSettings::new().with_input_id("does-not-exist");
	let err = mount(&settings).unwrap_err();
	assert_eq!(
		err,
		FilterError::ElementNotFound {
			id: "does-not-exist".to_string()
		}
	);

	let (_input, _list) = render_page("q7", "l7", &[]);
	let settings = FilterSettings::new().with_input_id("l7").with_list_id("l7");
	let err = mount(&settings).unwrap_err();
	assert_eq!(err, FilterError::NotAnInput { id: "l7".to_string() });
}

#[wasm_bindgen_test]
fn test_prefilled_value_is_left_alone_without_apply_on_mount() {
	let (input, list) = render_page("q8", "l8", &["Mathematics", "Physics"]);
	input.set_value("phys");

	let settings = FilterSettings::new().apply_on_mount(false);
	let handle = initialize(input.clone(), list.clone(), &settings).unwrap();
	assert_eq!(handle.visibility(), vec![true, true]);

	type_into(&input, "phys");
	assert_eq!(handle.visibility(), vec![false, true]);
}

#[wasm_bindgen_test]
fn test_forgotten_handle_keeps_filtering() {
	let (input, list) = render_page("q9", "l9", &["Alice", "Bob"]);
	let handle = initialize(input.clone(), list.clone(), &FilterSettings::new()).unwrap();
	handle.forget();

	type_into(&input, "bob");
	assert_eq!(display_of(&list, 0), "none");
	assert_eq!(display_of(&list, 1), "");
}

#[wasm_bindgen_test]
fn test_apply_and_refresh() {
	let (input, list) = render_page("q10", "l10", &["Alice Smith", "Bob Jones", "ALICE Cooper"]);
	let handle = initialize(input.clone(), list.clone(), &FilterSettings::new()).unwrap();

	let summary = handle.apply("O");
	assert_eq!((summary.visible, summary.hidden), (2, 1));
	assert_eq!(handle.visibility(), vec![false, true, true]);
	assert_eq!(input.value(), "");

	input.set_value("smith");
	let summary = handle.refresh();
	assert_eq!((summary.visible, summary.hidden), (1, 2));
	assert_eq!(handle.visibility(), vec![true, false, false]);
}

#[wasm_bindgen_test]
fn test_install_keeps_filter_bound_after_return() {
	let (input, list) = render_page("q11", "l11", &["Alice Smith", "Bob Jones"]);
	install("q11", "l11").unwrap();

	type_into(&input, "jones");
	assert_eq!(display_of(&list, 0), "none");
	assert_eq!(display_of(&list, 1), "");
}

#[wasm_bindgen_test]
fn test_install_with_settings_uses_json() {
	let (input, list) = render_page("q12", "l12", &["Alice", "Bob"]);
	install_with_settings(
		r#"{"input_id": "q12", "list_id": "l12", "visibility": {"strategy": "class", "name": "gone"}}"#,
	)
	.unwrap();

	type_into(&input, "ali");
	assert!(!list.children().item(0).unwrap().class_list().contains("gone"));
	assert!(list.children().item(1).unwrap().class_list().contains("gone"));
}

#[wasm_bindgen_test]
fn test_install_with_settings_rejects_blank_class() {
	render_page("q13", "l13", &["Alice"]);
	let result = install_with_settings(
		r#"{"input_id": "q13", "list_id": "l13", "visibility": {"strategy": "class", "name": "is hidden"}}"#,
	);
	assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_initialize_rejects_unusable_settings() {
	let (input, list) = render_page("q14", "l14", &["Alice"]);
	let settings = FilterSettings::new().with_visibility(VisibilityStrategy::Class {
		name: String::new(),
	});
	let err = initialize(input, list, &settings).unwrap_err();
	assert!(matches!(err, FilterError::InvalidSettings(_)));
}

#[wasm_bindgen_test]
fn test_item_selector_is_a_css_selector() {
	let (input, list) = render_page("q15", "l15", &["Alice", "Bob", "Carol"]);
	list.children().item(0).unwrap().set_class_name("student");
	list.children().item(2).unwrap().set_class_name("student");

	let settings = FilterSettings::new().with_item_selector("li.student");
	let handle = initialize(input.clone(), list.clone(), &settings).unwrap();
	assert_eq!(handle.len(), 2);

	let settings = FilterSettings::new().with_item_selector(".student");
	let handle = initialize(input, list, &settings).unwrap();
	assert_eq!(handle.len(), 2);
}

#[wasm_bindgen_test]
fn test_unparsable_item_selector_is_invalid_settings() {
	let (input, list) = render_page("q16", "l16", &["Alice"]);
	let settings = FilterSettings::new().with_item_selector("li[");
	let err = initialize(input, list, &settings).unwrap_err();
	assert!(matches!(err, FilterError::InvalidSettings(_)));
}
