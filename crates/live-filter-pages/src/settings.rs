//! Filter settings.
//!
//! Settings name the elements the filter binds to and how hidden entries
//! are rendered. Defaults match the student list page: an input with id
//! `searchInput` filtering the `<li>` children of `#studentsList`.
//!
//! ```ignore
//! use live_filter_pages::settings::{FilterSettings, VisibilityStrategy};
//!
//! let settings = FilterSettings::from_json(r#"{
//!     "input_id": "teacherSearch",
//!     "list_id": "teachersList",
//!     "visibility": { "strategy": "class", "name": "is-hidden" }
//! }"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// Default id of the search input.
pub const DEFAULT_INPUT_ID: &str = "searchInput";
/// Default id of the list container.
pub const DEFAULT_LIST_ID: &str = "studentsList";
/// Default CSS selector of the captured list children.
pub const DEFAULT_ITEM_SELECTOR: &str = "li";

/// How an entry's visibility is expressed in the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum VisibilityStrategy {
	/// `style.display` is set to `none` when hidden and cleared when shown.
	#[default]
	Display,
	/// The boolean `hidden` attribute is toggled.
	HiddenAttribute,
	/// A CSS class is present while the entry is hidden.
	Class {
		/// Class name that hides the entry.
		name: String,
	},
}

/// Settings for binding a filter to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	/// Id of the text input whose value is the query.
	pub input_id: String,
	/// Id of the element whose children are the entries.
	pub list_id: String,
	/// CSS selector a direct child must match to be captured.
	pub item_selector: String,
	/// How hidden entries are rendered.
	pub visibility: VisibilityStrategy,
	/// Filter once with the input's current value at mount time.
	pub apply_on_mount: bool,
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			input_id: DEFAULT_INPUT_ID.to_string(),
			list_id: DEFAULT_LIST_ID.to_string(),
			item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
			visibility: VisibilityStrategy::default(),
			apply_on_mount: true,
		}
	}
}

impl FilterSettings {
	/// Creates settings with the defaults.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from JSON. Missing fields take their defaults.
	pub fn from_json(json: &str) -> FilterResult<Self> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Checks that the settings can be applied to a page.
	///
	/// Ids and the item selector must be non-empty. A class name must be a
	/// single non-empty token, since `classList` rejects anything else.
	/// Selector syntax is checked by the browser when entries are captured.
	pub fn validate(&self) -> FilterResult<()> {
		for (field, value) in [
			("input_id", &self.input_id),
			("list_id", &self.list_id),
			("item_selector", &self.item_selector),
		] {
			if value.trim().is_empty() {
				return Err(FilterError::InvalidSettings(format!("{} must not be empty", field)));
			}
		}

		if let VisibilityStrategy::Class { name } = &self.visibility {
			if name.is_empty() {
				return Err(FilterError::InvalidSettings(
					"visibility class name must not be empty".to_string(),
				));
			}
			if name.chars().any(char::is_whitespace) {
				return Err(FilterError::InvalidSettings(format!(
					"visibility class name {:?} must not contain whitespace",
					name
				)));
			}
		}

		Ok(())
	}

	/// Sets the input id.
	pub fn with_input_id(mut self, id: impl Into<String>) -> Self {
		self.input_id = id.into();
		self
	}

	/// Sets the list container id.
	pub fn with_list_id(mut self, id: impl Into<String>) -> Self {
		self.list_id = id.into();
		self
	}

	/// Sets the CSS selector of the captured children (e.g. `li.student`).
	pub fn with_item_selector(mut self, selector: impl Into<String>) -> Self {
		self.item_selector = selector.into();
		self
	}

	/// Sets the visibility strategy.
	pub fn with_visibility(mut self, visibility: VisibilityStrategy) -> Self {
		self.visibility = visibility;
		self
	}

	/// Enables or disables the initial pass at mount time.
	pub fn apply_on_mount(mut self, apply: bool) -> Self {
		self.apply_on_mount = apply;
		self
	}
}
