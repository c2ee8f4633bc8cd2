//! Error types for wiring the filter into a page.
//!
//! Filtering itself never fails. Every variant here describes a page that
//! is not shaped the way the settings say it is, or settings that could not
//! be read.

use thiserror::Error;

/// Errors raised while locating elements, binding events or reading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
	/// Window object not available.
	#[error("Window object not available")]
	NoWindow,

	/// Document object not available.
	#[error("Document object not available")]
	NoDocument,

	/// No element with the configured id exists in the document.
	#[error("No #{id} element found")]
	ElementNotFound {
		/// The id that was looked up.
		id: String,
	},

	/// The search element exists but is not an `<input>`.
	#[error("#{id} is not an input element")]
	NotAnInput {
		/// The id of the offending element.
		id: String,
	},

	/// The browser refused to register the `input` listener.
	#[error("Failed to attach input listener: {0}")]
	ListenerAttach(String),

	/// Settings could not be parsed or cannot be applied to a page.
	#[error("Invalid filter settings: {0}")]
	InvalidSettings(String),
}

impl From<serde_json::Error> for FilterError {
	fn from(err: serde_json::Error) -> Self {
		FilterError::InvalidSettings(err.to_string())
	}
}

#[cfg(target_arch = "wasm32")]
impl From<FilterError> for wasm_bindgen::JsValue {
	fn from(err: FilterError) -> Self {
		wasm_bindgen::JsValue::from_str(&err.to_string())
	}
}

/// Result type alias for filter wiring.
pub type FilterResult<T> = Result<T, FilterError>;
