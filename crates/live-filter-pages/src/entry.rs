//! Filterable list entries.
//!
//! [`Entry`] is the seam between the matching logic and whatever renders the
//! list. The DOM adapter implements it over list elements; [`StaticEntry`]
//! keeps the same state as plain data so the controller can run without a
//! browser.

use std::borrow::Cow;

/// One filterable list item.
///
/// The display text is owned by the rendering layer and is only read here.
/// Visibility is the single piece of state the filter writes.
pub trait Entry {
	/// Returns the visible text of the entry.
	fn display_text(&self) -> Cow<'_, str>;

	/// Shows or hides the entry.
	fn set_visible(&mut self, visible: bool);

	/// Returns the current render state.
	fn is_visible(&self) -> bool;
}

impl<E: Entry + ?Sized> Entry for Box<E> {
	fn display_text(&self) -> Cow<'_, str> {
		(**self).display_text()
	}

	fn set_visible(&mut self, visible: bool) {
		(**self).set_visible(visible);
	}

	fn is_visible(&self) -> bool {
		(**self).is_visible()
	}
}

/// An entry held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticEntry {
	text: String,
	visible: bool,
}

impl StaticEntry {
	/// Creates a visible entry with the given text.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			visible: true,
		}
	}

	/// Sets the initial visibility.
	pub fn visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Returns the entry text.
	pub fn text(&self) -> &str {
		&self.text
	}
}

impl Entry for StaticEntry {
	fn display_text(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.text)
	}

	fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	fn is_visible(&self) -> bool {
		self.visible
	}
}

impl From<&str> for StaticEntry {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for StaticEntry {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}
