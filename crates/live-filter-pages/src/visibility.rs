//! Pure visibility computation.
//!
//! [`compute_visibility`] decides which entries match a query without
//! touching them. The controller applies its result; tests can assert on it
//! directly.

use crate::entry::Entry;
use crate::query::FilterQuery;

/// Position of an entry in the captured Entry Set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(usize);

impl EntryId {
	/// Creates the id of the entry at `index`.
	pub fn new(index: usize) -> Self {
		Self(index)
	}

	/// Returns the zero-based index of the entry.
	pub fn index(self) -> usize {
		self.0
	}
}

/// Visibility decision for every entry, in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
	visible: Vec<bool>,
}

impl VisibilityMap {
	/// Returns the decision for one entry, or `None` if the id is out of range.
	pub fn get(&self, id: EntryId) -> Option<bool> {
		self.visible.get(id.0).copied()
	}

	/// Iterates over `(id, visible)` pairs in capture order.
	pub fn iter(&self) -> impl Iterator<Item = (EntryId, bool)> + '_ {
		self.visible
			.iter()
			.enumerate()
			.map(|(index, visible)| (EntryId(index), *visible))
	}

	/// Returns the number of entries that should be shown.
	pub fn visible_count(&self) -> usize {
		self.visible.iter().filter(|visible| **visible).count()
	}

	/// Returns the number of entries that should be hidden.
	pub fn hidden_count(&self) -> usize {
		self.len() - self.visible_count()
	}

	/// Returns the number of entries covered.
	pub fn len(&self) -> usize {
		self.visible.len()
	}

	/// Returns true if no entries are covered.
	pub fn is_empty(&self) -> bool {
		self.visible.is_empty()
	}
}

impl FromIterator<bool> for VisibilityMap {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		Self {
			visible: iter.into_iter().collect(),
		}
	}
}

/// Decides the visibility of each entry for `query`.
///
/// Each decision depends only on that entry's text and the query.
pub fn compute_visibility<E: Entry>(entries: &[E], query: &FilterQuery) -> VisibilityMap {
	entries
		.iter()
		.map(|entry| query.matches(&entry.display_text()))
		.collect()
}
