//! The filter controller.
//!
//! A [`FilterController`] owns the Entry Set captured at initialization and
//! recomputes every entry's visibility from scratch on each query change.
//! Nothing carries over between calls except the visibility written to the
//! entries themselves, so repeating a query is a no-op.

use crate::debug_log;
use crate::entry::Entry;
use crate::query::FilterQuery;
use crate::visibility::{VisibilityMap, compute_visibility};

/// Counts produced by one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
	/// Entries left visible.
	pub visible: usize,
	/// Entries hidden by the query.
	pub hidden: usize,
}

impl From<&VisibilityMap> for FilterSummary {
	fn from(map: &VisibilityMap) -> Self {
		Self {
			visible: map.visible_count(),
			hidden: map.hidden_count(),
		}
	}
}

/// Applies filter queries to a fixed Entry Set.
///
/// Membership and order of the entries never change after construction.
/// If the page adds or removes list items later, the captured set is stale.
#[derive(Debug)]
pub struct FilterController<E: Entry> {
	entries: Vec<E>,
	last_query: Option<FilterQuery>,
}

impl<E: Entry> FilterController<E> {
	/// Captures the Entry Set.
	pub fn new(entries: impl IntoIterator<Item = E>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
			last_query: None,
		}
	}

	/// Recomputes visibility for the raw input value.
	///
	/// Every entry is overwritten, regardless of its previous state.
	pub fn on_query_change(&mut self, raw_query: &str) -> FilterSummary {
		let query = FilterQuery::new(raw_query);
		let map = compute_visibility(&self.entries, &query);

		for (entry, (_, visible)) in self.entries.iter_mut().zip(map.iter()) {
			entry.set_visible(visible);
		}

		let summary = FilterSummary::from(&map);
		debug_log!(
			"query {:?}: {} visible, {} hidden",
			query.as_str(),
			summary.visible,
			summary.hidden
		);
		self.last_query = Some(query);
		summary
	}

	/// Returns the captured entries in order.
	pub fn entries(&self) -> &[E] {
		&self.entries
	}

	/// Returns the most recently applied query, if any.
	pub fn last_query(&self) -> Option<&FilterQuery> {
		self.last_query.as_ref()
	}

	/// Returns the number of captured entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing was captured.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
