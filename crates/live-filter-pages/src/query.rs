//! The filter query typed by the user.

/// Lowercased contents of the search input.
///
/// The raw value is lowercased and otherwise kept as-is: whitespace is not
/// trimmed and no Unicode normalization beyond case folding is applied.
/// An empty query matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterQuery {
	normalized: String,
}

impl FilterQuery {
	/// Normalizes a raw input value into a query.
	pub fn new(raw: &str) -> Self {
		Self {
			normalized: raw.to_lowercase(),
		}
	}

	/// Returns the normalized query text.
	pub fn as_str(&self) -> &str {
		&self.normalized
	}

	/// Returns true if the query is empty and therefore matches everything.
	pub fn is_empty(&self) -> bool {
		self.normalized.is_empty()
	}

	/// Returns true if the lowercased `text` contains this query.
	pub fn matches(&self, text: &str) -> bool {
		if self.is_empty() {
			return true;
		}
		text.to_lowercase().contains(self.normalized.as_str())
	}
}

impl From<&str> for FilterQuery {
	fn from(raw: &str) -> Self {
		Self::new(raw)
	}
}

impl std::fmt::Display for FilterQuery {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.normalized)
	}
}
