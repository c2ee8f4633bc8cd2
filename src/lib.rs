//! # Live Filter
//!
//! Client-side live filtering for pre-rendered lists. As the user types into
//! a search box, list entries whose text does not contain the typed
//! substring (case-insensitively) are hidden and the rest stay visible.
//!
//! This facade re-exports [`live_filter_pages`] behind the default `pages`
//! feature.
//!
//! ## Feature Flags
//!
//! - `pages` (default) - The filter: query, entries, controller, DOM adapter
//! - `console_error_panic_hook` - Readable panics in the browser console
//! - `debug-hooks` - Per-keystroke `debug_log!` output in debug builds
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "pages")]
//! # {
//! use live_filter::prelude::*;
//!
//! let mut controller = FilterController::new(
//!     ["Alice Smith", "Bob Jones", "ALICE Cooper"].map(StaticEntry::from),
//! );
//! controller.on_query_change("O");
//!
//! let visible: Vec<bool> = controller.entries().iter().map(Entry::is_visible).collect();
//! assert_eq!(visible, vec![false, true, true]);
//! # }
//! ```

#[cfg(feature = "pages")]
pub use live_filter_pages as pages;

#[cfg(feature = "pages")]
pub use live_filter_pages::{
	Entry, EntryId, FilterController, FilterError, FilterQuery, FilterResult, FilterSettings,
	FilterSummary, StaticEntry, VisibilityMap, VisibilityStrategy, compute_visibility,
};

#[cfg(all(feature = "pages", target_arch = "wasm32"))]
pub use live_filter_pages::dom;

/// Commonly used items.
#[cfg(feature = "pages")]
pub mod prelude {
	pub use live_filter_pages::{
		Entry, FilterController, FilterQuery, FilterSettings, StaticEntry, VisibilityStrategy,
	};
}
