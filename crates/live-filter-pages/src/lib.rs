//! Live Filter Pages - client-side filtering for pre-rendered lists
//!
//! As the user types into a search box, list entries whose text does not
//! contain the typed substring are hidden and the rest stay visible.
//! Matching is case-insensitive substring containment; an empty query shows
//! everything.
//!
//! ## Architecture
//!
//! - [`query`]: normalization of the raw input value
//! - [`entry`]: the [`Entry`] seam between matching and rendering
//! - [`visibility`]: the pure [`compute_visibility`] function
//! - [`controller`]: [`FilterController`], which owns the captured Entry Set
//! - [`settings`]: element ids and the visibility strategy
//! - [`error`]: wiring errors
//! - `dom` (WASM only): binds a controller to a live page
//!
//! ## Example
//!
//! ```
//! use live_filter_pages::{Entry, FilterController, StaticEntry};
//!
//! let mut controller = FilterController::new(
//!     ["Alice Smith", "Bob Jones", "ALICE Cooper"].map(StaticEntry::from),
//! );
//! let summary = controller.on_query_change("alice");
//!
//! assert_eq!(summary.visible, 2);
//! assert!(!controller.entries()[1].is_visible());
//! ```
//!
//! In the browser, call the exported `install("searchInput", "studentsList")`
//! after the list markup has been rendered.

pub mod controller;
pub mod entry;
pub mod error;
pub mod logging;
pub mod query;
pub mod settings;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use controller::{FilterController, FilterSummary};
pub use entry::{Entry, StaticEntry};
pub use error::{FilterError, FilterResult};
pub use query::FilterQuery;
pub use settings::{FilterSettings, VisibilityStrategy};
pub use visibility::{EntryId, VisibilityMap, compute_visibility};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomEntry, FilterHandle, initialize, install, mount};
