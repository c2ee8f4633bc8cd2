//! Console logging for the live filter
//!
//! Each macro formats lazily and hands the message to [`emit`], which
//! writes to the browser console on `wasm32` and to stderr elsewhere.
//! Nothing is written unless `debug_assertions` are on; `debug_log!`
//! additionally needs the `debug-hooks` feature of this crate.
//!
//! | Macro | Level | Extra requirement | WASM sink |
//! |-------|-------|-------------------|-----------|
//! | `debug_log!` | [`Level::Debug`] | `debug-hooks` | `console.debug` |
//! | `info_log!` | [`Level::Info`] | - | `console.info` |
//! | `warn_log!` | [`Level::Warn`] | - | `console.warn` |
//! | `error_log!` | [`Level::Error`] | - | `console.error` |
//!
//! ## Example
//!
//! ```ignore
//! use live_filter_pages::{debug_log, info_log};
//!
//! info_log!("captured {} entries", count);
//! debug_log!("query {:?}: {} visible", query, visible);
//! ```

use std::fmt;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
	/// Per-keystroke detail.
	Debug,
	/// Lifecycle events such as mounting.
	Info,
	/// Recoverable oddities, e.g. an empty list.
	Warn,
	/// Wiring failures returned to the caller.
	Error,
}

impl Level {
	/// Returns true if lines at this level are written in this build.
	pub const fn enabled(self) -> bool {
		match self {
			Level::Debug => cfg!(all(debug_assertions, feature = "debug-hooks")),
			_ => cfg!(debug_assertions),
		}
	}

	#[cfg_attr(all(target_arch = "wasm32", not(test)), allow(dead_code))]
	fn label(self) -> &'static str {
		match self {
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warn => "WARN",
			Level::Error => "ERROR",
		}
	}
}

/// Writes one log line if `level` is enabled.
///
/// Called by the logging macros; formatting only happens for enabled levels.
pub fn emit(level: Level, args: fmt::Arguments<'_>) {
	if !level.enabled() {
		return;
	}
	write_line(level, &format!("[live-filter] {}", args));
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
	let value = wasm_bindgen::JsValue::from_str(line);
	match level {
		Level::Debug => web_sys::console::debug_1(&value),
		Level::Info => web_sys::console::info_1(&value),
		Level::Warn => web_sys::console::warn_1(&value),
		Level::Error => web_sys::console::error_1(&value),
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
	eprintln!("[{}] {}", level.label(), line);
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
macro_rules! debug_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Debug, format_args!($($arg)*))
	};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
macro_rules! info_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Info, format_args!($($arg)*))
	};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
macro_rules! warn_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Warn, format_args!($($arg)*))
	};
}

/// Logs an error message (requires `debug_assertions`)
///
/// Wiring failures are reported through this macro before the error is
/// handed back to the caller.
#[macro_export]
macro_rules! error_log {
	($($arg:tt)*) => {
		$crate::logging::emit($crate::logging::Level::Error, format_args!($($arg)*))
	};
}
