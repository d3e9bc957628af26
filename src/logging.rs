//! Log sink for the terminal UI.
//!
//! Records go through the `log` facade into `tui-logger`, which buffers them
//! until the log pane drains and renders them. Nothing is written to stdout or
//! stderr while the terminal is in raw mode.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui-logger` backend at `info` level. Repeated calls are
/// no-ops.
pub fn initialize() {
	INIT.call_once(|| {
		// Another logger may already be registered by the embedding program.
		let _ = tui_logger::init_logger(LevelFilter::Trace);
		tui_logger::set_default_level(LevelFilter::Info);
	});
}

/// Install the backend if needed and set the default level.
pub fn initialize_with_level(level: LevelFilter) {
	initialize();
	tui_logger::set_default_level(level);
}

/// Move buffered records into the widget's history.
pub fn pump() {
	tui_logger::move_events();
}
