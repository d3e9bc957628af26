use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Search endpoint: {}", config.base_url);
	if config.initial_term.is_empty() {
		let _ = writeln!(out, "  Initial term: (none)");
	} else {
		let _ = writeln!(out, "  Initial term: {}", config.initial_term);
	}
	let _ = writeln!(out, "  Response ordering: {}", config.ordering);
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if let Some(title) = &config.input_title {
		let _ = writeln!(out, "  Input title: {title}");
	}
	let _ = writeln!(out, "  Log pane on start: {}", bool_to_word(config.show_log));
	let _ = writeln!(out, "  Log level: {}", config.log_level);
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
