use ratatui::style::{Color, Modifier, Style};

/// Styles used by the search view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Title banner and result heading.
	pub header: Style,
	/// Selected result row.
	pub row_highlight: Style,
	/// Input border and prompt.
	pub prompt: Style,
	/// Hints, URLs and other muted text.
	pub empty: Style,
	/// Loading indicator.
	pub highlight: Style,
	/// Failure banner.
	pub error: Style,
}

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new()
		.bg(Color::Rgb(191, 219, 254))
		.fg(Color::Rgb(30, 58, 138)),
	prompt: Style::new().fg(Color::Blue),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new()
		.fg(Color::Rgb(180, 83, 9))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
};

pub const MONO: Theme = Theme {
	header: Style::new().add_modifier(Modifier::BOLD),
	row_highlight: Style::new().add_modifier(Modifier::REVERSED),
	prompt: Style::new(),
	empty: Style::new().add_modifier(Modifier::DIM),
	highlight: Style::new().add_modifier(Modifier::BOLD),
	error: Style::new().add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED)),
};

const BUILTINS: [(&str, Theme); 3] = [("slate", SLATE), ("light", LIGHT), ("mono", MONO)];

/// Names of the bundled themes, default first.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}

/// Look up a bundled theme, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}
