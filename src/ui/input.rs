use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use ratatui::widgets::Block;
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Search Hacker News";

/// Single-line text input backed by `tui-textarea`.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	style: Style,
	title: String,
}

impl<'a> SearchInput<'a> {
	pub fn new(title: impl Into<String>, style: Style) -> Self {
		let title = title.into();
		Self {
			textarea: build_textarea(&title, style),
			style,
			title,
		}
	}

	/// Current input text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Forward a key press to the editor. Returns `true` if the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	/// Return the current text and reset the input to empty.
	pub fn take(&mut self) -> String {
		let text = self.text().to_string();
		self.textarea = build_textarea(&self.title, self.style);
		text
	}

	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.textarea.set_block(input_block(&self.title, style));
	}

	pub(crate) fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn build_textarea<'a>(title: &str, style: Style) -> TextArea<'a> {
	let mut textarea = TextArea::default();
	textarea.set_cursor_line_style(Style::default());
	textarea.set_placeholder_text(PLACEHOLDER);
	textarea.set_block(input_block(title, style));
	textarea
}

fn input_block<'a>(title: &str, style: Style) -> Block<'a> {
	Block::bordered()
		.title(format!(" {title} "))
		.border_style(style)
}
