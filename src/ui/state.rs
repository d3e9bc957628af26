//! Core state container for the search view.

use std::time::Duration;

use log::LevelFilter;
use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::input::SearchInput;
use super::theme::Theme;
use crate::news::NewsItem;
use crate::search::NewsSearch;

pub(crate) const DEFAULT_INPUT_TITLE: &str = "search";

/// Aggregate state shared across the terminal UI.
///
/// The view reads everything it renders from the embedded [`NewsSearch`] and
/// only writes back through its setter when the user submits a term.
pub struct App<'a> {
	pub(crate) search: NewsSearch,
	pub(crate) input: SearchInput<'a>,
	/// Term shown in the results heading; updated on submit.
	pub(crate) active_term: String,
	pub(crate) list_state: ListState,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) show_log: bool,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) initial_results_timeout: Option<Duration>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] around an existing search.
	pub fn new(search: NewsSearch) -> Self {
		crate::logging::initialize();
		let theme = Theme::default();
		let active_term = search.term().as_str().to_string();
		let mut app = Self {
			search,
			input: SearchInput::new(DEFAULT_INPUT_TITLE, theme.prompt),
			active_term,
			list_state: ListState::default(),
			theme,
			throbber_state: ThrobberState::default(),
			show_log: false,
			log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
			initial_results_timeout: Some(Duration::from_millis(250)),
		};
		app.ensure_selection();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.input.set_style(theme.prompt);
	}

	pub fn set_input_title(&mut self, title: impl Into<String>) {
		self.input = SearchInput::new(title, self.theme.prompt);
	}

	pub fn set_log_visible(&mut self, visible: bool) {
		self.show_log = visible;
	}

	#[must_use]
	pub fn search(&self) -> &NewsSearch {
		&self.search
	}

	/// Term shown in the results heading.
	#[must_use]
	pub fn active_term(&self) -> &str {
		&self.active_term
	}

	/// Apply any finished fetch cycles.
	pub(crate) fn pump_search_results(&mut self) {
		if self.search.pump() {
			self.ensure_selection();
		}
	}

	/// Block for up to `timeout` waiting for in-flight requests.
	pub(crate) fn wait_for_results(&mut self, timeout: Duration) -> bool {
		let settled = self.search.wait_until_settled(timeout);
		self.ensure_selection();
		settled
	}

	/// Results visible in the list; hidden while loading or failed.
	pub(crate) fn visible_results(&self) -> &[NewsItem] {
		if self.search.is_loading() || self.search.has_error() {
			&[]
		} else {
			self.search.data()
		}
	}

	pub(crate) fn current_selection(&self) -> Option<NewsItem> {
		let index = self.list_state.selected()?;
		self.visible_results().get(index).cloned()
	}

	/// Keep the list selection inside the current result set.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.visible_results().len();
		match self.list_state.selected() {
			_ if len == 0 => self.list_state.select(None),
			None => self.list_state.select(Some(0)),
			Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}
}
