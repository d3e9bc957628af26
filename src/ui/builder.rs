use std::sync::Arc;

use anyhow::Result;

use super::{App, SessionOutcome, Theme, theme};
use crate::news::{HttpBackend, SearchBackend};
use crate::search::{NewsSearch, ResponseOrdering, SearchTerm};

/// Builder for the interactive search view.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	initial_term: SearchTerm,
	ordering: ResponseOrdering,
	theme: Option<Theme>,
	input_title: Option<String>,
	show_log: bool,
}

impl SearchUi {
	/// Create a view backed by the given search backend.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			initial_term: SearchTerm::none(),
			ordering: ResponseOrdering::default(),
			theme: None,
			input_title: None,
			show_log: false,
		}
	}

	/// Create a view querying the Algolia endpoint at `base_url`.
	pub fn http(base_url: impl Into<String>) -> Result<Self> {
		let backend = HttpBackend::with_base_url(base_url)?;
		Ok(Self::new(Arc::new(backend)))
	}

	pub fn with_initial_term(mut self, term: impl Into<SearchTerm>) -> Self {
		self.initial_term = term.into();
		self
	}

	pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
		self.ordering = ordering;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a bundled theme; unknown names keep the default.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
		self.input_title = Some(title.into());
		self
	}

	pub fn with_log_pane(mut self, visible: bool) -> Self {
		self.show_log = visible;
		self
	}

	/// Assemble the [`App`] without touching the terminal.
	///
	/// Constructing the search starts the first fetch cycle when the initial
	/// term is non-empty.
	pub fn build<'a>(self) -> App<'a> {
		let search = NewsSearch::with_ordering(self.initial_term, self.backend, self.ordering);
		let mut app = App::new(search);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(title) = self.input_title {
			app.set_input_title(title);
		}
		app.set_log_visible(self.show_log);
		app
	}

	/// Run the interactive picker to completion.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.build();
		app.run()
	}
}
