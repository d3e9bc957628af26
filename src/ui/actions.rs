use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_logger::TuiWidgetEvent;

use super::{App, SessionOutcome};

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Char('o') if ctrl => {
				if self.current_selection().is_some() {
					return Ok(Some(self.outcome(true)));
				}
			}
			KeyCode::Enter => self.submit(),
			KeyCode::F(2) => self.show_log = !self.show_log,
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::PageUp if self.show_log => self.log_state.transition(TuiWidgetEvent::PrevPageKey),
			KeyCode::PageDown if self.show_log => self.log_state.transition(TuiWidgetEvent::NextPageKey),
			_ => {
				self.input.input(key);
			}
		}
		Ok(None)
	}

	/// Take the typed term, show it in the heading and hand it to the search.
	pub(crate) fn submit(&mut self) {
		let term = self.input.take();
		log::debug!("submitted term {term:?}");
		self.active_term = term.clone();
		self.search.set_search_term(term);
		self.list_state.select(None);
		self.ensure_selection();
	}

	fn outcome(&self, accepted: bool) -> SessionOutcome {
		SessionOutcome {
			accepted,
			term: self.active_term.clone(),
			selection: if accepted { self.current_selection() } else { None },
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected > 0
		{
			self.list_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.list_state.selected()
			&& selected + 1 < self.visible_results().len()
		{
			self.list_state.select(Some(selected + 1));
		}
	}
}
