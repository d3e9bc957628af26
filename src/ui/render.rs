use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{HighlightSpacing, List, ListItem, Paragraph},
};
use throbber_widgets_tui::Throbber;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget};

use super::App;

pub(crate) const BANNER: &str = "Hacker News Challenge 🎉";
pub(crate) const LOADING_LABEL: &str = "Loading...";
pub(crate) const FAILED_LABEL: &str = "Failed...";
const IDLE_HINT: &str = "Type a query and press Enter";
const NO_RESULTS: &str = "No results";
const FOOTER: &str = "Enter search · ↑/↓ select · Ctrl+O open · F2 log · Esc quit";
const HIGHLIGHT_SYMBOL: &str = "▶ ";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		frame.render_widget(
			Paragraph::new(BANNER).style(self.theme.header),
			layout[0],
		);
		frame.render_widget(self.input.widget(), layout[1]);

		let body = layout[2];
		if self.show_log {
			let split = Layout::default()
				.direction(Direction::Vertical)
				.constraints([Constraint::Min(3), Constraint::Percentage(40)])
				.split(body);
			self.render_results(frame, split[0]);
			self.render_log(frame, split[1]);
		} else {
			self.render_results(frame, body);
		}

		frame.render_widget(
			Paragraph::new(FOOTER).style(self.theme.empty),
			layout[3],
		);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}

		if self.search.is_loading() {
			let spinner = Throbber::default()
				.style(self.theme.highlight)
				.throbber_style(self.theme.highlight);
			let line = Line::from(vec![
				spinner.to_symbol_span(&self.throbber_state),
				Span::styled(LOADING_LABEL, self.theme.highlight),
			]);
			frame.render_widget(Paragraph::new(line), area);
			return;
		}

		if self.search.has_error() {
			frame.render_widget(
				Paragraph::new(FAILED_LABEL).style(self.theme.error),
				area,
			);
			return;
		}

		let results = self.visible_results();
		if results.is_empty() {
			let hint = if self.search.term().is_empty() {
				IDLE_HINT
			} else {
				NO_RESULTS
			};
			frame.render_widget(
				Paragraph::new(hint)
					.alignment(Alignment::Center)
					.style(self.theme.empty),
				area,
			);
			return;
		}

		let [heading_area, list_area] =
			Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

		let heading = format!("Results about {}", self.active_term);
		frame.render_widget(Paragraph::new(heading).style(self.theme.header), heading_area);

		let items: Vec<ListItem> = results
			.iter()
			.enumerate()
			.map(|(index, item)| {
				ListItem::new(Line::from(vec![
					Span::raw(format!("{}. ", index + 1)),
					Span::raw(item.title.clone()),
					Span::raw("  "),
					Span::styled(item.url.clone(), self.theme.empty),
				]))
			})
			.collect();

		let list = List::new(items)
			.highlight_style(self.theme.row_highlight)
			.highlight_symbol(HIGHLIGHT_SYMBOL)
			.highlight_spacing(HighlightSpacing::Always);
		frame.render_stateful_widget(list, list_area, &mut self.list_state);
	}

	fn render_log(&self, frame: &mut Frame, area: Rect) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		crate::logging::pump();
		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.highlight_style(self.theme.row_highlight)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}
}
