use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, SessionOutcome};

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user exits with a result.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		self.hydrate_initial_results();

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SessionOutcome> = 'event_loop: loop {
			crate::logging::pump();
			self.pump_search_results();
			if self.search.is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(outcome)) => {
							maybe_outcome = Some(outcome);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Give the first request a short head start so the opening frame can
	/// already show results instead of a spinner.
	pub(crate) fn hydrate_initial_results(&mut self) {
		if let Some(timeout) = self.initial_results_timeout {
			self.wait_for_results(timeout);
		}
		self.pump_search_results();
	}
}
