use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use super::{ResponseOrdering, SearchSnapshot, SearchState, SearchTerm};
use crate::news::{FetchError, NewsItem, SearchBackend, rank_response};

/// Message sent back by a fetch thread once its request settles.
struct FetchCompletion {
	id: u64,
	term: String,
	outcome: Result<Vec<NewsItem>, FetchError>,
}

/// Search state driven by a term, in the style of a UI data hook.
///
/// The externally supplied term is synced one way into the internal term;
/// [`set_search_term`](Self::set_search_term) only changes the internal copy.
/// Whenever the internal term changes to a non-empty value a new fetch cycle
/// is started. Empty terms never issue requests and leave the state alone.
pub struct NewsSearch {
	backend: Arc<dyn SearchBackend>,
	ordering: ResponseOrdering,
	external_term: SearchTerm,
	term: SearchTerm,
	state: SearchState,
	tx: Sender<FetchCompletion>,
	rx: Receiver<FetchCompletion>,
	next_request_id: u64,
	latest_request_id: Option<u64>,
	in_flight: usize,
}

impl NewsSearch {
	/// Create the search with the default [`ResponseOrdering`].
	pub fn new(initial_term: impl Into<SearchTerm>, backend: Arc<dyn SearchBackend>) -> Self {
		Self::with_ordering(initial_term, backend, ResponseOrdering::default())
	}

	/// Create the search, starting a fetch cycle immediately when
	/// `initial_term` is non-empty.
	pub fn with_ordering(
		initial_term: impl Into<SearchTerm>,
		backend: Arc<dyn SearchBackend>,
		ordering: ResponseOrdering,
	) -> Self {
		let (tx, rx) = mpsc::channel();
		let initial_term = initial_term.into();
		let mut search = Self {
			backend,
			ordering,
			external_term: initial_term.clone(),
			term: SearchTerm::none(),
			state: SearchState::default(),
			tx,
			rx,
			next_request_id: 0,
			latest_request_id: None,
			in_flight: 0,
		};
		search.apply_term(initial_term);
		search
	}

	/// Resynchronise the internal term from the caller supplied term.
	///
	/// Nothing happens unless `term` differs from the last external term seen,
	/// so calling this on every frame with the same value is cheap.
	pub fn sync_initial_term(&mut self, term: impl Into<SearchTerm>) {
		let term = term.into();
		if term == self.external_term {
			return;
		}
		self.external_term = term.clone();
		self.apply_term(term);
	}

	/// Replace the internal term.
	pub fn set_search_term(&mut self, term: impl Into<SearchTerm>) {
		self.apply_term(term.into());
	}

	#[must_use]
	pub fn term(&self) -> &SearchTerm {
		&self.term
	}

	#[must_use]
	pub fn ordering(&self) -> ResponseOrdering {
		self.ordering
	}

	#[must_use]
	pub fn state(&self) -> &SearchState {
		&self.state
	}

	#[must_use]
	pub fn data(&self) -> &[NewsItem] {
		self.state.data()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.state.is_loading()
	}

	#[must_use]
	pub fn has_error(&self) -> bool {
		self.state.has_error()
	}

	/// Reason the last applied cycle failed, for diagnostics.
	#[must_use]
	pub fn failure(&self) -> Option<&str> {
		self.state.failure()
	}

	#[must_use]
	pub fn snapshot(&self) -> SearchSnapshot {
		self.state.snapshot()
	}

	/// Number of requests issued whose completion has not been applied yet.
	#[must_use]
	pub fn in_flight(&self) -> usize {
		self.in_flight
	}

	/// Apply every completion that has already arrived.
	///
	/// Returns `true` when at least one completion was processed.
	pub fn pump(&mut self) -> bool {
		let mut applied = false;
		loop {
			match self.rx.try_recv() {
				Ok(completion) => {
					self.apply_completion(completion);
					applied = true;
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		applied
	}

	/// Block until the next completion arrives and apply it.
	///
	/// Returns `false` if nothing is in flight or `timeout` elapses first.
	pub fn wait_for_completion(&mut self, timeout: Duration) -> bool {
		if self.in_flight == 0 {
			return false;
		}
		match self.rx.recv_timeout(timeout) {
			Ok(completion) => {
				self.apply_completion(completion);
				true
			}
			Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
		}
	}

	/// Block until every issued request has completed, or `timeout` elapses.
	///
	/// Returns `true` when nothing is left in flight.
	pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.in_flight > 0 {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() || !self.wait_for_completion(remaining) {
				break;
			}
		}
		self.in_flight == 0
	}

	fn apply_term(&mut self, term: SearchTerm) {
		if term == self.term {
			return;
		}
		self.term = term;
		match self.term.as_query() {
			Some(query) => {
				let query = query.to_string();
				self.start_cycle(query);
			}
			None => log::trace!("search term cleared; keeping current results"),
		}
	}

	fn start_cycle(&mut self, term: String) {
		self.next_request_id = self.next_request_id.saturating_add(1);
		let id = self.next_request_id;
		self.latest_request_id = Some(id);
		self.in_flight += 1;
		self.state.begin_loading();

		log::debug!("search #{id} issued for {term:?}");

		let backend = Arc::clone(&self.backend);
		let tx = self.tx.clone();
		thread::spawn(move || {
			let outcome = backend
				.fetch(&term)
				.and_then(|body| rank_response(&body));
			// The receiver is gone once the search is dropped.
			let _ = tx.send(FetchCompletion { id, term, outcome });
		});
	}

	fn apply_completion(&mut self, completion: FetchCompletion) {
		let FetchCompletion { id, term, outcome } = completion;
		self.in_flight = self.in_flight.saturating_sub(1);

		if self.ordering == ResponseOrdering::LatestRequest && Some(id) != self.latest_request_id {
			log::debug!("search #{id} for {term:?} superseded; discarding response");
			return;
		}

		match &outcome {
			Ok(items) => log::info!("search #{id} for {term:?} returned {} items", items.len()),
			Err(err) => log::warn!("search #{id} for {term:?} failed: {err}"),
		}
		self.state.settle(outcome);
	}
}
