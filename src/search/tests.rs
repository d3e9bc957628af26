use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};

use super::*;
use crate::news::{FetchError, SearchBackend};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Clone)]
enum Reply {
	Body(Value),
	Status(u16),
	Unreachable,
}

/// Backend answering from a fixed table and recording every request.
#[derive(Default)]
struct ScriptedBackend {
	replies: HashMap<String, Reply>,
	calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
	fn with(mut self, term: &str, reply: Reply) -> Self {
		self.replies.insert(term.to_string(), reply);
		self
	}

	fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}
}

impl SearchBackend for ScriptedBackend {
	fn fetch(&self, term: &str) -> Result<Value, FetchError> {
		self.calls.lock().unwrap().push(term.to_string());
		let url = format!("mock://search?query={term}");
		match self.replies.get(term).cloned().unwrap_or(Reply::Unreachable) {
			Reply::Body(body) => Ok(body),
			Reply::Status(status) => Err(FetchError::Status { url, status }),
			Reply::Unreachable => Err(FetchError::transport(url, "connection refused")),
		}
	}
}

/// Backend whose requests block until the test releases a body for them.
#[derive(Default)]
struct GatedBackend {
	gates: Mutex<HashMap<String, Receiver<Result<Value, FetchError>>>>,
	calls: Mutex<Vec<String>>,
}

impl GatedBackend {
	fn gate(&self, term: &str) -> Sender<Result<Value, FetchError>> {
		let (tx, rx) = mpsc::channel();
		self.gates.lock().unwrap().insert(term.to_string(), rx);
		tx
	}

	fn calls(&self) -> Vec<String> {
		let mut calls = self.calls.lock().unwrap().clone();
		calls.sort();
		calls
	}
}

impl SearchBackend for GatedBackend {
	fn fetch(&self, term: &str) -> Result<Value, FetchError> {
		self.calls.lock().unwrap().push(term.to_string());
		let gate = self.gates.lock().unwrap().remove(term);
		match gate {
			Some(rx) => rx
				.recv()
				.unwrap_or_else(|_| Err(FetchError::transport(term, "gate dropped"))),
			None => Err(FetchError::transport(term, "no gate registered")),
		}
	}
}

fn hit(id: &str, title: &str, score: f64) -> Value {
	json!({
		"objectID": id,
		"title": title,
		"url": format!("https://{}.com", title.to_lowercase()),
		"relevancy_score": score,
	})
}

fn titles(search: &NewsSearch) -> Vec<String> {
	search.data().iter().map(|item| item.title.clone()).collect()
}

#[test]
fn initial_term_fetches_and_ranks_results() {
	let backend = Arc::new(ScriptedBackend::default().with(
		"react",
		Reply::Body(json!({"hits": [hit("1", "A", 0.3), hit("2", "B", 0.9)]})),
	));
	let mut search = NewsSearch::new("react", backend.clone());

	assert!(search.wait_until_settled(WAIT));
	assert_eq!(titles(&search), vec!["B", "A"]);
	assert!(!search.is_loading());
	assert!(!search.has_error());
	assert_eq!(backend.calls(), vec!["react"]);
}

#[test]
fn empty_initial_term_never_fetches() {
	let backend = Arc::new(ScriptedBackend::default());
	for initial in [SearchTerm::from(""), SearchTerm::none()] {
		let search = NewsSearch::new(initial, backend.clone());
		assert_eq!(search.in_flight(), 0);
		assert_eq!(search.snapshot(), SearchSnapshot::default());
	}
	assert!(backend.calls().is_empty());
}

#[test]
fn transport_failure_sets_error_and_clears_data() {
	let backend = Arc::new(ScriptedBackend::default().with("x", Reply::Unreachable));
	let mut search = NewsSearch::new("x", backend);

	assert!(search.wait_until_settled(WAIT));
	assert_eq!(
		search.snapshot(),
		SearchSnapshot {
			data: Vec::new(),
			is_loading: false,
			has_error: true,
		}
	);
}

#[test]
fn bad_status_and_malformed_bodies_surface_as_errors() {
	let backend = Arc::new(
		ScriptedBackend::default()
			.with("ok", Reply::Body(json!({"hits": [hit("1", "A", 0.5)]})))
			.with("down", Reply::Status(503))
			.with("odd", Reply::Body(json!({"results": []}))),
	);
	let mut search = NewsSearch::new("ok", backend);
	assert!(search.wait_until_settled(WAIT));
	assert_eq!(titles(&search), vec!["A"]);

	search.set_search_term("down");
	assert!(search.wait_until_settled(WAIT));
	assert!(search.has_error());
	assert!(search.data().is_empty());
	let reason = search.failure().expect("failure reason");
	assert!(reason.contains("HTTP 503"), "{reason}");

	search.set_search_term("ok");
	assert!(search.wait_until_settled(WAIT));
	assert!(!search.has_error());
	assert!(search.failure().is_none());

	search.set_search_term("odd");
	assert!(search.wait_until_settled(WAIT));
	assert!(search.has_error());
	assert!(search.data().is_empty());
}

#[test]
fn clearing_the_term_keeps_previous_results_and_errors() {
	let backend = Arc::new(
		ScriptedBackend::default()
			.with("rust", Reply::Body(json!({"hits": [hit("1", "Rust", 1.0)]})))
			.with("fail", Reply::Status(500)),
	);
	let mut search = NewsSearch::new("rust", backend.clone());
	assert!(search.wait_until_settled(WAIT));

	search.set_search_term("");
	search.set_search_term(None::<String>);
	assert_eq!(search.in_flight(), 0);
	assert_eq!(titles(&search), vec!["Rust"]);

	search.set_search_term("fail");
	assert!(search.wait_until_settled(WAIT));
	search.set_search_term("");
	assert!(search.has_error());
	assert!(!search.is_loading());

	assert_eq!(backend.calls(), vec!["rust", "fail"]);
}

#[test]
fn new_term_clears_error_before_the_cycle_resolves() {
	let backend = Arc::new(GatedBackend::default());
	let first = backend.gate("bad");
	let mut search = NewsSearch::new("bad", backend.clone());
	first
		.send(Err(FetchError::transport("bad", "offline")))
		.unwrap();
	assert!(search.wait_until_settled(WAIT));
	assert!(search.has_error());

	let second = backend.gate("good");
	search.set_search_term("good");
	assert!(search.is_loading());
	assert!(!search.has_error());

	second
		.send(Ok(json!({"hits": [hit("1", "Good", 0.4)]})))
		.unwrap();
	assert!(search.wait_until_settled(WAIT));
	assert_eq!(titles(&search), vec!["Good"]);
}

#[test]
fn repeating_the_current_term_does_not_refetch() {
	let backend = Arc::new(
		ScriptedBackend::default().with("rust", Reply::Body(json!({"hits": []}))),
	);
	let mut search = NewsSearch::new("rust", backend.clone());
	assert!(search.wait_until_settled(WAIT));

	search.set_search_term("rust");
	assert_eq!(search.in_flight(), 0);
	assert_eq!(backend.calls(), vec!["rust"]);
}

#[test]
fn last_resolved_response_wins_by_default() {
	let backend = Arc::new(GatedBackend::default());
	let gate_a = backend.gate("a");
	let gate_b = backend.gate("b");
	let mut search = NewsSearch::new("", backend.clone());

	search.set_search_term("a");
	search.set_search_term("b");
	assert_eq!(search.in_flight(), 2);

	gate_b
		.send(Ok(json!({"hits": [hit("2", "B", 0.5)]})))
		.unwrap();
	assert!(search.wait_for_completion(WAIT));
	assert_eq!(titles(&search), vec!["B"]);
	assert!(!search.is_loading());

	gate_a
		.send(Ok(json!({"hits": [hit("1", "A", 0.5)]})))
		.unwrap();
	assert!(search.wait_until_settled(WAIT));
	assert_eq!(titles(&search), vec!["A"]);
	assert_eq!(backend.calls(), vec!["a", "b"]);
}

#[test]
fn latest_request_ordering_discards_superseded_responses() {
	let backend = Arc::new(GatedBackend::default());
	let gate_a = backend.gate("a");
	let gate_b = backend.gate("b");
	let mut search = NewsSearch::with_ordering("", backend.clone(), ResponseOrdering::LatestRequest);

	search.set_search_term("a");
	search.set_search_term("b");

	gate_b
		.send(Ok(json!({"hits": [hit("2", "B", 0.5)]})))
		.unwrap();
	assert!(search.wait_for_completion(WAIT));
	gate_a
		.send(Ok(json!({"hits": [hit("1", "A", 0.5)]})))
		.unwrap();
	assert!(search.wait_until_settled(WAIT));

	assert_eq!(titles(&search), vec!["B"]);
	assert!(!search.is_loading());
	assert_eq!(backend.calls(), vec!["a", "b"]);
}

#[test]
fn latest_request_ordering_stays_loading_until_latest_arrives() {
	let backend = Arc::new(GatedBackend::default());
	let gate_a = backend.gate("a");
	let gate_b = backend.gate("b");
	let mut search = NewsSearch::with_ordering("a", backend, ResponseOrdering::LatestRequest);
	search.set_search_term("b");

	gate_a.send(Ok(json!({"hits": []}))).unwrap();
	assert!(search.wait_for_completion(WAIT));
	assert!(search.is_loading());

	gate_b.send(Ok(json!({"hits": []}))).unwrap();
	assert!(search.wait_until_settled(WAIT));
	assert!(!search.is_loading());
}

#[test]
fn external_term_changes_resync_the_internal_term() {
	let body = json!({"hits": []});
	let backend = Arc::new(
		ScriptedBackend::default()
			.with("one", Reply::Body(body.clone()))
			.with("two", Reply::Body(body.clone()))
			.with("three", Reply::Body(body)),
	);
	let mut search = NewsSearch::new("one", backend.clone());
	assert!(search.wait_until_settled(WAIT));

	search.set_search_term("two");
	assert!(search.wait_until_settled(WAIT));

	// Same external value as before: the setter's term stays in place.
	search.sync_initial_term("one");
	assert_eq!(search.term(), &SearchTerm::from("two"));

	search.sync_initial_term("three");
	assert!(search.wait_until_settled(WAIT));
	assert_eq!(search.term(), &SearchTerm::from("three"));
	assert_eq!(backend.calls(), vec!["one", "two", "three"]);
}

#[test]
fn pump_applies_completions_without_blocking() {
	let backend = Arc::new(GatedBackend::default());
	let gate = backend.gate("rust");
	let mut search = NewsSearch::new("rust", backend);

	assert!(!search.pump());
	assert!(search.is_loading());

	gate.send(Ok(json!({"hits": [hit("1", "Rust", 1.0)]})))
		.unwrap();
	let deadline = std::time::Instant::now() + WAIT;
	while !search.pump() && std::time::Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(5));
	}
	assert_eq!(titles(&search), vec!["Rust"]);
}
