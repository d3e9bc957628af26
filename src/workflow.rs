use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use hnsearch::{HttpBackend, NewsItem, NewsSearch, SearchUi, SessionOutcome};

use crate::settings::ResolvedConfig;

const BATCH_POLL: Duration = Duration::from_secs(1);

/// Coordinates building and running the interactive search experience.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}
}

/// Run one fetch cycle for the configured initial term without a terminal.
///
/// An empty term yields no results; a failed cycle is reported as an error.
pub(crate) fn run_batch(config: &ResolvedConfig) -> Result<Vec<NewsItem>> {
	let backend = HttpBackend::with_base_url(config.base_url.clone())?;
	let mut search = NewsSearch::with_ordering(
		config.initial_term.as_str(),
		Arc::new(backend),
		config.ordering,
	);

	// Reads are unbounded, so keep waiting until the cycle settles.
	while !search.wait_until_settled(BATCH_POLL) {
		log::trace!("waiting for search results");
	}

	if let Some(reason) = search.failure() {
		return Err(anyhow!(reason.to_string()))
			.with_context(|| format!("search for {:?} failed", config.initial_term));
	}
	Ok(search.data().to_vec())
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			base_url,
			initial_term,
			ordering,
			theme,
			input_title,
			show_log,
			log_level: _,
		} = config;

		let builder = Self::new(base_url)?
			.with_initial_term(initial_term)
			.with_input_title(input_title)
			.with_theme(theme);

		Ok(builder
			.finish()
			.with_ordering(ordering)
			.with_log_pane(show_log))
	}

	fn new(base_url: String) -> Result<Self> {
		let search_ui = SearchUi::http(base_url)?;
		Ok(Self { search_ui })
	}

	fn with_initial_term(mut self, term: String) -> Self {
		self.search_ui = self.search_ui.with_initial_term(term);
		self
	}

	fn with_input_title(mut self, title: Option<String>) -> Self {
		if let Some(title) = title {
			self.search_ui = self.search_ui.with_input_title(title);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.search_ui = self.search_ui.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::thread;

	use hnsearch::ResponseOrdering;
	use log::LevelFilter;

	use super::*;

	/// Answer one request on a loopback port with `status` and `body`.
	fn serve_once(status: &'static str, body: &'static str) -> String {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
		let addr = listener.local_addr().expect("local addr");
		thread::spawn(move || {
			let Ok((mut stream, _)) = listener.accept() else {
				return;
			};
			let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
			let mut line = String::new();
			while reader.read_line(&mut line).is_ok_and(|read| read > 0) {
				if line == "\r\n" {
					break;
				}
				line.clear();
			}
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			let _ = stream.write_all(response.as_bytes());
		});
		format!("http://{addr}/api/v1/search")
	}

	fn config(base_url: String, term: &str) -> ResolvedConfig {
		ResolvedConfig {
			base_url,
			initial_term: term.into(),
			ordering: ResponseOrdering::default(),
			theme: None,
			input_title: None,
			show_log: false,
			log_level: LevelFilter::Info,
		}
	}

	#[test]
	fn batch_failure_reports_the_http_status() {
		let base_url = serve_once("503 Service Unavailable", "{}");
		let err = run_batch(&config(base_url, "rust")).unwrap_err();

		let message = format!("{err:#}");
		assert!(message.contains("search for \"rust\" failed"), "{message}");
		assert!(message.contains("503"), "{message}");
	}

	#[test]
	fn batch_returns_ranked_items() {
		let base_url = serve_once(
			"200 OK",
			r#"{"hits": [
				{"objectID": "1", "title": "Low", "url": "https://low.example", "relevancy_score": 0.1},
				{"objectID": "2", "title": "High", "url": "https://high.example", "relevancy_score": 0.7}
			]}"#,
		);
		let items = run_batch(&config(base_url, "rust")).expect("batch");

		let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
		assert_eq!(titles, vec!["High", "Low"]);
	}

	#[test]
	fn batch_with_empty_term_skips_the_request() {
		let items = run_batch(&config("http://127.0.0.1:9/search".into(), "")).expect("batch");
		assert!(items.is_empty());
	}
}
