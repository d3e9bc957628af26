use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use super::FetchError;

/// Algolia endpoint serving the public Hacker News index.
pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1/search";

const USER_AGENT: &str = concat!("hnsearch/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of raw search responses.
///
/// Implementations are called from background fetch threads, one call per
/// fetch cycle, and must return the decoded JSON body of a successful response.
pub trait SearchBackend: Send + Sync {
	fn fetch(&self, term: &str) -> Result<Value, FetchError>;
}

/// Build the request URL for `term`.
///
/// The term is appended as-is with no percent-encoding of its own.
#[must_use]
pub fn search_url(base_url: &str, term: &str) -> String {
	format!("{base_url}?query={term}")
}

/// [`SearchBackend`] performing blocking HTTP requests with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	base_url: String,
}

impl HttpBackend {
	/// Create a backend targeting the public Algolia endpoint.
	pub fn new() -> Result<Self, FetchError> {
		Self::with_base_url(DEFAULT_BASE_URL)
	}

	/// Create a backend targeting an alternative search endpoint.
	pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
		let base_url = base_url.into();
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.connect_timeout(CONNECT_TIMEOUT)
			// Reads are left unbounded.
			.timeout(None)
			.build()
			.map_err(|err| FetchError::transport(&base_url, err))?;
		Ok(Self { client, base_url })
	}

	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}

impl SearchBackend for HttpBackend {
	fn fetch(&self, term: &str) -> Result<Value, FetchError> {
		let url = search_url(&self.base_url, term);
		log::debug!("GET {url}");

		let response = self
			.client
			.get(&url)
			.send()
			.map_err(|err| FetchError::transport(&url, err))?;

		let status = response.status();
		if !status.is_success() {
			return Err(FetchError::Status {
				url,
				status: status.as_u16(),
			});
		}

		// A body cut off mid-read is a transport failure, not a bad payload.
		let body = response
			.bytes()
			.map_err(|err| FetchError::transport(&url, err))?;
		serde_json::from_slice(&body)
			.map_err(|err| FetchError::malformed(format!("invalid JSON body: {err}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_concatenates_term_verbatim() {
		assert_eq!(
			search_url(DEFAULT_BASE_URL, "react"),
			"https://hn.algolia.com/api/v1/search?query=react"
		);
		assert_eq!(
			search_url("http://localhost:8080/search", "c++ & rust"),
			"http://localhost:8080/search?query=c++ & rust"
		);
	}

	#[test]
	fn backend_keeps_configured_base_url() {
		let backend = HttpBackend::with_base_url("http://127.0.0.1:9/search").expect("client");
		assert_eq!(backend.base_url(), "http://127.0.0.1:9/search");
	}
}
