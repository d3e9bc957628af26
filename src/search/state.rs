use serde::Serialize;

use crate::news::NewsItem;

/// Lifecycle of the search results.
///
/// Loading and failure are separate variants, so a state can never be both.
/// A failed cycle holds no data, only the reason it failed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
	/// At rest, holding the results of the last successful cycle (if any).
	Idle { data: Vec<NewsItem> },
	/// A cycle is in flight. Data from before the cycle started is retained.
	Loading { data: Vec<NewsItem> },
	/// The last applied cycle failed.
	Failed { reason: String },
}

impl Default for SearchState {
	fn default() -> Self {
		Self::Idle { data: Vec::new() }
	}
}

impl SearchState {
	#[must_use]
	pub fn data(&self) -> &[NewsItem] {
		match self {
			Self::Idle { data } | Self::Loading { data } => data,
			Self::Failed { .. } => &[],
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}

	#[must_use]
	pub fn has_error(&self) -> bool {
		matches!(self, Self::Failed { .. })
	}

	/// Why the last applied cycle failed, if it did.
	#[must_use]
	pub fn failure(&self) -> Option<&str> {
		match self {
			Self::Failed { reason } => Some(reason.as_str()),
			_ => None,
		}
	}

	/// Enter the loading state, clearing any previous failure.
	pub(super) fn begin_loading(&mut self) {
		let data = match std::mem::take(self) {
			Self::Idle { data } | Self::Loading { data } => data,
			Self::Failed { .. } => Vec::new(),
		};
		*self = Self::Loading { data };
	}

	/// Settle a cycle with its outcome.
	pub(super) fn settle<E: std::fmt::Display>(&mut self, outcome: Result<Vec<NewsItem>, E>) {
		*self = match outcome {
			Ok(data) => Self::Idle { data },
			Err(err) => Self::Failed {
				reason: err.to_string(),
			},
		};
	}

	#[must_use]
	pub fn snapshot(&self) -> SearchSnapshot {
		SearchSnapshot {
			data: self.data().to_vec(),
			is_loading: self.is_loading(),
			has_error: self.has_error(),
		}
	}
}

/// Owned copy of the externally visible search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchSnapshot {
	pub data: Vec<NewsItem>,
	pub is_loading: bool,
	pub has_error: bool,
}
