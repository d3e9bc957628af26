use std::fmt;

use serde::Deserialize;

/// How completions of overlapping fetch cycles are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
	/// Every completion is applied as it arrives; whichever request resolves
	/// last determines the visible state, even if it was issued first.
	#[default]
	LastResolved,
	/// Completions of superseded requests are discarded; only the most
	/// recently issued request may update the state.
	LatestRequest,
}

impl ResponseOrdering {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::LastResolved => "last-resolved",
			Self::LatestRequest => "latest-request",
		}
	}
}

impl fmt::Display for ResponseOrdering {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
