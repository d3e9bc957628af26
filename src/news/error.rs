use thiserror::Error;

/// Failure of a single fetch cycle.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("request to {url} failed: {reason}")]
	Transport { url: String, reason: String },
	#[error("{url} responded with HTTP {status}")]
	Status { url: String, status: u16 },
	#[error("malformed search response: {reason}")]
	Malformed { reason: String },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
	/// The request could not be completed or returned a non-success status.
	Network,
	/// The body was not JSON or lacked an array-typed `hits` field.
	MalformedResponse,
}

impl FetchError {
	pub fn transport(url: impl Into<String>, reason: impl ToString) -> Self {
		Self::Transport {
			url: url.into(),
			reason: reason.to_string(),
		}
	}

	pub fn malformed(reason: impl Into<String>) -> Self {
		Self::Malformed {
			reason: reason.into(),
		}
	}

	#[must_use]
	pub fn kind(&self) -> FetchErrorKind {
		match self {
			Self::Transport { .. } | Self::Status { .. } => FetchErrorKind::Network,
			Self::Malformed { .. } => FetchErrorKind::MalformedResponse,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_errors_count_as_network_failures() {
		let err = FetchError::Status {
			url: "https://example.com".into(),
			status: 503,
		};
		assert_eq!(err.kind(), FetchErrorKind::Network);
		assert!(err.to_string().contains("HTTP 503"));
	}
}
