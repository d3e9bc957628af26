/// The user supplied query driving a search.
///
/// A term that is absent or empty means there is no active query. Whitespace
/// is significant: `" "` is a real query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
	/// A term representing "no query".
	#[must_use]
	pub fn none() -> Self {
		Self(None)
	}

	/// The query text, or `None` when the term is inactive.
	#[must_use]
	pub fn as_query(&self) -> Option<&str> {
		self.0.as_deref().filter(|term| !term.is_empty())
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.as_query().is_none()
	}

	/// Text suitable for labels; inactive terms render as an empty string.
	#[must_use]
	pub fn as_str(&self) -> &str {
		self.0.as_deref().unwrap_or_default()
	}
}

impl From<&str> for SearchTerm {
	fn from(value: &str) -> Self {
		Self(Some(value.to_string()))
	}
}

impl From<String> for SearchTerm {
	fn from(value: String) -> Self {
		Self(Some(value))
	}
}

impl<S: Into<String>> From<Option<S>> for SearchTerm {
	fn from(value: Option<S>) -> Self {
		Self(value.map(Into::into))
	}
}
