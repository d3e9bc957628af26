use crate::news::NewsItem;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
	/// `true` when the user picked an item rather than cancelling.
	pub accepted: bool,
	/// Term shown in the results heading when the session ended.
	pub term: String,
	pub selection: Option<NewsItem>,
}
