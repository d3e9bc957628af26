//! Terminal search client for Hacker News.
//!
//! [`news`] talks to the Algolia search API and ranks its hits,
//! [`search`] holds the term-driven search state, and [`ui`] renders it as an
//! interactive terminal view.

pub mod app_dirs;
pub mod logging;
pub mod news;
pub mod search;
pub mod ui;

pub use news::{FetchError, HttpBackend, NewsItem, SearchBackend};
pub use search::{NewsSearch, ResponseOrdering, SearchSnapshot, SearchState, SearchTerm};
pub use ui::{App, SearchUi, SessionOutcome, Theme};
