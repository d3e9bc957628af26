//! Hacker News search data: the canonical [`NewsItem`] record, the ranking
//! pass applied to raw Algolia hits, and the backend that fetches them.

mod backend;
mod error;
mod item;
mod rank;

pub use backend::{DEFAULT_BASE_URL, HttpBackend, SearchBackend, search_url};
pub use error::{FetchError, FetchErrorKind};
pub use item::NewsItem;
pub use rank::rank_response;
