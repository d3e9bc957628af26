//! Search state for the news view.
//!
//! [`NewsSearch`] owns the active term and the lifecycle of the requests it
//! triggers. Every non-empty term change starts a fetch cycle on a background
//! thread; completions are applied when the owner calls [`NewsSearch::pump`]
//! (or one of the blocking wait helpers), so the state itself is only ever
//! touched from the owning thread.

mod ordering;
mod runtime;
mod state;
mod term;

pub use ordering::ResponseOrdering;
pub use runtime::NewsSearch;
pub use state::{SearchSnapshot, SearchState};
pub use term::SearchTerm;

#[cfg(test)]
mod tests;
