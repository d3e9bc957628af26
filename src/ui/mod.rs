//! Interactive terminal view for `hnsearch`.
//!
//! [`SearchUi`] assembles an [`App`] from a backend and display options. The
//! remaining submodules implement the event loop, key handling, rendering and
//! the small widgets the view is built from.

mod actions;
mod builder;
mod input;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::SearchUi;
pub use input::SearchInput;
pub use outcome::SessionOutcome;
pub use state::App;
pub use theme::Theme;
