use hnsearch::ResponseOrdering;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::parse_log_level;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub initial_term: String,
	pub ordering: ResponseOrdering,
	pub theme: Option<String>,
	pub input_title: Option<String>,
	pub show_log: bool,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
