use std::env;

use anyhow::{Error, Result};
use hnsearch::ResponseOrdering;
use hnsearch::news::DEFAULT_BASE_URL;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, parse_log_level};
use crate::cli::CliArgs;

pub(super) const DEFAULT_INITIAL_TERM: &str = "react";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	ui: UiSection,
	logging: LoggingSection,
}

/// Search endpoint and query behaviour.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	base_url: Option<String>,
	initial_term: Option<String>,
	response_ordering: Option<ResponseOrdering>,
}

/// Presentation options for the terminal view.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	input_title: Option<String>,
	show_log: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.search.initial_term = Some(query);
		}
		if let Some(base_url) = cli.base_url.clone() {
			self.search.base_url = Some(base_url);
		}
		if let Some(ordering) = cli.ordering {
			self.search.response_ordering = Some(ordering.into());
		}

		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.input_title = Some(title);
		}
		if cli.show_log {
			self.ui.show_log = Some(true);
		}

		if let Some(level) = cli.log_level {
			self.logging.level = Some(level.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.base_url.is_some(),
				self.search.base_url.is_some(),
				"HNSEARCH__SEARCH__BASE_URL",
				"--base-url",
				"search.base_url",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"HNSEARCH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"HNSEARCH__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
		};

		let log_level = match self.logging.level.as_deref() {
			Some(value) => parse_log_level(value, sources.source_for_log_level())?,
			None => log::LevelFilter::Info,
		};

		let config = ResolvedConfig {
			base_url: self
				.search
				.base_url
				.map(|url| url.trim().to_string())
				.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			initial_term: self
				.search
				.initial_term
				.unwrap_or_else(|| DEFAULT_INITIAL_TERM.to_string()),
			ordering: self.search.response_ordering.unwrap_or_default(),
			theme: self.ui.theme,
			input_title: self.ui.input_title,
			show_log: self.ui.show_log.unwrap_or(false),
			log_level,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
