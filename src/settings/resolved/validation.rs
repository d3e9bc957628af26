use std::str::FromStr;

use hnsearch::ui::theme;
use log::LevelFilter;
use reqwest::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	match Url::parse(&config.base_url) {
		Ok(url) if url.query().is_some() || url.fragment().is_some() => {
			return Err(ConfigError::invalid(
				"search.base_url",
				config.base_url.clone(),
				sources.source_for_base_url(),
				"must not carry a query string or fragment; `?query=<term>` is appended to it",
			));
		}
		Ok(url) if matches!(url.scheme(), "http" | "https") => {}
		Ok(url) => {
			return Err(ConfigError::invalid(
				"search.base_url",
				config.base_url.clone(),
				sources.source_for_base_url(),
				format!("unsupported scheme `{}`; expected http or https", url.scheme()),
			));
		}
		Err(err) => {
			return Err(ConfigError::invalid(
				"search.base_url",
				config.base_url.clone(),
				sources.source_for_base_url(),
				err.to_string(),
			));
		}
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		let known: Vec<&str> = theme::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", known.join(", ")),
		));
	}

	Ok(())
}

/// Parse a log level name such as `debug` or `WARN`.
pub(crate) fn parse_log_level(value: &str, origin: SettingSource) -> Result<LevelFilter, ConfigError> {
	LevelFilter::from_str(value.trim()).map_err(|_| {
		ConfigError::invalid(
			"logging.level",
			value,
			origin,
			"expected one of off, error, warn, info, debug, trace",
		)
	})
}
