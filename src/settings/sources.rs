use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use hnsearch::app_dirs;

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "hnsearch";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".hnsearch.toml"));
		files.push(current_dir.join("hnsearch.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".hnsearch.toml")));
		assert!(files.iter().any(|path| path.ends_with("hnsearch.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		writeln!(
			file,
			"[search]\ninitial_term = \"rust\"\nresponse_ordering = \"latest-request\"\n\n[ui]\ntheme = \"light\""
		)
		.expect("write config");

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["hnsearch", "--no-config", "--config", path.as_str()]);
		let config = build_config(&cli).expect("config");

		assert_eq!(config.get_string("search.initial_term").unwrap(), "rust");
		assert_eq!(config.get_string("ui.theme").unwrap(), "light");
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let cli = CliArgs::parse_from([
			"hnsearch",
			"--no-config",
			"--config",
			"/definitely/not/here/hnsearch.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
