use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OrderingArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `hnsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "hnsearch",
	version,
	long_version = long_version(),
	about = "Search Hacker News from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "HNSEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TERM",
		help = "Search term to run on startup (default: react)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Search endpoint to query (default: the public Algolia HN API)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_enum,
		help = "How overlapping responses are reconciled (default: last-resolved)"
	)]
	pub(crate) ordering: Option<OrderingArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the input box title (default: search)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "show-log",
		help = "Open the log pane on startup (default: disabled)"
	)]
	pub(crate) show_log: bool,
	#[arg(
		short = 'b',
		long,
		help = "Run the initial search without the terminal UI and print the results"
	)]
	pub(crate) batch: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
