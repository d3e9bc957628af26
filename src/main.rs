mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_results, print_session};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in hnsearch::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	hnsearch::logging::initialize_with_level(resolved.log_level);

	if cli.batch {
		run_batch(cli.output, resolved)
	} else {
		run_interactive(cli.output, resolved)
	}
}

/// Run the terminal view and print the session outcome in the chosen format.
fn run_interactive(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;
	print_session(format, &outcome)
}

/// Run a single fetch cycle for the configured term and print its results.
fn run_batch(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let term = settings.initial_term.clone();
	let items = workflow::run_batch(&settings)?;
	print_results(format, &term, &items)
}
