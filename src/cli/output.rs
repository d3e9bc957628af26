use anyhow::Result;
use hnsearch::{NewsItem, SessionOutcome};
use serde_json::json;

use super::OutputFormat;

/// Print the outcome of an interactive session.
pub(crate) fn print_session(format: OutputFormat, outcome: &SessionOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_session_plain(outcome),
		OutputFormat::Json => println!("{}", format_session_json(outcome)?),
	}
	Ok(())
}

/// Print the ranked results of a batch search.
pub(crate) fn print_results(format: OutputFormat, term: &str, items: &[NewsItem]) -> Result<()> {
	match format {
		OutputFormat::Plain => print!("{}", format_results_plain(term, items)),
		OutputFormat::Json => println!("{}", format_results_json(term, items)?),
	}
	Ok(())
}

fn print_session_plain(outcome: &SessionOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (term: '{}')", outcome.term);
		return;
	}

	match &outcome.selection {
		Some(item) => println!("{}", item.url),
		None => println!("No selection"),
	}
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_session_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"term": outcome.term,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn format_results_plain(term: &str, items: &[NewsItem]) -> String {
	if items.is_empty() {
		return format!("No results about {term}\n");
	}

	let mut out = format!("Results about {term}\n");
	for (index, item) in items.iter().enumerate() {
		out.push_str(&format!(
			"{:>3}. [{:.3}] {}  {}\n",
			index + 1,
			item.relevancy_score,
			item.title,
			item.url
		));
	}
	out
}

pub(crate) fn format_results_json(term: &str, items: &[NewsItem]) -> Result<String> {
	let payload = json!({
		"term": term,
		"data": items,
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}
