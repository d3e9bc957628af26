use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A ranked search result as displayed by the UI.
///
/// Only the four canonical fields survive the conversion from a raw hit; any
/// other fields present in the API response are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
	#[serde(rename = "objectID")]
	pub object_id: String,
	pub title: String,
	pub url: String,
	pub relevancy_score: f64,
}

impl NewsItem {
	/// Construct an item directly from its parts.
	#[must_use]
	pub fn new(
		object_id: impl Into<String>,
		title: impl Into<String>,
		url: impl Into<String>,
		relevancy_score: f64,
	) -> Self {
		Self {
			object_id: object_id.into(),
			title: title.into(),
			url: url.into(),
			relevancy_score,
		}
	}

	/// Convert a raw hit into an item.
	///
	/// Returns `None` unless the hit carries a non-empty string `url` and a
	/// numeric `relevancy_score`. A missing or non-string `objectID`/`title`
	/// becomes an empty string.
	#[must_use]
	pub fn from_hit(hit: &Value) -> Option<Self> {
		let url = hit.get("url").and_then(Value::as_str).filter(|url| !url.is_empty())?;
		let relevancy_score = hit.get("relevancy_score").and_then(Value::as_f64)?;

		Some(Self {
			object_id: string_field(hit, "objectID"),
			title: string_field(hit, "title"),
			url: url.to_string(),
			relevancy_score,
		})
	}
}

fn string_field(hit: &Value, key: &str) -> String {
	hit.get(key)
		.and_then(Value::as_str)
		.unwrap_or_default()
		.to_string()
}
