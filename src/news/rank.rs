use serde_json::Value;

use super::{FetchError, NewsItem};

/// Turn a decoded search response into the ranked list shown to the user.
///
/// The body must contain an array-typed `hits` field. Hits failing
/// [`NewsItem::from_hit`] are skipped and the rest are ordered by
/// `relevancy_score`, highest first. Equal scores keep their response order.
pub fn rank_response(body: &Value) -> Result<Vec<NewsItem>, FetchError> {
	let hits = body
		.get("hits")
		.and_then(Value::as_array)
		.ok_or_else(|| FetchError::malformed("missing `hits` array"))?;

	let mut items: Vec<NewsItem> = hits.iter().filter_map(NewsItem::from_hit).collect();
	items.sort_by(|a, b| b.relevancy_score.total_cmp(&a.relevancy_score));
	Ok(items)
}
