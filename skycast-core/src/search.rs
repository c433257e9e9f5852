//! Forward-geocode search

use std::time::Duration;

use crate::endpoints::GEO_LIMIT;
use crate::gateway::{FetchError, WeatherSource};
use crate::model::GeoPlace;

/// Quiet period after the last keystroke before a lookup runs
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Maximum places shown for a query
pub const SEARCH_LIMIT: usize = GEO_LIMIT;

/// Trimmed query, or `None` when there is nothing to look up
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (!query.is_empty()).then_some(query)
}

/// Look up places matching `query`, capped at [`SEARCH_LIMIT`]
pub async fn search_places<S: WeatherSource>(
    source: &S,
    query: &str,
) -> Result<Vec<GeoPlace>, FetchError> {
    let mut places = source.search_places(query).await?;
    places.truncate(SEARCH_LIMIT);
    Ok(places)
}
