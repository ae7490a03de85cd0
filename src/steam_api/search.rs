use serde::Deserialize;

use crate::{
    client::StorefrontClient,
    error::{Result, StorefrontError},
    utils::{deserialize_null_default, deserialize_string_or_number},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "appid", deserialize_with = "deserialize_string_or_number")]
    pub app_id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(rename = "icon", default, deserialize_with = "deserialize_null_default")]
    pub icon_url: String,
    #[serde(rename = "logo", default, deserialize_with = "deserialize_null_default")]
    pub logo_url: String,
}

pub async fn search_apps(client: &StorefrontClient, query: &str) -> Result<Vec<SearchResult>> {
    let url = client.config().search_url(query);

    // Read a bare `null` as no results at all
    let results: Option<Vec<SearchResult>> = client.get_json(&url, "/actions/SearchApps").await?;

    Ok(results.unwrap_or_default())
}

/// Picks the app the user meant out of the search results.
///
/// A case-insensitive exact name match wins wherever it sits in `results`.
/// Failing that, a single case-insensitive substring match is taken as if it
/// were exact. Several substring matches are reported back as ambiguous,
/// listing at most `max_listed` names in the order the search returned them.
pub fn find_app(
    query: &str,
    results: Vec<SearchResult>,
    max_listed: usize,
) -> Result<SearchResult> {
    let lowered_query = query.to_lowercase();
    let mut partial_matches = Vec::new();

    for result in results {
        let lowered_name = result.name.to_lowercase();

        if lowered_name == lowered_query {
            tracing::debug!("Found exact match for '{query}': {}", result.name);
            return Ok(result);
        }

        if lowered_name.contains(&lowered_query) {
            partial_matches.push(result);
        }
    }

    match partial_matches.len() {
        0 => Err(StorefrontError::NotFound {
            query: query.to_string(),
        }),
        1 => Ok(partial_matches.remove(0)),
        _ => Err(StorefrontError::AmbiguousMatch {
            query: query.to_string(),
            candidates: partial_matches
                .into_iter()
                .take(max_listed)
                .map(|result| result.name)
                .collect(),
        }),
    }
}
