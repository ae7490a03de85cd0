use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Everything that can go wrong while talking to the storefront.
///
/// Operations are all-or-nothing: any of these aborts the call that raised it.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Sorry, I couldn't find any results matching \"{query}\"")]
    NotFound { query: String },

    #[error(
        "Sorry, I found multiple results for \"{query}\", try one of these possible matches:\n{}",
        list_candidates(.candidates)
    )]
    AmbiguousMatch {
        query: String,
        /// Bounded by [`crate::config::StorefrontConfig::max_listed_candidates`]
        candidates: Vec<String>,
    },

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to deserialize response of {endpoint}: {source}")]
    Parse {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn list_candidates(candidates: &[String]) -> String {
    candidates.iter().fold(String::new(), |mut list, name| {
        list.push_str(name);
        list.push('\n');
        list
    })
}
