use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::{
    config::StorefrontConfig,
    error::{Result, StorefrontError},
    steam_api::{
        app_details::{contains_adult_content, get_app_details, AppDetailsResponse},
        reviews::{get_review_info, Reception},
        search::{find_app, search_apps, SearchResult},
    },
    HTTP_CLIENT,
};

/// Client for the storefront's search, review and details endpoints.
///
/// Holds no state besides its configuration, every call stands on its own.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    config: StorefrontConfig,
}

impl Default for StorefrontClient {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

impl StorefrontClient {
    /// Builds a client on top of the process-wide HTTP client.
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_http_client(HTTP_CLIENT.clone(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: StorefrontConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Resolves a free-text game name to a single search result.
    pub async fn resolve_application(&self, query: &str) -> Result<SearchResult> {
        let results = search_apps(self, query).await?;

        find_app(query, results, self.config.max_listed_candidates).map_err(|err| {
            tracing::info!("Could not resolve '{query}': {err}");
            err
        })
    }

    /// Looks up how an app was received by its reviewers.
    ///
    /// Returns the reception blurb along with the id the query resolved to.
    pub async fn get_app_review(&self, query: &str) -> Result<(String, String)> {
        let start = Instant::now();

        let app = self.resolve_application(query).await?;
        let review = get_review_info(self, &app.app_id).await?;

        let reception = Reception {
            app: &app,
            summary: &review.query_summary,
            store_page_base: &self.config.store_page_base,
        }
        .to_string();

        tracing::info!(
            "Built reception for query '{query}' ({}) in {}ms",
            app.app_id,
            start.elapsed().as_millis()
        );

        Ok((reception, app.app_id))
    }

    pub async fn get_app_details(&self, app_id: &str) -> Result<AppDetailsResponse> {
        get_app_details(self, app_id).await
    }

    /// Whether the storefront flags the app as having adult sexual content.
    pub async fn check_app_is_adult(&self, app_id: &str) -> Result<bool> {
        let details = get_app_details(self, app_id).await?;

        Ok(contains_adult_content(&details))
    }

    /// GETs `url` and deserializes its body, logging failures before handing them back.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        endpoint: &'static str,
    ) -> Result<T> {
        let start = Instant::now();
        let transport = |source: reqwest::Error| {
            tracing::error!("Problem fetching from {endpoint}: {source}");
            StorefrontError::Transport { endpoint, source }
        };

        let body = self
            .http
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport)?
            .text()
            .await
            .map_err(transport)?;

        tracing::info!(
            "Fetched {endpoint} in {}ms",
            start.elapsed().as_millis()
        );

        serde_json::from_str(&body).map_err(|source| {
            tracing::error!("Failed to deserialize response of {endpoint}: {source}");
            StorefrontError::Parse { endpoint, source }
        })
    }
}
