//! Looks games up on the Steam storefront.
//!
//! Three operations are offered, either on a [`StorefrontClient`] or through the
//! free functions below, which use a default client:
//! - [`get_app_review`]: resolve a game name and summarize how its reviewers received it.
//! - [`check_app_is_adult`]: whether an app carries the adult sexual content descriptor.
//! - [`resolve_application`]: turn a free-text game name into a single search result.
pub mod client;
pub mod config;
pub mod error;
pub mod steam_api;
mod utils;

pub use client::StorefrontClient;
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use steam_api::search::SearchResult;

lazy_static::lazy_static! {
    static ref HTTP_CLIENT: reqwest::Client = reqwest::Client::new();
}

pub async fn get_app_review(query: &str) -> Result<(String, String)> {
    StorefrontClient::default().get_app_review(query).await
}

pub async fn check_app_is_adult(app_id: &str) -> Result<bool> {
    StorefrontClient::default().check_app_is_adult(app_id).await
}

pub async fn resolve_application(query: &str) -> Result<SearchResult> {
    StorefrontClient::default().resolve_application(query).await
}
