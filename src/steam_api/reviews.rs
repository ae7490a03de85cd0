use std::fmt::Display;

use serde::Deserialize;

use crate::{client::StorefrontClient, error::Result, steam_api::search::SearchResult};

/// A reply without `query_summary` is rejected, while missing counts inside it read as zero.
#[derive(Debug, Deserialize)]
pub struct ReviewInfo {
    pub success: i64,
    pub query_summary: QuerySummary,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuerySummary {
    #[serde(default)]
    pub num_reviews: i64,
    #[serde(default)]
    pub review_score: i64,
    #[serde(rename = "review_score_desc", default)]
    pub review_score_description: String,
    #[serde(default)]
    pub total_positive: i64,
    #[serde(default)]
    pub total_negative: i64,
    #[serde(default)]
    pub total_reviews: i64,
}

pub async fn get_review_info(client: &StorefrontClient, app_id: &str) -> Result<ReviewInfo> {
    let url = client.config().reviews_url(app_id);

    let review: ReviewInfo = client.get_json(&url, "/appreviews").await?;
    if review.success != 1 {
        tracing::warn!(
            "Reviews for app {app_id} came back with success = {}",
            review.success
        );
    }

    Ok(review)
}

/// Human-readable reception blurb for an app.
pub struct Reception<'a> {
    pub app: &'a SearchResult,
    pub summary: &'a QuerySummary,
    pub store_page_base: &'a str,
}

impl Display for Reception<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            app,
            summary,
            store_page_base,
        } = self;

        writeln!(
            f,
            "Reception for {} is \"{}\" recommended by {}/{} reviewers.",
            app.name, summary.review_score_description, summary.total_positive, summary.total_reviews
        )?;
        writeln!(f, "For more info, check out the store page:")?;
        write!(f, "{store_page_base}{}", app.app_id)
    }
}
