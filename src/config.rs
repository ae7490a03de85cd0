pub const DEFAULT_SEARCH_BASE: &str = "https://steamcommunity.com/actions/SearchApps";
pub const DEFAULT_DETAILS_BASE: &str = "https://store.steampowered.com/api/appdetails";
pub const DEFAULT_REVIEWS_BASE: &str = "https://store.steampowered.com/appreviews";
pub const DEFAULT_STORE_PAGE_BASE: &str = "https://store.steampowered.com/app/";

/// How many names an ambiguous search lists back to the user.
pub const DEFAULT_MAX_LISTED_CANDIDATES: usize = 21;

/// Where the storefront lives and how chatty ambiguous matches get.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Search endpoint, the url-escaped query is appended as a path segment
    pub search_base: String,
    /// App details endpoint, queried with `?appids={id}`
    pub details_base: String,
    /// Reviews endpoint, queried as `/{id}?json=1`
    pub reviews_base: String,
    /// Prefix of the store page link put at the end of review summaries
    pub store_page_base: String,
    pub max_listed_candidates: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            search_base: DEFAULT_SEARCH_BASE.to_string(),
            details_base: DEFAULT_DETAILS_BASE.to_string(),
            reviews_base: DEFAULT_REVIEWS_BASE.to_string(),
            store_page_base: DEFAULT_STORE_PAGE_BASE.to_string(),
            max_listed_candidates: DEFAULT_MAX_LISTED_CANDIDATES,
        }
    }
}

impl StorefrontConfig {
    /// Points all three endpoints at the same host, keeping the storefront's paths.
    ///
    /// Handy for staging mirrors and local mock servers.
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');

        Self {
            search_base: format!("{host}/actions/SearchApps"),
            details_base: format!("{host}/api/appdetails"),
            reviews_base: format!("{host}/appreviews"),
            ..Self::default()
        }
    }

    pub(crate) fn search_url(&self, query: &str) -> String {
        let encoded_query = urlencoding::Encoded::new(query);
        format!("{}/{encoded_query}", self.search_base.trim_end_matches('/'))
    }

    pub(crate) fn details_url(&self, app_id: &str) -> String {
        let encoded_id = urlencoding::Encoded::new(app_id);
        format!("{}?appids={encoded_id}", self.details_base)
    }

    pub(crate) fn reviews_url(&self, app_id: &str) -> String {
        let encoded_id = urlencoding::Encoded::new(app_id);
        format!(
            "{}/{encoded_id}?json=1",
            self.reviews_base.trim_end_matches('/')
        )
    }
}
