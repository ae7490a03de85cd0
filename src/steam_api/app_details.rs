use std::{collections::BTreeMap, fmt::Display};

use serde::Deserialize;

use crate::{
    client::StorefrontClient,
    error::Result,
    utils::{deserialize_null_default, deserialize_nullable_string_or_number},
};

/// Content descriptor for adult-only sexual content.
pub const ADULT_SEXUAL_CONTENT_DESCRIPTOR: i64 = 3;

/// Answer given when the storefront has nothing saying an app is adult-only.
///
/// Missing details, failed lookups and empty descriptor lists all get the benefit of the doubt.
pub const ASSUME_ADULT_WITHOUT_EVIDENCE: bool = false;

/// `/api/appdetails` answers with an object keyed by the requested app id.
pub type AppDetailsResponse = BTreeMap<String, AppDetails>;

#[derive(Debug, Deserialize)]
pub struct AppDetails {
    pub success: bool,
    /// Absent when `success` is false
    #[serde(default)]
    pub data: Option<AppData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppData {
    #[serde(rename = "type", deserialize_with = "deserialize_null_default")]
    pub app_type: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub steam_appid: u64,
    #[serde(deserialize_with = "deserialize_nullable_string_or_number")]
    pub required_age: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub is_free: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub dlc: Vec<u64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub detailed_description: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub about_the_game: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub short_description: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub supported_languages: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub header_image: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub capsule_image: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub capsule_imagev5: String,
    pub website: Option<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub developers: Vec<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub publishers: Vec<String>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub platforms: Platforms,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub categories: Vec<Category>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub genres: Vec<Genre>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub achievements: Achievements,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub release_date: ReleaseDate,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub support_info: SupportInfo,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub content_descriptors: ContentDescriptors,
    /// Per-board age ratings, their shape differs from board to board
    pub ratings: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Platforms {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub windows: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub mac: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub linux: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Genre {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Achievements {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub total: i64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub highlighted: Vec<HighlightedAchievement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HighlightedAchievement {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub path: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub coming_soon: bool,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SupportInfo {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContentDescriptors {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub ids: Vec<i64>,
    pub notes: Option<String>,
}

pub async fn get_app_details(
    client: &StorefrontClient,
    app_id: &str,
) -> Result<AppDetailsResponse> {
    let url = client.config().details_url(app_id);

    // Unknown ids sometimes come back as a bare `null`
    let details: Option<AppDetailsResponse> = client.get_json(&url, "/api/appdetails").await?;

    Ok(details.unwrap_or_default())
}

/// Whether any entry of a details response carries the adult sexual content descriptor.
pub fn contains_adult_content(details: &AppDetailsResponse) -> bool {
    for (app_id, entry) in details {
        let Some(data) = &entry.data else {
            continue;
        };

        tracing::debug!(
            "Content descriptor ids for app {app_id}: {:?}",
            data.content_descriptors.ids
        );
        if data
            .content_descriptors
            .ids
            .contains(&ADULT_SEXUAL_CONTENT_DESCRIPTOR)
        {
            return true;
        }
    }

    ASSUME_ADULT_WITHOUT_EVIDENCE
}

impl Display for Platforms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use arrayvec::ArrayVec;

        let mut platforms = ArrayVec::<&str, 3>::new();

        if self.windows {
            platforms.push("Windows");
        }
        if self.mac {
            platforms.push("macOS");
        }
        if self.linux {
            platforms.push("Linux");
        }

        write!(f, "{}", platforms.join(" "))
    }
}

impl Display for ContentDescriptors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use slicedisplay::SliceDisplay;

        write!(f, "{}", self.ids.as_slice().display())?;
        let notes = self.notes.as_deref().map(str::trim).unwrap_or_default();
        if !notes.is_empty() {
            write!(f, " ({notes})")?;
        }

        Ok(())
    }
}
