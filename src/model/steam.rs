//! Steam store metadata used to decorate embeds.

use std::collections::HashMap;

use serde::Deserialize;

/// Longest description shown in an embed, in characters.
pub const DESCRIPTION_LIMIT: usize = 500;

/// Display metadata for a Steam app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamAppInfo {
    pub appid: String,
    pub name: String,
    pub header_image: Option<String>,
    pub release_date: String,
    pub description: String,
}

#[derive(Deserialize)]
struct AppDetailsEnvelope {
    #[serde(default)]
    success: bool,
    data: Option<AppDetailsData>,
}

#[derive(Deserialize)]
struct AppDetailsData {
    name: Option<String>,
    header_image: Option<String>,
    release_date: Option<ReleaseDate>,
    short_description: Option<String>,
}

#[derive(Deserialize)]
struct ReleaseDate {
    date: Option<String>,
}

impl SteamAppInfo {
    /// Placeholder used whenever the store cannot describe the app.
    pub fn fallback(appid: &str) -> Self {
        Self {
            appid: appid.to_string(),
            name: format!("AppID {}", appid),
            header_image: None,
            release_date: "Unknown".to_string(),
            description: String::new(),
        }
    }

    /// Parses an `appdetails` response body.
    ///
    /// Returns the fallback when the body is not the expected shape, the app is
    /// missing from it, or the store reports `success: false`.
    pub fn from_appdetails(appid: &str, body: serde_json::Value) -> Self {
        let Ok(mut envelopes) = serde_json::from_value::<HashMap<String, AppDetailsEnvelope>>(body)
        else {
            return Self::fallback(appid);
        };

        let Some(AppDetailsEnvelope {
            success: true,
            data: Some(data),
        }) = envelopes.remove(appid)
        else {
            return Self::fallback(appid);
        };

        Self {
            appid: appid.to_string(),
            name: data.name.unwrap_or_else(|| format!("AppID {}", appid)),
            header_image: data.header_image.filter(|url| !url.is_empty()),
            release_date: data
                .release_date
                .and_then(|r| r.date)
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            description: data
                .short_description
                .unwrap_or_default()
                .chars()
                .take(DESCRIPTION_LIMIT)
                .collect(),
        }
    }

    pub fn store_url(&self) -> String {
        format!("https://store.steampowered.com/app/{}", self.appid)
    }

    pub fn steamdb_url(&self) -> String {
        format!("https://steamdb.info/app/{}", self.appid)
    }
}
