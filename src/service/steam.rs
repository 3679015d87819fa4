//! Steam store lookups used to decorate manifest embeds.

use std::time::Duration;

use crate::model::steam::SteamAppInfo;

const APP_DETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";

/// Client for the public Steam store `appdetails` endpoint.
#[derive(Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl SteamClient {
    pub fn new(http: reqwest::Client, timeout: Duration) -> Self {
        Self { http, timeout }
    }

    /// Fetches display metadata for `appid`.
    ///
    /// Never fails: transport errors, error statuses and unexpected bodies are logged
    /// and answered with [`SteamAppInfo::fallback`], since a missing store page must
    /// not block a notification or a `/gen` reply.
    pub async fn fetch_app_info(&self, appid: &str) -> SteamAppInfo {
        match self.request_app_details(appid).await {
            Ok(body) => SteamAppInfo::from_appdetails(appid, body),
            Err(e) => {
                tracing::warn!("Failed to fetch Steam app details for {}: {}", appid, e);
                SteamAppInfo::fallback(appid)
            }
        }
    }

    async fn request_app_details(&self, appid: &str) -> Result<serde_json::Value, reqwest::Error> {
        self.http
            .get(APP_DETAILS_URL)
            .query(&[("appids", appid)])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await
    }
}
