//! Manifest lookups behind the `/gen` command.

use crate::{
    error::AppError,
    model::{drive_file::FileRecord, steam::SteamAppInfo},
    service::{drive::DriveClient, steam::SteamClient},
};

/// Longest AppID accepted; real AppIDs fit in a u32.
const MAX_APPID_LEN: usize = 10;

/// A manifest file together with the store metadata for its game.
#[derive(Debug, Clone)]
pub struct FoundManifest {
    pub record: FileRecord,
    pub info: SteamAppInfo,
}

/// Normalizes and validates a user-supplied AppID.
///
/// Only ASCII digits are accepted, which also keeps the value safe to embed in a Drive
/// query.
///
/// # Returns
/// - `Ok(String)` - Trimmed AppID
/// - `Err(AppError::BadRequest)` - Empty, too long or not numeric
pub fn validate_appid(appid: &str) -> Result<String, AppError> {
    let appid = appid.trim();

    if appid.is_empty() {
        return Err(AppError::BadRequest("AppID must not be empty.".to_string()));
    }

    if appid.len() > MAX_APPID_LEN || !appid.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "`{}` is not a valid AppID, use digits only (for example `730`).",
            appid
        )));
    }

    Ok(appid.to_string())
}

pub struct ManifestService<'a> {
    drive: &'a DriveClient,
    steam: &'a SteamClient,
}

impl<'a> ManifestService<'a> {
    pub fn new(drive: &'a DriveClient, steam: &'a SteamClient) -> Self {
        Self { drive, steam }
    }

    /// Finds `<appid>.zip` in the folder and fetches its Steam metadata.
    ///
    /// # Returns
    /// - `Ok(Some(FoundManifest))` - Manifest exists
    /// - `Ok(None)` - No manifest uploaded for this AppID
    /// - `Err(AppError::DriveErr)` - Drive lookup failed
    pub async fn lookup(&self, appid: &str) -> Result<Option<FoundManifest>, AppError> {
        let Some(record) = self.drive.find_manifest(appid).await? else {
            return Ok(None);
        };

        let info = self.steam.fetch_app_info(appid).await;

        Ok(Some(FoundManifest { record, info }))
    }

    /// Store metadata for an AppID that has no manifest, used for request posts.
    pub async fn app_info(&self, appid: &str) -> SteamAppInfo {
        self.steam.fetch_app_info(appid).await
    }

    pub async fn download(&self, record: &FileRecord) -> Result<Vec<u8>, AppError> {
        Ok(self.drive.download(&record.remote_id).await?)
    }
}
