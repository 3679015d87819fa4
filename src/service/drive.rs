//! Google Drive v3 client for the watched manifest folder.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{error::drive::DriveError, model::drive_file::FileRecord};

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const FILE_FIELDS: &str = "nextPageToken,files(id,name,createdTime,modifiedTime,size)";
const PAGE_SIZE: &str = "1000";

/// Source of the current folder listing.
///
/// Implemented by [`DriveClient`]; the watcher only depends on this trait so cycles
/// can be driven by an in-memory listing in tests.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Returns every file currently in the watched folder, in listing order.
    async fn list_folder(&self) -> Result<Vec<FileRecord>, DriveError>;
}

/// One page of a `files.list` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListPage {
    next_page_token: Option<String>,
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// File resource restricted to [`FILE_FIELDS`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFile {
    id: String,
    name: String,
    created_time: Option<String>,
    modified_time: Option<String>,
    /// int64 encoded as a string; absent for Google Docs and shortcuts.
    size: Option<String>,
}

impl From<DriveFile> for FileRecord {
    fn from(file: DriveFile) -> Self {
        Self {
            key: file.name,
            remote_id: file.id,
            modified_at: file.modified_time.unwrap_or_default(),
            size_bytes: file
                .size
                .and_then(|size| size.parse::<u64>().ok())
                .unwrap_or(0),
            created_at: file.created_time,
        }
    }
}

/// Drive client scoped to a single folder, authenticated with an API key.
///
/// The folder must be shared publicly for API key access to list it. Cloning is cheap,
/// the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct DriveClient {
    http: reqwest::Client,
    api_key: String,
    folder_id: String,
    files_url: String,
    /// Bound for each `files.list` request.
    request_timeout: Duration,
    /// Bound for a whole manifest download, body included.
    download_timeout: Duration,
}

impl DriveClient {
    pub fn new(
        http: reqwest::Client,
        api_key: String,
        folder_id: String,
        request_timeout: Duration,
        download_timeout: Duration,
    ) -> Self {
        Self {
            http,
            api_key,
            folder_id,
            files_url: DRIVE_FILES_URL.to_string(),
            request_timeout,
            download_timeout,
        }
    }

    #[cfg(test)]
    fn with_files_url(mut self, files_url: impl Into<String>) -> Self {
        self.files_url = files_url.into();
        self
    }

    /// Looks up `<appid>.zip` in the watched folder.
    ///
    /// # Arguments
    /// - `appid` - Steam AppID, already validated to contain only digits
    ///
    /// # Returns
    /// - `Ok(Some(FileRecord))` - First matching file
    /// - `Ok(None)` - No manifest uploaded for this AppID
    /// - `Err(DriveError)` - Request failed, timed out or Drive returned an error status
    pub async fn find_manifest(&self, appid: &str) -> Result<Option<FileRecord>, DriveError> {
        let query = format!(
            "{} and name = '{}.zip'",
            folder_query(&self.folder_id),
            escape_query(appid)
        );

        let page = self.list_page(&query, None).await?;

        Ok(page.files.into_iter().next().map(FileRecord::from))
    }

    /// Downloads the content of a file by its Drive ID.
    ///
    /// The download timeout covers the whole transfer, so a stalled body fails with
    /// [`DriveError::Request`] instead of hanging.
    pub async fn download(&self, remote_id: &str) -> Result<Vec<u8>, DriveError> {
        let response = self
            .http
            .get(format!("{}/{}", self.files_url, remote_id))
            .query(&[("alt", "media"), ("key", self.api_key.as_str())])
            .timeout(self.download_timeout)
            .send()
            .await?;

        let response = check_status(response).await?;

        Ok(response.bytes().await?.to_vec())
    }

    async fn list_page(
        &self,
        query: &str,
        page_token: Option<&str>,
    ) -> Result<FileListPage, DriveError> {
        let mut params = vec![
            ("q", query),
            ("fields", FILE_FIELDS),
            ("pageSize", PAGE_SIZE),
            ("key", self.api_key.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let response = self
            .http
            .get(&self.files_url)
            .query(&params)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let response = check_status(response).await?;

        Ok(response.json::<FileListPage>().await?)
    }
}

#[async_trait]
impl ListingSource for DriveClient {
    async fn list_folder(&self) -> Result<Vec<FileRecord>, DriveError> {
        let query = folder_query(&self.folder_id);
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(&query, page_token.as_deref()).await?;
            records.extend(page.files.into_iter().map(FileRecord::from));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        tracing::debug!(
            "Listed {} files in Drive folder {}",
            records.len(),
            self.folder_id
        );

        Ok(records)
    }
}

/// Builds the `q` clause selecting non-trashed children of `folder_id`.
fn folder_query(folder_id: &str) -> String {
    format!("'{}' in parents and trashed = false", escape_query(folder_id))
}

/// Escapes a value for use inside a single-quoted Drive query string.
fn escape_query(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Turns non-success responses into [`DriveError::Status`] carrying the body.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DriveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DriveError::Status { status, body })
}
