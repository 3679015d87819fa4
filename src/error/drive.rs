use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Google Drive v3 API.
#[derive(Error, Debug)]
pub enum DriveError {
    /// Transport failure or undecodable response body.
    #[error("Drive request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Drive answered with a non-success status code.
    #[error("Drive responded with {status}: {body}")]
    Status {
        /// HTTP status returned by Drive
        status: StatusCode,
        /// Response body, usually a JSON error document
        body: String,
    },

    /// The listing did not complete within the configured bound.
    #[error("Drive listing timed out after {0:?}")]
    Timeout(Duration),
}
