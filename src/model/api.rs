use serde::{Deserialize, Serialize};

/// JSON error body returned by the HTTP routes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// JSON body of `GET /api/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WatchStatusDto {
    pub enabled: bool,
    pub seeded: bool,
    pub tracked_files: usize,
    pub announced_files: usize,
    pub configured_guilds: usize,
}
