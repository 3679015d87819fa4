use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::service::{drive::DriveClient, steam::SteamClient, watch::WatchHandle};

/// Shared resources for the bot's command handlers and the keep-alive routes.
///
/// All fields are cheap to clone: the connection is a pool, both HTTP clients wrap a
/// reference-counted `reqwest::Client` and the watcher sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Drive client scoped to the watched folder, used by `/gen` and `/notif on`.
    pub drive: DriveClient,

    /// Steam store client for embed metadata.
    pub steam: SteamClient,

    /// The folder watcher, shared with the scheduler.
    pub watch: WatchHandle,

    /// Upper bound for fetching the folder listing.
    pub fetch_timeout: Duration,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        drive: DriveClient,
        steam: SteamClient,
        watch: WatchHandle,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            db,
            drive,
            steam,
            watch,
            fetch_timeout,
        }
    }
}
