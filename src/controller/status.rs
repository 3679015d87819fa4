use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::guild_config::GuildConfigRepository, error::AppError, model::api::WatchStatusDto,
    state::AppState,
};

/// Keep-alive endpoint for uptime monitors.
///
/// # Returns
/// - `200 OK` - Plain text `Bot is alive!`
pub async fn alive() -> impl IntoResponse {
    (StatusCode::OK, "Bot is alive!")
}

/// Reports the drive watcher state.
///
/// Waits for a running cycle to finish before reading the watcher.
///
/// # Arguments
/// - `state` - Application state containing the watcher and database connection
///
/// # Returns
/// - `200 OK` - JSON [`WatchStatusDto`]
/// - `500 Internal Server Error` - Database error while counting guilds
pub async fn get_status(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let status = state.watch.lock().await.status();
    let configured_guilds = GuildConfigRepository::new(&state.db).count().await?;

    Ok((
        StatusCode::OK,
        Json(WatchStatusDto {
            enabled: status.enabled,
            seeded: status.seeded,
            tracked_files: status.tracked_files,
            announced_files: status.announced_files,
            configured_guilds: configured_guilds as usize,
        }),
    ))
}
