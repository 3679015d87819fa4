mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::drive_watch,
    service::{
        drive::DriveClient, notification::DiscordNotifier, steam::SteamClient,
        watch::DriveWatcher,
    },
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let drive = DriveClient::new(
        http_client.clone(),
        config.gdrive_api_key.clone(),
        config.folder_id.clone(),
        config.drive_timeout,
        config.drive_download_timeout,
    );
    let steam = SteamClient::new(http_client, config.steam_timeout);
    let watch = DriveWatcher::load(&db, &config.folder_id)
        .await?
        .into_handle();

    let state = AppState::new(
        db.clone(),
        drive.clone(),
        steam.clone(),
        watch.clone(),
        config.drive_timeout,
    );

    tracing::info!("Starting manifestboard for folder {}", config.folder_id);

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = init_bot(&config, state.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let notifier = DiscordNotifier::new(db.clone(), discord_http, steam);
    let mut scheduler = drive_watch::start_scheduler(
        &config.poll_schedule,
        watch.clone(),
        db,
        Arc::new(drive),
        Arc::new(notifier),
        config.drive_timeout,
    )
    .await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Keep-alive server listening on {}", config.bind_addr);

    let app = router::router().with_state(state);
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Keep-alive server error: {}", e);
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    scheduler.shutdown().await?;

    // Wait for an in-flight cycle so its state write is not cut off
    let _watcher = watch.lock().await;

    shard_manager.shutdown_all().await;

    Ok(())
}
