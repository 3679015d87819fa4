use std::sync::Arc;

use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord client without connecting it.
///
/// Split from [`start_bot`] so the caller gets the client's HTTP handle for the
/// notifier, and can take its shard manager for shutdown, before the client runs.
///
/// Only the `GUILDS` intent is requested: slash commands arrive as interactions and
/// need no privileged intents.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to be started and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Invalid token or client construction failure
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Runs the Discord client until its shards are shut down.
///
/// Call from within a `tokio::spawn` task, this does not return while the bot is
/// connected.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
