//! Delivery of change events to Discord.

pub mod embed;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};

use crate::{
    data::guild_config::GuildConfigRepository,
    error::watch::WatchError,
    model::{change::ChangeEvent, guild_config::NotificationConfig},
    service::steam::SteamClient,
};

/// Receiver of the change events produced by a watch cycle.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers one event. A failure only affects this event; the cycle goes on.
    async fn notify(&self, event: &ChangeEvent) -> Result<(), WatchError>;
}

/// Posts change embeds to every guild's configured upload or update channel.
pub struct DiscordNotifier {
    db: DatabaseConnection,
    http: Arc<Http>,
    steam: SteamClient,
}

impl DiscordNotifier {
    pub fn new(db: DatabaseConnection, http: Arc<Http>, steam: SteamClient) -> Self {
        Self { db, http, steam }
    }
}

#[async_trait]
impl NotificationSink for DiscordNotifier {
    async fn notify(&self, event: &ChangeEvent) -> Result<(), WatchError> {
        let key = event.key().to_string();

        let configs = GuildConfigRepository::new(&self.db)
            .get_all()
            .await
            .map_err(|e| WatchError::Notify {
                key: key.clone(),
                reason: format!("failed to load guild configuration: {}", e),
            })?;

        let channels = target_channels(&configs, event);
        if channels.is_empty() {
            tracing::debug!("No channel configured for change to {}", key);
            return Ok(());
        }

        let info = self.steam.fetch_app_info(event.current().appid()).await;
        let embed = match event {
            ChangeEvent::Added { record, .. } => embed::added_embed(&info, record),
            ChangeEvent::Updated { old, new, .. } => embed::updated_embed(&info, old, new),
        };

        let mut failed = 0;
        for channel_id in &channels {
            let message = CreateMessage::new().embed(embed.clone());

            match ChannelId::new(*channel_id)
                .send_message(&self.http, message)
                .await
            {
                Ok(_) => {
                    tracing::debug!("Announced {} in channel {}", key, channel_id);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to announce {} in channel {}: {}",
                        key,
                        channel_id,
                        e
                    );
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(WatchError::Notify {
                key,
                reason: format!("{} of {} channels could not be reached", failed, channels.len()),
            });
        }

        tracing::info!("Announced {} in {} channels", key, channels.len());

        Ok(())
    }
}

/// Channels an event should be posted to: each guild's upload channel for added
/// files, update channel for updated ones. Guilds without that channel are skipped.
pub fn target_channels(configs: &[NotificationConfig], event: &ChangeEvent) -> Vec<u64> {
    configs
        .iter()
        .filter_map(|config| match event {
            ChangeEvent::Added { .. } => config.upload_channel_id,
            ChangeEvent::Updated { .. } => config.update_channel_id,
        })
        .collect()
}
