//! Guild notification config repository.
//!
//! Stores which channels of each guild receive "added", "updated" and "request"
//! notifications. Rows are created lazily the first time a guild uses any command.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter,
};

use crate::{error::AppError, model::guild_config::NotificationConfig};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the notification config of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(NotificationConfig))` - Config exists
    /// - `Ok(None)` - The guild never used the bot
    /// - `Err(AppError)` - Database error or corrupt stored ID
    pub async fn get_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<NotificationConfig>, AppError> {
        self.find_model(guild_id)
            .await?
            .map(NotificationConfig::from_entity)
            .transpose()
    }

    /// Gets every stored guild config, used for notification fan-out.
    ///
    /// Rows with an unparsable stored ID are logged and skipped so one bad guild does
    /// not stop delivery to the others.
    ///
    /// # Returns
    /// - `Ok(Vec<NotificationConfig>)` - Every readable config
    /// - `Err(AppError)` - Database error
    pub async fn get_all(&self) -> Result<Vec<NotificationConfig>, AppError> {
        let models = entity::prelude::GuildNotificationConfig::find()
            .all(self.db)
            .await?;

        Ok(models
            .into_iter()
            .filter_map(|model| {
                let guild_id = model.guild_id.clone();
                NotificationConfig::from_entity(model)
                    .inspect_err(|e| {
                        tracing::warn!("Skipping unreadable config of guild {}: {}", guild_id, e)
                    })
                    .ok()
            })
            .collect())
    }

    /// Counts guilds that have a stored config.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::GuildNotificationConfig::find()
            .count(self.db)
            .await?)
    }

    /// Creates an empty config for the guild if none exists yet.
    ///
    /// # Returns
    /// - `Ok(NotificationConfig)` - The existing or newly created config
    /// - `Err(AppError)` - Database error
    pub async fn ensure(&self, guild_id: u64) -> Result<NotificationConfig, AppError> {
        self.upsert_with(guild_id, |_| {}).await
    }

    /// Sets the channel that receives "New Game Added" announcements.
    pub async fn set_upload_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<NotificationConfig, AppError> {
        self.upsert_with(guild_id, |active| {
            active.upload_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        })
        .await
    }

    /// Sets the channel that receives "Game Updated" announcements.
    pub async fn set_update_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<NotificationConfig, AppError> {
        self.upsert_with(guild_id, |active| {
            active.update_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
        })
        .await
    }

    /// Sets the request channel and the role to mention there.
    ///
    /// Passing `None` for the role clears a previously configured mention.
    pub async fn set_request_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
        role_id: Option<u64>,
    ) -> Result<NotificationConfig, AppError> {
        self.upsert_with(guild_id, |active| {
            active.request_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
            active.request_role_id = ActiveValue::Set(role_id.map(|id| id.to_string()));
        })
        .await
    }

    async fn find_model(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_notification_config::Model>, AppError> {
        Ok(entity::prelude::GuildNotificationConfig::find()
            .filter(entity::guild_notification_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?)
    }

    /// Applies `apply` to the guild's row, inserting a blank row first if needed.
    async fn upsert_with(
        &self,
        guild_id: u64,
        apply: impl FnOnce(&mut entity::guild_notification_config::ActiveModel),
    ) -> Result<NotificationConfig, AppError> {
        let now = Utc::now();

        let model = match self.find_model(guild_id).await? {
            Some(existing) => {
                let mut active: entity::guild_notification_config::ActiveModel =
                    existing.clone().into();
                apply(&mut active);
                if active.is_changed() {
                    active.updated_at = ActiveValue::Set(now);
                    active.update(self.db).await?
                } else {
                    existing
                }
            }
            None => {
                let mut active = entity::guild_notification_config::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    upload_channel_id: ActiveValue::Set(None),
                    update_channel_id: ActiveValue::Set(None),
                    request_channel_id: ActiveValue::Set(None),
                    request_role_id: ActiveValue::Set(None),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                };
                apply(&mut active);
                active.insert(self.db).await?
            }
        };

        NotificationConfig::from_entity(model)
    }
}
