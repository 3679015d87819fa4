//! Guild notification config factory for creating test configuration entities.
//!
//! This module provides factory methods for creating per-guild notification channel
//! settings with sensible defaults. All channel and role columns default to unset.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild notification configs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_notification_config::GuildConfigFactory;
///
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .upload_channel_id("111")
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    upload_channel_id: Option<String>,
    update_channel_id: Option<String>,
    request_channel_id: Option<String>,
    request_role_id: Option<String>,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - all channels and the request role: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            upload_channel_id: None,
            update_channel_id: None,
            request_channel_id: None,
            request_role_id: None,
        }
    }

    /// Sets the Discord guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the channel receiving "added" notifications.
    pub fn upload_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.upload_channel_id = Some(channel_id.into());
        self
    }

    /// Sets the channel receiving "updated" notifications.
    pub fn update_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.update_channel_id = Some(channel_id.into());
        self
    }

    /// Sets the channel receiving "not found" requests.
    pub fn request_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.request_channel_id = Some(channel_id.into());
        self
    }

    /// Sets the role mentioned alongside "not found" requests.
    pub fn request_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.request_role_id = Some(role_id.into());
        self
    }

    /// Builds and inserts the guild config entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_notification_config::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_notification_config::Model, DbErr> {
        let now = Utc::now();
        entity::guild_notification_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            upload_channel_id: ActiveValue::Set(self.upload_channel_id),
            update_channel_id: ActiveValue::Set(self.update_channel_id),
            request_channel_id: ActiveValue::Set(self.request_channel_id),
            request_role_id: ActiveValue::Set(self.request_role_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_notification_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
