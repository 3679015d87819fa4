//! Fixture for guild notification config test data.

use chrono::Utc;
use entity::guild_notification_config;

/// Default test guild Discord ID.
pub const DEFAULT_GUILD_ID: &str = "123456789";

/// Creates a guild notification config model with default values and no channels.
pub fn entity() -> guild_notification_config::Model {
    entity_builder().build()
}

/// Creates a customizable guild notification config builder.
///
/// # Example
/// ```rust,ignore
/// let entity = fixture::guild_notification_config::entity_builder()
///     .guild_id("111111111")
///     .request_channel_id("222222222")
///     .build();
/// ```
pub fn entity_builder() -> GuildConfigEntityBuilder {
    GuildConfigEntityBuilder::default()
}

/// Builder for guild notification config entity models.
pub struct GuildConfigEntityBuilder {
    guild_id: String,
    upload_channel_id: Option<String>,
    update_channel_id: Option<String>,
    request_channel_id: Option<String>,
    request_role_id: Option<String>,
}

impl Default for GuildConfigEntityBuilder {
    fn default() -> Self {
        Self {
            guild_id: DEFAULT_GUILD_ID.to_string(),
            upload_channel_id: None,
            update_channel_id: None,
            request_channel_id: None,
            request_role_id: None,
        }
    }
}

impl GuildConfigEntityBuilder {
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn upload_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.upload_channel_id = Some(channel_id.into());
        self
    }

    pub fn update_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.update_channel_id = Some(channel_id.into());
        self
    }

    pub fn request_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.request_channel_id = Some(channel_id.into());
        self
    }

    pub fn request_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.request_role_id = Some(role_id.into());
        self
    }

    /// Builds the in-memory entity model.
    pub fn build(self) -> guild_notification_config::Model {
        let now = Utc::now();
        guild_notification_config::Model {
            id: 1,
            guild_id: self.guild_id,
            upload_channel_id: self.upload_channel_id,
            update_channel_id: self.update_channel_id,
            request_channel_id: self.request_channel_id,
            request_role_id: self.request_role_id,
            created_at: now,
            updated_at: now,
        }
    }
}
