//! Per-guild notification channel settings.

use crate::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// Where a guild wants drive notifications and manifest requests delivered.
///
/// Every channel is optional; a guild that never ran a setup command receives
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    pub guild_id: u64,
    /// Channel receiving "New Game Added" announcements.
    pub upload_channel_id: Option<u64>,
    /// Channel receiving "Game Updated" announcements.
    pub update_channel_id: Option<u64>,
    /// Channel receiving requests for AppIDs that have no manifest.
    pub request_channel_id: Option<u64>,
    /// Role mentioned together with a request.
    pub request_role_id: Option<u64>,
}

impl NotificationConfig {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Snowflakes are stored as strings and parsed here.
    ///
    /// # Returns
    /// - `Ok(NotificationConfig)` - Converted domain model
    /// - `Err(AppError::InternalError)` - A stored ID is not a valid u64
    pub fn from_entity(entity: entity::guild_notification_config::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            upload_channel_id: parse_optional_u64(entity.upload_channel_id)?,
            update_channel_id: parse_optional_u64(entity.update_channel_id)?,
            request_channel_id: parse_optional_u64(entity.request_channel_id)?,
            request_role_id: parse_optional_u64(entity.request_role_id)?,
        })
    }
}
