pub use super::announced_file::Entity as AnnouncedFile;
pub use super::drive_watch::Entity as DriveWatch;
pub use super::guild_notification_config::Entity as GuildNotificationConfig;
