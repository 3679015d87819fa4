pub mod prelude;

pub mod announced_file;
pub mod drive_watch;
pub mod guild_notification_config;
