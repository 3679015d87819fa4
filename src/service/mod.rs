pub mod drive;
pub mod manifest;
pub mod notification;
pub mod steam;
pub mod watch;
