//! Domain models and DTOs.
//!
//! Domain models are converted from entity models at the repository boundary and
//! from external JSON (Drive, Steam) at the client boundary, so everything past
//! those boundaries works with typed records.

pub mod api;
pub mod change;
pub mod drive_file;
pub mod guild_config;
pub mod steam;
pub mod watch;
