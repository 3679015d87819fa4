//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let config = factory::create_guild_config(&db).await?;
//!     let announced = factory::create_announced_file(&db, "100.zip").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_notification_config` - Create per-guild notification channel settings
//! - `announced_file` - Create already-announced file keys
//! - `drive_watch` - Create persisted watcher state rows
//! - `helpers` - Shared ID generation

pub mod announced_file;
pub mod drive_watch;
pub mod guild_notification_config;
pub mod helpers;

pub use announced_file::create_announced_file;
pub use drive_watch::create_drive_watch;
pub use guild_notification_config::create_guild_config;
