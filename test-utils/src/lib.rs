//! Manifestboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! manifestboard bot. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory** / **fixture**: Test data with and without database insertion
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildNotificationConfig;
//!
//! #[tokio::test]
//! async fn test_guild_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildNotificationConfig)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
