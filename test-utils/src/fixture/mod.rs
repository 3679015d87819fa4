//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit testing conversions and as default values.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let config = fixture::guild_notification_config::entity_builder()
//!     .upload_channel_id("111")
//!     .build();
//! ```

pub mod guild_notification_config;

pub use guild_notification_config::{
    entity as guild_config_entity, entity_builder as guild_config_entity_builder,
};
