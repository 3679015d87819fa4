//! Announced file factory for seeding the persisted set of announced keys.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a key into the announced file table.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - File key (file name) that has already been announced
///
/// # Returns
/// - `Ok(entity::announced_file::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_announced_file(
    db: &DatabaseConnection,
    key: impl Into<String>,
) -> Result<entity::announced_file::Model, DbErr> {
    entity::announced_file::ActiveModel {
        key: ActiveValue::Set(key.into()),
        announced_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
