//! Drive watch factory for creating persisted watcher state rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drive watch rows.
///
/// # Example
///
/// ```rust,ignore
/// let row = DriveWatchFactory::new(&db, "folder")
///     .enabled(true)
///     .snapshot(r#"{"100.zip":{...}}"#)
///     .build()
///     .await?;
/// ```
pub struct DriveWatchFactory<'a> {
    db: &'a DatabaseConnection,
    folder_id: String,
    enabled: bool,
    snapshot: Option<String>,
}

impl<'a> DriveWatchFactory<'a> {
    /// Creates a new factory for the given folder, disabled and never seeded.
    pub fn new(db: &'a DatabaseConnection, folder_id: impl Into<String>) -> Self {
        Self {
            db,
            folder_id: folder_id.into(),
            enabled: false,
            snapshot: None,
        }
    }

    /// Sets whether notifications are enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the raw serialized snapshot blob.
    pub fn snapshot(mut self, snapshot: impl Into<String>) -> Self {
        self.snapshot = Some(snapshot.into());
        self
    }

    /// Builds and inserts the drive watch entity into the database.
    pub async fn build(self) -> Result<entity::drive_watch::Model, DbErr> {
        entity::drive_watch::ActiveModel {
            folder_id: ActiveValue::Set(self.folder_id),
            enabled: ActiveValue::Set(self.enabled),
            snapshot: ActiveValue::Set(self.snapshot),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a disabled, never-seeded watch row for a folder.
pub async fn create_drive_watch(
    db: &DatabaseConnection,
    folder_id: impl Into<String>,
) -> Result<entity::drive_watch::Model, DbErr> {
    DriveWatchFactory::new(db, folder_id).build().await
}
