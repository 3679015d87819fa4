//! Drive watch repository.
//!
//! Persists the watcher's on/off switch and its snapshot blob, one row per watched
//! folder. The snapshot is stored as a single JSON document and validated when read.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

use crate::model::{drive_file::Snapshot, watch::DriveWatchState};

pub struct DriveWatchRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriveWatchRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the persisted state of a folder.
    ///
    /// # Returns
    /// - `Ok(Some(DriveWatchState))` - State found; `snapshot` is `None` if never seeded.
    ///   A blob that is not valid JSON also yields `None`, with the parse error in
    ///   `corrupt_snapshot`
    /// - `Ok(None)` - Folder has never been watched
    /// - `Err(DbErr)` - Database error
    pub async fn load(&self, folder_id: &str) -> Result<Option<DriveWatchState>, DbErr> {
        let Some(model) = self.find_model(folder_id).await? else {
            return Ok(None);
        };

        let (snapshot, corrupt_snapshot) = match model.snapshot.as_deref() {
            None => (None, None),
            Some(blob) => match serde_json::from_str::<Snapshot>(blob) {
                Ok(snapshot) => (Some(snapshot), None),
                Err(e) => (None, Some(e.to_string())),
            },
        };

        Ok(Some(DriveWatchState {
            folder_id: model.folder_id,
            enabled: model.enabled,
            snapshot,
            corrupt_snapshot,
        }))
    }

    /// Replaces the stored snapshot blob, keeping the enabled flag.
    pub async fn save_snapshot(&self, folder_id: &str, snapshot: &Snapshot) -> Result<(), DbErr> {
        let blob = serde_json::to_string(snapshot)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize snapshot: {}", e)))?;

        self.upsert_with(folder_id, |active| {
            active.snapshot = ActiveValue::Set(Some(blob));
        })
        .await
    }

    /// Stores the enabled flag, keeping the snapshot.
    pub async fn set_enabled(&self, folder_id: &str, enabled: bool) -> Result<(), DbErr> {
        self.upsert_with(folder_id, |active| {
            active.enabled = ActiveValue::Set(enabled);
        })
        .await
    }

    async fn find_model(&self, folder_id: &str) -> Result<Option<entity::drive_watch::Model>, DbErr> {
        entity::prelude::DriveWatch::find()
            .filter(entity::drive_watch::Column::FolderId.eq(folder_id))
            .one(self.db)
            .await
    }

    async fn upsert_with(
        &self,
        folder_id: &str,
        apply: impl FnOnce(&mut entity::drive_watch::ActiveModel),
    ) -> Result<(), DbErr> {
        let now = Utc::now();

        match self.find_model(folder_id).await? {
            Some(existing) => {
                let mut active: entity::drive_watch::ActiveModel = existing.into();
                apply(&mut active);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await?;
            }
            None => {
                let mut active = entity::drive_watch::ActiveModel {
                    id: ActiveValue::NotSet,
                    folder_id: ActiveValue::Set(folder_id.to_string()),
                    enabled: ActiveValue::Set(false),
                    snapshot: ActiveValue::Set(None),
                    updated_at: ActiveValue::Set(now),
                };
                apply(&mut active);
                active.insert(self.db).await?;
            }
        }

        Ok(())
    }
}
