//! Repository backing the set of file keys that were already announced as added.
//!
//! The set only ever grows: there is deliberately no delete operation.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};
use std::collections::HashSet;

pub struct AnnouncedFileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncedFileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every announced key.
    pub async fn get_all_keys(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::AnnouncedFile::find()
            .select_only()
            .column(entity::announced_file::Column::Key)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Records keys as announced. Keys that are already stored are skipped.
    ///
    /// # Arguments
    /// - `keys` - File keys to record; duplicates within the slice are collapsed
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of keys newly inserted
    /// - `Err(DbErr)` - Database error
    pub async fn insert_many(&self, keys: &[String]) -> Result<usize, DbErr> {
        if keys.is_empty() {
            return Ok(0);
        }

        let existing: HashSet<String> = entity::prelude::AnnouncedFile::find()
            .select_only()
            .column(entity::announced_file::Column::Key)
            .filter(entity::announced_file::Column::Key.is_in(keys.iter().cloned()))
            .into_tuple::<String>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        let now = Utc::now();
        let models: Vec<_> = keys
            .iter()
            .filter(|key| !existing.contains(*key) && seen.insert(key.as_str()))
            .map(|key| entity::announced_file::ActiveModel {
                id: ActiveValue::NotSet,
                key: ActiveValue::Set(key.clone()),
                announced_at: ActiveValue::Set(now),
            })
            .collect();

        let inserted = models.len();
        if inserted > 0 {
            entity::prelude::AnnouncedFile::insert_many(models)
                .exec(self.db)
                .await?;
        }

        Ok(inserted)
    }
}
