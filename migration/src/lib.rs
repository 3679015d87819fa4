pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_guild_notification_config_table;
mod m20261019_000002_create_drive_watch_table;
mod m20261019_000003_create_announced_file_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_guild_notification_config_table::Migration),
            Box::new(m20261019_000002_create_drive_watch_table::Migration),
            Box::new(m20261019_000003_create_announced_file_table::Migration),
        ]
    }
}
