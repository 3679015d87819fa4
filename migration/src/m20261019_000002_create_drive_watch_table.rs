use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriveWatch::Table)
                    .if_not_exists()
                    .col(pk_auto(DriveWatch::Id))
                    .col(string_uniq(DriveWatch::FolderId))
                    .col(boolean(DriveWatch::Enabled).default(false))
                    // NULL until the folder has been seeded at least once
                    .col(text_null(DriveWatch::Snapshot))
                    .col(timestamp(DriveWatch::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DriveWatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DriveWatch {
    Table,
    Id,
    FolderId,
    Enabled,
    Snapshot,
    UpdatedAt,
}
