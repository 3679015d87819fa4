use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildNotificationConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildNotificationConfig::Id))
                    .col(string_uniq(GuildNotificationConfig::GuildId))
                    .col(string_null(GuildNotificationConfig::UploadChannelId))
                    .col(string_null(GuildNotificationConfig::UpdateChannelId))
                    .col(string_null(GuildNotificationConfig::RequestChannelId))
                    .col(string_null(GuildNotificationConfig::RequestRoleId))
                    .col(timestamp(GuildNotificationConfig::CreatedAt))
                    .col(timestamp(GuildNotificationConfig::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildNotificationConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildNotificationConfig {
    Table,
    Id,
    GuildId,
    UploadChannelId,
    UpdateChannelId,
    RequestChannelId,
    RequestRoleId,
    CreatedAt,
    UpdatedAt,
}
