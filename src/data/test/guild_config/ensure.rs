use super::*;

/// Tests creating a config for a guild seen for the first time.
///
/// Expected: Ok with a blank config and one stored row
#[tokio::test]
async fn creates_blank_config_for_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.ensure(42).await?;

    assert_eq!(config.guild_id, 42);
    assert_eq!(config.upload_channel_id, None);
    assert_eq!(config.update_channel_id, None);
    assert_eq!(config.request_channel_id, None);
    assert_eq!(config.request_role_id, None);

    let count = entity::prelude::GuildNotificationConfig::find()
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that ensuring an existing config leaves it untouched.
///
/// Expected: Ok with configured channels preserved and no duplicate row
#[tokio::test]
async fn keeps_existing_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_notification_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .upload_channel_id("100")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.ensure(42).await?;

    assert_eq!(config.upload_channel_id, Some(100));

    let count = entity::prelude::GuildNotificationConfig::find()
        .filter(entity::guild_notification_config::Column::GuildId.eq("42"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
