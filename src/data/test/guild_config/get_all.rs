use super::*;

/// Tests listing every guild config for fan-out.
///
/// Expected: Ok with one entry per stored guild
#[tokio::test]
async fn returns_every_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db).await?;
    factory::create_guild_config(db).await?;
    factory::guild_notification_config::GuildConfigFactory::new(db)
        .update_channel_id("200")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_all().await?;

    assert_eq!(configs.len(), 3);
    assert_eq!(
        configs
            .iter()
            .filter(|c| c.update_channel_id == Some(200))
            .count(),
        1
    );

    Ok(())
}

/// Tests that a corrupt stored snowflake only drops its own row.
///
/// Expected: Ok with the readable guild only
#[tokio::test]
async fn skips_corrupt_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_notification_config::GuildConfigFactory::new(db)
        .upload_channel_id("general")
        .build()
        .await?;
    factory::guild_notification_config::GuildConfigFactory::new(db)
        .guild_id("987654321")
        .upload_channel_id("100")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let configs = repo.get_all().await?;

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].guild_id, 987654321);
    assert_eq!(configs[0].upload_channel_id, Some(100));

    Ok(())
}

/// Tests counting configured guilds for the status route.
///
/// Expected: Ok(0) on an empty table, then one per stored guild
#[tokio::test]
async fn counts_configured_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_guild_config(db).await?;
    factory::create_guild_config(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
