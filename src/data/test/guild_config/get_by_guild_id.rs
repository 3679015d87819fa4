use super::*;

/// Tests fetching a stored config.
///
/// Expected: Ok(Some) with parsed snowflakes
#[tokio::test]
async fn returns_stored_config() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_notification_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .request_channel_id("300")
        .request_role_id("400")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.get_by_guild_id(42).await?.unwrap();

    assert_eq!(config.request_channel_id, Some(300));
    assert_eq!(config.request_role_id, Some(400));

    Ok(())
}

/// Tests fetching a config for an unknown guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(repo.get_by_guild_id(999).await?.is_none());

    Ok(())
}
