use super::*;

/// Tests setting the upload channel on a guild without a config row.
///
/// Expected: Ok with row created and only the upload channel set
#[tokio::test]
async fn sets_upload_channel_creating_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.set_upload_channel(42, 100).await?;

    assert_eq!(config.upload_channel_id, Some(100));
    assert_eq!(config.update_channel_id, None);

    let stored = entity::prelude::GuildNotificationConfig::find()
        .filter(entity::guild_notification_config::Column::GuildId.eq("42"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.upload_channel_id.as_deref(), Some("100"));

    Ok(())
}

/// Tests that setting one channel preserves the others.
///
/// Expected: Ok with upload channel kept after update channel is set
#[tokio::test]
async fn sets_update_channel_preserving_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.set_upload_channel(42, 100).await?;
    let config = repo.set_update_channel(42, 200).await?;

    assert_eq!(config.upload_channel_id, Some(100));
    assert_eq!(config.update_channel_id, Some(200));

    Ok(())
}

/// Tests that setting the request channel without a role clears the old role.
///
/// Expected: Ok with new channel and no role mention
#[tokio::test]
async fn request_channel_without_role_clears_mention() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildNotificationConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let first = repo.set_request_channel(42, 300, Some(400)).await?;
    assert_eq!(first.request_role_id, Some(400));

    let second = repo.set_request_channel(42, 301, None).await?;

    assert_eq!(second.request_channel_id, Some(301));
    assert_eq!(second.request_role_id, None);

    Ok(())
}
