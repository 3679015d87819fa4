use super::*;

/// Tests reading back every announced key.
///
/// Expected: Ok with all keys
#[tokio::test]
async fn returns_all_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AnnouncedFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_announced_file(db, "100.zip").await?;
    factory::create_announced_file(db, "200.zip").await?;

    let repo = AnnouncedFileRepository::new(db);
    let mut keys = repo.get_all_keys().await?;
    keys.sort();

    assert_eq!(keys, vec!["100.zip".to_string(), "200.zip".to_string()]);

    Ok(())
}

/// Tests reading an empty table.
///
/// Expected: Ok with no keys
#[tokio::test]
async fn returns_empty_when_nothing_announced() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AnnouncedFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncedFileRepository::new(db);

    assert!(repo.get_all_keys().await?.is_empty());

    Ok(())
}
