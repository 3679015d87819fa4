use super::*;

/// Tests inserting new keys.
///
/// Expected: Ok(2) and two stored rows
#[tokio::test]
async fn inserts_new_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AnnouncedFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncedFileRepository::new(db);
    let inserted = repo
        .insert_many(&["100.zip".to_string(), "200.zip".to_string()])
        .await?;

    assert_eq!(inserted, 2);
    assert_eq!(entity::prelude::AnnouncedFile::find().count(db).await?, 2);

    Ok(())
}

/// Tests that already announced and duplicated keys are skipped.
///
/// Expected: Ok(1) with only the unseen key inserted
#[tokio::test]
async fn skips_existing_and_duplicate_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AnnouncedFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_announced_file(db, "100.zip").await?;

    let repo = AnnouncedFileRepository::new(db);
    let inserted = repo
        .insert_many(&[
            "100.zip".to_string(),
            "300.zip".to_string(),
            "300.zip".to_string(),
        ])
        .await?;

    assert_eq!(inserted, 1);
    assert_eq!(entity::prelude::AnnouncedFile::find().count(db).await?, 2);

    Ok(())
}

/// Tests inserting nothing.
///
/// Expected: Ok(0) without touching the table
#[tokio::test]
async fn empty_input_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AnnouncedFile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncedFileRepository::new(db);

    assert_eq!(repo.insert_many(&[]).await?, 0);

    Ok(())
}
