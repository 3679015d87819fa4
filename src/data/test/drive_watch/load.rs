use super::*;

/// Tests loading a folder that was never watched.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_folder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriveWatchRepository::new(db);

    assert!(repo.load("folder").await?.is_none());

    Ok(())
}

/// Tests loading a folder row without a snapshot.
///
/// Expected: Ok(Some) with `snapshot: None`, meaning never seeded
#[tokio::test]
async fn distinguishes_unseeded_folder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drive_watch::DriveWatchFactory::new(db, "folder")
        .enabled(true)
        .build()
        .await?;

    let repo = DriveWatchRepository::new(db);
    let state = repo.load("folder").await?.unwrap();

    assert!(state.enabled);
    assert!(state.snapshot.is_none());

    Ok(())
}

/// Tests that a corrupt snapshot blob is reported alongside the rest of the row.
///
/// Expected: Ok(Some) with `snapshot: None`, the enabled flag kept and the parse error set
#[tokio::test]
async fn reports_corrupt_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drive_watch::DriveWatchFactory::new(db, "folder")
        .enabled(true)
        .snapshot("{ not json")
        .build()
        .await?;

    let repo = DriveWatchRepository::new(db);
    let state = repo.load("folder").await?.unwrap();

    assert!(state.enabled);
    assert!(state.snapshot.is_none());
    assert!(state.corrupt_snapshot.is_some());

    Ok(())
}
