use super::*;

/// Tests that a saved snapshot loads back unchanged.
///
/// Expected: Ok with identical snapshot
#[tokio::test]
async fn saved_snapshot_loads_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let snapshot = Snapshot::from_listing([record("100.zip", 1000), record("200.zip", 0)]);

    let repo = DriveWatchRepository::new(db);
    repo.save_snapshot("folder", &snapshot).await?;

    let state = repo.load("folder").await?.unwrap();

    assert_eq!(state.snapshot, Some(snapshot));
    assert!(!state.enabled);

    Ok(())
}

/// Tests that saving twice overwrites the blob in the same row.
///
/// Expected: Ok with a single row holding the latest snapshot
#[tokio::test]
async fn overwrites_previous_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriveWatchRepository::new(db);
    repo.save_snapshot("folder", &Snapshot::from_listing([record("100.zip", 1)]))
        .await?;
    let latest = Snapshot::from_listing([record("100.zip", 2), record("300.zip", 3)]);
    repo.save_snapshot("folder", &latest).await?;

    let state = repo.load("folder").await?.unwrap();
    assert_eq!(state.snapshot, Some(latest));

    let rows = entity::prelude::DriveWatch::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that saving a snapshot keeps the enabled flag.
///
/// Expected: Ok with enabled still true
#[tokio::test]
async fn preserves_enabled_flag() -> Result<(), DbErr> {
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
    repo.save_snapshot("folder", &Snapshot::new()).await?;

    let state = repo.load("folder").await?.unwrap();
    assert!(state.enabled);
    assert_eq!(state.snapshot, Some(Snapshot::new()));

    Ok(())
}
