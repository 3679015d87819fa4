use super::*;

/// Tests toggling the flag on a folder without a row.
///
/// Expected: Ok with row created, enabled and unseeded
#[tokio::test]
async fn creates_row_when_enabling() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DriveWatchRepository::new(db);
    repo.set_enabled("folder", true).await?;

    let state = repo.load("folder").await?.unwrap();
    assert!(state.enabled);
    assert!(state.snapshot.is_none());

    Ok(())
}

/// Tests that disabling keeps the stored snapshot.
///
/// Expected: Ok with snapshot untouched
#[tokio::test]
async fn disabling_keeps_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DriveWatch)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let snapshot = Snapshot::from_listing([record("100.zip", 1000)]);

    let repo = DriveWatchRepository::new(db);
    repo.save_snapshot("folder", &snapshot).await?;
    repo.set_enabled("folder", true).await?;
    repo.set_enabled("folder", false).await?;

    let state = repo.load("folder").await?.unwrap();
    assert!(!state.enabled);
    assert_eq!(state.snapshot, Some(snapshot));

    Ok(())
}
