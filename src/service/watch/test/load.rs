use super::*;

/// Tests loading with nothing persisted.
///
/// Expected: disabled, unseeded watcher with empty history
#[tokio::test]
async fn starts_fresh_without_stored_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_watch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let watcher = DriveWatcher::load(db, FOLDER).await?;

    assert_eq!(
        watcher.status(),
        WatchStatus {
            enabled: false,
            seeded: false,
            tracked_files: 0,
            announced_files: 0,
        }
    );

    Ok(())
}

/// Tests restoring the flag, snapshot and announced keys.
///
/// Expected: enabled, seeded watcher with the stored counts
#[tokio::test]
async fn restores_persisted_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_watch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let snapshot = Snapshot::from_listing([record("1.zip", "T1", 10), record("2.zip", "T1", 20)]);
    factory::drive_watch::DriveWatchFactory::new(db, FOLDER)
        .enabled(true)
        .snapshot(serde_json::to_string(&snapshot).unwrap())
        .build()
        .await?;
    factory::create_announced_file(db, "1.zip").await?;

    let watcher = DriveWatcher::load(db, FOLDER).await?;

    assert_eq!(
        watcher.status(),
        WatchStatus {
            enabled: true,
            seeded: true,
            tracked_files: 2,
            announced_files: 1,
        }
    );

    Ok(())
}

/// Tests that a restarted watcher resumes detection instead of re-seeding.
///
/// Expected: change made while the watcher was gone is reported as Updated
#[tokio::test]
async fn resumes_detection_after_restart() -> Result<(), WatchError> {
    let test = TestBuilder::new().with_watch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let source = FakeSource::new(vec![record("1.zip", "T1", 10)]);
    let mut watcher = DriveWatcher::new(FOLDER);
    watcher.enable(db, &source, TIMEOUT).await?;
    drop(watcher);

    let mut restarted = DriveWatcher::load(db, FOLDER).await?;
    let sink = RecordingSink::default();
    source.set(vec![record("1.zip", "T2", 10)]);

    let report = summary(restarted.run_cycle(db, &source, &sink, TIMEOUT).await?);

    assert_eq!(report.updated, 1);
    assert_eq!(sink.keys(), vec!["1.zip".to_string()]);

    Ok(())
}

/// Tests that an unreadable snapshot blob does not prevent the watcher from loading.
///
/// Expected: enabled, unseeded watcher keeping its announced keys; the next cycle re-seeds
#[tokio::test]
async fn reseeds_after_corrupt_snapshot() -> Result<(), WatchError> {
    let test = TestBuilder::new().with_watch_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drive_watch::DriveWatchFactory::new(db, FOLDER)
        .enabled(true)
        .snapshot("{not json")
        .build()
        .await?;
    factory::create_announced_file(db, "1.zip").await?;

    let mut watcher = DriveWatcher::load(db, FOLDER).await?;

    assert_eq!(
        watcher.status(),
        WatchStatus {
            enabled: true,
            seeded: false,
            tracked_files: 0,
            announced_files: 1,
        }
    );

    let source = FakeSource::new(vec![record("1.zip", "T1", 10), record("2.zip", "T1", 20)]);
    let sink = RecordingSink::default();

    let report = watcher.run_cycle(db, &source, &sink, TIMEOUT).await?;

    assert_eq!(report, CycleReport::Seeded { tracked_files: 2 });
    assert!(sink.events().is_empty());

    let stored = DriveWatchRepository::new(db).load(FOLDER).await?.unwrap();
    assert!(stored.corrupt_snapshot.is_none());
    assert_eq!(stored.snapshot.map(|s| s.len()), Some(2));

    Ok(())
}
