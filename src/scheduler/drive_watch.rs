use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    model::watch::CycleReport,
    service::{drive::ListingSource, notification::NotificationSink, watch::WatchHandle},
};

/// Starts the drive watch scheduler
///
/// Runs one watch cycle per tick of `schedule`. A tick that fires while the previous
/// cycle (or a `/notif` command) still holds the watcher is skipped, so cycles never
/// overlap.
///
/// # Arguments
/// - `schedule`: Cron expression with a leading seconds field
/// - `watch`: Shared watcher
/// - `db`: Database connection
/// - `source`: Folder listing source
/// - `sink`: Receiver of change notifications
/// - `fetch_timeout`: Upper bound for fetching the listing
///
/// # Returns
/// - `Ok(JobScheduler)`: Running scheduler, to be shut down on exit
/// - `Err(AppError::SchedulerErr)`: Invalid schedule or scheduler failure
pub async fn start_scheduler(
    schedule: &str,
    watch: WatchHandle,
    db: DatabaseConnection,
    source: Arc<dyn ListingSource>,
    sink: Arc<dyn NotificationSink>,
    fetch_timeout: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let watch = watch.clone();
        let db = db.clone();
        let source = source.clone();
        let sink = sink.clone();

        Box::pin(async move {
            run_scheduled_cycle(&watch, &db, source.as_ref(), sink.as_ref(), fetch_timeout).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Drive watch scheduler started ({})", schedule);

    Ok(scheduler)
}

/// Runs one cycle unless the watcher is busy, logging the outcome.
///
/// # Returns
/// - `Some(CycleReport)`: Cycle ran to completion
/// - `None`: Tick skipped because the watcher was busy, or the listing failed
pub async fn run_scheduled_cycle(
    watch: &WatchHandle,
    db: &DatabaseConnection,
    source: &dyn ListingSource,
    sink: &dyn NotificationSink,
    fetch_timeout: Duration,
) -> Option<CycleReport> {
    let Ok(mut watcher) = watch.try_lock() else {
        tracing::debug!("Previous drive watch cycle still running, skipping tick");
        return None;
    };

    match watcher.run_cycle(db, source, sink, fetch_timeout).await {
        Ok(report) => {
            log_report(&report);
            Some(report)
        }
        Err(e) => {
            tracing::error!("Drive watch cycle failed: {}", e);
            None
        }
    }
}

fn log_report(report: &CycleReport) {
    match report {
        CycleReport::Disabled => {}
        CycleReport::Seeded { tracked_files } => {
            tracing::info!("Seeded drive snapshot with {} files", tracked_files)
        }
        CycleReport::Detected(summary) if summary.has_changes() => tracing::info!(
            "Drive cycle: {} added, {} updated, {} suppressed, {} notify failures",
            summary.added,
            summary.updated,
            summary.suppressed,
            summary.notify_failures
        ),
        CycleReport::Detected(summary) => {
            tracing::debug!("Drive cycle: no changes ({} suppressed)", summary.suppressed)
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::{
        error::{drive::DriveError, watch::WatchError},
        model::{change::ChangeEvent, drive_file::FileRecord},
        service::watch::DriveWatcher,
    };

    struct EmptySource;

    #[async_trait]
    impl ListingSource for EmptySource {
        async fn list_folder(&self) -> Result<Vec<FileRecord>, DriveError> {
            Ok(Vec::new())
        }
    }

    struct NullSink;

    #[async_trait]
    impl NotificationSink for NullSink {
        async fn notify(&self, _event: &ChangeEvent) -> Result<(), WatchError> {
            Ok(())
        }
    }

    /// Tests that a tick is skipped while another holder has the watcher.
    ///
    /// Expected: None while locked, a report once the lock is released
    #[tokio::test]
    async fn skips_tick_while_watcher_is_busy() {
        let test = TestBuilder::new().with_watch_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let watch = DriveWatcher::new("folder").into_handle();
        let timeout = Duration::from_secs(5);

        let guard = watch.lock().await;
        let skipped = run_scheduled_cycle(&watch, db, &EmptySource, &NullSink, timeout).await;
        drop(guard);

        assert!(skipped.is_none());

        let report = run_scheduled_cycle(&watch, db, &EmptySource, &NullSink, timeout).await;
        assert_eq!(report, Some(CycleReport::Disabled));
    }

    /// Tests that an enabled watcher is driven through a full cycle.
    ///
    /// Expected: unseeded watcher is seeded on the first tick
    #[tokio::test]
    async fn runs_cycle_for_enabled_watcher() {
        let test = TestBuilder::new().with_watch_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        test_utils::factory::drive_watch::DriveWatchFactory::new(db, "folder")
            .enabled(true)
            .build()
            .await
            .unwrap();
        let watch = DriveWatcher::load(db, "folder").await.unwrap().into_handle();

        let report = run_scheduled_cycle(
            &watch,
            db,
            &EmptySource,
            &NullSink,
            Duration::from_secs(5),
        )
        .await;

        assert_eq!(report, Some(CycleReport::Seeded { tracked_files: 0 }));
    }
}
