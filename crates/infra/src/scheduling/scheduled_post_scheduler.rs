//! Cron trigger for [`ScheduledPostWorker`]
//!
//! Each tick runs one `run_once` pass under a timeout. A tick that fires
//! while the previous pass is still in flight is skipped, so a single process
//! never processes the same due row twice concurrently.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use linkedgpt_core::ScheduledPostWorker;
use linkedgpt_domain::WorkerConfig;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use super::error::{SchedulerError, SchedulerResult};

#[derive(Debug, Clone)]
pub struct ScheduledPostSchedulerConfig {
    /// Six-field cron expression (seconds first).
    pub cron_expression: String,
    /// Upper bound for one worker pass.
    pub job_timeout: Duration,
    pub start_timeout: Duration,
    pub stop_timeout: Duration,
    pub join_timeout: Duration,
}

impl Default for ScheduledPostSchedulerConfig {
    fn default() -> Self {
        Self::from(&WorkerConfig::default())
    }
}

impl From<&WorkerConfig> for ScheduledPostSchedulerConfig {
    fn from(config: &WorkerConfig) -> Self {
        Self {
            cron_expression: config.cron_expression.clone(),
            job_timeout: Duration::from_secs(config.job_timeout_secs),
            start_timeout: Duration::from_secs(5),
            stop_timeout: Duration::from_secs(5),
            join_timeout: Duration::from_secs(5),
        }
    }
}

pub struct ScheduledPostScheduler {
    scheduler: Arc<RwLock<JobScheduler>>,
    config: ScheduledPostSchedulerConfig,
    job_id: Uuid,
    monitor_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
    worker: Arc<ScheduledPostWorker>,
}

impl ScheduledPostScheduler {
    /// Create the scheduler and register the worker job.
    ///
    /// # Errors
    /// `JobRegistrationFailed` when the cron expression does not parse.
    pub async fn new(
        config: ScheduledPostSchedulerConfig,
        worker: Arc<ScheduledPostWorker>,
    ) -> SchedulerResult<Self> {
        let raw_scheduler = JobScheduler::new()
            .await
            .map_err(|source| SchedulerError::CreationFailed { source })?;

        let mut scheduler = Self {
            scheduler: Arc::new(RwLock::new(raw_scheduler)),
            config,
            job_id: Uuid::nil(),
            monitor_handle: None,
            cancellation: CancellationToken::new(),
            worker,
        };

        scheduler.job_id = scheduler.register_worker_job().await?;
        Ok(scheduler)
    }

    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();

        let scheduler = self.scheduler.clone();
        let start_timeout = self.config.start_timeout;
        tokio::time::timeout(start_timeout, async move {
            let guard = scheduler.write().await;
            guard.start().await
        })
        .await
        .map_err(|source| SchedulerError::Timeout { duration: start_timeout, source })?
        .map_err(|source| SchedulerError::StartFailed { source })?;

        let cancel = self.cancellation.clone();
        self.monitor_handle = Some(tokio::spawn(async move {
            cancel.cancelled().await;
            debug!("scheduled post scheduler monitor cancelled");
        }));

        info!(cron = %self.config.cron_expression, "scheduled post scheduler started");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        let scheduler = self.scheduler.clone();
        let stop_timeout = self.config.stop_timeout;
        tokio::time::timeout(stop_timeout, async move {
            let mut guard = scheduler.write().await;
            guard.shutdown().await
        })
        .await
        .map_err(|source| SchedulerError::Timeout { duration: stop_timeout, source })?
        .map_err(|source| SchedulerError::StopFailed { source })?;

        if let Some(handle) = self.monitor_handle.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|source| SchedulerError::Timeout { duration: join_timeout, source })??;
        }

        info!("scheduled post scheduler stopped");
        self.cancellation = CancellationToken::new();
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.monitor_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn job_id(&self) -> Uuid {
        self.job_id
    }

    async fn register_worker_job(&mut self) -> SchedulerResult<Uuid> {
        if !self.job_id.is_nil() {
            return Ok(self.job_id);
        }

        let worker = self.worker.clone();
        let job_timeout = self.config.job_timeout;
        let in_flight = Arc::new(AtomicBool::new(false));

        let job = Job::new_async(self.config.cron_expression.as_str(), move |_id, _lock| {
            let worker = worker.clone();
            let in_flight = in_flight.clone();

            Box::pin(async move {
                if in_flight.swap(true, Ordering::SeqCst) {
                    warn!("previous scheduled post run still in progress; skipping tick");
                    return;
                }

                let started = Instant::now();
                match tokio::time::timeout(job_timeout, worker.run_once()).await {
                    Ok(Ok(report)) => debug!(
                        processed = report.processed,
                        failures = report.failures(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "scheduled post run finished"
                    ),
                    Ok(Err(err)) => error!(error = %err, kind = err.label(), "scheduled post run failed"),
                    Err(_) => warn!(timeout_secs = job_timeout.as_secs(), "scheduled post run timed out"),
                }

                in_flight.store(false, Ordering::SeqCst);
            })
        })
        .map_err(|source| SchedulerError::JobRegistrationFailed { source })?;

        let job_id = job.guid();
        let scheduler = self.scheduler.write().await;
        scheduler
            .add(job)
            .await
            .map_err(|source| SchedulerError::JobRegistrationFailed { source })?;

        debug!(cron = %self.config.cron_expression, %job_id, "registered scheduled post job");
        Ok(job_id)
    }
}

impl Drop for ScheduledPostScheduler {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("ScheduledPostScheduler dropped while running; cancelling");
            self.cancellation.cancel();
        }
    }
}
