//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use linkedgpt_core::{
    CalendarFetchers, CalendarService, Clock, ContentGenerator, ContentService,
    CredentialProvider, DirectMessenger, MessageRepository, MessagingService, MetricsRecorder,
    PlatformSenders, PostRepository, PublishingRouter, PublishingService, ScheduledPostRepository,
    ScheduledPostWorker, SchedulingService,
};
use linkedgpt_domain::{Config, Result};
use linkedgpt_infra::{
    EnvCredentialProvider, FacebookClient, GoogleCalendarFetcher, HttpClient,
    LinkedInClient, LinkedInEventsFetcher, OpenAIClient, OutlookCalendarFetcher,
    ScheduledPostScheduler, ScheduledPostSchedulerConfig, SupabaseClient,
    SupabaseMessageRepository, SupabaseMetricsRecorder, SupabasePostRepository,
    SupabaseScheduledPostRepository, SystemClock, TwitterClient,
};
use tracing::info;

/// Every port the services are built from.
///
/// [`AppContext::new`] fills this with the production adapters; tests supply
/// their own through [`AppContext::from_ports`].
#[derive(Clone)]
pub struct AppPorts {
    pub generator: Arc<dyn ContentGenerator>,
    pub senders: PlatformSenders,
    pub messenger: Arc<dyn DirectMessenger>,
    pub fetchers: CalendarFetchers,
    pub scheduled_posts: Arc<dyn ScheduledPostRepository>,
    pub metrics: Arc<dyn MetricsRecorder>,
    pub posts: Arc<dyn PostRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub credentials: Arc<dyn CredentialProvider>,
    pub clock: Arc<dyn Clock>,
}

impl AppPorts {
    /// Vendor clients and Supabase repositories configured from `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        let openai = OpenAIClient::new(config.openai.api_key.clone(), http.clone())
            .with_model(config.openai.model.clone())
            .with_base_url(config.openai.base_url.clone());

        let linkedin = Arc::new(LinkedInClient::new(http.clone()));
        let storage = Arc::new(SupabaseClient::new(&config.supabase, http.clone()));

        Ok(Self {
            generator: Arc::new(openai),
            senders: PlatformSenders {
                linkedin: linkedin.clone(),
                twitter: Arc::new(TwitterClient::new(http.clone())),
                facebook: Arc::new(FacebookClient::new(http.clone())),
            },
            messenger: linkedin,
            fetchers: CalendarFetchers {
                google: Arc::new(GoogleCalendarFetcher::new(http.clone())),
                outlook: Arc::new(OutlookCalendarFetcher::new(http.clone())),
                linkedin: Arc::new(LinkedInEventsFetcher::new(http)),
            },
            scheduled_posts: Arc::new(SupabaseScheduledPostRepository::new(storage.clone())),
            metrics: Arc::new(SupabaseMetricsRecorder::new(storage.clone())),
            posts: Arc::new(SupabasePostRepository::new(storage.clone())),
            messages: Arc::new(SupabaseMessageRepository::new(storage)),
            credentials: Arc::new(EnvCredentialProvider),
            clock: Arc::new(SystemClock),
        })
    }
}

/// Application context - holds all services
pub struct AppContext {
    pub config: Config,
    pub content: Arc<ContentService>,
    pub publishing: Arc<PublishingService>,
    pub scheduling: Arc<SchedulingService>,
    pub messaging: Arc<MessagingService>,
    pub calendar: Arc<CalendarService>,
    pub worker: Arc<ScheduledPostWorker>,
}

impl AppContext {
    /// Build the production context.
    ///
    /// Missing credentials do not fail here; each request that needs one
    /// fails with `Configuration` instead.
    pub fn new(config: Config) -> Result<Self> {
        let ports = AppPorts::from_config(&config)?;
        Ok(Self::from_ports(config, ports))
    }

    pub fn from_ports(config: Config, ports: AppPorts) -> Self {
        let router = Arc::new(PublishingRouter::new(
            ports.senders,
            ports.metrics,
            ports.clock.clone(),
        ));

        let worker = Arc::new(ScheduledPostWorker::new(
            ports.scheduled_posts.clone(),
            router.clone(),
            ports.credentials.clone(),
            ports.clock.clone(),
        ));

        Self {
            content: Arc::new(ContentService::new(ports.generator)),
            publishing: Arc::new(PublishingService::new(
                router,
                ports.credentials.clone(),
                ports.posts,
                ports.clock.clone(),
            )),
            scheduling: Arc::new(SchedulingService::new(ports.scheduled_posts)),
            messaging: Arc::new(MessagingService::new(
                ports.messenger,
                ports.messages,
                ports.credentials,
                ports.clock,
            )),
            calendar: Arc::new(CalendarService::new(ports.fetchers)),
            worker,
            config,
        }
    }

    /// Start the cron trigger for the worker when `worker.enabled` is set.
    ///
    /// The returned scheduler must be kept alive; dropping it cancels the job.
    pub async fn start_worker_scheduler(&self) -> Result<Option<ScheduledPostScheduler>> {
        if !self.config.worker.enabled {
            info!("scheduled post worker disabled; trigger it via HTTP");
            return Ok(None);
        }

        let mut scheduler = ScheduledPostScheduler::new(
            ScheduledPostSchedulerConfig::from(&self.config.worker),
            self.worker.clone(),
        )
        .await?;
        scheduler.start().await?;
        info!(
            job_id = %scheduler.job_id(),
            cron = %self.config.worker.cron_expression,
            "scheduled post worker started"
        );
        Ok(Some(scheduler))
    }
}
