#[cfg(unix)]
use crate::SignalDumpJob;
use crate::StatisticsExportJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(StatisticsExportJob);
#[cfg(unix)]
impl_spawnable_job!(SignalDumpJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

pub struct JobRunner {
    statistics_export: Option<StatisticsExportJob>,
    #[cfg(unix)]
    signal_dump: Option<SignalDumpJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            statistics_export: None,
            #[cfg(unix)]
            signal_dump: None,
            shutdown: None,
        }
    }

    pub fn with_statistics_export(mut self, job: StatisticsExportJob) -> Self {
        self.statistics_export = Some(job);
        self
    }

    #[cfg(unix)]
    pub fn with_signal_dump(mut self, job: SignalDumpJob) -> Self {
        self.signal_dump = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.statistics_export, &self.shutdown);
        #[cfg(unix)]
        spawn_job(self.signal_dump, &self.shutdown);

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
