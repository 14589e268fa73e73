use dns_export_application::use_cases::ExportStatisticsUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Hands the statistics to the configured exporter every `interval_secs`.
pub struct StatisticsExportJob {
    export: Arc<ExportStatisticsUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatisticsExportJob {
    pub fn new(export: Arc<ExportStatisticsUseCase>, interval_secs: u64) -> Self {
        Self {
            export,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting statistics export job"
        );

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs.max(1));
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("StatisticsExportJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        if let Err(e) = self.export.execute().await {
                            error!(error = %e, "Periodic statistics export failed");
                        }
                    }
                }
            }
        });
    }
}
