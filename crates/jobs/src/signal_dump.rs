use dns_export_application::use_cases::ExportStatisticsUseCase;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Prints the current statistics whenever the process receives SIGUSR1.
pub struct SignalDumpJob {
    dump: Arc<ExportStatisticsUseCase>,
    shutdown: CancellationToken,
}

impl SignalDumpJob {
    pub fn new(dump: Arc<ExportStatisticsUseCase>) -> Self {
        Self {
            dump,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        let mut usr1 = match signal(SignalKind::user_defined1()) {
            Ok(stream) => stream,
            Err(e) => {
                warn!(error = %e, "Cannot listen for SIGUSR1, statistics dump disabled");
                return;
            }
        };
        info!("Starting SIGUSR1 statistics dump job");

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("SignalDumpJob: shutting down");
                        break;
                    }
                    received = usr1.recv() => {
                        if received.is_none() {
                            break;
                        }
                        if let Err(e) = self.dump.execute().await {
                            error!(error = %e, "Statistics dump failed");
                        }
                    }
                }
            }
        });
    }
}
