use crate::di::UseCases;
use dns_export_domain::config::{CaptureConfig, StatsConfig};

#[cfg(feature = "live-capture")]
pub async fn run_live(
    interface: &str,
    capture: &CaptureConfig,
    stats: &StatsConfig,
    use_cases: &UseCases,
) -> anyhow::Result<()> {
    use super::ingest::IngestTally;
    use dns_export_infrastructure::capture::{CaptureLoader, LiveCaptureSource};
    #[cfg(unix)]
    use dns_export_jobs::SignalDumpJob;
    use dns_export_jobs::{JobRunner, StatisticsExportJob};
    use tokio_util::sync::CancellationToken;
    use tracing::{error, info, warn};

    let source = LiveCaptureSource::open(interface, &capture.filter)?;
    let shutdown = CancellationToken::new();

    let runner = JobRunner::new()
        .with_shutdown_token(shutdown.clone())
        .with_statistics_export(StatisticsExportJob::new(
            use_cases.export.clone(),
            stats.export_interval_secs,
        ));
    #[cfg(unix)]
    let runner = runner.with_signal_dump(SignalDumpJob::new(use_cases.dump.clone()));
    runner.start().await;

    let (loader, mut payloads) =
        CaptureLoader::spawn(source, capture.channel_capacity, shutdown.clone());
    info!(interface = %interface, filter = %capture.filter, "Live capture started");

    let mut tally = IngestTally::default();
    loop {
        tokio::select! {
            payload = payloads.recv() => match payload {
                Some(payload) => tally.record(&use_cases.ingest.execute(&payload).await),
                None => {
                    warn!(interface = %interface, "Capture ended");
                    break;
                }
            },
            signal = tokio::signal::ctrl_c() => {
                if let Err(e) = signal {
                    error!(error = %e, "Failed to listen for Ctrl-C");
                }
                info!("Shutdown requested");
                break;
            }
        }
    }

    shutdown.cancel();
    let summary = loader.await??;
    info!(
        frames = summary.frames,
        dns_payloads = summary.dns_payloads,
        "Live capture stopped"
    );
    tally.log();

    use_cases.export.execute().await?;
    use_cases.reset.execute().await;
    Ok(())
}

#[cfg(not(feature = "live-capture"))]
pub async fn run_live(
    interface: &str,
    _capture: &CaptureConfig,
    _stats: &StatsConfig,
    _use_cases: &UseCases,
) -> anyhow::Result<()> {
    anyhow::bail!(
        "Live capture on '{interface}' requires a build with the `live-capture` feature"
    )
}
