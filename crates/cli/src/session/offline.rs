use super::ingest::drain_payloads;
use crate::di::UseCases;
use dns_export_domain::config::CaptureConfig;
use dns_export_infrastructure::capture::{CaptureLoader, PcapFileSource};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Reads the whole capture file, then exports the statistics once.
pub async fn run_offline(
    path: &str,
    capture: &CaptureConfig,
    use_cases: &UseCases,
) -> anyhow::Result<()> {
    let source = PcapFileSource::open(path)?;
    info!(path = %path, "Reading capture file");

    let (loader, mut payloads) =
        CaptureLoader::spawn(source, capture.channel_capacity, CancellationToken::new());
    let tally = drain_payloads(&use_cases.ingest, &mut payloads).await;

    let summary = loader.await??;
    info!(
        frames = summary.frames,
        dns_payloads = summary.dns_payloads,
        "Capture file exhausted"
    );
    tally.log();

    use_cases.export.execute().await?;
    Ok(())
}
