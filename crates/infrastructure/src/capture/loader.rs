use super::frame::{dns_payload, LinkType};
use super::source::{FrameSource, SourceEvent};
use bytes::Bytes;
use dns_export_domain::DomainError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Consecutive read errors after which the capture gives up.
pub const MAX_CONSECUTIVE_READ_ERRORS: u32 = 10;
/// Pause after a read error, multiplied by the current error streak.
const READ_ERROR_BACKOFF: Duration = Duration::from_millis(10);

/// Counters reported when a capture thread finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureSummary {
    pub frames: u64,
    pub dns_payloads: u64,
}

pub struct CaptureLoader;

impl CaptureLoader {
    /// Runs `source` on a blocking thread, forwarding UDP/53 payloads into a
    /// bounded channel until the source is exhausted, the receiver is
    /// dropped, or `cancel` fires.
    pub fn spawn<S>(
        source: S,
        channel_capacity: usize,
        cancel: CancellationToken,
    ) -> (
        JoinHandle<Result<CaptureSummary, DomainError>>,
        mpsc::Receiver<Bytes>,
    )
    where
        S: FrameSource + 'static,
    {
        let (tx, rx) = mpsc::channel(channel_capacity.max(1));
        let handle = tokio::task::spawn_blocking(move || run(source, tx, cancel));
        (handle, rx)
    }
}

fn run<S: FrameSource>(
    mut source: S,
    tx: mpsc::Sender<Bytes>,
    cancel: CancellationToken,
) -> Result<CaptureSummary, DomainError> {
    let name = source.describe();
    let mut summary = CaptureSummary::default();
    let mut read_errors = 0u32;
    info!(source = %name, "Capture started");

    while !cancel.is_cancelled() {
        let frame = match source.next_event()? {
            SourceEvent::Frame(frame) => frame,
            SourceEvent::Idle => continue,
            SourceEvent::ReadError(reason) => {
                read_errors += 1;
                warn!(source = %name, error = %reason, read_errors, "Error reading packet");
                if read_errors >= MAX_CONSECUTIVE_READ_ERRORS {
                    return Err(DomainError::CaptureError(format!(
                        "{name}: {read_errors} consecutive read errors, last: {reason}"
                    )));
                }
                std::thread::sleep(READ_ERROR_BACKOFF * read_errors);
                continue;
            }
            SourceEvent::Exhausted => {
                debug!(source = %name, "Capture source exhausted");
                break;
            }
        };
        read_errors = 0;
        summary.frames += 1;

        let link_type = LinkType::from_u16(frame.link_type)?;
        let Some(payload) = dns_payload(link_type, &frame.data) else {
            continue;
        };
        summary.dns_payloads += 1;

        if tx.blocking_send(Bytes::copy_from_slice(payload)).is_err() {
            info!(source = %name, "Channel closed, stopping capture");
            break;
        }
    }

    info!(
        source = %name,
        frames = summary.frames,
        dns_payloads = summary.dns_payloads,
        "Packet capture task terminated"
    );
    Ok(summary)
}
