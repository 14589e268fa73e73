use super::frame::Frame;
use super::source::{FrameSource, SourceEvent};
use dns_export_domain::DomainError;
use pcap::{Active, Capture, Device, Error};
use tracing::info;

/// Read timeout so the capture thread can notice cancellation.
const READ_TIMEOUT_MS: i32 = 100;

/// Live capture on a network interface through libpcap.
pub struct LiveCaptureSource {
    interface: String,
    link_type: u16,
    capture: Capture<Active>,
}

impl LiveCaptureSource {
    pub fn open(interface: &str, filter: &str) -> Result<Self, DomainError> {
        info!(interface = %interface, filter = %filter, "Opening live capture");

        let capture = if interface == "any" {
            Capture::from_device("any")
        } else {
            let device = Device::list()
                .map_err(capture_error)?
                .into_iter()
                .find(|d| d.name == interface)
                .ok_or_else(|| {
                    DomainError::CaptureError(format!("Interface {interface} not found"))
                })?;
            Capture::from_device(device)
        };

        let mut capture = capture
            .map_err(capture_error)?
            .immediate_mode(true)
            .timeout(READ_TIMEOUT_MS)
            .open()
            .map_err(capture_error)?;
        capture.filter(filter, true).map_err(capture_error)?;

        let link_type = capture.get_datalink().0 as u16;
        Ok(Self {
            interface: interface.to_string(),
            link_type,
            capture,
        })
    }
}

impl FrameSource for LiveCaptureSource {
    fn next_event(&mut self) -> Result<SourceEvent, DomainError> {
        match self.capture.next_packet() {
            Ok(packet) => Ok(SourceEvent::Frame(Frame::new(
                self.link_type,
                packet.data.to_vec(),
            ))),
            Err(Error::TimeoutExpired) => Ok(SourceEvent::Idle),
            Err(Error::NoMorePackets) => Ok(SourceEvent::Exhausted),
            Err(e) => Ok(SourceEvent::ReadError(e.to_string())),
        }
    }

    fn describe(&self) -> String {
        self.interface.clone()
    }
}

fn capture_error(e: Error) -> DomainError {
    DomainError::CaptureError(e.to_string())
}
