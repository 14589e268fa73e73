pub mod frame;
#[cfg(feature = "live-capture")]
pub mod live;
pub mod loader;
pub mod pcap_file;
pub mod source;

pub use frame::{dns_payload, Frame, LinkType, DNS_PORT};
#[cfg(feature = "live-capture")]
pub use live::LiveCaptureSource;
pub use loader::{CaptureLoader, CaptureSummary, MAX_CONSECUTIVE_READ_ERRORS};
pub use pcap_file::PcapFileSource;
pub use source::{FrameSource, SourceEvent};
