use super::frame::Frame;
use dns_export_domain::DomainError;

/// Outcome of one blocking read from a packet source.
#[derive(Debug)]
pub enum SourceEvent {
    Frame(Frame),
    /// Nothing arrived before the read timeout; the caller may check for
    /// cancellation and read again.
    Idle,
    /// A read failed but the source may recover; the caller decides how many
    /// of these in a row it tolerates.
    ReadError(String),
    Exhausted,
}

/// Blocking producer of link-layer frames, driven from a dedicated thread.
pub trait FrameSource: Send {
    fn next_event(&mut self) -> Result<SourceEvent, DomainError>;

    fn describe(&self) -> String;
}
