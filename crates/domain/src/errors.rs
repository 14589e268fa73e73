use thiserror::Error;

/// Reasons a captured buffer is rejected as "not a usable DNS response".
///
/// Every variant aborts the decode of the whole message; the decoder never
/// hands back a partial answer list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Message too short: need {needed} bytes at offset {offset}, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Message is a query, not a response")]
    NotAResponse,

    #[error("Reserved flag bits or response code set (flags 0x{0:04x})")]
    ReservedFlags(u16),

    #[error("Implausible {section} count: {count}")]
    ImplausibleCount { section: &'static str, count: u16 },

    #[error("Response carries no answers")]
    NoAnswers,

    #[error("Unsupported record class {0}")]
    UnsupportedClass(u16),

    #[error("Record data length {0} exceeds sanity bound")]
    OversizedRecord(u16),

    #[error("Invalid domain name at offset {0}")]
    InvalidName(usize),
}

impl DecodeError {
    /// An empty answer section is "nothing to extract", not a malformed message.
    pub fn is_empty_response(&self) -> bool {
        matches!(self, DecodeError::NoAnswers)
    }
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(#[from] DecodeError),

    #[error("Capture error: {0}")]
    CaptureError(String),

    #[error("Unsupported link type: {0}")]
    UnsupportedLinkType(u16),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Export to {target} failed: {reason}")]
    ExportFailed { target: String, reason: String },

    #[error("Could not resolve syslog server {0}")]
    SyslogResolution(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
