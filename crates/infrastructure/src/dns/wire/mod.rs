//! Response decoder for raw DNS wire messages.
//!
//! Offsets are always absolute from the start of the message so compression
//! pointers can be followed without re-basing.

pub mod answer;
pub mod header;
pub mod name;
pub mod payload;
pub mod view;

pub use answer::decode_answers;
pub use name::{resolve_name, ResolvedName};
pub use view::PacketView;

use dns_export_application::ports::DnsResponseDecoder;
use dns_export_domain::{AnswerRecord, DecodeError};

/// `DnsResponseDecoder` over the wire format.
///
/// Unless `include_unknown` is set, records whose data could not be rendered
/// (`"???"`) are dropped after a successful decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireResponseDecoder {
    include_unknown: bool,
}

impl WireResponseDecoder {
    pub fn new(include_unknown: bool) -> Self {
        Self { include_unknown }
    }
}

impl DnsResponseDecoder for WireResponseDecoder {
    fn decode(&self, message: &[u8]) -> Result<Vec<AnswerRecord>, DecodeError> {
        let mut records = decode_answers(message)?;
        if !self.include_unknown {
            records.retain(AnswerRecord::is_resolved);
        }
        Ok(records)
    }
}
