use super::type_tag;
use std::fmt;

/// Answer data of a record whose type has no payload interpreter.
pub const UNRESOLVED_DATA: &str = "???";

/// The fixed 12-byte DNS message header, already converted from network order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub flags: u16,
    pub questions: u16,
    pub answers: u16,
    pub authority: u16,
    pub additional: u16,
}

impl DnsHeader {
    pub const RESPONSE_FLAG: u16 = 0x8000;
    /// Reserved Z bits plus the four RCODE bits.
    pub const RESERVED_AND_RCODE_MASK: u16 = 0x007f;

    pub fn is_response(&self) -> bool {
        self.flags & Self::RESPONSE_FLAG != 0
    }

    pub fn has_reserved_or_error_bits(&self) -> bool {
        self.flags & Self::RESERVED_AND_RCODE_MASK != 0
    }
}

/// Fixed part of one answer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerHeader {
    /// Offset of the owner name, compression prefix bits masked off.
    pub name_offset: u16,
    pub record_type: u16,
    pub class: u16,
    pub ttl: u32,
    pub data_len: u16,
}

impl AnswerHeader {
    pub const CLASS_IN: u16 = 1;
}

/// One decoded answer, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub header: AnswerHeader,
    pub domain: String,
    pub type_tag: String,
    pub data: String,
}

impl AnswerRecord {
    pub fn new(header: AnswerHeader, domain: String, data: String) -> Self {
        Self {
            type_tag: type_tag(header.record_type),
            header,
            domain,
            data,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.data != UNRESOLVED_DATA
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.domain, self.type_tag, self.data)
    }
}
