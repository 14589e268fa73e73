use super::view::PacketView;
use dns_export_domain::{AnswerHeader, DecodeError, DnsHeader};

pub const HEADER_LEN: usize = 12;
pub const ANSWER_HEADER_LEN: usize = 12;
/// Upper bound for any section count in a single packet.
pub const MAX_SECTION_COUNT: u16 = 100;
/// Upper bound for a single record's data length.
pub const MAX_RECORD_DATA_LEN: u16 = 1400;

const COMPRESSION_MASK: u16 = 0x3fff;

/// Reads the 12-byte message header. The caller guarantees the bytes exist;
/// a short view still fails cleanly with `Truncated`.
pub fn decode_header(view: &PacketView<'_>) -> Result<DnsHeader, DecodeError> {
    Ok(DnsHeader {
        id: view.u16_at(0)?,
        flags: view.u16_at(2)?,
        questions: view.u16_at(4)?,
        answers: view.u16_at(6)?,
        authority: view.u16_at(8)?,
        additional: view.u16_at(10)?,
    })
}

/// Rejects queries, error responses and implausible section counts.
pub fn validate_header(header: &DnsHeader) -> Result<(), DecodeError> {
    if !header.is_response() {
        return Err(DecodeError::NotAResponse);
    }
    if header.has_reserved_or_error_bits() {
        return Err(DecodeError::ReservedFlags(header.flags));
    }

    let sections = [
        ("question", header.questions),
        ("answer", header.answers),
        ("authority", header.authority),
        ("additional", header.additional),
    ];
    for (section, count) in sections {
        if count > MAX_SECTION_COUNT {
            return Err(DecodeError::ImplausibleCount { section, count });
        }
    }

    if header.answers == 0 {
        return Err(DecodeError::NoAnswers);
    }
    Ok(())
}

/// Reads the fixed answer header field by field: the on-wire layout
/// (2+2+2+4+2) has the TTL at an offset no native struct would use.
pub fn decode_answer_header(
    view: &PacketView<'_>,
    offset: usize,
) -> Result<AnswerHeader, DecodeError> {
    view.slice(offset, ANSWER_HEADER_LEN)?;
    Ok(AnswerHeader {
        name_offset: view.u16_at(offset)? & COMPRESSION_MASK,
        record_type: view.u16_at(offset + 2)?,
        class: view.u16_at(offset + 4)?,
        ttl: view.u32_at(offset + 6)?,
        data_len: view.u16_at(offset + 10)?,
    })
}

/// Rejects records the statistics must not trust.
pub fn validate_answer_header(header: &AnswerHeader) -> Result<(), DecodeError> {
    if header.class != AnswerHeader::CLASS_IN {
        return Err(DecodeError::UnsupportedClass(header.class));
    }
    if header.data_len > MAX_RECORD_DATA_LEN {
        return Err(DecodeError::OversizedRecord(header.data_len));
    }
    Ok(())
}
