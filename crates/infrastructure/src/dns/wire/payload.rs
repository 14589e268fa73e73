use super::name::resolve_name;
use super::view::PacketView;
use dns_export_domain::{DecodeError, RecordType, UNRESOLVED_DATA};
use std::fmt::Write;
use std::net::{Ipv4Addr, Ipv6Addr};

/// The data region of one answer record.
///
/// Fixed-width reads are checked against both the message and the record's
/// own `data_len`; names may still point anywhere earlier in the message.
#[derive(Debug, Clone, Copy)]
pub struct RecordData<'v, 'a> {
    view: &'v PacketView<'a>,
    offset: usize,
    len: usize,
}

impl<'v, 'a> RecordData<'v, 'a> {
    pub fn new(view: &'v PacketView<'a>, offset: usize, len: usize) -> Result<Self, DecodeError> {
        view.slice(offset, len)?;
        Ok(Self { view, offset, len })
    }

    fn bytes(&self, at: usize, n: usize) -> Result<&'a [u8], DecodeError> {
        at.checked_add(n)
            .filter(|end| *end <= self.len)
            .ok_or(DecodeError::Truncated {
                offset: self.offset + at,
                needed: n,
                available: self.len.saturating_sub(at),
            })?;
        self.view.slice(self.offset + at, n)
    }

    fn u8(&self, at: usize) -> Result<u8, DecodeError> {
        Ok(self.bytes(at, 1)?[0])
    }

    fn u16(&self, at: usize) -> Result<u16, DecodeError> {
        let b = self.bytes(at, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&self, at: usize) -> Result<u32, DecodeError> {
        let b = self.bytes(at, 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn name(&self, at: usize) -> Result<(String, usize), DecodeError> {
        if at >= self.len {
            return Err(DecodeError::Truncated {
                offset: self.offset + at,
                needed: 1,
                available: 0,
            });
        }
        let resolved = resolve_name(self.view, self.offset + at)?;
        Ok((resolved.name, resolved.consumed))
    }
}

/// Renders the answer data for `record_type`.
pub fn interpret(record_type: u16, data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let Some(known) = RecordType::from_u16(record_type) else {
        return Ok(UNRESOLVED_DATA.to_string());
    };

    match known {
        RecordType::A => address_v4(data),
        RecordType::AAAA => address_v6(data),
        RecordType::NS | RecordType::CNAME | RecordType::NSEC => Ok(data.name(0)?.0),
        RecordType::MX => Ok(data.name(2)?.0),
        RecordType::SOA => start_of_authority(data),
        RecordType::TXT | RecordType::SPF => text(data),
        RecordType::RRSIG => signature(data),
        RecordType::DNSKEY | RecordType::DS => key_or_digest(data),
    }
}

fn address_v4(data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let b = data.bytes(0, 4)?;
    Ok(Ipv4Addr::new(b[0], b[1], b[2], b[3]).to_string())
}

fn address_v6(data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let mut octets = [0u8; 16];
    octets.copy_from_slice(data.bytes(0, 16)?);
    Ok(Ipv6Addr::from(octets).to_string())
}

fn start_of_authority(data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let (mname, mname_len) = data.name(0)?;
    let (rname, rname_len) = data.name(mname_len)?;
    let at = mname_len + rname_len;

    let serial = data.u32(at)?;
    let refresh = data.u32(at + 4)?;
    let retry = data.u32(at + 8)?;
    let expire = data.u32(at + 12)?;
    let minimum = data.u32(at + 16)?;

    Ok(format!(
        "\"{mname} {rname} {serial} {refresh} {retry} {expire} {minimum}\""
    ))
}

/// TXT and SPF keep the whole data region, character-string length bytes
/// included. Printable ASCII is kept as is, every other byte is escaped, so
/// distinct payloads never render alike.
fn text(data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let raw = data.bytes(0, data.len)?;
    Ok(format!("\"{}\"", raw.escape_ascii()))
}

fn signature(data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let type_covered = data.u16(0)?;
    let algorithm = data.u8(2)?;
    let labels = data.u8(3)?;
    let original_ttl = data.u32(4)?;
    let expiration = data.u32(8)?;
    let inception = data.u32(12)?;
    let key_tag = data.u16(16)?;
    let (signer, _) = data.name(18)?;

    Ok(format!(
        "\"{type_covered} {algorithm} {labels} {original_ttl} {expiration} {inception} {key_tag} {signer}\""
    ))
}

/// DNSKEY (flags, protocol, algorithm, key) and DS (key tag, algorithm,
/// digest type, digest) share one rendering.
fn key_or_digest(data: &RecordData<'_, '_>) -> Result<String, DecodeError> {
    let first = data.u16(0)?;
    let second = data.u8(2)?;
    let third = data.u8(3)?;
    let rest = data.bytes(4, data.len.saturating_sub(4))?;

    let mut out = format!("\"0x{first:04x} {second} {third} ");
    for byte in rest {
        let _ = write!(out, "{byte:02x}");
    }
    out.push('"');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(record_type: RecordType, message: &[u8], offset: usize, len: usize) -> String {
        let view = PacketView::new(message);
        let data = RecordData::new(&view, offset, len).unwrap();
        interpret(record_type as u16, &data).unwrap()
    }

    fn render_err(record_type: u16, message: &[u8], offset: usize, len: usize) -> DecodeError {
        let view = PacketView::new(message);
        let data = RecordData::new(&view, offset, len).unwrap();
        interpret(record_type, &data).unwrap_err()
    }

    #[test]
    fn test_ipv4() {
        assert_eq!(
            render(RecordType::A, &[93, 184, 216, 34], 0, 4),
            "93.184.216.34"
        );
    }

    #[test]
    fn test_ipv6_uses_compressed_form() {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x20;
        bytes[1] = 0x01;
        bytes[2] = 0x0d;
        bytes[3] = 0xb8;
        bytes[15] = 0x01;
        assert_eq!(render(RecordType::AAAA, &bytes, 0, 16), "2001:db8::1");
    }

    #[test]
    fn test_short_address_fails() {
        assert!(matches!(
            render_err(1, &[10, 0, 0, 1, 0xff], 0, 3),
            DecodeError::Truncated { .. }
        ));
    }

    #[test]
    fn test_name_records() {
        let mut bytes = b"\x07example\x03com\x00".to_vec();
        bytes.extend_from_slice(&[0xc0, 0x00]);
        for record_type in [RecordType::NS, RecordType::CNAME, RecordType::NSEC] {
            assert_eq!(render(record_type, &bytes, 13, 2), "example.com");
        }
    }

    #[test]
    fn test_mx_skips_preference() {
        let mut bytes = b"\x07example\x03com\x00".to_vec();
        bytes.extend_from_slice(&[0x00, 0x0a, 0x04, b'm', b'a', b'i', b'l', 0xc0, 0x00]);
        assert_eq!(render(RecordType::MX, &bytes, 13, 9), "mail.example.com");
    }

    #[test]
    fn test_soa_reads_full_width_fields() {
        let mut bytes = b"\x07example\x03com\x00".to_vec();
        let start = bytes.len();
        bytes.extend_from_slice(b"\x02ns\xc0\x00");
        bytes.extend_from_slice(b"\x0ahostmaster\xc0\x00");
        for value in [2_024_010_101u32, 7200, 3600, 1_209_600, 86_400] {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        let len = bytes.len() - start;

        assert_eq!(
            render(RecordType::SOA, &bytes, start, len),
            "\"ns.example.com hostmaster.example.com 2024010101 7200 3600 1209600 86400\""
        );
    }

    #[test]
    fn test_soa_missing_minimum_fails() {
        let mut bytes = vec![0x00, 0x00];
        for value in [1u32, 2, 3, 4] {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes.extend_from_slice(&[0xaa; 8]);
        let err = render_err(6, &bytes, 0, 18);
        assert!(matches!(err, DecodeError::Truncated { .. }));
    }

    #[test]
    fn test_text_is_verbatim_and_quoted() {
        let bytes = b"\x0bhello world";
        assert_eq!(
            render(RecordType::TXT, bytes, 0, bytes.len()),
            "\"\\x0bhello world\""
        );
        assert_eq!(
            render(RecordType::SPF, bytes, 0, bytes.len()),
            "\"\\x0bhello world\""
        );
    }

    #[test]
    fn test_distinct_binary_text_stays_distinct() {
        let first = render(RecordType::TXT, &[0x01, 0xff], 0, 2);
        let second = render(RecordType::TXT, &[0x01, 0xfe], 0, 2);
        assert_eq!(first, "\"\\x01\\xff\"");
        assert_eq!(second, "\"\\x01\\xfe\"");
        assert_ne!(first, second);
    }

    #[test]
    fn test_text_escapes_quotes() {
        let bytes = b"\x03a\"b";
        assert_eq!(
            render(RecordType::TXT, bytes, 0, bytes.len()),
            "\"\\x03a\\\"b\""
        );
    }

    #[test]
    fn test_signature() {
        let mut bytes = b"\x07example\x03com\x00".to_vec();
        let start = bytes.len();
        bytes.extend_from_slice(&1u16.to_be_bytes());
        bytes.extend_from_slice(&[13, 2]);
        bytes.extend_from_slice(&3600u32.to_be_bytes());
        bytes.extend_from_slice(&1_700_000_000u32.to_be_bytes());
        bytes.extend_from_slice(&1_690_000_000u32.to_be_bytes());
        bytes.extend_from_slice(&12345u16.to_be_bytes());
        bytes.extend_from_slice(&[0xc0, 0x00]);
        bytes.extend_from_slice(&[0xde, 0xad]);
        let len = bytes.len() - start;

        assert_eq!(
            render(RecordType::RRSIG, &bytes, start, len),
            "\"1 13 2 3600 1700000000 1690000000 12345 example.com\""
        );
    }

    #[test]
    fn test_dnskey_and_ds() {
        let bytes = [0x01, 0x01, 0x03, 0x0d, 0xab, 0xcd, 0x01];
        assert_eq!(
            render(RecordType::DNSKEY, &bytes, 0, 7),
            "\"0x0101 3 13 abcd01\""
        );

        let bytes = [0x30, 0x39, 0x08, 0x02, 0x00, 0xff];
        assert_eq!(render(RecordType::DS, &bytes, 0, 6), "\"0x3039 8 2 00ff\"");
    }

    #[test]
    fn test_key_stops_at_record_end() {
        let bytes = [0x01, 0x00, 0x03, 0x08, 0xaa, 0xbb, 0xcc];
        assert_eq!(
            render(RecordType::DNSKEY, &bytes, 0, 5),
            "\"0x0100 3 8 aa\""
        );
    }

    #[test]
    fn test_unknown_type_is_unresolved() {
        let view = PacketView::new(&[1, 2, 3]);
        let data = RecordData::new(&view, 0, 3).unwrap();
        assert_eq!(interpret(9999, &data).unwrap(), UNRESOLVED_DATA);
    }

    #[test]
    fn test_region_past_message_is_rejected() {
        let view = PacketView::new(&[0u8; 4]);
        assert!(RecordData::new(&view, 2, 4).is_err());
    }
}
