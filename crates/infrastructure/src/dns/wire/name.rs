use super::view::PacketView;
use dns_export_domain::DecodeError;

/// Longest domain name in wire form.
pub const MAX_NAME_WIRE_LEN: usize = 255;

const POINTER_TAG: u8 = 0xc0;
const MAX_LABEL_LEN: u8 = 63;
const POINTER_MASK: u16 = 0x3fff;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Labels joined with `.`; empty for the root name.
    pub name: String,
    /// Bytes the encoding occupies at the starting offset.
    pub consumed: usize,
}

/// Resolves the (possibly compressed) name starting at `offset`.
///
/// Every pointer hop counts against a budget of one hop per byte of the
/// message, and the label bytes collected across hops may not exceed the
/// 255-byte wire limit. Both bounds turn pointer cycles into `InvalidName`.
pub fn resolve_name(view: &PacketView<'_>, offset: usize) -> Result<ResolvedName, DecodeError> {
    let mut name = String::new();
    let mut cursor = offset;
    let mut consumed = 0usize;
    let mut jumped = false;
    let mut jumps = 0usize;
    let mut wire_len = 0usize;

    loop {
        let len = view.u8_at(cursor)?;
        match len {
            0 => {
                if !jumped {
                    consumed += 1;
                }
                break;
            }
            1..=MAX_LABEL_LEN => {
                let label = view.slice(cursor + 1, usize::from(len))?;
                wire_len += usize::from(len) + 1;
                if wire_len > MAX_NAME_WIRE_LEN {
                    return Err(DecodeError::InvalidName(offset));
                }
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(label));
                if !jumped {
                    consumed += usize::from(len) + 1;
                }
                cursor += usize::from(len) + 1;
            }
            _ if len >= POINTER_TAG => {
                let target = usize::from(view.u16_at(cursor)? & POINTER_MASK);
                if !jumped {
                    consumed += 2;
                    jumped = true;
                }
                jumps += 1;
                if jumps > view.len() {
                    return Err(DecodeError::InvalidName(offset));
                }
                cursor = target;
            }
            _ => return Err(DecodeError::InvalidName(offset)),
        }
    }

    Ok(ResolvedName { name, consumed })
}
