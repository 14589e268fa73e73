use dns_export_domain::{DecodeError, MAX_MESSAGE_LEN};

/// Read-only, bounds-checked window over one DNS message.
///
/// All offsets are absolute from the first header byte. Every read checks its
/// end offset with checked arithmetic and reports `DecodeError::Truncated`
/// instead of reading past the buffer.
#[derive(Debug, Clone, Copy)]
pub struct PacketView<'a> {
    bytes: &'a [u8],
}

impl<'a> PacketView<'a> {
    /// Wraps at most the first `MAX_MESSAGE_LEN` bytes of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        let len = bytes.len().min(MAX_MESSAGE_LEN);
        Self {
            bytes: &bytes[..len],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = offset
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(DecodeError::Truncated {
                offset,
                needed: len,
                available: self.bytes.len().saturating_sub(offset),
            })?;
        Ok(&self.bytes[offset..end])
    }

    pub fn u8_at(&self, offset: usize) -> Result<u8, DecodeError> {
        Ok(self.slice(offset, 1)?[0])
    }

    pub fn u16_at(&self, offset: usize) -> Result<u16, DecodeError> {
        let b = self.slice(offset, 2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn u32_at(&self, offset: usize) -> Result<u32, DecodeError> {
        let b = self.slice(offset, 4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}
