use super::frame::{Frame, LinkType};
use super::source::{FrameSource, SourceEvent};
use dns_export_domain::DomainError;
use pcap_parser::traits::PcapReaderIterator;
use pcap_parser::{LegacyPcapReader, PcapBlockOwned, PcapError, PcapNGReader};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use tracing::debug;

const BUFFER_SIZE: usize = 65536;

enum ReaderInner {
    Legacy(LegacyPcapReader<BufReader<File>>),
    Ng(PcapNGReader<BufReader<File>>),
}

/// Offline source reading legacy pcap (either byte order, micro- or
/// nanosecond timestamps) and pcapng files.
pub struct PcapFileSource {
    path: String,
    inner: ReaderInner,
    /// Link type per pcapng interface; a legacy file has exactly one.
    link_types: Vec<u16>,
    frames: u64,
}

impl PcapFileSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let mut file = File::open(path)
            .map_err(|e| DomainError::CaptureError(format!("Cannot open {shown}: {e}")))?;

        let mut magic = [0u8; 4];
        file.read_exact(&mut magic).map_err(|_| {
            DomainError::CaptureError(format!("{shown} is too short to be a capture file"))
        })?;
        file.rewind()?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);

        let inner = match magic {
            [0xd4, 0xc3, 0xb2, 0xa1]
            | [0xa1, 0xb2, 0xc3, 0xd4]
            | [0x4d, 0x3c, 0xb2, 0xa1]
            | [0xa1, 0xb2, 0x3c, 0x4d] => LegacyPcapReader::new(BUFFER_SIZE, reader)
                .map(ReaderInner::Legacy)
                .map_err(|e| {
                    DomainError::CaptureError(format!("Invalid pcap header in {shown}: {e}"))
                })?,
            [0x0a, 0x0d, 0x0d, 0x0a] => PcapNGReader::new(BUFFER_SIZE, reader)
                .map(ReaderInner::Ng)
                .map_err(|e| {
                    DomainError::CaptureError(format!("Invalid pcapng header in {shown}: {e}"))
                })?,
            _ => {
                return Err(DomainError::CaptureError(format!(
                    "{shown}: unknown capture format (magic {magic:02x?})"
                )))
            }
        };

        debug!(path = %shown, "Opened capture file");
        Ok(Self {
            path: shown,
            inner,
            link_types: Vec::new(),
            frames: 0,
        })
    }

    fn next_legacy(&mut self) -> Result<Option<Frame>, DomainError> {
        let ReaderInner::Legacy(reader) = &mut self.inner else {
            return Ok(None);
        };
        loop {
            match reader.next() {
                Ok((offset, block)) => {
                    let frame = match block {
                        PcapBlockOwned::Legacy(packet) => {
                            let link_type = self
                                .link_types
                                .first()
                                .copied()
                                .unwrap_or(LinkType::ETHERNET);
                            Some(Frame::new(link_type, packet.data.to_vec()))
                        }
                        PcapBlockOwned::LegacyHeader(header) => {
                            self.link_types = vec![header.network.0 as u16];
                            None
                        }
                        _ => None,
                    };
                    reader.consume(offset);
                    if let Some(frame) = frame {
                        self.frames += 1;
                        return Ok(Some(frame));
                    }
                }
                Err(PcapError::Eof) => {
                    debug!(path = %self.path, frames = self.frames, "End of capture file");
                    return Ok(None);
                }
                Err(PcapError::Incomplete(_)) => {
                    reader.refill().map_err(|e| {
                        DomainError::CaptureError(format!("Read error in {}: {e}", self.path))
                    })?;
                }
                Err(e) => {
                    return Err(DomainError::CaptureError(format!(
                        "Parse error in {}: {e}",
                        self.path
                    )))
                }
            }
        }
    }

    fn next_ng(&mut self) -> Result<Option<Frame>, DomainError> {
        use pcap_parser::pcapng::Block;

        let ReaderInner::Ng(reader) = &mut self.inner else {
            return Ok(None);
        };
        loop {
            match reader.next() {
                Ok((offset, block)) => {
                    let frame = match block {
                        PcapBlockOwned::NG(Block::SectionHeader(_)) => {
                            self.link_types.clear();
                            None
                        }
                        PcapBlockOwned::NG(Block::InterfaceDescription(idb)) => {
                            self.link_types.push(idb.linktype.0 as u16);
                            None
                        }
                        PcapBlockOwned::NG(Block::EnhancedPacket(epb)) => {
                            let link_type = self
                                .link_types
                                .get(epb.if_id as usize)
                                .copied()
                                .unwrap_or(LinkType::ETHERNET);
                            let len = (epb.caplen as usize).min(epb.data.len());
                            Some(Frame::new(link_type, epb.data[..len].to_vec()))
                        }
                        PcapBlockOwned::NG(Block::SimplePacket(spb)) => {
                            let link_type = self
                                .link_types
                                .first()
                                .copied()
                                .unwrap_or(LinkType::ETHERNET);
                            Some(Frame::new(link_type, spb.data.to_vec()))
                        }
                        _ => None,
                    };
                    reader.consume(offset);
                    if let Some(frame) = frame {
                        self.frames += 1;
                        return Ok(Some(frame));
                    }
                }
                Err(PcapError::Eof) => {
                    debug!(path = %self.path, frames = self.frames, "End of capture file");
                    return Ok(None);
                }
                Err(PcapError::Incomplete(_)) => {
                    reader.refill().map_err(|e| {
                        DomainError::CaptureError(format!("Read error in {}: {e}", self.path))
                    })?;
                }
                Err(e) => {
                    return Err(DomainError::CaptureError(format!(
                        "Parse error in {}: {e}",
                        self.path
                    )))
                }
            }
        }
    }
}

impl FrameSource for PcapFileSource {
    fn next_event(&mut self) -> Result<SourceEvent, DomainError> {
        let next = match self.inner {
            ReaderInner::Legacy(_) => self.next_legacy()?,
            ReaderInner::Ng(_) => self.next_ng()?,
        };
        Ok(next.map_or(SourceEvent::Exhausted, SourceEvent::Frame))
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}
