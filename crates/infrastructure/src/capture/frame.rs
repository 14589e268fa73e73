use dns_export_domain::DomainError;
use etherparse::{SlicedPacket, TransportSlice};

pub const DNS_PORT: u16 = 53;

/// Length of the Linux cooked-capture (SLL) pseudo header.
const SLL_HEADER_LEN: usize = 16;

/// Link-layer framings the capture layer can strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Ethernet,
    RawIp,
    LinuxSll,
}

impl LinkType {
    pub const ETHERNET: u16 = 1;
    pub const RAW: u16 = 12;
    pub const RAW_IP: u16 = 101;
    pub const LINUX_SLL: u16 = 113;
    pub const IPV4: u16 = 228;
    pub const IPV6: u16 = 229;

    pub fn from_u16(value: u16) -> Result<Self, DomainError> {
        match value {
            Self::ETHERNET => Ok(LinkType::Ethernet),
            Self::RAW | Self::RAW_IP | Self::IPV4 | Self::IPV6 => Ok(LinkType::RawIp),
            Self::LINUX_SLL => Ok(LinkType::LinuxSll),
            other => Err(DomainError::UnsupportedLinkType(other)),
        }
    }
}

/// One captured link-layer frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub link_type: u16,
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(link_type: u16, data: Vec<u8>) -> Self {
        Self { link_type, data }
    }
}

/// Strips link, network and transport framing and returns the UDP payload
/// of a datagram to or from port 53.
///
/// Frames that are not UDP/53, are fragmented, or fail to parse yield `None`.
pub fn dns_payload(link_type: LinkType, frame: &[u8]) -> Option<&[u8]> {
    let sliced = match link_type {
        LinkType::Ethernet => SlicedPacket::from_ethernet(frame).ok()?,
        LinkType::RawIp => SlicedPacket::from_ip(frame).ok()?,
        LinkType::LinuxSll => SlicedPacket::from_ip(frame.get(SLL_HEADER_LEN..)?).ok()?,
    };

    match sliced.transport? {
        TransportSlice::Udp(udp)
            if udp.source_port() == DNS_PORT || udp.destination_port() == DNS_PORT =>
        {
            Some(udp.payload())
        }
        _ => None,
    }
}
