//! dns-export infrastructure: wire decoding, packet capture, statistics
//! storage and exporters.
pub mod capture;
pub mod dns;
pub mod export;
pub mod stats;
