//! dns-export domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod stat_record;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{type_tag, AnswerHeader, AnswerRecord, DnsHeader, RecordType, UNRESOLVED_DATA};
pub use errors::{DecodeError, DomainError};
pub use stat_record::{StatKey, StatRecord};

/// Largest message the decoder examines: one Ethernet-sized packet.
pub const MAX_MESSAGE_LEN: usize = 1500;
