use dns_export_domain::{AnswerRecord, DecodeError};

/// Turns the bytes of one captured DNS message into its answer records.
///
/// Implementations must be pure: the same bytes always produce the same result
/// and no state is shared between calls.
pub trait DnsResponseDecoder: Send + Sync {
    fn decode(&self, message: &[u8]) -> Result<Vec<AnswerRecord>, DecodeError>;
}
