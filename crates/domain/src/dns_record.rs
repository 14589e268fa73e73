mod answer;
mod record_type;

pub use answer::{AnswerHeader, AnswerRecord, DnsHeader, UNRESOLVED_DATA};
pub use record_type::{type_tag, RecordType};
