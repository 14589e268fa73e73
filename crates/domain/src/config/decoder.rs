use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecoderConfig {
    /// Keep records of unsupported types (`unknown(<N>)` / `???`) in the statistics.
    #[serde(default)]
    pub include_unknown: bool,
}
