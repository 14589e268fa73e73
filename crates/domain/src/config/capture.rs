use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CaptureConfig {
    /// Offline capture file (pcap or pcapng).
    #[serde(default)]
    pub pcap_file: Option<String>,

    /// Live capture interface name.
    #[serde(default)]
    pub interface: Option<String>,

    /// BPF filter applied to live captures.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Capacity of the channel between the capture thread and the ingest task.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl CaptureConfig {
    pub fn is_offline(&self) -> bool {
        self.pcap_file.is_some()
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            pcap_file: None,
            interface: None,
            filter: default_filter(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_filter() -> String {
    "udp port 53".to_string()
}

fn default_channel_capacity() -> usize {
    10_000
}
