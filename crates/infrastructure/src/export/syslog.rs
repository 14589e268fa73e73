use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use dns_export_application::ports::{ExportReport, StatisticsExporter};
use dns_export_domain::config::SyslogConfig;
use dns_export_domain::{DomainError, StatRecord};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, UdpSocket};
use tracing::{debug, warn};

/// PRI for facility local0 (16) and severity informational (6).
const PRIORITY: u8 = 134;
const VERSION: u8 = 1;
const SEND_TIMEOUT: Duration = Duration::from_secs(2);

/// Sends every statistics line as one RFC 5424 datagram to a remote collector.
pub struct SyslogExporter {
    server: String,
    default_port: u16,
    app_name: String,
    max_consecutive_failures: u32,
}

impl SyslogExporter {
    pub fn new(server: impl Into<String>, config: &SyslogConfig) -> Self {
        Self {
            server: server.into(),
            default_port: config.port,
            app_name: config.app_name.clone(),
            max_consecutive_failures: config.max_consecutive_failures.max(1),
        }
    }

    /// Builds the exporter from `[syslog]`, or `None` when no server is set.
    pub fn from_config(config: &SyslogConfig) -> Option<Self> {
        config
            .server
            .as_deref()
            .map(|server| Self::new(server, config))
    }

    /// `<PRI>VERSION TIMESTAMP HOSTNAME APP-NAME PROCID MSGID SD MSG`, with
    /// the nil value for the fields this tool has no use for.
    pub fn format_message(&self, timestamp: DateTime<Utc>, sender: &str, body: &str) -> String {
        format!(
            "<{PRIORITY}>{VERSION} {} {sender} {} - - - {body}",
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.app_name
        )
    }

    async fn resolve(&self) -> Result<SocketAddr, DomainError> {
        let resolution_error = |reason: String| {
            DomainError::SyslogResolution(format!("{}: {reason}", self.server))
        };

        if let Ok(addr) = self.server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = self.server.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.default_port));
        }

        let (host, port) = split_host_port(&self.server)
            .unwrap_or((self.server.as_str(), self.default_port));
        lookup_host((host, port))
            .await
            .map_err(|e| resolution_error(e.to_string()))?
            .next()
            .ok_or_else(|| resolution_error("no addresses".to_string()))
    }

    async fn connect(&self, collector: SocketAddr) -> Result<UdpSocket, DomainError> {
        let bind_addr = match collector {
            SocketAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            SocketAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.export_error(format!("Failed to bind UDP socket: {e}")))?;
        socket
            .connect(collector)
            .await
            .map_err(|e| self.export_error(format!("Failed to connect UDP socket: {e}")))?;
        Ok(socket)
    }

    fn export_error(&self, reason: String) -> DomainError {
        DomainError::ExportFailed {
            target: self.target(),
            reason,
        }
    }
}

#[async_trait]
impl StatisticsExporter for SyslogExporter {
    async fn export(&self, records: &[StatRecord]) -> Result<ExportReport, DomainError> {
        let collector = self.resolve().await?;
        let socket = self.connect(collector).await?;
        let sender = sender_name(&socket);
        debug!(collector = %collector, sender = %sender, "Sending statistics to syslog");

        let mut report = ExportReport::default();
        let mut consecutive_failures = 0u32;

        for (position, record) in records.iter().enumerate() {
            let message = self.format_message(Utc::now(), &sender, &record.to_line());
            let outcome = tokio::time::timeout(SEND_TIMEOUT, socket.send(message.as_bytes())).await;

            match outcome {
                Ok(Ok(_)) => {
                    report.sent += 1;
                    consecutive_failures = 0;
                }
                Ok(Err(e)) => {
                    report.undelivered.push(position);
                    consecutive_failures += 1;
                    warn!(collector = %collector, error = %e, "Failed to send syslog message");
                }
                Err(_) => {
                    report.undelivered.push(position);
                    consecutive_failures += 1;
                    warn!(collector = %collector, "Timeout sending syslog message");
                }
            }

            if consecutive_failures >= self.max_consecutive_failures {
                report.undelivered.extend(position + 1..records.len());
                report.aborted = Some(format!("{consecutive_failures} consecutive send failures"));
                break;
            }
        }

        Ok(report)
    }

    fn target(&self) -> String {
        format!("syslog://{}", self.server)
    }
}

/// `host:port` with a non-IPv6 host; bare IPv6 literals are handled by the
/// caller before this point.
fn split_host_port(server: &str) -> Option<(&str, u16)> {
    let (host, port) = server.rsplit_once(':')?;
    if host.is_empty() || host.contains(':') {
        return None;
    }
    port.parse().ok().map(|port| (host, port))
}

/// Local address of the connected socket, or the host name when the OS
/// reports an unspecified address.
fn sender_name(socket: &UdpSocket) -> String {
    match socket.local_addr() {
        Ok(addr) if !addr.ip().is_unspecified() => addr.ip().to_string(),
        _ => hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .unwrap_or_else(|| "-".to_string()),
    }
}
