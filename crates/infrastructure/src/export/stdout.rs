use async_trait::async_trait;
use dns_export_application::ports::{ExportReport, StatisticsExporter};
use dns_export_domain::{DomainError, StatRecord};
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};

/// Writes one `domain type data count` line per entry.
pub struct StdoutExporter<W = Stdout> {
    writer: tokio::sync::Mutex<W>,
    name: &'static str,
}

impl StdoutExporter<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(tokio::io::stdout(), "stdout")
    }
}

impl Default for StdoutExporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> StdoutExporter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn with_writer(writer: W, name: &'static str) -> Self {
        Self {
            writer: tokio::sync::Mutex::new(writer),
            name,
        }
    }

    pub async fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

pub fn render_lines(records: &[StatRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    out
}

#[async_trait]
impl<W> StatisticsExporter for StdoutExporter<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn export(&self, records: &[StatRecord]) -> Result<ExportReport, DomainError> {
        let mut writer = self.writer.lock().await;
        let export_error = |e: std::io::Error| DomainError::ExportFailed {
            target: self.target(),
            reason: e.to_string(),
        };

        writer
            .write_all(render_lines(records).as_bytes())
            .await
            .map_err(export_error)?;
        writer.flush().await.map_err(export_error)?;

        Ok(ExportReport::delivered(records.len()))
    }

    fn target(&self) -> String {
        self.name.to_string()
    }
}
