//! Local CSV export: one file per record.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use aether_config::schema::CsvExportConfig;

use crate::delivery::{Delivery, DeliveryReceipt};
use crate::error::DeliveryError;
use crate::record::ClientData;

pub const CSV_HEADER: &str = "Name,Email,Instagram,Country,Timestamp";

/// Writes `client_<name>_data.csv` into a directory after a simulated
/// network delay.
pub struct CsvExport {
    directory: PathBuf,
    latency: Duration,
}

impl CsvExport {
    pub fn new(directory: impl Into<PathBuf>, latency: Duration) -> Self {
        Self {
            directory: directory.into(),
            latency,
        }
    }

    pub fn from_config(config: &CsvExportConfig) -> Self {
        Self::new(
            &config.directory,
            Duration::from_millis(u64::from(config.simulated_latency_ms)),
        )
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// `client_<name>_data.csv` with whitespace runs collapsed to `_`.
    /// Path separators and other characters unsafe in file names also
    /// become `_`.
    pub fn file_name(name: &str) -> String {
        let mut stem = String::with_capacity(name.len());
        let mut in_space = false;
        for c in name.chars() {
            if c.is_whitespace() {
                if !in_space {
                    stem.push('_');
                }
                in_space = true;
                continue;
            }
            in_space = false;
            let unsafe_char = matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
                || c.is_control();
            stem.push(if unsafe_char { '_' } else { c });
        }
        format!("client_{stem}_data.csv")
    }

    /// Header line plus one row with every field quoted.
    pub fn render(record: &ClientData) -> String {
        let row = [
            &record.name,
            &record.email,
            &record.instagram,
            &record.country,
            &record.timestamp,
        ]
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(",");
        format!("{CSV_HEADER}\n{row}\n")
    }
}

/// Quote a CSV field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[async_trait]
impl Delivery for CsvExport {
    fn name(&self) -> &'static str {
        "csv"
    }

    async fn deliver(&self, record: &ClientData) -> Result<DeliveryReceipt, DeliveryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        tokio::fs::create_dir_all(&self.directory).await?;
        let path = self.directory.join(Self::file_name(&record.name));
        tokio::fs::write(&path, Self::render(record)).await?;

        info!("waitlist record exported to {}", path.display());
        Ok(DeliveryReceipt::Exported(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ClientData {
        ClientData {
            name: name.into(),
            email: "ada@example.com".into(),
            instagram: String::new(),
            country: "UK".into(),
            timestamp: "2025-03-01T12:30:00.000Z".into(),
        }
    }

    #[test]
    fn file_name_collapses_whitespace() {
        assert_eq!(
            CsvExport::file_name("Ada  King\tLovelace"),
            "client_Ada_King_Lovelace_data.csv"
        );
        assert_eq!(CsvExport::file_name("Ada"), "client_Ada_data.csv");
    }

    #[test]
    fn file_name_cannot_escape_directory() {
        let name = CsvExport::file_name("../../etc/passwd");
        assert_eq!(name, "client_.._.._etc_passwd_data.csv");
        assert!(!name.contains('/'));
    }

    #[test]
    fn render_has_header_and_quoted_row() {
        let csv = CsvExport::render(&record("Ada Lovelace"));
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("\"Ada Lovelace\",\"ada@example.com\",\"\",\"UK\",\"2025-03-01T12:30:00.000Z\"")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn render_escapes_quotes() {
        let csv = CsvExport::render(&record("Ada \"Countess\""));
        assert!(csv.contains("\"Ada \"\"Countess\"\"\""));
    }

    #[tokio::test]
    async fn deliver_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = CsvExport::new(dir.path().join("exports"), Duration::ZERO);

        let receipt = export.deliver(&record("Ada Lovelace")).await.unwrap();
        let expected = dir.path().join("exports").join("client_Ada_Lovelace_data.csv");
        assert_eq!(receipt, DeliveryReceipt::Exported(expected.clone()));

        let written = std::fs::read_to_string(expected).unwrap();
        assert!(written.starts_with(CSV_HEADER));
    }

    #[tokio::test]
    async fn deliver_waits_for_simulated_latency() {
        let dir = tempfile::tempdir().unwrap();
        let export = CsvExport::new(dir.path(), Duration::from_millis(60));

        let start = std::time::Instant::now();
        export.deliver(&record("Ada")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn from_config_uses_defaults() {
        let export = CsvExport::from_config(&CsvExportConfig::default());
        assert_eq!(export.directory(), Path::new("."));
        assert_eq!(export.latency, Duration::from_millis(1500));
    }
}
