//! Waitlist delivery configuration.

use serde::{Deserialize, Serialize};

/// Where a submitted contact record goes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DeliveryMode {
    /// POST the record to a hosted form relay.
    Relay,
    /// Write the record to a local CSV file.
    #[default]
    Csv,
}

/// Hosted form relay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Relay endpoint, e.g. `https://formsubmit.co/ajax/<inbox>`.
    pub url: String,
    /// Prefix of the email subject; the visitor name is appended.
    pub subject_prefix: String,
    /// Relay rendering template.
    pub template: String,
    pub captcha: bool,
    /// Request timeout in seconds (valid range: 1-120).
    pub timeout_secs: u32,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            subject_prefix: "AETHER WAITLIST".into(),
            template: "table".into(),
            captcha: false,
            timeout_secs: 15,
        }
    }
}

/// Local CSV export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvExportConfig {
    /// Directory the record file is written to.
    pub directory: String,
    /// Artificial delay before writing, in milliseconds (valid range: 0-10000).
    pub simulated_latency_ms: u32,
}

impl Default for CsvExportConfig {
    fn default() -> Self {
        Self {
            directory: ".".into(),
            simulated_latency_ms: 1500,
        }
    }
}

/// Waitlist form settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WaitlistConfig {
    pub delivery: DeliveryMode,
    pub relay: RelayConfig,
    pub csv: CsvExportConfig,
}
