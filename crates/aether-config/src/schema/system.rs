//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` directive for the workspace crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "aether=trace",
            LogLevel::Debug => "aether=debug",
            LogLevel::Info => "aether=info",
            LogLevel::Warn => "aether=warn",
            LogLevel::Error => "aether=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log average FPS every this many seconds; 0 disables.
    pub fps_report_secs: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            fps_report_secs: 0,
        }
    }
}
