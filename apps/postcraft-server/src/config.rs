//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Where copied texts go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBackend {
    /// Host clipboard utility.
    Command,
    /// Recorded in memory only.
    Memory,
}

/// Clipboard configuration.
#[derive(Debug, Clone)]
pub struct ClipboardConfig {
    pub backend: ClipboardBackend,
    /// Overrides the detected utility, e.g. `xsel --clipboard --input`.
    pub command: Option<String>,
    pub timeout: Duration,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub clipboard: ClipboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            clipboard: ClipboardConfig::from_env(),
        }
    }
}

impl ClipboardConfig {
    /// Load clipboard settings from `CLIPBOARD_*` variables.
    pub fn from_env() -> Self {
        let backend = match env::var("CLIPBOARD_BACKEND") {
            Ok(value) => parse_backend(&value).unwrap_or_else(|| {
                tracing::warn!(value = %value, "Unknown CLIPBOARD_BACKEND, using command");
                ClipboardBackend::Command
            }),
            Err(_) => ClipboardBackend::Command,
        };

        Self {
            backend,
            command: env::var("CLIPBOARD_COMMAND")
                .ok()
                .filter(|c| !c.trim().is_empty()),
            timeout: Duration::from_secs(
                env::var("CLIPBOARD_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

fn parse_backend(value: &str) -> Option<ClipboardBackend> {
    match value.trim().to_lowercase().as_str() {
        "command" => Some(ClipboardBackend::Command),
        "memory" => Some(ClipboardBackend::Memory),
        _ => None,
    }
}
