//! Clipboard port - the host's "copy this text" capability.

use async_trait::async_trait;

/// Writes text to the platform clipboard.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard write failures.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard available: {0}")]
    Unavailable(String),

    #[error("Failed to start clipboard command: {0}")]
    Spawn(String),

    #[error("Failed to write to clipboard: {0}")]
    Write(String),

    #[error("Clipboard command exited with {status}")]
    Failed { status: String },

    #[error("Clipboard command timed out")]
    Timeout,
}
