//! In-memory clipboard - used for headless runs and tests.

use async_trait::async_trait;
use tokio::sync::Mutex;

use postcraft_core::ports::{ClipboardError, ClipboardWriter};

/// Records every write instead of touching the host clipboard.
pub struct InMemoryClipboard {
    writes: Mutex<Vec<String>>,
    failing: bool,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// A clipboard that rejects every write, like a browser denying permission.
    pub fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// The most recently written text.
    pub async fn contents(&self) -> Option<String> {
        self.writes.lock().await.last().cloned()
    }

    /// Every successful write, oldest first.
    pub async fn writes(&self) -> Vec<String> {
        self.writes.lock().await.clone()
    }
}

impl Default for InMemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardWriter for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.failing {
            return Err(ClipboardError::Unavailable(
                "in-memory clipboard is set to fail".to_string(),
            ));
        }

        self.writes.lock().await.push(text.to_string());
        Ok(())
    }
}
