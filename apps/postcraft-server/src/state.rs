//! Application state - shared across all handlers.

use std::sync::Arc;

use postcraft_core::ports::{ClipboardWriter, Clock};
use postcraft_infra::{InMemoryClipboard, InMemoryPostStore, MonotonicIdGenerator, SystemClock};

use crate::config::{ClipboardBackend, ClipboardConfig};
use crate::controller::Controller;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
}

impl AppState {
    /// Build the application state with the configured clipboard.
    pub fn new(config: &ClipboardConfig) -> Self {
        let state = Self::with_clipboard(build_clipboard(config));
        tracing::info!("Application state initialized");
        state
    }

    /// In-memory store and system clock around the given clipboard.
    pub fn with_clipboard(clipboard: Arc<dyn ClipboardWriter>) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let controller = Controller::new(
            Arc::new(InMemoryPostStore::new()),
            clock.clone(),
            Arc::new(MonotonicIdGenerator::new(clock)),
            clipboard,
        );

        Self {
            controller: Arc::new(controller),
        }
    }
}

#[cfg(feature = "command-clipboard")]
fn build_clipboard(config: &ClipboardConfig) -> Arc<dyn ClipboardWriter> {
    use postcraft_infra::CommandClipboard;

    match config.backend {
        ClipboardBackend::Memory => {
            tracing::info!("Using in-memory clipboard");
            Arc::new(InMemoryClipboard::new())
        }
        ClipboardBackend::Command => {
            let clipboard = match &config.command {
                Some(line) => match CommandClipboard::from_command_line(line, config.timeout) {
                    Ok(clipboard) => clipboard,
                    Err(e) => {
                        tracing::warn!(error = %e, "Invalid CLIPBOARD_COMMAND, detecting instead");
                        CommandClipboard::detect(config.timeout)
                    }
                },
                None => CommandClipboard::detect(config.timeout),
            };
            tracing::info!(program = clipboard.program(), "Using host clipboard command");
            Arc::new(clipboard)
        }
    }
}

#[cfg(not(feature = "command-clipboard"))]
fn build_clipboard(config: &ClipboardConfig) -> Arc<dyn ClipboardWriter> {
    if config.backend == ClipboardBackend::Command {
        tracing::warn!("Built without command-clipboard feature - using in-memory clipboard");
    }
    Arc::new(InMemoryClipboard::new())
}
