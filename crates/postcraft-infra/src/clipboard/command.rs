//! Host clipboard through a spawned utility that reads the text on stdin.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use postcraft_core::ports::{ClipboardError, ClipboardWriter};

/// Clipboard backed by a command such as `pbcopy` or `xclip`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// Build from a whitespace-separated command line, e.g.
    /// `xclip -selection clipboard`.
    pub fn from_command_line(line: &str, timeout: Duration) -> Result<Self, ClipboardError> {
        let mut parts = line.split_whitespace().map(String::from);
        let program = parts
            .next()
            .ok_or_else(|| ClipboardError::Unavailable("empty clipboard command".to_string()))?;

        Ok(Self::new(program, parts.collect(), timeout))
    }

    /// Pick the usual clipboard utility for the host.
    pub fn detect(timeout: Duration) -> Self {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("pbcopy", &[])
        } else if cfg!(windows) {
            ("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            ("wl-copy", &[])
        } else {
            ("xclip", &["-selection", "clipboard"])
        };

        Self::new(
            program,
            args.iter().map(|a| a.to_string()).collect(),
            timeout,
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl ClipboardWriter for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ClipboardError::Spawn(format!("{}: {}", self.program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| ClipboardError::Write("stdin was not captured".to_string()))?;

        let run = async move {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::Write(e.to_string()))?;
            // Closing stdin lets the utility finish reading.
            drop(stdin);
            child
                .wait()
                .await
                .map_err(|e| ClipboardError::Write(e.to_string()))
        };

        let status = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| ClipboardError::Timeout)??;

        if !status.success() {
            return Err(ClipboardError::Failed {
                status: status.to_string(),
            });
        }

        tracing::debug!(program = %self.program, bytes = text.len(), "Copied text to clipboard");
        Ok(())
    }
}
