//! Clipboard implementations - host utility and in-memory fallback.

mod memory;

#[cfg(feature = "command-clipboard")]
mod command;

pub use memory::InMemoryClipboard;

#[cfg(feature = "command-clipboard")]
pub use command::CommandClipboard;
