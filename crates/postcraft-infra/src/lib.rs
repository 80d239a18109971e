//! # Postcraft Infrastructure
//!
//! Concrete implementations of the ports defined in `postcraft-core`.
//!
//! ## Feature Flags
//!
//! - `command-clipboard` (default) - host clipboard through a spawned utility
//!   (`pbcopy`, `clip`, `wl-copy` or `xclip`). Without it only the in-memory
//!   clipboard is available.

pub mod clipboard;
pub mod clock;
pub mod store;

pub use clipboard::InMemoryClipboard;
pub use clock::{FixedClock, MonotonicIdGenerator, SystemClock};
pub use store::InMemoryPostStore;

#[cfg(feature = "command-clipboard")]
pub use clipboard::CommandClipboard;
