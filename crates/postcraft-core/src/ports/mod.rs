//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod clipboard;
mod clock;
mod store;

pub use clipboard::{ClipboardError, ClipboardWriter};
pub use clock::{Clock, IdGenerator};
pub use store::PostStore;
