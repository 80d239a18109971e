//! Domain entities - the core business objects.

mod event;
mod post;
mod workspace;

pub use event::{EventDescription, EventType};
pub use post::{GeneratedTexts, Post, PostId, TextKind};
pub use workspace::{View, Workspace};
