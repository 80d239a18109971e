//! Time and id sources.

use chrono::{DateTime, Utc};

use crate::domain::PostId;

/// Current time. Implementations: system clock, or a fixed time in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of unique post ids.
pub trait IdGenerator: Send + Sync {
    /// Next id. Ids are unique for the session and increase in call order.
    fn next_id(&self) -> PostId;
}
