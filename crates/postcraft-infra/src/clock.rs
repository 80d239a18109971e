//! Clock and post id generator.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use postcraft_core::domain::PostId;
use postcraft_core::ports::{Clock, IdGenerator};

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Millisecond ids from a clock, bumped by one whenever the clock has not
/// moved past the previous id.
pub struct MonotonicIdGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicU64,
}

impl MonotonicIdGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for MonotonicIdGenerator {
    fn next_id(&self) -> PostId {
        let now = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or_default();

        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(now.max(prev + 1))
            })
            .unwrap_or_else(|prev| prev);

        PostId::from_millis(now.max(prev + 1))
    }
}
