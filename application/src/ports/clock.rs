//! Wall-clock port
//!
//! Supplies the timestamps recorded on votes and outcomes. Deadlines are
//! not measured with this clock; they use Tokio's monotonic
//! [`Instant`](tokio::time::Instant), which tests control by pausing time.

use chrono::{DateTime, Utc};

/// Source of wall-clock timestamps
pub trait Clock: Send + Sync {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// System time, used outside of tests
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
