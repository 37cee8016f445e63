use std::time::{SystemTime, UNIX_EPOCH};

use envdisplay_core::time_sync::TimeSource;

/// Host wall clock. Reports 0 (never synced) if the clock is set before 1970.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
