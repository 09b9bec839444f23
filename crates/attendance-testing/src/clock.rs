//! Controllable clock for expiry tests.

use std::sync::{Arc, Mutex};

use attendance_core::clock::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Clock pinned to an instant until explicitly moved.
///
/// Clones share the same instant, so a test can keep one handle and pass
/// another into the code under test.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// 2025-06-01T09:00:00Z, a stable default for tests.
    pub fn default_start() -> Self {
        Self::at(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }

    pub fn shared(&self) -> Arc<dyn Clock> {
        Arc::new(self.clone())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
