// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Starts at [`fixed_now`](super::fixed_now) and advances one minute per call,
/// so rows created in sequence have distinct, ordered timestamps.
#[derive(Default)]
pub struct FixedClock {
    ticks: AtomicI64,
}

impl mokkan_articles::application::ports::time::Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::fixed_now() + Duration::minutes(tick)
    }
}
